use http::StatusCode;

/// Failures talking to the `/characters` backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server problem: {}", status_line(.0))]
    Status(u16),

    #[error("Could not read server response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn status_line(code: &u16) -> String {
    match StatusCode::from_u16(*code) {
        Ok(status) => format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Error")
        ),
        Err(_) => code.to_string(),
    }
}
