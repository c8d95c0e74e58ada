use crate::error::ApiError;
use std::fmt::{Debug, Display};
use wasm_bindgen::JsValue;

/// Convert Rust-side failures into a `JsValue` so they can cross the
/// wasm-bindgen boundary with `?`.
pub trait OkOrJsErr<T> {
    fn ok_or_js_err(self) -> Result<T, JsValue>;
    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue>;
}

impl<T, E: Display> OkOrJsErr<T> for Result<T, E> {
    fn ok_or_js_err(self) -> Result<T, JsValue> {
        self.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue> {
        self.map_err(|e| JsValue::from_str(&format!("{}: {}", msg, e)))
    }
}

impl<T> OkOrJsErr<T> for Option<T> {
    fn ok_or_js_err(self) -> Result<T, JsValue> {
        self.ok_or_else(|| JsValue::from_str("missing value"))
    }

    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue> {
        self.ok_or_else(|| JsValue::from_str(msg))
    }
}

/// The other direction: a rejected promise or a thrown JS exception becomes
/// an [`ApiError::Network`].
pub trait OrNetworkErr<T> {
    fn or_network_err(self) -> Result<T, ApiError>;
}

impl<T, E: Debug> OrNetworkErr<T> for Result<T, E> {
    fn or_network_err(self) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::Network(format!("{:?}", e)))
    }
}
