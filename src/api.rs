use crate::config::Config;
use crate::error::ApiError;
use crate::extensions::OrNetworkErr;
use crate::models::{Animal, AnimalId, NewAnimal, VotesPatch};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// The `/characters` REST resource.
pub trait Backend {
    fn list_animals(&self) -> LocalBoxFuture<'_, Result<Vec<Animal>, ApiError>>;

    fn create_animal<'a>(
        &'a self,
        animal: &'a NewAnimal,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>>;

    fn update_votes<'a>(
        &'a self,
        id: &'a AnimalId,
        votes: i64,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>>;
}

/// [`Backend`] over the browser's `fetch`.
pub struct FetchBackend {
    config: Config,
}

impl FetchBackend {
    pub fn new(config: Config) -> FetchBackend {
        FetchBackend { config }
    }

    async fn send(
        &self,
        method: &str,
        url: &Url,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = body {
            let headers = Headers::new().or_network_err()?;
            headers
                .set("content-type", "application/json")
                .or_network_err()?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(&body));
        }
        let request = Request::new_with_str_and_init(url.as_str(), &init).or_network_err()?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("no global window".to_owned()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .or_network_err()?;
        let response: Response = value.dyn_into().or_network_err()?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    async fn send_json<T: Serialize>(
        &self,
        method: &str,
        url: &Url,
        body: &T,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_string(body)?;
        self.send(method, url, Some(body)).await?;
        Ok(())
    }

    async fn fetch_animals(&self) -> Result<Vec<Animal>, ApiError> {
        let response = self.send("GET", &self.config.collection_url(), None).await?;
        let text = JsFuture::from(response.text().or_network_err()?)
            .await
            .or_network_err()?;
        let body = text
            .as_string()
            .ok_or_else(|| ApiError::Network("response body was not text".to_owned()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Backend for FetchBackend {
    fn list_animals(&self) -> LocalBoxFuture<'_, Result<Vec<Animal>, ApiError>> {
        self.fetch_animals().boxed_local()
    }

    fn create_animal<'a>(
        &'a self,
        animal: &'a NewAnimal,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>> {
        async move {
            let url = self.config.collection_url();
            self.send_json("POST", &url, animal).await
        }
        .boxed_local()
    }

    fn update_votes<'a>(
        &'a self,
        id: &'a AnimalId,
        votes: i64,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>> {
        async move {
            let url = self.config.animal_url(id);
            self.send_json("PATCH", &url, &VotesPatch { votes }).await
        }
        .boxed_local()
    }
}
