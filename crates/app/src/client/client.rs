use reqwest::Client;

use common::prelude::{DecodeError, HttpRequest};

use super::error::ApiError;

#[derive(Debug, Clone)]
pub struct PredictClient {
    client: Client,
}

impl PredictClient {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Send a prebuilt request and decode its reply as `T::Response`
    pub async fn call<T: HttpRequest>(&self, request: &T) -> Result<T::Response, ApiError> {
        tracing::info!("{} {}", request.method(), request.url());
        let response = request.build_request(&self.client).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status, response.text().await?));
        }

        let body = response.bytes().await?;
        tracing::debug!("received {} byte response", body.len());
        serde_json::from_slice(&body)
            .map_err(DecodeError::from)
            .map_err(ApiError::from)
    }
}
