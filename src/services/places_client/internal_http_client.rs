use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

use super::types::error_info::ErrorInfo;

/// Thin POST wrapper for calls to our own backend.
#[derive(Clone)]
pub struct InternalHttpClient {
    client: reqwest::Client,
}

impl InternalHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_request<D, R>(&self, api_url: &str, data: &D) -> Result<R, ErrorInfo>
    where
        D: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = serde_json::to_vec(data).map_err(throw_error)?;

        self.client
            .post(api_url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(throw_error)?
            .json::<R>()
            .await
            .map_err(throw_error)
    }
}

impl Default for InternalHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn throw_error<E: std::fmt::Debug + std::fmt::Display>(error_response: E) -> ErrorInfo {
    error!("Request failed: {:?}", error_response);
    ErrorInfo::from_raw(error_response)
}
