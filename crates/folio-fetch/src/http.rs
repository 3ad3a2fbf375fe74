//! HTTP source backed by the portfolio API.

use async_trait::async_trait;
use tracing::debug;

use crate::source::{ResourceRequest, ResourceSource};
use crate::{FetchError, Result};

/// Reads collections with unauthenticated `GET` requests.
///
/// No timeout is configured; failures surface only through the client's
/// own error reporting.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a source for the API at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API host, e.g. `"http://localhost:5000"`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Full URL for an endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self, request: &ResourceRequest) -> Result<serde_json::Value> {
        let url = self.url_for(&request.path);
        debug!(%url, "fetching collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::transport(request.noun, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(request.noun, e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::decode(e.to_string()))
    }
}
