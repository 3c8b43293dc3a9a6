//! HTTP page fetcher
//!
//! Issues one GET per page with the configured User-Agent. The status code
//! is not inspected: an error page's body is returned like any other.

use crate::error::FetchError;
use crate::fetchers::PageFetcher;
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Default page fetcher backed by a shared [`reqwest::Client`]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// Create a fetcher that waits as long as the server takes
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Bound each page request
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        info!(url = %url, "Scraping");

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(FetchError::from_reqwest)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::BodyError(e.to_string()))?;

        Ok(String::from_utf8_lossy(&body).to_string())
    }
}
