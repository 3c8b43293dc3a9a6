//! Page fetchers
//!
//! Design: the pipeline only needs "URL in, page text out". The
//! [`PageFetcher`] trait keeps that seam open so tests and callers can
//! substitute their own source of pages.

mod http;

pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;

/// Trait for sources of page text
///
/// Implementations return the raw page body on success. A failure carries
/// the reason, so callers can tell an empty page from a failed fetch.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Unique identifier for this fetcher (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Fetch the page at `url` and return its body as text
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticFetcher {
        pages: HashMap<&'static str, &'static str>,
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
            self.pages
                .get(url)
                .map(|body| body.to_string())
                .ok_or_else(|| FetchError::RequestError(format!("no page for {url}")))
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let fetcher: Box<dyn PageFetcher> = Box::new(StaticFetcher {
            pages: HashMap::from([("https://example.com/", "<p>hi</p>")]),
        });

        assert_eq!(fetcher.name(), "static");
        assert_eq!(
            fetcher.fetch_page("https://example.com/").await.unwrap(),
            "<p>hi</p>"
        );
        assert!(fetcher.fetch_page("https://example.com/missing").await.is_err());
    }
}
