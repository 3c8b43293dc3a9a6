//! HTTP client and entry points for PDF harvesting
//!
//! This module builds the shared [`reqwest::Client`] and provides the
//! one-call [`harvest`] entry point. The pipeline itself lives in
//! [`pipeline`](crate::pipeline).

use crate::config::HarvestConfig;
use crate::error::{FetchError, HarvestError};
use crate::pipeline::Harvester;
use crate::types::HarvestReport;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// Build the client shared by page fetches and PDF downloads
///
/// Every request carries the given User-Agent and nothing else. No global
/// timeout is set; callers bound individual requests instead. A User-Agent
/// that is not a valid header value is rejected.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client, FetchError> {
    let agent = HeaderValue::from_str(user_agent)
        .map_err(|_| FetchError::InvalidUserAgent(user_agent.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, agent);

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(FetchError::ClientBuildError)
}

/// Run a complete harvest with the default fetcher and extractor
///
/// For custom components, build a [`Harvester`] directly.
pub async fn harvest(config: HarvestConfig) -> Result<HarvestReport, HarvestError> {
    let harvester = Harvester::new(config)?;
    Ok(harvester.run().await)
}
