//! PDF downloader
//!
//! Each URL runs through a fixed sequence: skip if the target file exists,
//! GET with a bounded timeout, require 200 OK and a PDF content type,
//! buffer the body, and write it only when it is non-empty. There are no
//! retries and no cleanup of partially written files.

use crate::config::DOWNLOAD_TIMEOUT;
use crate::error::DownloadError;
use crate::filename::url_to_filename;
use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::info;
use url::Url;

/// Content types accepted as PDF, matched as substrings
const PDF_CONTENT_TYPES: &[&str] = &["binary/octet-stream", "application/pdf"];

/// Successful end states of a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Body written to `path`
    Downloaded { path: PathBuf, bytes: u64 },
    /// `path` already existed
    Skipped { path: PathBuf },
}

/// Sequential PDF downloader
#[derive(Debug, Clone)]
pub struct Downloader {
    client: reqwest::Client,
    timeout: Duration,
}

impl Downloader {
    /// Create a downloader with the default 15 minute bound
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: DOWNLOAD_TIMEOUT,
        }
    }

    /// Override the per-download bound
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Download `url` into `output_dir`
    ///
    /// The filename is derived from `link`, the resolved link text before
    /// parsing, so percent-encoding applied by [`Url`] never leaks into it.
    pub async fn download(
        &self,
        link: &str,
        url: &Url,
        output_dir: &Path,
    ) -> Result<DownloadOutcome, DownloadError> {
        let path = output_dir.join(url_to_filename(link));

        if is_file(&path).await {
            info!(path = %path.display(), "File already exists, skipping");
            return Ok(DownloadOutcome::Skipped { path });
        }

        let response = self
            .client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DownloadError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    DownloadError::Request {
                        url: url.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        if response.status() != StatusCode::OK {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_pdf_content_type(&content_type) {
            return Err(DownloadError::ContentType {
                url: url.to_string(),
                content_type,
            });
        }

        let body = read_body(response).await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::Timeout {
                    url: url.to_string(),
                }
            } else {
                DownloadError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        if body.is_empty() {
            return Err(DownloadError::EmptyBody {
                url: url.to_string(),
            });
        }

        write_file(&path, &body).await?;

        let bytes = body.len() as u64;
        info!(bytes, url = %url, path = %path.display(), "Successfully downloaded");
        Ok(DownloadOutcome::Downloaded { path, bytes })
    }
}

/// Check the Content-Type header value against the accepted PDF types
///
/// This is a plain substring test, not a MIME parse.
pub fn is_pdf_content_type(content_type: &str) -> bool {
    PDF_CONTENT_TYPES
        .iter()
        .any(|accepted| content_type.contains(accepted))
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Buffer the whole response body in memory
async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        body.extend_from_slice(&chunk?);
    }
    Ok(body)
}

async fn write_file(path: &Path, body: &[u8]) -> Result<(), DownloadError> {
    let io_err = |source| DownloadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(path).await.map_err(io_err)?;
    file.write_all(body).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)?;
    Ok(())
}
