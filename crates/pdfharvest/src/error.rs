//! Error types for PDF harvesting

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    ConnectError(#[source] reqwest::Error),

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    BodyError(String),

    /// User-Agent is not a valid header value
    #[error("Invalid User-Agent: {0:?}")]
    InvalidUserAgent(String),
}

impl FetchError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::ConnectError(err)
        } else {
            FetchError::RequestError(err.to_string())
        }
    }
}

/// Errors raised by the page archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Archive could not be opened or created
    #[error("Failed to open archive {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive could not be written
    #[error("Failed to write archive {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive could not be read
    #[error("Failed to read archive {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stale archive could not be removed
    #[error("Failed to remove archive {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while normalizing a link
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Candidate is not a valid request URI
    #[error("Invalid request URI {uri}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// URL has no host component
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Errors that end a single PDF download
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Transport failure (DNS, connect, TLS, timeout)
    #[error("Request failed for {url}: {message}")]
    Request { url: String, message: String },

    /// Download did not finish within the configured bound
    #[error("Download timed out for {url}")]
    Timeout { url: String },

    /// Server answered with something other than 200 OK
    #[error("Download failed for {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// Content-Type is not an accepted PDF type
    #[error("Invalid content type for {url}: {content_type} (expected PDF)")]
    ContentType { url: String, content_type: String },

    /// Body could not be read
    #[error("Failed to read PDF data from {url}: {message}")]
    Body { url: String, message: String },

    /// Server sent an empty body
    #[error("Downloaded 0 bytes for {url}; not creating file")]
    EmptyBody { url: String },

    /// Output file could not be created or written
    #[error("Failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that prevent a harvest from starting
#[derive(Debug, Error)]
pub enum HarvestError {
    /// HTTP client could not be built
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Base URL cannot name the archive
    #[error(transparent)]
    BaseUrl(#[from] NormalizeError),
}
