//! PDF Harvest - crawl product pages and download the PDFs they link to
//!
//! This crate fetches a configured list of pages, archives their raw text
//! to a local file, extracts `.pdf` links from that archive, and downloads
//! each linked document into an output directory.
//!
//! ## Pipeline
//!
//! [`Harvester`] runs the stages in order, strictly sequentially:
//!
//! 1. [`PageFetcher`] - fetches each page ([`HttpFetcher`] by default)
//! 2. [`Archive`] - appends page text to `<base-domain>.html`
//! 3. [`LinkExtractor`] - pulls candidate links from the archive
//!    ([`RegexPdfExtractor`] by default), then [`dedup_links`]
//! 4. [`resolve_link`] / [`parse_request_uri`] - absolute, valid URLs only
//! 5. [`Downloader`] - skip-if-exists, content-type check, write to disk
//!
//! Per-item outcomes are collected in a [`HarvestReport`]; no item failure
//! aborts the run.

pub mod archive;
pub mod client;
pub mod config;
pub mod download;
mod error;
pub mod extract;
pub mod fetchers;
pub mod filename;
pub mod normalize;
pub mod pipeline;
mod types;

pub use archive::Archive;
pub use client::{build_client, harvest};
pub use config::{HarvestConfig, DEFAULT_BASE_URL, DEFAULT_PAGES, DEFAULT_USER_AGENT};
pub use download::{is_pdf_content_type, DownloadOutcome, Downloader};
pub use error::{ArchiveError, DownloadError, FetchError, HarvestError, NormalizeError};
pub use extract::{dedup_links, LinkExtractor, RegexPdfExtractor};
pub use fetchers::{HttpFetcher, PageFetcher};
pub use filename::url_to_filename;
pub use normalize::{extract_base_domain, has_domain, parse_request_uri, resolve_link};
pub use pipeline::Harvester;
pub use types::{HarvestReport, LinkOutcome, LinkStatus, PageOutcome};
