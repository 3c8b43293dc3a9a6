//! Harvest pipeline
//!
//! [`Harvester::run`] executes the whole run in order: prepare the output
//! directory, reset the archive, fetch every page into it, extract and
//! deduplicate PDF links from the archive, then resolve, validate and
//! download each link. Every step is sequential and no per-item failure
//! stops the run.

use crate::archive::Archive;
use crate::client::build_client;
use crate::config::HarvestConfig;
use crate::download::{DownloadOutcome, Downloader};
use crate::error::HarvestError;
use crate::extract::{dedup_links, LinkExtractor, RegexPdfExtractor};
use crate::fetchers::{HttpFetcher, PageFetcher};
use crate::normalize::{extract_base_domain, parse_request_uri, resolve_link};
use crate::types::{HarvestReport, LinkOutcome, LinkStatus, PageOutcome};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Wires fetcher, archive, extractor and downloader together
pub struct Harvester {
    config: HarvestConfig,
    archive: Archive,
    fetcher: Box<dyn PageFetcher>,
    extractor: Box<dyn LinkExtractor>,
    downloader: Downloader,
}

impl Harvester {
    /// Create a harvester with the HTTP fetcher and regex extractor
    ///
    /// Fails when the HTTP client cannot be built or the base URL has no
    /// host to name the archive after.
    pub fn new(config: HarvestConfig) -> Result<Self, HarvestError> {
        let base_domain = extract_base_domain(&config.base_url)?;
        let archive = Archive::for_domain(&config.archive_dir, &base_domain);

        let client = build_client(&config.user_agent)?;
        let fetcher = HttpFetcher::new(client.clone()).with_timeout(config.page_timeout);
        let downloader = Downloader::new(client).with_timeout(config.download_timeout);

        Ok(Self {
            config,
            archive,
            fetcher: Box::new(fetcher),
            extractor: Box::new(RegexPdfExtractor::new()),
            downloader,
        })
    }

    /// Replace the page fetcher
    pub fn with_fetcher(mut self, fetcher: Box<dyn PageFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Replace the link extractor
    pub fn with_extractor(mut self, extractor: Box<dyn LinkExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Run the full pipeline and report every page and link outcome
    pub async fn run(&self) -> HarvestReport {
        ensure_output_dir(&self.config.output_dir).await;

        if let Err(e) = self.archive.reset().await {
            error!(error = %e, "Could not remove stale archive");
        }

        let pages = self.archive_pages().await;

        let text = match self.archive.read_to_string().await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Could not read archive");
                String::new()
            }
        };

        debug!(extractor = self.extractor.name(), "Extracting links");
        let links = dedup_links(self.extractor.extract_links(&text));
        info!(count = links.len(), "Extracted PDF links");

        let mut outcomes = Vec::with_capacity(links.len());
        for link in links {
            outcomes.push(self.process_link(link).await);
        }

        HarvestReport {
            archive: self.archive.path().to_path_buf(),
            pages,
            links: outcomes,
        }
    }

    /// Fetch every configured page and append it to the archive
    ///
    /// A failed fetch still appends an empty line.
    async fn archive_pages(&self) -> Vec<PageOutcome> {
        debug!(fetcher = self.fetcher.name(), "Fetching pages");
        let mut outcomes = Vec::with_capacity(self.config.pages.len());

        for url in &self.config.pages {
            let (text, mut failure) = match self.fetcher.fetch_page(url).await {
                Ok(text) => (text, None),
                Err(e) => {
                    warn!(url = %url, error = %e, "Page fetch failed");
                    (String::new(), Some(e.to_string()))
                }
            };

            if let Err(e) = self.archive.append(&text).await {
                error!(url = %url, error = %e, "Could not append page to archive");
                failure.get_or_insert_with(|| e.to_string());
            }

            outcomes.push(PageOutcome {
                url: url.clone(),
                bytes: text.len(),
                error: failure,
            });
        }

        outcomes
    }

    async fn process_link(&self, link: String) -> LinkOutcome {
        let resolved = resolve_link(&self.config.base_url, &link);

        let status = match parse_request_uri(&resolved) {
            Err(e) => {
                debug!(link = %link, error = %e, "Discarding invalid link");
                LinkStatus::Invalid {
                    reason: e.to_string(),
                }
            }
            Ok(url) => match self
                .downloader
                .download(&resolved, &url, &self.config.output_dir)
                .await
            {
                Ok(DownloadOutcome::Downloaded { path, bytes }) => {
                    LinkStatus::Downloaded { path, bytes }
                }
                Ok(DownloadOutcome::Skipped { path }) => LinkStatus::Skipped { path },
                Err(e) => {
                    warn!(url = %url, error = %e, "Download failed");
                    LinkStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            },
        };

        LinkOutcome {
            link,
            resolved,
            status,
        }
    }
}

/// Create the output directory if it is missing
///
/// Failure is logged; the downloads that follow will fail individually.
async fn ensure_output_dir(dir: &Path) {
    if tokio::fs::metadata(dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
    {
        return;
    }

    let mut builder = tokio::fs::DirBuilder::new();
    #[cfg(unix)]
    builder.mode(0o755);

    if let Err(e) = builder.create(dir).await {
        error!(dir = %dir.display(), error = %e, "Could not create output directory");
    }
}
