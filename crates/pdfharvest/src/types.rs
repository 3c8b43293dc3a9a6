//! Report types for a harvest run

use serde::Serialize;
use std::path::PathBuf;

/// Result of fetching one configured page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOutcome {
    /// Page URL as configured
    pub url: String,
    /// Bytes of page text appended to the archive
    pub bytes: usize,
    /// Fetch or archive failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// What happened to one deduplicated link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkStatus {
    /// PDF written to disk
    Downloaded { path: PathBuf, bytes: u64 },
    /// Target file already existed, no request made
    Skipped { path: PathBuf },
    /// Request, validation or write failed
    Failed { reason: String },
    /// Resolved link is not a valid request URI
    Invalid { reason: String },
}

/// One extracted link and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOutcome {
    /// Link exactly as captured from the archive
    pub link: String,
    /// Link after resolution against the base URL
    pub resolved: String,
    #[serde(flatten)]
    pub status: LinkStatus,
}

/// Per-item outcomes of a harvest run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HarvestReport {
    /// Archive file the links were extracted from
    pub archive: PathBuf,
    pub pages: Vec<PageOutcome>,
    pub links: Vec<LinkOutcome>,
}

impl HarvestReport {
    /// Pages whose fetch or archive write failed
    pub fn pages_failed(&self) -> usize {
        self.pages.iter().filter(|page| !page.is_ok()).count()
    }

    pub fn downloaded(&self) -> usize {
        self.count(|status| matches!(status, LinkStatus::Downloaded { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, LinkStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, LinkStatus::Failed { .. }))
    }

    pub fn invalid(&self) -> usize {
        self.count(|status| matches!(status, LinkStatus::Invalid { .. }))
    }

    /// Total bytes written across all downloads
    pub fn bytes_downloaded(&self) -> u64 {
        self.links
            .iter()
            .map(|link| match link.status {
                LinkStatus::Downloaded { bytes, .. } => bytes,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&LinkStatus) -> bool) -> usize {
        self.links.iter().filter(|link| pred(&link.status)).count()
    }
}
