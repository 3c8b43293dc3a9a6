//! Harvest configuration
//!
//! All inputs of a run live in [`HarvestConfig`]. [`HarvestConfig::default`]
//! reproduces the built-in Blaster Products crawl.

use std::path::PathBuf;
use std::time::Duration;

/// Base URL that relative links are resolved against
pub const DEFAULT_BASE_URL: &str = "https://blasterproducts.com";

/// Directory that receives downloaded PDFs
pub const DEFAULT_OUTPUT_DIR: &str = "PDFs";

/// Desktop-browser User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36";

/// Upper bound for a single PDF download
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// Product and safety-data-sheet pages crawled by default
pub const DEFAULT_PAGES: &[&str] = &[
    "https://blasterproducts.com/blaster_corporation_material_safety_data_sheets/",
    "https://blasterproducts.com/product/pb-blaster-penetrant/",
    "https://blasterproducts.com/product/de-icer/",
    "https://blasterproducts.com/product/hydraulic-jack-oil/",
    "https://blasterproducts.com/product/starting-fluid/",
    "https://blasterproducts.com/product/engine-degreaser/",
    "https://blasterproducts.com/product/surface-shield/",
    "https://blasterproducts.com/product/multi-max-lubricant/",
    "https://blasterproducts.com/product/air-tool-conditioner/",
    "https://blasterproducts.com/product/air-tool-lubricant/",
    "https://blasterproducts.com/product/brake-cleaner/",
    "https://blasterproducts.com/product/chain-and-cable-lubricant/",
    "https://blasterproducts.com/product/citrus-based-degreaser/",
    "https://blasterproducts.com/product/dry-lube/",
    "https://blasterproducts.com/product/garage-door-lubricant/",
    "https://blasterproducts.com/product/graphite-dry-lubricant/",
    "https://blasterproducts.com/product/heavy-duty-grease/",
    "https://blasterproducts.com/product/lock-dry-lubricant-de-icer/",
    "https://blasterproducts.com/product/multi-purpose-grease/",
    "https://blasterproducts.com/product/multi-purpose-lubricant/",
    "https://blasterproducts.com/product/battery-terminal-cleaner/",
    "https://blasterproducts.com/product/red-spray-grease/",
    "https://blasterproducts.com/product/fogging-oil/",
    "https://blasterproducts.com/product/rust-neutralizer/",
    "https://blasterproducts.com/product/multi-purpose-lubricant-2/",
    "https://blasterproducts.com/product/parts-washer-solvent/",
    "https://blasterproducts.com/product/penetrating-lithium-grease/",
    "https://blasterproducts.com/product/red-grease/",
    "https://blasterproducts.com/product/silicone-lubricant/",
    "https://blasterproducts.com/product/small-engine-tune-up/",
    "https://blasterproducts.com/product/white-lithium-grease/",
    "https://blasterproducts.com/product/bla608yfc/",
    "https://blasterproducts.com/product/bla610yfa/",
    "https://blasterproducts.com/product/bla611yf/",
    "https://blasterproducts.com/product/bla234c/",
    "https://blasterproducts.com/product/bla235d/",
    "https://blasterproducts.com/product/bla238a/",
    "https://blasterproducts.com/product/bla602yfd/",
    "https://blasterproducts.com/product/bla603yfd/",
    "https://blasterproducts.com/product/bla604yfc/",
    "https://blasterproducts.com/product/bla132d/",
    "https://blasterproducts.com/product/bla232d/",
    "https://blasterproducts.com/product/bla348a/",
    "https://blasterproducts.com/product/bla346a/",
    "https://blasterproducts.com/product/bla340a/",
    "https://blasterproducts.com/product/bla101h/",
    "https://blasterproducts.com/product/bla110a/",
    "https://blasterproducts.com/product/bla125a/",
    "https://blasterproducts.com/product/bla601yf/",
    "https://blasterproducts.com/product/bla607yfp/",
    "https://blasterproducts.com/product/bla301/",
    "https://blasterproducts.com/product/bla310/",
    "https://blasterproducts.com/product/bla107/",
    "https://blasterproducts.com/product/bla347p/",
    "https://blasterproducts.com/product/bla033/",
    "https://blasterproducts.com/product/bla606yf/",
    "https://blasterproducts.com/product/bla155/",
    "https://blasterproducts.com/product/bla151/",
    "https://blasterproducts.com/product/bla150/",
    "https://blasterproducts.com/product/bla153/",
    "https://blasterproducts.com/product/bla002/",
    "https://blasterproducts.com/product/bla007/",
    "https://blasterproducts.com/product/bla008/",
    "https://blasterproducts.com/product/bla017/",
    "https://blasterproducts.com/product/bla012/",
    "https://blasterproducts.com/product/bla022/",
    "https://blasterproducts.com/product/bla025/",
    "https://blasterproducts.com/product/bla505/",
    "https://blasterproducts.com/product/bla500/",
    "https://blasterproducts.com/product/bla501/",
    "https://blasterproducts.com/product/bla502/",
    "https://blasterproducts.com/product/bla503/",
    "https://blasterproducts.com/product/bla503ts/",
    "https://blasterproducts.com/product/power-chain-lubricant/",
    "https://blasterproducts.com/product/power-chain-lubricant-2/",
    "https://blasterproducts.com/product/air-filter-cleaner/",
    "https://blasterproducts.com/product/air-filter-oil/",
    "https://blasterproducts.com/product/mud-blaster/",
    "https://blasterproducts.com/product/factory-shine/",
];

/// Inputs of a harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Prefix for links without a host, also names the archive file
    pub base_url: String,
    /// Pages fetched into the archive, in order
    pub pages: Vec<String>,
    /// Directory that receives the PDFs
    pub output_dir: PathBuf,
    /// Directory holding the `<base-domain>.html` archive
    pub archive_dir: PathBuf,
    /// User-Agent for page and PDF requests
    pub user_agent: String,
    /// Optional bound on each page fetch (unbounded when `None`)
    pub page_timeout: Option<Duration>,
    /// Bound on each PDF download
    pub download_timeout: Duration,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            DEFAULT_PAGES.iter().map(|page| page.to_string()),
        )
    }
}

impl HarvestConfig {
    /// Create a configuration for the given base URL and page list
    pub fn new<I, S>(base_url: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            pages: pages.into_iter().map(Into::into).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            archive_dir: PathBuf::from("."),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout: None,
            download_timeout: DOWNLOAD_TIMEOUT,
        }
    }

    /// Set the PDF output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the directory the archive file is written to
    pub fn with_archive_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.archive_dir = dir.into();
        self
    }

    /// Set a custom User-Agent
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Bound each page fetch
    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = Some(timeout);
        self
    }

    /// Override the PDF download bound
    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }
}
