//! PDF Harvest CLI - crawl product pages and download linked PDFs

use clap::Parser;
use pdfharvest::{HarvestConfig, HarvestReport, Harvester, LinkStatus, DEFAULT_BASE_URL, DEFAULT_PAGES};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// PDF Harvest - download every PDF linked from a set of pages
///
/// With no arguments, crawls the built-in Blaster Products page list into
/// `./PDFs`.
#[derive(Parser, Debug)]
#[command(name = "pdfharvest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL that relative links are resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Page to crawl (repeatable; replaces the built-in list)
    #[arg(long = "page", value_name = "URL")]
    pages: Vec<String>,

    /// Directory that receives downloaded PDFs
    #[arg(long, default_value = "PDFs")]
    output_dir: PathBuf,

    /// Directory for the `<base-domain>.html` page archive
    #[arg(long, default_value = ".")]
    archive_dir: PathBuf,

    /// Custom User-Agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Give up on a page after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    page_timeout: Option<u64>,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> HarvestConfig {
        let pages = if self.pages.is_empty() {
            DEFAULT_PAGES.iter().map(|page| page.to_string()).collect()
        } else {
            self.pages
        };

        let mut config = HarvestConfig::new(self.base_url, pages)
            .with_output_dir(self.output_dir)
            .with_archive_dir(self.archive_dir);

        if let Some(ua) = self.user_agent {
            config = config.with_user_agent(ua);
        }
        if let Some(secs) = self.page_timeout {
            config = config.with_page_timeout(Duration::from_secs(secs));
        }
        config
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?cli, "CLI arguments parsed");

    let json = cli.json;
    let config = cli.into_config();
    info!(
        base_url = %config.base_url,
        pages = config.pages.len(),
        output_dir = %config.output_dir.display(),
        "Starting harvest"
    );

    let harvester = match Harvester::new(config) {
        Ok(harvester) => harvester,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let report = harvester.run().await;
    info!("{}", format_summary(&report));

    if json {
        let out = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Error serializing report: {}", e);
            std::process::exit(1);
        });
        writeln_safe(&out);
    } else {
        writeln_safe(&format_listing(&report));
    }
}

/// One-line totals for the end-of-run log
fn format_summary(report: &HarvestReport) -> String {
    format!(
        "Pages: {} fetched, {} failed. Links: {} downloaded ({} bytes), {} skipped, {} failed, {} invalid",
        report.pages.len() - report.pages_failed(),
        report.pages_failed(),
        report.downloaded(),
        report.bytes_downloaded(),
        report.skipped(),
        report.failed(),
        report.invalid(),
    )
}

/// Human-readable per-link listing
fn format_listing(report: &HarvestReport) -> String {
    let mut output = String::new();
    for outcome in &report.links {
        let line = match &outcome.status {
            LinkStatus::Downloaded { path, bytes } => {
                format!("downloaded {} ({} bytes)", path.display(), bytes)
            }
            LinkStatus::Skipped { path } => format!("skipped    {} (exists)", path.display()),
            LinkStatus::Failed { reason } => format!("failed     {}: {}", outcome.resolved, reason),
            LinkStatus::Invalid { reason } => format!("invalid    {}: {}", outcome.link, reason),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(&format_summary(report));
    output
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
