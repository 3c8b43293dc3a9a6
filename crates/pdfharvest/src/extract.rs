//! PDF link extraction
//!
//! Design: extraction is a capability behind [`LinkExtractor`] so the
//! pattern-based default can be replaced by a structural HTML parser
//! without touching the rest of the pipeline.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Double-quoted href ending in `.pdf`, case-sensitive
static PDF_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]+\.pdf)""#).expect("valid PDF href pattern"));

/// Trait for pulling candidate links out of archived page text
pub trait LinkExtractor: Send + Sync {
    /// Unique identifier for this extractor (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Return every candidate link in `text`, in document order
    ///
    /// Duplicates are kept; see [`dedup_links`].
    fn extract_links(&self, text: &str) -> Vec<String>;
}

/// Extractor matching `href="….pdf"` attributes
///
/// Single-quoted attributes and upper-case `.PDF` extensions are not
/// matched.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexPdfExtractor;

impl RegexPdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl LinkExtractor for RegexPdfExtractor {
    fn name(&self) -> &'static str {
        "regex_pdf"
    }

    fn extract_links(&self, text: &str) -> Vec<String> {
        PDF_HREF
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Drop exact-string duplicates, keeping first-seen order
pub fn dedup_links(links: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(links.len());
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
