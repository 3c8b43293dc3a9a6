//! Filename synthesis for downloaded PDFs

/// Substring stripped from every sanitized stem
const STRIPPED_SUBSTRING: &str = "_pdf";

/// Extension every synthesized filename ends with
const PDF_EXTENSION: &str = ".pdf";

/// Stem used when nothing alphanumeric survives sanitization
const FALLBACK_STEM: &str = "document";

/// Derive a filesystem-safe `.pdf` filename from a URL
///
/// Takes the last path segment of the lower-cased URL, collapses every run
/// of characters outside `[a-z0-9]` into one `_`, trims `_` at both ends,
/// removes `_pdf` and appends `.pdf`. Applying it to its own output returns
/// the same name.
///
/// Distinct URLs can map to the same name (`a-b.pdf` and `a_b.pdf` both
/// give `a_b.pdf`).
pub fn url_to_filename(url: &str) -> String {
    let lower = url.to_lowercase();
    let segment = last_segment(&lower);

    let mut stem = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            stem.push(ch);
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }

    let mut stem = stem.trim_matches('_').to_string();
    while stem.contains(STRIPPED_SUBSTRING) {
        stem = stem.replace(STRIPPED_SUBSTRING, "");
    }

    if stem.is_empty() {
        stem.push_str(FALLBACK_STEM);
    }
    if !stem.ends_with(PDF_EXTENSION) {
        stem.push_str(PDF_EXTENSION);
    }
    stem
}

/// Last non-empty `/`-separated element, ignoring trailing slashes
fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
