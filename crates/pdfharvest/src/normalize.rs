//! Link normalization
//!
//! Turns raw href values into absolute, parseable URLs. Links without a
//! host are prefixed with the base URL by plain concatenation, so
//! `/file.pdf` on `https://example.com` becomes
//! `https://example.com/file.pdf`.

use crate::error::NormalizeError;
use url::Url;

/// Returns true if `candidate` already carries a non-empty host
///
/// Scheme-relative links (`//cdn.example.com/a.pdf`) count as having one.
pub fn has_domain(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => scheme_relative_host(candidate).is_some(),
    }
}

/// Host of a `//host/path` link, if any
fn scheme_relative_host(candidate: &str) -> Option<&str> {
    let rest = candidate.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let host = &rest[..end];
    (!host.is_empty()).then_some(host)
}

/// Make `candidate` absolute against `base_url`
///
/// Links with a host are kept as-is; scheme-relative ones borrow the base
/// URL's scheme. Everything else gets the base URL prepended verbatim.
pub fn resolve_link(base_url: &str, candidate: &str) -> String {
    if !has_domain(candidate) {
        return format!("{base_url}{candidate}");
    }

    if candidate.starts_with("//") {
        let scheme = Url::parse(base_url)
            .map(|url| url.scheme().to_string())
            .unwrap_or_else(|_| "https".to_string());
        return format!("{scheme}:{candidate}");
    }

    candidate.to_string()
}

/// Parse `candidate` as an absolute request URI
///
/// Parsing follows the WHATWG URL rules, which are more lenient than RFC
/// 3986: malformed percent escapes (`%zz`) pass through untouched and
/// spaces or non-ASCII characters are percent-encoded rather than rejected.
/// Such links are kept and left to fail, if at all, at download time.
pub fn parse_request_uri(candidate: &str) -> Result<Url, NormalizeError> {
    Url::parse(candidate).map_err(|source| NormalizeError::InvalidUri {
        uri: candidate.to_string(),
        source,
    })
}

/// Bare domain label of a URL's host
///
/// `https://sub.example.com` → `example`, `https://blog.my-site.co.uk` →
/// `co`. A single-label host is returned whole.
pub fn extract_base_domain(url: &str) -> Result<String, NormalizeError> {
    let parsed = parse_request_uri(url)?;
    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| NormalizeError::MissingHost(url.to_string()))?;

    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() >= 2 {
        return Ok(parts[parts.len() - 2].to_string());
    }
    Ok(host.to_string())
}
