//! Example: Fetch pages and list the PDF links they contain
//!
//! Run with: cargo run -p pdfharvest --example list_links -- <URL>...
//!
//! Nothing is downloaded; this shows what a harvest would try to fetch.

use pdfharvest::{
    build_client, dedup_links, has_domain, parse_request_uri, resolve_link, url_to_filename,
    HttpFetcher, LinkExtractor, PageFetcher, RegexPdfExtractor, DEFAULT_PAGES, DEFAULT_USER_AGENT,
};

#[tokio::main]
async fn main() {
    let mut pages: Vec<String> = std::env::args().skip(1).collect();
    if pages.is_empty() {
        pages.push(DEFAULT_PAGES[0].to_string());
    }

    let client = match build_client(DEFAULT_USER_AGENT) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let fetcher = HttpFetcher::new(client);
    let extractor = RegexPdfExtractor::new();

    for (i, page) in pages.iter().enumerate() {
        println!("{}. {}", i + 1, page);

        let text = match fetcher.fetch_page(page).await {
            Ok(text) => text,
            Err(e) => {
                println!("   Error: {}\n", e);
                continue;
            }
        };

        let base = page_origin(page);
        let links = dedup_links(extractor.extract_links(&text));
        println!("   {} PDF link(s)", links.len());

        for link in links {
            let resolved = resolve_link(&base, &link);
            match parse_request_uri(&resolved) {
                Ok(url) => println!(
                    "   {} -> {}{}",
                    url,
                    url_to_filename(&resolved),
                    if has_domain(&link) { "" } else { " (relative)" }
                ),
                Err(e) => println!("   {} (skipped: {})", link, e),
            }
        }
        println!();
    }
}

/// Scheme and authority of a page URL, used as the prefix for relative links
fn page_origin(page: &str) -> String {
    match parse_request_uri(page) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(_) => page.to_string(),
    }
}
