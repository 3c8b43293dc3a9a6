//! Integration tests for PDF Harvest using wiremock

use pdfharvest::{
    build_client, harvest, DownloadError, DownloadOutcome, Downloader, HarvestConfig, LinkStatus,
    DEFAULT_USER_AGENT,
};
use std::path::Path;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF";

fn downloader() -> Downloader {
    Downloader::new(build_client(DEFAULT_USER_AGENT).unwrap())
}

fn link(server: &MockServer, p: &str) -> String {
    format!("{}{}", server.uri(), p)
}

fn url(server: &MockServer, p: &str) -> Url {
    Url::parse(&link(server, p)).unwrap()
}

async fn download_path(
    downloader: &Downloader,
    server: &MockServer,
    p: &str,
    dir: &Path,
) -> Result<DownloadOutcome, DownloadError> {
    downloader.download(&link(server, p), &url(server, p), dir).await
}

/// Matches the exact User-Agent value; `header()` splits values on commas
fn user_agent_is(expected: &'static str) -> impl Fn(&Request) -> bool + Send + Sync {
    move |req: &Request| {
        req.headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            == Some(expected)
    }
}

async fn mount_pdf(server: &MockServer, p: &str, content_type: &str) {
    Mock::given(method("GET"))
        .and(path(p))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PDF_BYTES.to_vec())
                .insert_header("content-type", content_type),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_download_writes_pdf() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_pdf(&mock_server, "/docs/Sheet-1.pdf", "application/pdf").await;

    let outcome = download_path(&downloader(), &mock_server, "/docs/Sheet-1.pdf", dir.path())
        .await
        .unwrap();

    let expected = dir.path().join("sheet_1.pdf");
    assert_eq!(
        outcome,
        DownloadOutcome::Downloaded {
            path: expected.clone(),
            bytes: PDF_BYTES.len() as u64,
        }
    );
    assert_eq!(std::fs::read(expected).unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn test_download_accepts_binary_octet_stream() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_pdf(&mock_server, "/a.pdf", "binary/octet-stream").await;

    let outcome = download_path(&downloader(), &mock_server, "/a.pdf", dir.path())
        .await
        .unwrap();

    assert!(matches!(outcome, DownloadOutcome::Downloaded { .. }));
}

#[tokio::test]
async fn test_download_sends_user_agent() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/ua.pdf"))
        .and(user_agent_is(DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PDF_BYTES.to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    download_path(&downloader(), &mock_server, "/ua.pdf", dir.path())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_existing_file_skipped_without_request() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let existing = dir.path().join("report.pdf");
    std::fs::write(&existing, b"old").unwrap();

    let outcome = download_path(&downloader(), &mock_server, "/report.pdf", dir.path())
        .await
        .unwrap();

    assert_eq!(outcome, DownloadOutcome::Skipped { path: existing.clone() });
    assert_eq!(std::fs::read(existing).unwrap(), b"old");
}

#[tokio::test]
async fn test_html_content_type_creates_no_file() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/login.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>login</html>", "text/html"))
        .mount(&mock_server)
        .await;

    let err = download_path(&downloader(), &mock_server, "/login.pdf", dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::ContentType { ref content_type, .. } if content_type == "text/html"));
    assert!(!dir.path().join("login.pdf").exists());
}

#[tokio::test]
async fn test_not_found_creates_no_file() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/missing.pdf"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_bytes(PDF_BYTES.to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let err = download_path(&downloader(), &mock_server, "/missing.pdf", dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Status { status: 404, .. }));
    assert!(!dir.path().join("missing.pdf").exists());
}

#[tokio::test]
async fn test_empty_body_creates_no_file() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/empty.pdf"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "application/pdf"))
        .mount(&mock_server)
        .await;

    let err = download_path(&downloader(), &mock_server, "/empty.pdf", dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::EmptyBody { .. }));
    assert!(!dir.path().join("empty.pdf").exists());
}

#[tokio::test]
async fn test_connection_failure() {
    let dir = TempDir::new().unwrap();
    let target = Url::parse("http://127.0.0.1:1/a.pdf").unwrap();

    let err = downloader()
        .download(target.as_str(), &target, dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Request { .. }));
}

#[tokio::test]
async fn test_download_timeout() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PDF_BYTES.to_vec())
                .insert_header("content-type", "application/pdf")
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let slow = downloader().with_timeout(std::time::Duration::from_millis(100));
    let err = download_path(&slow, &mock_server, "/slow.pdf", dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Timeout { .. }));
    assert!(!dir.path().join("slow.pdf").exists());
}

#[tokio::test]
async fn test_harvest_absolute_and_relative_forms_download_once() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base = mock_server.uri();

    let page = format!(
        r#"<html><body>
        <a href="{base}/file1.pdf">SDS</a>
        <a href="/file1.pdf">SDS</a>
        <a href="/file1.pdf">SDS again</a>
        <a href='/quoted.pdf'>ignored</a>
        </body></html>"#
    );

    Mock::given(method("GET"))
        .and(path("/product/widget/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/file1.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PDF_BYTES.to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HarvestConfig::new(base.clone(), [format!("{base}/product/widget/")])
        .with_output_dir(dir.path().join("PDFs"))
        .with_archive_dir(dir.path());

    let report = harvest(config).await.unwrap();

    assert_eq!(report.pages.len(), 1);
    assert!(report.pages[0].is_ok());
    assert!(report.archive.exists());

    assert_eq!(report.links.len(), 2);
    assert_eq!(report.links[0].link, format!("{base}/file1.pdf"));
    assert_eq!(report.links[1].link, "/file1.pdf");
    assert_eq!(report.links[1].resolved, format!("{base}/file1.pdf"));

    let expected = dir.path().join("PDFs").join("file1.pdf");
    assert!(matches!(
        &report.links[0].status,
        LinkStatus::Downloaded { path, .. } if *path == expected
    ));
    assert!(matches!(
        &report.links[1].status,
        LinkStatus::Skipped { path } if *path == expected
    ));
    assert_eq!(std::fs::read(expected).unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn test_harvest_reports_failures_and_continues() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base = mock_server.uri();

    let page = r#"
        <a href="/gone.pdf">404</a>
        <a href="/page.pdf">html</a>
        <a href="/good.pdf">ok</a>
    "#;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&mock_server)
        .await;
    mount_pdf(&mock_server, "/good.pdf", "application/pdf").await;

    let config = HarvestConfig::new(base.clone(), [format!("{base}/")])
        .with_output_dir(dir.path().join("PDFs"))
        .with_archive_dir(dir.path());

    let report = harvest(config).await.unwrap();

    assert_eq!(report.links.len(), 3);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.downloaded(), 1);
    assert_eq!(report.bytes_downloaded(), PDF_BYTES.len() as u64);

    let pdfs: Vec<String> = std::fs::read_dir(dir.path().join("PDFs"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(pdfs, vec!["good.pdf"]);
}

#[tokio::test]
async fn test_harvest_rerun_skips_existing() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"<a href="/a.pdf">"#, "text/html"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PDF_BYTES.to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HarvestConfig::new(base.clone(), [format!("{base}/")])
        .with_output_dir(dir.path().join("PDFs"))
        .with_archive_dir(dir.path());

    let first = harvest(config.clone()).await.unwrap();
    let second = harvest(config).await.unwrap();

    assert_eq!(first.downloaded(), 1);
    assert_eq!(second.downloaded(), 0);
    assert_eq!(second.skipped(), 1);
}

#[tokio::test]
async fn test_harvest_names_file_from_unencoded_link() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"<a href="/docs/My Sheet.pdf">Sheet</a>"#, "text/html"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/My%20Sheet.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PDF_BYTES.to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HarvestConfig::new(base.clone(), [format!("{base}/")])
        .with_output_dir(dir.path().join("PDFs"))
        .with_archive_dir(dir.path());

    let report = harvest(config).await.unwrap();

    let expected = dir.path().join("PDFs").join("my_sheet.pdf");
    assert_eq!(report.links.len(), 1);
    assert_eq!(report.links[0].resolved, format!("{base}/docs/My Sheet.pdf"));
    assert!(matches!(
        &report.links[0].status,
        LinkStatus::Downloaded { path, .. } if *path == expected
    ));
}

#[tokio::test]
async fn test_download_names_file_from_link_text() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_pdf(&mock_server, "/fich%C3%A9.pdf", "application/pdf").await;

    let raw = link(&mock_server, "/fiché.pdf");
    let target = Url::parse(&raw).unwrap();
    assert!(target.as_str().ends_with("/fich%C3%A9.pdf"));

    let outcome = downloader().download(&raw, &target, dir.path()).await.unwrap();

    assert!(matches!(
        outcome,
        DownloadOutcome::Downloaded { ref path, .. } if *path == dir.path().join("fich.pdf")
    ));
}
