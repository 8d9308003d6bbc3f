//! Retrieval and audit against a mock HTTP server.
//!
//! No real network access; `httptest` serves every page.

use std::io::Write;
use std::sync::Arc;

use httptest::{matchers::*, responders::*, Expectation, Server};
use page_audit::app::write_json_lines;
use page_audit::{
    audit_page, audit_urls, run_audits, AuditOptions, BodyLimits, Config, ErrorType,
    HttpRetriever, InfoType, ProcessingStats,
};

const HOME: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Mock Home</title>
  <meta name="description" content="A page served by the test server">
</head>
<body>
  <a href="#main-content">Skip to content</a>
  <nav role="navigation"><a href="/about">About</a> <a href="https://elsewhere.example/">Out</a></nav>
  <main id="main-content" role="main">
    <h1>Welcome</h1>
    <img src="/hero.png" alt="Hero">
    <img src="/pixel.gif">
  </main>
</body>
</html>"##;

fn html_page(body: &'static str) -> impl Responder {
    status_code(200)
        .insert_header("Content-Type", "text/html; charset=utf-8")
        .body(body)
}

fn retriever(max_attempts: usize) -> HttpRetriever {
    HttpRetriever::new(
        Arc::new(reqwest::Client::new()),
        BodyLimits::default(),
        max_attempts,
    )
}

#[tokio::test]
async fn test_audit_live_page() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(html_page(HOME)),
    );

    let url = server.url("/").to_string();
    let report = audit_page(&retriever(1), &url, &AuditOptions::default())
        .await
        .unwrap();

    assert_eq!(report.url, url);
    assert_eq!(report.title, "Mock Home");
    assert_eq!(report.meta_description, "A page served by the test server");
    assert_eq!(report.headings.h1, vec!["Welcome"]);
    assert_eq!(report.links.internal, vec!["#main-content", "/about"]);
    assert_eq!(report.links.external, vec!["https://elsewhere.example/"]);
    assert_eq!(report.images.total, 2);
    assert_eq!(report.images.missing_alt, 1);
    assert!(report.accessibility.has_lang);
    assert!(report.accessibility.has_skip_link);
    assert_eq!(report.accessibility.has_landmarks, 2);
    assert_eq!(report.performance.page_size, HOME.len());
    assert!(report.performance.load_time >= 0.0);
}

#[tokio::test]
async fn test_not_found_is_retrieval_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .respond_with(status_code(404).body("<html>Not here</html>")),
    );

    let url = server.url("/gone").to_string();
    let err = audit_page(&retriever(1), &url, &AuditOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "retrieval");
    assert_eq!(err.error_type(), ErrorType::HttpRequestNotFound);
}

#[tokio::test]
async fn test_redirect_is_counted() {
    let server = Server::run();
    let target = server.url("/new").to_string();
    server.expect(
        Expectation::matching(request::method_path("GET", "/old"))
            .respond_with(status_code(301).append_header("Location", target.as_str())),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/new")).respond_with(html_page(HOME)),
    );

    let stats = ProcessingStats::new();
    let batch = audit_urls(
        &retriever(1),
        vec![server.url("/old").to_string()],
        &AuditOptions::default(),
        1,
        &stats,
    )
    .await;

    assert_eq!(batch.successful, 1);
    assert_eq!(stats.get_info_count(InfoType::HttpRedirect), 1);
    // The report keeps the submitted URL
    let report = batch.outcomes[0].result.as_ref().unwrap();
    assert!(report.url.ends_with("/old"));
}

#[tokio::test]
async fn test_run_audits_from_file_and_write_output() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(html_page(HOME)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/feed.json")).respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(r#"{"items": [], "note": "not a web page"}"#),
        ),
    );

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("urls.txt");
    {
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "# pages to audit").unwrap();
        writeln!(file, "{}", server.url("/")).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", server.url("/feed.json")).unwrap();
    }

    let config = Config {
        file: Some(input),
        max_attempts: 1,
        timeout_seconds: 5,
        ..Default::default()
    };
    let batch = run_audits(&config).await.unwrap();
    assert_eq!(batch.total_urls, 2);
    assert_eq!(batch.successful, 1);
    assert_eq!(batch.failed, 1);
    assert_eq!(batch.exit_code(), 1);

    let output = dir.path().join("results.jsonl");
    assert_eq!(write_json_lines(&output, &batch.outcomes).unwrap(), 2);

    let lines: Vec<serde_json::Value> = std::fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines[0]["title"], "Mock Home");
    assert_eq!(lines[0]["images"]["missingAlt"], 1);
    assert_eq!(lines[1]["error"]["kind"], "retrieval");
    assert!(lines[1]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("application/json"));
}

#[tokio::test]
async fn test_run_audits_missing_input_file() {
    let config = Config {
        file: Some("/nonexistent/urls.txt".into()),
        ..Default::default()
    };
    assert!(run_audits(&config).await.is_err());
}
