//! Parse module tests.

use super::*;
use crate::config::HostMatch;

#[test]
fn test_extract_title_basic() {
    let document = Document::parse("<html><head><title>Test Page</title></head></html>");
    assert_eq!(extract_title(&document), "Test Page");
}

#[test]
fn test_extract_title_with_whitespace() {
    let html = r#"<html><head><title>
        Test Page
    </title></head></html>"#;
    assert_eq!(extract_title(&Document::parse(html)), "Test Page");
}

#[test]
fn test_extract_title_with_html_entities() {
    let html = r#"<title>Fish &amp; Chips</title>"#;
    assert_eq!(extract_title(&Document::parse(html)), "Fish & Chips");
}

#[test]
fn test_extract_title_missing_or_empty() {
    assert_eq!(extract_title(&Document::parse("<html><head></head></html>")), "");
    assert_eq!(extract_title(&Document::parse("<title></title>")), "");
}

#[test]
fn test_extract_title_multiple_tags() {
    // Only the first title counts, wherever it sits
    let html = r#"<html><head><title>First</title></head><body><title>Second</title></body></html>"#;
    assert_eq!(extract_title(&Document::parse(html)), "First");
}

#[test]
fn test_extract_meta_description_basic() {
    let html = r#"<meta name="description" content="  A test page  ">"#;
    assert_eq!(extract_meta_description(&Document::parse(html)), "A test page");
}

#[test]
fn test_extract_meta_description_missing_content() {
    let html = r#"<meta name="description"><meta name="description" content="second">"#;
    // The first matching element wins even without a content attribute
    assert_eq!(extract_meta_description(&Document::parse(html)), "");
}

#[test]
fn test_extract_meta_description_missing_element() {
    let html = r#"<meta name="keywords" content="rust">"#;
    assert_eq!(extract_meta_description(&Document::parse(html)), "");
}

#[test]
fn test_extract_headings_preserves_order_and_duplicates() {
    let html = r#"
        <h1>Main</h1>
        <h2>Alpha</h2>
        <h3>Detail</h3>
        <h2>Beta</h2>
        <h2>Alpha</h2>
        <h1>   </h1>
    "#;
    let headings = extract_headings(&Document::parse(html));
    assert_eq!(headings.h1, vec!["Main", ""]);
    assert_eq!(headings.h2, vec!["Alpha", "Beta", "Alpha"]);
    assert_eq!(headings.h3, vec!["Detail"]);
}

#[test]
fn test_extract_headings_ignores_other_levels() {
    let headings = extract_headings(&Document::parse("<h4>a</h4><h5>b</h5><h6>c</h6>"));
    assert!(headings.h1.is_empty());
    assert!(headings.h2.is_empty());
    assert!(headings.h3.is_empty());
}

#[test]
fn test_analyze_images_alt_presence() {
    let html = r#"
        <img src="a.png" alt="A chart">
        <img src="spacer.gif" alt="">
        <img src="b.png">
        <img src="c.png" ALT="upper-case attribute names are normalized">
    "#;
    let images = analyze_images(&Document::parse(html));
    assert_eq!(images.total, 4);
    assert_eq!(images.missing_alt, 1);
}

#[test]
fn test_analyze_images_none() {
    let images = analyze_images(&Document::parse("<p>text only</p>"));
    assert_eq!(images.total, 0);
    assert_eq!(images.missing_alt, 0);
}

#[test]
fn test_classify_links_from_document() {
    let html = r#"
        <a href="/about">About</a>
        <a href="https://other.com">Other</a>
        <a href="javascript:void(0)">Menu</a>
        <a href="">Empty</a>
        <a>No href</a>
        <a href="https://example.com/blog">Blog</a>
        <a href="mailto:hi@example.com">Mail</a>
    "#;
    let page = parse_page_url("https://example.com/page").unwrap();
    let links = classify_links(&Document::parse(html), &page, HostMatch::Exact);
    assert_eq!(links.internal, vec!["/about", "https://example.com/blog"]);
    assert_eq!(links.external, vec!["https://other.com"]);
}

#[test]
fn test_classify_links_reports_raw_href() {
    let html = r#"<a href="../docs/index.html">Docs</a>"#;
    let page = parse_page_url("https://example.com/a/b/page").unwrap();
    let links = classify_links(&Document::parse(html), &page, HostMatch::Exact);
    assert_eq!(links.internal, vec!["../docs/index.html"]);
}

#[test]
fn test_has_lang_on_root_element() {
    let with_lang = analyze_accessibility(&Document::parse(r#"<html lang="en"></html>"#));
    assert!(with_lang.has_lang);

    let empty_lang = analyze_accessibility(&Document::parse(r#"<html lang=""></html>"#));
    assert!(empty_lang.has_lang);

    let nested_lang = analyze_accessibility(&Document::parse(r#"<html><body><p lang="fr">x</p></body></html>"#));
    assert!(!nested_lang.has_lang);
}

#[test]
fn test_skip_link_requires_exact_target() {
    let present = analyze_accessibility(&Document::parse(
        r##"<a href="#main-content">Skip to content</a><main id="main-content"></main>"##,
    ));
    assert!(present.has_skip_link);

    let other_target = analyze_accessibility(&Document::parse(r##"<a href="#main">Skip</a>"##));
    assert!(!other_target.has_skip_link);
}

#[test]
fn test_aria_and_table_counts() {
    let html = r#"
        <button aria-label="Close">x</button>
        <nav aria-label="Primary" role="navigation"></nav>
        <table><tr><th>Name</th><th>Age</th></tr><tr><td>A</td><td>1</td></tr></table>
    "#;
    let result = analyze_accessibility(&Document::parse(html));
    assert_eq!(result.has_aria_labels, 2);
    assert_eq!(result.has_aria_roles, 1);
    assert_eq!(result.has_table_headers, 2);
    assert_eq!(result.has_landmarks, 1);
}
