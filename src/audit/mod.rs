//! The audit engine.
//!
//! A pure function of `(url, html, elapsed_ms)`: parse the markup once, run
//! each independent extractor over the tree, and assemble the results into a
//! `Report`. No I/O, no shared state; audits of different pages can run in
//! parallel freely.

mod report;

use log::debug;

pub use report::{
    Accessibility, ContrastStatus, Headings, Images, Links, Performance, Report,
};

use crate::config::HostMatch;
use crate::error_handling::AnalysisError;
use crate::parse::{
    analyze_accessibility, analyze_images, classify_links, extract_headings,
    extract_meta_description, extract_title, parse_page_url, Document,
};

/// Tunable engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditOptions {
    /// How link hosts are compared with the page host
    pub host_match: HostMatch,
}

/// Audits a page with default options.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` if `url` is not an absolute URL. The
/// check happens before any extraction; there is no partial report.
///
/// # Example
///
/// ```
/// let html = r#"<html lang="en"><title>Home</title><a href="/about">About</a></html>"#;
/// let report = page_audit::audit("https://example.com/", html, 42.0).unwrap();
/// assert_eq!(report.title, "Home");
/// assert_eq!(report.links.internal, vec!["/about"]);
/// assert!(report.accessibility.has_lang);
/// ```
pub fn audit(url: &str, html: &str, elapsed_ms: f64) -> Result<Report, AnalysisError> {
    audit_with(url, html, elapsed_ms, &AuditOptions::default())
}

/// Audits a page.
///
/// # Arguments
///
/// * `url` - The page URL as submitted; reported verbatim and used as the
///   base for link resolution
/// * `html` - Raw HTML text
/// * `elapsed_ms` - Retrieval time measured by the caller
/// * `options` - Engine options
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` if `url` is not an absolute URL.
pub fn audit_with(
    url: &str,
    html: &str,
    elapsed_ms: f64,
    options: &AuditOptions,
) -> Result<Report, AnalysisError> {
    let page_url = parse_page_url(url)?;
    let document = Document::parse(html);
    Ok(assemble(url, &page_url, &document, html.len(), elapsed_ms, options))
}

/// Audits a page given as raw bytes.
///
/// `pageSize` is the byte length of `bytes`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` for a malformed URL, or
/// `AnalysisError::NotText` if `bytes` is not UTF-8.
pub fn audit_bytes(
    url: &str,
    bytes: &[u8],
    elapsed_ms: f64,
    options: &AuditOptions,
) -> Result<Report, AnalysisError> {
    let page_url = parse_page_url(url)?;
    let document = Document::from_bytes(bytes)?;
    Ok(assemble(url, &page_url, &document, bytes.len(), elapsed_ms, options))
}

fn assemble(
    url: &str,
    page_url: &url::Url,
    document: &Document,
    page_size: usize,
    elapsed_ms: f64,
    options: &AuditOptions,
) -> Report {
    let title = extract_title(document);
    debug!("Extracted title for {url}: {title:?}");

    let meta_description = extract_meta_description(document);
    debug!("Extracted description for {url}: {meta_description:?}");

    let headings = extract_headings(document);
    let links = classify_links(document, page_url, options.host_match);
    let images = analyze_images(document);
    let accessibility = analyze_accessibility(document);
    debug!(
        "Audited {url}: {} h1, {} images ({} missing alt), {} landmarks",
        headings.h1.len(),
        images.total,
        images.missing_alt,
        accessibility.has_landmarks
    );

    Report {
        url: url.to_string(),
        title,
        meta_description,
        headings,
        links,
        images,
        accessibility,
        performance: Performance {
            load_time: elapsed_ms,
            page_size,
        },
    }
}
