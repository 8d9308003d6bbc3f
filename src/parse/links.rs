//! Internal/external link classification.
//!
//! Every `<a>` with a non-empty `href` is resolved against the audited page
//! URL and bucketed by hostname. The raw `href` text is what gets reported.

use scraper::Selector;
use std::sync::LazyLock;
use url::Url;

use super::document::Document;
use crate::audit::Links;
use crate::config::HostMatch;
use crate::error_handling::AnalysisError;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Which bucket a link falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Same site as the audited page
    Internal,
    /// Any other host
    External,
}

/// Parses the audited page URL.
///
/// The URL must be absolute; it is the base every relative `href` resolves
/// against.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` if `url` is not a well-formed absolute URL.
pub fn parse_page_url(url: &str) -> Result<Url, AnalysisError> {
    Url::parse(url).map_err(|source| AnalysisError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Classifies a single `href` relative to the page.
///
/// Returns `None` when the link cannot be classified: the href fails to
/// resolve, or it resolves to a URL without a host (`javascript:`,
/// `mailto:`, `data:`, ...).
pub fn classify_href(href: &str, page_url: &Url, policy: HostMatch) -> Option<LinkClass> {
    let resolved = match page_url.join(href) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::trace!("Skipping unresolvable href '{}': {}", href, e);
            return None;
        }
    };
    let link_host = resolved.host_str()?;

    let internal = page_url
        .host_str()
        .is_some_and(|page_host| policy.same_site(page_host, link_host));

    Some(if internal {
        LinkClass::Internal
    } else {
        LinkClass::External
    })
}

/// Partitions the document's anchors into internal and external links.
pub fn classify_links(document: &Document, page_url: &Url, policy: HostMatch) -> Links {
    let mut links = Links::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        match classify_href(href, page_url, policy) {
            Some(LinkClass::Internal) => links.internal.push(href.to_string()),
            Some(LinkClass::External) => links.external.push(href.to_string()),
            None => {}
        }
    }

    log::debug!(
        "Classified links for {}: {} internal, {} external",
        page_url,
        links.internal.len(),
        links.external.len()
    );
    links
}
