//! Title, meta description and heading extraction.

use scraper::Selector;
use std::sync::LazyLock;

use super::document::{text_content, Document};
use crate::audit::Headings;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR")
});
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("h1", "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("h2", "H2_SELECTOR"));
static H3_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("h3", "H3_SELECTOR"));

/// Extracts the page title.
///
/// Returns the trimmed text of the first `<title>` element anywhere in the
/// tree, or an empty string if there is none.
pub fn extract_title(document: &Document) -> String {
    match document.first(&TITLE_SELECTOR) {
        Some(element) => text_content(element),
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}

/// Extracts the meta description.
///
/// Looks at the first `<meta name="description">` only. A missing element or
/// a missing `content` attribute both yield an empty string.
pub fn extract_meta_description(document: &Document) -> String {
    document
        .first(&META_DESCRIPTION_SELECTOR)
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Collects the text of every `h1`, `h2` and `h3` in document order.
///
/// Whitespace-only headings produce empty entries, so each list's length is
/// the number of elements found.
pub fn extract_headings(document: &Document) -> Headings {
    let collect = |selector: &Selector| -> Vec<String> {
        document.select(selector).map(text_content).collect()
    };

    Headings {
        h1: collect(&H1_SELECTOR),
        h2: collect(&H2_SELECTOR),
        h3: collect(&H3_SELECTOR),
    }
}
