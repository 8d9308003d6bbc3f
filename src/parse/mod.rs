//! HTML parsing and signal extraction.
//!
//! This module turns a parsed document into the individual signal groups of
//! an audit report:
//! - Title, meta description and headings
//! - Internal/external link classification
//! - Image alt-text coverage
//! - Accessibility heuristics
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Nothing in
//! here performs I/O.

mod accessibility;
mod document;
mod images;
mod links;
mod metadata;

// Re-export public API
pub use accessibility::analyze_accessibility;
pub use document::Document;
pub use images::analyze_images;
pub use links::{classify_links, parse_page_url};
pub use metadata::{extract_headings, extract_meta_description, extract_title};

#[cfg(test)]
mod tests;
