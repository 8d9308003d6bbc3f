//! Audit report data structures.
//!
//! A `Report` is an immutable value produced once per audit. It serializes as
//! a flat camelCase object, arrays in document order.

use serde::{Deserialize, Serialize};

/// Everything the engine derives from one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The page URL as submitted, not normalized
    pub url: String,
    /// Trimmed text of the first `<title>`, or empty
    pub title: String,
    /// `content` of the first `<meta name="description">`, or empty
    pub meta_description: String,
    /// h1-h3 text in document order
    pub headings: Headings,
    /// Anchors split into internal and external
    pub links: Links,
    /// Alt-text coverage
    pub images: Images,
    /// Structural accessibility signals
    pub accessibility: Accessibility,
    /// Load time and page size
    pub performance: Performance,
}

/// Heading text per level, one entry per element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    /// Text of every `<h1>`
    pub h1: Vec<String>,
    /// Text of every `<h2>`
    pub h2: Vec<String>,
    /// Text of every `<h3>`
    pub h3: Vec<String>,
}

/// Raw `href` values split by host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Same host as the page
    pub internal: Vec<String>,
    /// Any other host
    pub external: Vec<String>,
}

/// Image alt-text coverage. `missing_alt <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Images {
    /// Number of `<img>` elements
    pub total: usize,
    /// Images with no `alt` attribute at all
    pub missing_alt: usize,
}

/// Result of a check the engine does not actually perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastStatus {
    /// Not evaluated: computing contrast needs rendered styles
    #[default]
    Unknown,
    /// Sufficient contrast
    Pass,
    /// Insufficient contrast
    Fail,
}

impl ContrastStatus {
    /// Label used in text reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastStatus::Unknown => "Not evaluated",
            ContrastStatus::Pass => "Pass",
            ContrastStatus::Fail => "Fail",
        }
    }
}

/// Structural accessibility signals.
///
/// The `has_*` counts keep their historical names even though they are
/// counts, so serialized reports stay compatible with existing consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    /// Root element carries a `lang` attribute
    pub has_lang: bool,
    /// An anchor targets `#main-content`
    pub has_skip_link: bool,
    /// Elements with `aria-label`
    pub has_aria_labels: usize,
    /// Elements with any `role`
    pub has_aria_roles: usize,
    /// `<label>` elements inside a `<form>`
    pub has_form_labels: usize,
    /// `<th>` elements
    pub has_table_headers: usize,
    /// Elements with a landmark role
    pub has_landmarks: usize,
    /// Always `Unknown`
    pub color_contrast: ContrastStatus,
    /// At least one keyboard-focusable element exists
    pub has_keyboard_navigation: bool,
}

/// Size and timing figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Retrieval time in milliseconds, as measured by the caller
    pub load_time: f64,
    /// UTF-8 byte length of the HTML text
    pub page_size: usize,
}
