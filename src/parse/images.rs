//! Image alt-text coverage.

use scraper::Selector;
use std::sync::LazyLock;

use super::document::Document;
use crate::audit::Images;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("img", "IMG_SELECTOR"));

/// Counts `<img>` elements and those without an `alt` attribute.
///
/// `alt=""` marks a decorative image and counts as present; only an absent
/// attribute is reported as missing.
pub fn analyze_images(document: &Document) -> Images {
    let (total, missing_alt) = document
        .select(&IMG_SELECTOR)
        .fold((0, 0), |(total, missing), img| {
            let has_alt = img.value().attr("alt").is_some();
            (total + 1, missing + usize::from(!has_alt))
        });

    Images { total, missing_alt }
}
