//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed.
///
/// Every selector in this crate is a compile-time constant, so a parse
/// failure is a programming error and panics with the offending text.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Name of the static being initialized, for the panic message
///
/// # Panics
///
/// Panics if the selector cannot be parsed.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_unsafe_valid() {
        let selector = parse_selector_unsafe("a[href], button", "test");
        let document = scraper::Html::parse_fragment("<a href='/'>x</a><button>y</button>");
        assert_eq!(document.select(&selector).count(), 2);
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_parse_selector_unsafe_invalid_panics() {
        parse_selector_unsafe("a[", "test");
    }
}
