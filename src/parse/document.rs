//! Parsed HTML document.
//!
//! Thin adapter over `scraper::Html`: html5ever builds a best-effort tree for
//! any input text (unclosed tags, missing `<html>`/`<body>`, stray markup), so
//! parsing never fails on textual input.
//!
//! The tree is built with scripting disabled, the way a crawler that never
//! runs scripts sees the page: `<noscript>` content is parsed as markup.
//! Elements inside `<template>` are inert and never match a query.

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::{ElementRef, Html, HtmlTreeSink, Selector};

use crate::error_handling::AnalysisError;

/// A parsed, queryable HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML text into a document tree.
    ///
    /// An empty string yields a tree holding only the implied
    /// `<html><head></head><body></body></html>` skeleton.
    pub fn parse(text: &str) -> Self {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let sink = HtmlTreeSink::new(Html::new_document());
        Self {
            html: html5ever::parse_document(sink, opts).one(text),
        }
    }

    /// Parses raw bytes, which must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::NotText` if the bytes are not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AnalysisError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::parse(text))
    }

    /// Iterates over elements matching `selector` in document order,
    /// skipping template content.
    pub fn select<'a>(
        &'a self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .select(selector)
            .filter(|element| !in_template(*element))
    }

    /// First element matching `selector`, if any.
    pub fn first<'a>(&'a self, selector: &'a Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &Selector) -> usize {
        self.select(selector).count()
    }

    /// The document element (`<html>`), present even for empty input.
    pub fn root_element(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

fn in_template(element: ElementRef<'_>) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|ancestor| ancestor.name() == "template")
    })
}

/// Concatenated text of an element and its descendants, trimmed.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_selector_unsafe;

    #[test]
    fn test_empty_input_has_root_element() {
        let document = Document::parse("");
        assert_eq!(document.root_element().value().name(), "html");
        let body = parse_selector_unsafe("body", "test");
        assert_eq!(document.count(&body), 1);
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let document = Document::parse("<div><p>unclosed <b>bold<h1>Heading");
        let h1 = parse_selector_unsafe("h1", "test");
        let heading = document.first(&h1).expect("h1 should be recovered");
        assert_eq!(text_content(heading), "Heading");
    }

    #[test]
    fn test_from_bytes_rejects_non_utf8() {
        let result = Document::from_bytes(&[0x3c, 0xff, 0xfe, 0x3e]);
        assert!(matches!(result, Err(AnalysisError::NotText(_))));
    }

    #[test]
    fn test_from_bytes_accepts_utf8() {
        let document = Document::from_bytes("<title>Café</title>".as_bytes()).unwrap();
        let title = parse_selector_unsafe("title", "test");
        assert_eq!(text_content(document.first(&title).unwrap()), "Café");
    }

    #[test]
    fn test_noscript_content_is_parsed_as_markup() {
        let document = Document::parse(
            "<body><noscript><img src=\"pixel.gif\"><a href=\"/x\">x</a></noscript></body>",
        );
        let img = parse_selector_unsafe("img", "test");
        let anchor = parse_selector_unsafe("a[href]", "test");
        assert_eq!(document.count(&img), 1);
        assert_eq!(document.count(&anchor), 1);
    }

    #[test]
    fn test_noscript_in_head_is_parsed_as_markup() {
        let document = Document::parse(
            "<html><head><noscript><img src=\"pixel.gif\"></noscript></head><body></body></html>",
        );
        let img = parse_selector_unsafe("img", "test");
        assert_eq!(document.count(&img), 1);
    }

    #[test]
    fn test_template_content_is_not_selected() {
        let document = Document::parse(
            "<body><img src=\"live.png\"><template><img src=\"inert.png\"><h1>Inert</h1></template></body>",
        );
        let img = parse_selector_unsafe("img", "test");
        let h1 = parse_selector_unsafe("h1", "test");
        assert_eq!(document.count(&img), 1);
        assert_eq!(
            document.first(&img).and_then(|e| e.value().attr("src")),
            Some("live.png")
        );
        assert!(document.first(&h1).is_none());
    }

    #[test]
    fn test_nested_template_content_is_not_selected() {
        let document = Document::parse(
            "<template><div><template><a href=\"/deep\">deep</a></template></div></template>",
        );
        let anchor = parse_selector_unsafe("a", "test");
        assert_eq!(document.select(&anchor).count(), 0);
    }

    #[test]
    fn test_text_content_trims_nested_text() {
        let document = Document::parse("<h2>  Hello <em>nested</em> world \n</h2>");
        let h2 = parse_selector_unsafe("h2", "test");
        assert_eq!(
            text_content(document.first(&h2).unwrap()),
            "Hello nested world"
        );
    }
}
