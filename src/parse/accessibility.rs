//! Structural accessibility heuristics.
//!
//! Cheap checks over the static tree. None of them needs rendering, layout or
//! script execution, which also means none of them can judge color contrast
//! or live focus state.

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

use super::document::Document;
use crate::audit::{Accessibility, ContrastStatus};
use crate::config::{LANDMARK_ROLES, SKIP_LINK_TARGET};
use crate::utils::parse_selector_unsafe;

static SKIP_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        &format!("a[href=\"{SKIP_LINK_TARGET}\"]"),
        "SKIP_LINK_SELECTOR",
    )
});
static ARIA_LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[aria-label]", "ARIA_LABEL_SELECTOR"));
static ROLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[role]", "ROLE_SELECTOR"));
static FORM_LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("form label", "FORM_LABEL_SELECTOR"));
static TABLE_HEADER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("th", "TABLE_HEADER_SELECTOR"));
static LANDMARK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    let selector = LANDMARK_ROLES
        .iter()
        .map(|role| format!("[role=\"{role}\"]"))
        .collect::<Vec<_>>()
        .join(", ");
    parse_selector_unsafe(&selector, "LANDMARK_SELECTOR")
});
static FOCUS_CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        "a[href], button, input, select, textarea, [tabindex]",
        "FOCUS_CANDIDATE_SELECTOR",
    )
});

/// Runs every accessibility check against the document.
pub fn analyze_accessibility(document: &Document) -> Accessibility {
    Accessibility {
        has_lang: document.root_element().value().attr("lang").is_some(),
        has_skip_link: document.first(&SKIP_LINK_SELECTOR).is_some(),
        has_aria_labels: document.count(&ARIA_LABEL_SELECTOR),
        has_aria_roles: document.count(&ROLE_SELECTOR),
        has_form_labels: document.count(&FORM_LABEL_SELECTOR),
        has_table_headers: document.count(&TABLE_HEADER_SELECTOR),
        has_landmarks: document.count(&LANDMARK_SELECTOR),
        color_contrast: ContrastStatus::Unknown,
        has_keyboard_navigation: document
            .select(&FOCUS_CANDIDATE_SELECTOR)
            .any(is_keyboard_focusable),
    }
}

/// Whether an element can receive keyboard focus in a static document.
///
/// Stands in for a live `:focus` query, which can never match outside a
/// browser. Focusable means: `a[href]`, `button`, `select`, `textarea`, a
/// non-hidden `input`, or anything with an integer `tabindex >= 0`; and not
/// `disabled`, and not taken out of the tab order with a negative `tabindex`.
pub fn is_keyboard_focusable(element: ElementRef<'_>) -> bool {
    let el = element.value();

    if el.attr("disabled").is_some() {
        return false;
    }
    if el.name() == "input"
        && el
            .attr("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("hidden"))
    {
        return false;
    }

    if let Some(tabindex) = el.attr("tabindex").and_then(|t| t.trim().parse::<i32>().ok()) {
        return tabindex >= 0;
    }

    match el.name() {
        "a" => el.attr("href").is_some(),
        "button" | "input" | "select" | "textarea" => true,
        _ => false,
    }
}
