//! Shared helpers for catalog modules: static regex/selector compilation and
//! element text handling.

use regex::Regex;
use scraper::{ElementRef, Selector};

/// Compiles a regex at static init; panics on invalid pattern.
pub fn compile_static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid static regex '{pattern}': {e}"))
}

/// Compiles a CSS selector at static init; panics on invalid selector.
pub fn compile_static_selector(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("invalid static selector '{selector}': {e}"))
}

/// Concatenated text of an element and all its descendants, untrimmed.
#[must_use]
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Element text with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(element: &ElementRef<'_>) -> String {
    element_text(element).trim().to_string()
}
