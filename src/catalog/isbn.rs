//! ISBN extraction from free-text catalog titles.
//!
//! Catalog titles often carry one or more ISBNs glued to the end of the
//! title text. [`extract_identifiers`] pulls them out in order of
//! appearance and returns the title with them removed.

use std::sync::LazyLock;

use regex::Regex;

use super::utils::compile_static_regex;

/// ISBN-like token: optional `ISBN`/`ISBN-10`/`ISBN-13` prefix, optional
/// `978`/`979` group, hyphen or space separated digit groups and a check
/// digit that may be `X`. Group 1 is the identifier without its prefix.
const ISBN_PATTERN: &str =
    r"(?:ISBN(?:-1[03])?:?\s*)?((?:97[89][-\s]?)?\d{1,5}[-\s]?\d{1,7}[-\s]?\d{1,6}[-\s]?(?:\d|X))";

static ISBN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_static_regex(&format!(r"\b{ISBN_PATTERN}\b")));

/// Same token, required to span the whole input.
static ISBN_EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_static_regex(&format!("^{ISBN_PATTERN}$")));

/// Result of scanning one piece of text for ISBNs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedIdentifiers {
    /// Every ISBN found, in order of appearance, duplicates kept.
    pub matches: Vec<String>,
    /// Input with every match removed and edge clutter trimmed.
    pub cleaned_text: String,
}

impl ExtractedIdentifiers {
    /// Matches joined the way they are reported on a [`Book`](super::Book).
    #[must_use]
    pub fn joined(&self) -> String {
        self.matches.join(", ")
    }
}

/// Scans `text` for ISBN-like tokens and strips them out.
///
/// Only candidates carrying 10 or 13 digits qualify, so years and page
/// counts in a title are left alone. Removal is repeated on the cleaned
/// text until nothing qualifies, which keeps the operation idempotent even
/// when a removal brings two digit runs together.
#[must_use]
pub fn extract_identifiers(text: &str) -> ExtractedIdentifiers {
    let mut matches = Vec::new();
    let mut current = text.to_string();

    loop {
        let (found, remaining) = strip_pass(&current);
        if found.is_empty() {
            break;
        }
        matches.extend(found);
        current = remaining;
    }

    // Commas only count as clutter once an identifier has been cut out.
    let cleaned_text = if matches.is_empty() {
        current.trim()
    } else {
        trim_clutter(&current)
    };

    ExtractedIdentifiers {
        matches,
        cleaned_text: cleaned_text.to_string(),
    }
}

/// One left-to-right pass; returns the qualifying identifiers and the text
/// with their full spans (prefix included) removed.
fn strip_pass(text: &str) -> (Vec<String>, String) {
    let mut found = Vec::new();
    let mut remaining = String::with_capacity(text.len());
    let mut copied_to = 0;
    let mut search_from = 0;

    while search_from < text.len() {
        let Some(caps) = ISBN_RE.captures_at(text, search_from) else {
            break;
        };
        let (Some(whole), Some(identifier)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let accepted = if is_isbn_length(identifier.as_str()) {
            Some((whole.end(), identifier.as_str().to_string()))
        } else {
            shorter_candidate(text, whole.start(), whole.end())
        };

        if let Some((end, identifier)) = accepted {
            found.push(identifier);
            remaining.push_str(&text[copied_to..whole.start()]);
            copied_to = end;
            search_from = end;
        } else {
            // Retry from the next character so a longer digit run swallowing
            // a real ISBN does not hide it.
            search_from = next_char_boundary(text, whole.start());
        }
    }

    remaining.push_str(&text[copied_to..]);
    (found, remaining)
}

/// Longest qualifying identifier that starts at `start` and ends on a word
/// boundary before `end`. The greedy match can run past a real ISBN into
/// trailing digits (`0262033844 2009`); this recovers the ISBN itself.
fn shorter_candidate(text: &str, start: usize, end: usize) -> Option<(usize, String)> {
    text[start..end]
        .char_indices()
        .map(|(offset, _)| start + offset)
        .filter(|&cut| cut > start && ends_word(text, cut))
        .rev()
        .find_map(|cut| {
            let caps = ISBN_EXACT_RE.captures(&text[start..cut])?;
            let identifier = caps.get(1)?.as_str();
            is_isbn_length(identifier).then(|| (cut, identifier.to_string()))
        })
}

/// Whether a word ends right before byte `index`.
fn ends_word(text: &str, index: usize) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let before = text[..index].chars().next_back().is_some_and(is_word);
    let after = text[index..].chars().next().is_some_and(is_word);
    before && !after
}

fn is_isbn_length(identifier: &str) -> bool {
    let digits = identifier
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X')
        .count();
    digits == 10 || digits == 13
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len(), |c| index + c.len_utf8())
}

fn trim_clutter(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == ',')
}
