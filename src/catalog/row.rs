//! Result row parser: one results-table row in, zero or one [`Book`] out.
//!
//! A row that does not look like a data row is skipped by returning `None`;
//! this function never fails.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use url::form_urlencoded;

use super::isbn::extract_identifiers;
use super::layout::CellLayout;
use super::utils::{compile_static_selector, element_text, trimmed_text};
use super::Book;

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("td"));
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("a[href]"));

/// Parses one results-table row.
///
/// Returns `None` for the header row and for rows with fewer cells than
/// the layout requires.
#[must_use]
pub fn parse_row(row: ElementRef<'_>, is_header_row: bool, cells: &CellLayout) -> Option<Book> {
    if is_header_row {
        return None;
    }

    let columns: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
    if columns.len() < cells.min_cells {
        return None;
    }

    let (raw_title, md5) = columns
        .get(cells.title)
        .and_then(|cell| title_link(*cell))
        .map(|link| {
            let href = link.value().attr("href").unwrap_or_default();
            (element_text(&link), md5_from_href(href))
        })
        .unwrap_or_default();

    let identifiers = extract_identifiers(&raw_title);
    let text_at = |index: usize| columns.get(index).map(trimmed_text).unwrap_or_default();

    Some(Book {
        title: identifiers.cleaned_text.clone(),
        author: text_at(cells.author),
        year: text_at(cells.year),
        language: text_at(cells.language),
        md5,
        isbn: identifiers.joined(),
        file_type: text_at(cells.file_type),
    })
}

/// Picks the title link inside the title cell: the first link pointing at an
/// `md5=` target, else the first link with an `href`.
fn title_link(cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut links = cell.select(&LINK_SELECTOR).peekable();
    let first = *links.peek()?;
    links
        .find(|link| link.value().attr("href").is_some_and(|href| href.contains("md5=")))
        .or(Some(first))
}

/// Reads the `md5` query parameter of a link target.
///
/// Returns an empty string when the target has no `md5` parameter, so a
/// fallback title link never yields some other parameter's value.
#[must_use]
pub fn md5_from_href(href: &str) -> String {
    let query = href.split_once('?').map_or(href, |(_, query)| query);
    let query = query.split('#').next().unwrap_or_default();

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "md5")
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}
