//! Catalog search and download-link resolution.
//!
//! This module turns the catalog site's HTML pages into typed records:
//!
//! - [`SiteLayout`] - Versioned adapter table for the site's URLs and markup
//! - [`extract_identifiers`] - ISBN extraction from free-text titles
//! - [`parse_row`] - One results-table row to an optional [`Book`]
//! - [`parse_results_page`] - Whole results page to an ordered book list
//! - [`find_download_href`] - Locates the `GET` link on a get page
//! - [`CatalogClient`] - Performs the upstream fetches for search and download
//!
//! # Example
//!
//! ```no_run
//! use bookfinder_core::catalog::{CatalogClient, SearchType, SiteLayout};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new(SiteLayout::default())?;
//! let books = client.search("dune", SearchType::ByTitle).await?;
//! if let Some(book) = books.first() {
//!     let url = client.resolve_download(&book.md5).await?;
//!     println!("{} -> {url}", book.title);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod download;
mod error;
mod http_client;
mod isbn;
mod layout;
mod row;
mod search;
mod utils;

pub use client::CatalogClient;
pub use download::find_download_href;
pub use error::{CatalogError, ErrorKind};
pub use http_client::{
    CONNECT_TIMEOUT_SECS, HttpTimeouts, REQUEST_TIMEOUT_SECS, build_catalog_http_client,
};
pub use isbn::{ExtractedIdentifiers, extract_identifiers};
pub use layout::{CellLayout, ColumnSelectors, DEFAULT_BASE_URL, SiteLayout};
pub use row::{md5_from_href, parse_row};
pub use search::parse_results_page;

use serde::{Deserialize, Serialize};

/// One catalog entry parsed from a results row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title with ISBNs and edge clutter removed.
    pub title: String,
    pub author: String,
    pub year: String,
    pub language: String,
    /// Content hash from the title link; empty when the link had none.
    pub md5: String,
    /// ISBNs found in the raw title, joined by `", "`.
    pub isbn: String,
    pub file_type: String,
}

/// Which upstream column a search targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchType {
    #[default]
    ByTitle,
    ByAuthor,
    ByIsbn,
}

impl SearchType {
    /// Maps a request parameter to a search type; anything unrecognized
    /// searches by title.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "author" => Self::ByAuthor,
            "isbn" => Self::ByIsbn,
            _ => Self::ByTitle,
        }
    }
}
