//! Versioned adapter table for the upstream catalog site.
//!
//! Everything coupled to the catalog's markup and query syntax lives in
//! [`SiteLayout`]: endpoint paths, query parameters, the results-table
//! selector, cell positions and the download-link label. A layout change
//! on the site means editing this table, not the parsers.

use url::Url;

use super::{CatalogError, SearchType};

/// Default catalog origin.
pub const DEFAULT_BASE_URL: &str = "https://libgen.is";

/// Positional cell indices inside one results-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub author: usize,
    pub title: usize,
    pub year: usize,
    pub language: usize,
    pub file_type: usize,
    /// Rows with fewer cells are skipped.
    pub min_cells: usize,
}

/// Upstream column selector for each [`SearchType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelectors {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl ColumnSelectors {
    /// Returns the upstream column for a search type.
    #[must_use]
    pub fn for_type(&self, search_type: SearchType) -> &str {
        match search_type {
            SearchType::ByTitle => &self.title,
            SearchType::ByAuthor => &self.author,
            SearchType::ByIsbn => &self.isbn,
        }
    }
}

/// Adapter table describing one version of the catalog site's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Layout revision; bump when any field below changes for a site redesign.
    pub version: u32,
    /// Origin used for both endpoints and for relative download links.
    pub base_url: String,
    pub search_path: String,
    pub get_page_path: String,
    pub result_cap: u32,
    pub view: String,
    pub phrase: String,
    pub columns: ColumnSelectors,
    /// CSS selector matching every row of the results table, header included.
    pub results_row_selector: String,
    pub cells: CellLayout,
    /// Exact visible text of the download link on the get page.
    pub download_label: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: "/search.php".to_string(),
            get_page_path: "/get.php".to_string(),
            result_cap: 25,
            view: "simple".to_string(),
            phrase: "1".to_string(),
            columns: ColumnSelectors {
                title: "title".to_string(),
                author: "author".to_string(),
                isbn: "identifier".to_string(),
            },
            results_row_selector: "table.c tr".to_string(),
            cells: CellLayout {
                author: 1,
                title: 2,
                year: 4,
                language: 6,
                file_type: 8,
                min_cells: 11,
            },
            download_label: "GET".to_string(),
        }
    }
}

impl SiteLayout {
    /// Default layout pointed at another origin (mirror or mock server).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Builds the search endpoint URL with the query and column URL-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when the configured base URL is
    /// not a valid absolute URL.
    pub fn search_url(&self, query: &str, search_type: SearchType) -> Result<Url, CatalogError> {
        let mut url = self.endpoint(&self.search_path)?;
        url.query_pairs_mut()
            .append_pair("req", query)
            .append_pair("res", &self.result_cap.to_string())
            .append_pair("view", &self.view)
            .append_pair("phrase", &self.phrase)
            .append_pair("column", self.columns.for_type(search_type));
        Ok(url)
    }

    /// Builds the intermediate get-page URL for a content hash.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when the configured base URL is
    /// not a valid absolute URL.
    pub fn get_page_url(&self, md5: &str) -> Result<Url, CatalogError> {
        let mut url = self.endpoint(&self.get_page_path)?;
        url.query_pairs_mut().append_pair("md5", md5);
        Ok(url)
    }

    /// Turns a download-link `href` into an absolute URL.
    ///
    /// Anything not starting with `http` is treated as relative to the fixed
    /// base origin and joined by concatenation, not resolved against the
    /// get page's own location.
    #[must_use]
    pub fn absolutize_download_href(&self, href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            href.trim_start_matches('/')
        )
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|_| CatalogError::validation("base_url"))
    }
}
