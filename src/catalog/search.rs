//! Search orchestration: query construction, fetch, and results-page parsing.

use scraper::{Html, Selector};
use tracing::{debug, instrument};

use super::row::parse_row;
use super::{Book, CatalogClient, CatalogError, SearchType, SiteLayout};

/// Parses a results page into books, in document order.
///
/// The first row of the results table is the header. Rows the row parser
/// skips are simply absent. A page without the results table yields an
/// empty list.
///
/// # Errors
///
/// Returns [`CatalogError::Validation`] when the layout's row selector is
/// not a valid CSS selector.
pub fn parse_results_page(html: &str, layout: &SiteLayout) -> Result<Vec<Book>, CatalogError> {
    let selector = Selector::parse(&layout.results_row_selector)
        .map_err(|_| CatalogError::validation("results_row_selector"))?;
    let document = Html::parse_document(html);

    let books: Vec<Book> = document
        .select(&selector)
        .enumerate()
        .filter_map(|(index, row)| parse_row(row, index == 0, &layout.cells))
        .collect();
    Ok(books)
}

impl CatalogClient {
    /// Searches the catalog and returns matching books in upstream order.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Validation`] when `query` is empty
    /// - [`CatalogError::Fetch`] when the catalog is unreachable or answers non-2xx
    /// - [`CatalogError::Parse`] when the response body cannot be read
    #[instrument(skip(self), fields(base_url = %self.layout().base_url))]
    pub async fn search(
        &self,
        query: &str,
        search_type: SearchType,
    ) -> Result<Vec<Book>, CatalogError> {
        if query.trim().is_empty() {
            return Err(CatalogError::validation("query"));
        }

        let url = self.layout().search_url(query, search_type)?;
        let html = self.fetch_page(&url).await?;
        let books = parse_results_page(&html, self.layout())?;

        debug!(count = books.len(), "Parsed search results");
        Ok(books)
    }
}
