//! Download link resolution through the catalog's intermediate get page.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, instrument};

use super::utils::{compile_static_selector, element_text};
use super::{CatalogClient, CatalogError};

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("a"));

/// Returns the `href` of the first link whose visible text is exactly `label`.
///
/// Returns `None` when no link carries the label, or when the first one that
/// does has no usable `href`.
#[must_use]
pub fn find_download_href(html: &str, label: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let link = document
        .select(&ANCHOR_SELECTOR)
        .find(|anchor| element_text(anchor) == label)?;

    link.value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

impl CatalogClient {
    /// Resolves a content hash to an absolute download URL.
    ///
    /// The caller rejects empty hashes before calling; an empty `md5` here is
    /// reported as [`CatalogError::Validation`] without any fetch.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Fetch`] when the get page is unreachable or answers non-2xx
    /// - [`CatalogError::Parse`] when the get page body cannot be read
    /// - [`CatalogError::NotFound`] when the page has no usable download link
    #[instrument(skip(self), fields(base_url = %self.layout().base_url))]
    pub async fn resolve_download(&self, md5: &str) -> Result<String, CatalogError> {
        if md5.trim().is_empty() {
            return Err(CatalogError::validation("md5"));
        }

        let layout = self.layout();
        let url = layout.get_page_url(md5)?;
        let html = self.fetch_page(&url).await?;

        let href = find_download_href(&html, &layout.download_label)
            .ok_or_else(|| CatalogError::not_found(url.as_str(), &layout.download_label))?;
        let resolved = layout.absolutize_download_href(&href);

        debug!(href = %href, resolved = %resolved, "Resolved download link");
        Ok(resolved)
    }
}
