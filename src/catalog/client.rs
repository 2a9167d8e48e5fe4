//! Shared catalog client: one HTTP connection pool plus the site layout.

use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};
use url::Url;

use super::http_client::{HttpTimeouts, build_catalog_http_client};
use super::{CatalogError, SiteLayout};

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Client for the catalog site.
///
/// Holds no per-request state; clone it freely and share it between
/// concurrent requests. Each call fetches and owns its own document.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    layout: SiteLayout,
}

impl CatalogClient {
    /// Creates a client for `layout` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when HTTP client construction fails.
    pub fn new(layout: SiteLayout) -> Result<Self, CatalogError> {
        Self::with_timeouts(layout, HttpTimeouts::default())
    }

    /// Creates a client for `layout` with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when HTTP client construction fails.
    pub fn with_timeouts(layout: SiteLayout, timeouts: HttpTimeouts) -> Result<Self, CatalogError> {
        Ok(Self {
            client: build_catalog_http_client(timeouts)?,
            layout,
        })
    }

    /// The site layout this client targets.
    #[must_use]
    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Fetches `url` and returns its body as text.
    ///
    /// Fails fast: transport errors, timeouts and non-2xx statuses become
    /// [`CatalogError::Fetch`], a body that cannot be read or decoded becomes
    /// [`CatalogError::Parse`]. The response is dropped on every path.
    pub(super) async fn fetch_page(&self, url: &Url) -> Result<String, CatalogError> {
        debug!(url = %url, "Fetching catalog page");

        let response = self
            .client
            .get(url.as_str())
            .header(ACCEPT, HTML_ACCEPT)
            .send()
            .await
            .map_err(|error| {
                warn!(url = %url, error = %error, "Catalog request failed");
                CatalogError::network(url.as_str(), error)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Catalog returned error status");
            return Err(CatalogError::http_status(url.as_str(), status.as_u16()));
        }

        response.text().await.map_err(|error| {
            if error.is_timeout() {
                CatalogError::network(url.as_str(), error)
            } else {
                CatalogError::parse(url.as_str(), format!("unreadable body: {error}"))
            }
        })
    }
}
