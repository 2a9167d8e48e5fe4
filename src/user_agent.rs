//! Shared User-Agent string for catalog HTTP traffic.
//!
//! Single source for project URL and UA format so search and get-page
//! requests identify the same way.

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/nicksrandall/bookfinder";

/// Default User-Agent for catalog requests.
#[must_use]
pub(crate) fn default_catalog_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("bookfinder/{version} (catalog-search-tool; +{PROJECT_UA_URL})")
}
