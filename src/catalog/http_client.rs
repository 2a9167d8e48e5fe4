//! HTTP client construction policy for catalog requests.
//!
//! One place for the timeout, user-agent and compression defaults shared by
//! search and get-page fetches.

use std::time::Duration;

use reqwest::Client;
use tracing::warn;

use crate::user_agent;

use super::CatalogError;

/// Default connect timeout for catalog requests.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default overall request timeout for catalog requests.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timeouts applied to every catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Builds the catalog HTTP client.
///
/// # Errors
///
/// Returns [`CatalogError::ClientBuild`] when the TLS backend or resolver
/// cannot be initialized.
pub fn build_catalog_http_client(timeouts: HttpTimeouts) -> Result<Client, CatalogError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(timeouts.connect_timeout_secs))
        .timeout(Duration::from_secs(timeouts.request_timeout_secs))
        .user_agent(user_agent::default_catalog_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| {
            warn!(error = %error, "Catalog HTTP client construction failed");
            CatalogError::client_build(format!("HTTP client construction failed: {error}"))
        })
}
