//! HTTP surface for the catalog: root banner, search, and download redirect.
//!
//! Handlers validate required parameters before touching the catalog and
//! collapse every catalog failure into one generic error response per call.
//!
//! # Routes
//!
//! - `GET /` - plain-text banner
//! - `GET /search?query=..&type=title|author|isbn` - JSON list of books
//! - `GET /download?md5=..` - `302 Found` to the resolved download URL

mod handlers;

pub use handlers::{BANNER, DownloadParams, SearchParams};

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::catalog::CatalogClient;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    /// Wraps a catalog client for sharing across requests.
    #[must_use]
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/search", get(handlers::handle_search))
        .route("/download", get(handlers::handle_download))
        .with_state(state)
}

/// Serves the application on an already-bound listener until the process stops.
///
/// # Errors
///
/// Returns an I/O error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "HTTP server listening");
    }
    axum::serve(listener, router(state)).await
}
