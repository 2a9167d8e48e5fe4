use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::AppState;
use crate::catalog::{ErrorKind, SearchType};

/// Plain-text body served at `/`.
pub const BANNER: &str =
    "Server is up and running! Use /search or /download endpoints for more options.\n";

const QUERY_MISSING: &str = "Query parameter is missing";
const MD5_MISSING: &str = "MD5 parameter is missing";
const SEARCH_FAILED: &str = "Failed to fetch search results";
const DOWNLOAD_PAGE_FAILED: &str = "Failed to fetch download page";
const DOWNLOAD_LINK_MISSING: &str = "Download link not found";

/// Query string of `/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    #[serde(rename = "type")]
    pub search_type: Option<String>,
}

/// Query string of `/download`.
#[derive(Debug, Default, Deserialize)]
pub struct DownloadParams {
    pub md5: Option<String>,
}

pub(super) async fn handle_root() -> &'static str {
    BANNER
}

#[instrument(skip(state))]
pub(super) async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(query) = non_empty(params.query.as_deref()) else {
        return (StatusCode::BAD_REQUEST, QUERY_MISSING).into_response();
    };
    let search_type = params
        .search_type
        .as_deref()
        .map_or(SearchType::ByTitle, SearchType::from_param);

    match state.catalog.search(query, search_type).await {
        Ok(books) => {
            info!(count = books.len(), "Search completed");
            Json(books).into_response()
        }
        Err(error) => {
            warn!(error = %error, "Search failed");
            (StatusCode::INTERNAL_SERVER_ERROR, SEARCH_FAILED).into_response()
        }
    }
}

#[instrument(skip(state))]
pub(super) async fn handle_download(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Response {
    let Some(md5) = non_empty(params.md5.as_deref()) else {
        return (StatusCode::BAD_REQUEST, MD5_MISSING).into_response();
    };

    match state.catalog.resolve_download(md5).await {
        Ok(url) => {
            info!(url = %url, "Redirecting to download");
            (StatusCode::FOUND, [(LOCATION, url)]).into_response()
        }
        Err(error) => {
            warn!(error = %error, "Download resolution failed");
            let message = if error.kind() == ErrorKind::NotFound {
                DOWNLOAD_LINK_MISSING
            } else {
                DOWNLOAD_PAGE_FAILED
            };
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
