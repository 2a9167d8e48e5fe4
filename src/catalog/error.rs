//! Error types for catalog operations.
//!
//! Follows the What/Why/Fix message pattern used across the project.
//! Row-level anomalies never show up here: a malformed row is skipped by
//! the row parser, only whole-call failures become a [`CatalogError`].

use thiserror::Error;

/// Coarse classification of a [`CatalogError`], used by the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input missing or empty; no upstream call was made.
    Validation,
    /// Upstream unreachable or returned a non-success status.
    Fetch,
    /// Upstream body could not be read as a markup document.
    Parse,
    /// Expected element missing from an otherwise valid document.
    NotFound,
}

/// Errors that can occur while searching the catalog or resolving downloads.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required parameter was missing or empty.
    #[error("missing required parameter '{field}'\n  Suggestion: Provide a non-empty '{field}' value")]
    Validation {
        /// Name of the missing parameter.
        field: String,
    },

    /// Transport failure or non-2xx upstream response.
    #[error("{}", fetch_message(url, *status, source.as_ref()))]
    Fetch {
        /// URL that was requested.
        url: String,
        /// HTTP status when the upstream answered with a non-success code.
        status: Option<u16>,
        /// Underlying transport error, when there was one.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Response body could not be read as a markup document.
    #[error("could not parse response from {url}: {reason}\n  Suggestion: The catalog may have changed its page format")]
    Parse {
        /// URL whose body failed to parse.
        url: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("could not initialize catalog HTTP client: {reason}")]
    ClientBuild {
        /// Why construction failed.
        reason: String,
    },

    /// The document parsed but the expected element was not there.
    #[error("no link labeled '{label}' found on {url}\n  Suggestion: The item may have been removed from the catalog")]
    NotFound {
        /// URL of the scanned document.
        url: String,
        /// Link label that was searched for.
        label: String,
    },
}

fn fetch_message(url: &str, status: Option<u16>, source: Option<&reqwest::Error>) -> String {
    match (status, source) {
        (Some(status), _) => format!(
            "catalog returned HTTP {status} for {url}\n  Suggestion: Check that the catalog site is reachable"
        ),
        (None, Some(source)) => format!(
            "network error requesting {url}: {source}\n  Suggestion: Check your connection or the configured base URL"
        ),
        (None, None) => format!("request to {url} failed"),
    }
}

impl CatalogError {
    /// Creates a `Validation` error for a missing parameter.
    #[must_use]
    pub fn validation(field: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
        }
    }

    /// Creates a `Fetch` error from a transport failure.
    #[must_use]
    pub fn network(url: &str, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.to_string(),
            status: None,
            source: Some(source),
        }
    }

    /// Creates a `Fetch` error from a non-success HTTP status.
    #[must_use]
    pub fn http_status(url: &str, status: u16) -> Self {
        Self::Fetch {
            url: url.to_string(),
            status: Some(status),
            source: None,
        }
    }

    /// Creates a `Parse` error.
    #[must_use]
    pub fn parse(url: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a `ClientBuild` error.
    #[must_use]
    pub fn client_build(reason: impl Into<String>) -> Self {
        Self::ClientBuild {
            reason: reason.into(),
        }
    }

    /// Creates a `NotFound` error for a missing labeled link.
    #[must_use]
    pub fn not_found(url: &str, label: &str) -> Self {
        Self::NotFound {
            url: url.to_string(),
            label: label.to_string(),
        }
    }

    /// Returns the coarse error class.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Fetch { .. } | Self::ClientBuild { .. } => ErrorKind::Fetch,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}
