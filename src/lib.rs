//! Bookfinder Core Library
//!
//! Searches a third-party book catalog by title, author or ISBN and resolves
//! a content hash to a direct download URL.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`catalog`] - Upstream query construction, results-page extraction,
//!   ISBN extraction and download-link resolution
//! - [`server`] - Thin axum HTTP layer exposing search and download

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod server;
mod user_agent;

// Re-export commonly used types
pub use catalog::{
    Book, CatalogClient, CatalogError, ErrorKind, HttpTimeouts, SearchType, SiteLayout,
    extract_identifiers,
};
pub use server::{AppState, router, serve};
