//! CLI argument definitions using clap derive macros.

use clap::Parser;

use bookfinder_core::catalog::{CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS};

/// Search a book catalog and resolve direct download links over HTTP.
///
/// Serves `/search` (JSON book list) and `/download` (redirect to the file).
#[derive(Parser, Debug)]
#[command(name = "bookfinder")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Catalog origin used for search, get pages and relative download links
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Connect timeout for catalog requests in seconds (1-300)
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub connect_timeout: u64,

    /// Overall timeout for catalog requests in seconds (1-600)
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub request_timeout: u64,
}
