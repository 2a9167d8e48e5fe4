//! HTTP server entry point for the bookfinder tool.

use anyhow::{Context, Result};
use bookfinder_core::{AppState, CatalogClient, HttpTimeouts, SiteLayout, serve};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let layout = SiteLayout::with_base_url(&args.base_url);
    let timeouts = HttpTimeouts {
        connect_timeout_secs: args.connect_timeout,
        request_timeout_secs: args.request_timeout,
    };
    let catalog = CatalogClient::with_timeouts(layout, timeouts)?;

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(base_url = %args.base_url, "Bookfinder starting on {bind_addr}");
    serve(listener, AppState::new(catalog)).await?;

    Ok(())
}
