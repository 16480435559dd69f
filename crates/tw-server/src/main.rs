//! tw-server: Main binary for the timeline summary service.
//!
//! This binary wires together all crates and starts the HTTP server.
//!
//! # Environment Variables
//!
//! - `CMT_BEARER_TOKEN`: upstream API bearer token (required)
//! - `PORT`: listen port (default: 8080)
//! - `HOST`: listen address (default: 0.0.0.0)
//! - `DIST_DIR`: built frontend directory (default: ./dist)
//! - `MAX_PAGES`: optional cap on pages fetched per request
//! - `RUST_LOG`: tracing filter

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tw_aggregator::{Aggregator, AggregatorConfig};
use tw_api::{create_router, AppState};
use tw_ingestion::{ClientConfig, TwitterSource};

/// Default port for the server.
const DEFAULT_PORT: u16 = 8080;

/// Default host for the server.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default location of the built frontend.
const DEFAULT_DIST_DIR: &str = "./dist";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tw_server=info,tw_api=info,tw_aggregator=info,tw_ingestion=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let dist_dir = PathBuf::from(
        std::env::var("DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST_DIR.to_string()),
    );
    let aggregator_config = AggregatorConfig::from_env();
    let client_config = ClientConfig::from_env().context("invalid upstream configuration")?;

    tracing::info!(
        "Starting tw-server on {}:{} (upstream: {:?}, max_pages: {:?})",
        host,
        port,
        client_config,
        aggregator_config.max_pages
    );

    // Create the upstream source and aggregator
    let source = TwitterSource::new(client_config).context("failed to build upstream client")?;
    let aggregator = Aggregator::new(source, aggregator_config);

    // Create app state
    let state = Arc::new(AppState::new(aggregator));

    // Create router
    if !dist_dir.join("index.html").is_file() {
        tracing::warn!("No index.html in {}; landing page will 404", dist_dir.display());
    }
    let app = create_router(state, &dist_dir);

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET /            - Landing page");
    tracing::info!("  GET /health      - Health check");
    tracing::info!("  GET /api/tweets  - Timeline summary");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
