//! Normal-distribution dashboard server
//!
//! Hosts the browser page and recomputes both figure payloads on every
//! slider move or cdf-panel click. All curve data comes from one
//! read-only cache built before the router is exposed.

mod api;
mod config;
mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use clap::Parser;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gauss::dist::DistributionCache;

use crate::config::Config;

/// Application state shared across handlers. The cache is fully populated
/// here and never mutated afterwards, so handlers read it without locks.
pub struct AppState {
    pub cache: DistributionCache,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gauss_server=debug,tower_http=debug".into()),
        )
        .init();

    // Parse CLI args
    let config = Config::parse();
    info!("Starting gauss-server on {}:{}", config.host, config.port);

    // Precompute every sigma entry up front
    let cache = DistributionCache::build()
        .map_err(|report| anyhow::anyhow!("failed to build distribution cache: {report:?}"))?;
    info!(
        "precomputed pdf/cdf samples over {} grid points",
        cache.grid().len()
    );

    let state = Arc::new(AppState { cache });

    // Build router
    let app = Router::new()
        .route("/", get(api::portal::index))
        .nest("/api/v1", api::figures::router())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let url = format!("http://{addr}");
    info!("Listening on {url}");

    if config.open {
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
