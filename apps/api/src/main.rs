mod client;
mod config;
mod editor;
mod enhance;
mod errors;
mod ids;
mod models;
mod routes;
mod save;
mod state;

use anyhow::Result;
use axum::http::Method;
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

/// Filter used when `RUST_LOG` is not a full directive: the crate's own
/// target plus `tower_http`, so `TraceLayer` request spans are kept.
fn default_directives(level: &str) -> String {
    format!("{}={level},tower_http={level}", env!("CARGO_CRATE_NAME"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(default_directives(&config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Editor API v{}", env!("CARGO_PKG_VERSION"));

    match config.enhancer_seed {
        Some(seed) => info!("Template enhancer seeded with {seed}"),
        None => info!("Template enhancer seeded from OS entropy"),
    }
    info!("Resume store: in-memory (not persisted across restarts)");

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    // Build app state
    let state = AppState::from_config(&config);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
