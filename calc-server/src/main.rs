//! Calc API Server - JSON demo API with a four-operation calculator

use anyhow::Result;
use calc_server::{config, routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calc_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Environment-derived listen config and endpoint metadata
    let config = config::ServerConfig::from_env();
    let state = state::AppState::from_env();

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
