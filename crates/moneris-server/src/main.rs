//! Moneris Checkout Demo Server
//!
//! Axum server that proxies checkout session creation to the Moneris
//! gateway and serves the browser bundle.

mod config;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneris_gateway::MonerisClient;

use crate::config::ServerConfig;
use crate::routes::create_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let gateway = MonerisClient::from_env();

    match gateway.config().credentials() {
        Ok(_) => tracing::info!(
            environment = %gateway.config().environment_tag(),
            "✓ Moneris configured"
        ),
        Err(e) => {
            tracing::warn!("⚠ {} - checkout requests will fail", e);
            tracing::warn!("  Set MONERIS_STORE_ID and MONERIS_API_TOKEN in .env");
        }
    }

    let app = create_router(AppState::new(gateway), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Moneris checkout demo running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  POST /api/moneris/checkout  - Create checkout session");
    tracing::info!("  GET  /*                     - Static files from {}", config.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}
