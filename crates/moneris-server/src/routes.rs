//! Router configuration
//!
//! - `GET  /health`                - Health check
//! - `POST /api/moneris/checkout`  - Create a checkout session
//! - everything else               - Static browser bundle

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{create_checkout, health_check};
use crate::state::AppState;

pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/moneris/checkout", post(create_checkout))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
