//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use moneris_core::{CheckoutRequest, CheckoutResponse, ErrorResponse};
use moneris_gateway::GatewayError;

use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Create a Moneris checkout session
pub async fn create_checkout(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let Json(payload) = payload.map_err(rejection_response)?;
    let session = state
        .gateway
        .create_checkout(&payload)
        .await
        .map_err(error_response)?;

    Ok(Json(session))
}

/// Unreadable bodies get the same `{message}` shape as gateway errors
fn rejection_response(rejection: JsonRejection) -> ApiError {
    tracing::warn!(status = 400, "Checkout body rejected: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: rejection.body_text(),
            details: None,
        }),
    )
}

fn error_response(err: GatewayError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), "Checkout error: {}", err);
    } else {
        tracing::warn!(status = status.as_u16(), "Checkout rejected: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            message: err.to_string(),
            details: err.details().cloned(),
        }),
    )
}
