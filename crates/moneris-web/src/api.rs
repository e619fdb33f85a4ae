//! API Client

use moneris_core::{CheckoutRequest, CheckoutResponse, LaunchError};

pub const CHECKOUT_PATH: &str = "/api/moneris/checkout";

const FALLBACK_MESSAGE: &str = "Failed to request checkout session.";

/// Absolute URL for a path on the page's own origin
fn endpoint(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{path}")
}

/// Request a checkout session from the server
pub async fn request_checkout(request: &CheckoutRequest) -> Result<CheckoutResponse, LaunchError> {
    let client = reqwest::Client::new();

    let response = client
        .post(endpoint(CHECKOUT_PATH))
        .json(request)
        .send()
        .await
        .map_err(|e| LaunchError::Request(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<CheckoutResponse>()
            .await
            .map_err(|e| LaunchError::Request(e.to_string()));
    }

    let status_text = status.canonical_reason().unwrap_or_default();
    let body = response.json::<serde_json::Value>().await.ok();
    Err(LaunchError::Request(failure_message(body.as_ref(), status_text)))
}

/// `message` from a JSON error body, else the status text when the body
/// is not JSON
fn failure_message(body: Option<&serde_json::Value>, status_text: &str) -> String {
    let message = match body {
        Some(body) => body.get("message").and_then(|m| m.as_str()).unwrap_or_default(),
        None => status_text,
    };
    if message.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}
