//! Preload Payload
//!
//! Translation from the browser's checkout request to the body Moneris
//! expects at its preload endpoint.

use chrono::Utc;
use moneris_core::request::non_empty;
use moneris_core::CheckoutRequest;
use serde::Serialize;
use uuid::Uuid;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};

const DEFAULT_TRANSACTION_TYPE: &str = "purchase";

/// `{"request": {...}}` envelope
#[derive(Clone, Serialize)]
pub struct CheckoutPayload {
    pub request: PreloadRequest,
}

/// Preload request fields
///
/// Optional fields that were not supplied are left out of the JSON entirely.
#[derive(Clone, Serialize)]
pub struct PreloadRequest {
    pub store_id: String,
    pub api_token: String,
    pub checkout_id: String,

    /// Amount with exactly two decimals
    pub txn_total: String,

    pub transaction_type: String,
    pub order_no: String,
    pub environment: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_callback_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_descriptor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<serde_json::Value>,
}

/// Generate a session id: `demo-<unix millis>-<8 hex chars>`
pub fn generate_checkout_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("demo-{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

/// Build the preload payload
///
/// The amount is checked before the credentials, so an invalid amount is
/// reported even on an unconfigured server.
pub fn build_payload(request: &CheckoutRequest, config: &GatewayConfig) -> Result<CheckoutPayload> {
    let txn_total = validate_amount(request)?;
    let credentials = config.credentials()?;

    let checkout_id = non_empty(request.checkout_id.as_ref())
        .map_or_else(generate_checkout_id, str::to_string);
    let transaction_type = non_empty(request.transaction_type.as_ref())
        .unwrap_or(DEFAULT_TRANSACTION_TYPE)
        .to_lowercase();
    let order_no =
        non_empty(request.order_id.as_ref()).map_or_else(|| checkout_id.clone(), str::to_string);
    let dynamic_descriptor = non_empty(request.dynamic_descriptor.as_ref())
        .map(str::to_string)
        .or_else(|| config.descriptor.clone());
    let owned = |value: Option<&String>| non_empty(value).map(str::to_string);

    Ok(CheckoutPayload {
        request: PreloadRequest {
            store_id: credentials.store_id.to_string(),
            api_token: credentials.api_token.to_string(),
            checkout_id,
            txn_total,
            transaction_type,
            order_no,
            environment: config.environment_tag(),
            redirect_url: owned(request.redirect_url.as_ref()),
            status_callback_url: owned(request.status_callback_url.as_ref()),
            dynamic_descriptor,
            customer_id: owned(request.customer_id.as_ref()),
            email: owned(request.email.as_ref()),
            billing: request.billing.clone(),
            shipping: request.shipping.clone(),
        },
    })
}

fn validate_amount(request: &CheckoutRequest) -> Result<String> {
    let amount = match &request.amount {
        Some(amount) if !amount.is_blank() => amount,
        _ => return Err(GatewayError::Validation("Amount is required.".into())),
    };
    amount
        .formatted()
        .ok_or_else(|| GatewayError::Validation("Amount must be a positive number.".into()))
}
