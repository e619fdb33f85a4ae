//! Moneris Checkout Client
//!
//! Issues the preload request that creates a checkout session.

use moneris_core::{CheckoutRequest, CheckoutResponse};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::payload::build_payload;
use crate::response::{error_message, extract_checkout_id, parse_body};

/// Moneris client wrapper
pub struct MonerisClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl MonerisClient {
    /// Create a new client
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Create a checkout session
    ///
    /// Validates the request, sends one preload POST and resolves the
    /// checkout id from the response. Nothing is retried.
    pub async fn create_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse> {
        let payload = build_payload(request, &self.config)?;
        let environment = payload.request.environment.clone();

        tracing::info!(
            checkout_id = %payload.request.checkout_id,
            order_no = %payload.request.order_no,
            environment = %environment,
            "Requesting Moneris checkout session"
        );

        let response = self
            .http
            .post(&self.config.gateway_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body = parse_body(&text);

        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string);
            let message = error_message(&body, &status_text);
            tracing::warn!(status = status.as_u16(), message = %message, "Moneris rejected checkout request");
            return Err(GatewayError::Gateway {
                status: status.as_u16(),
                message,
                details: body,
            });
        }

        let Some(checkout_id) = extract_checkout_id(&body) else {
            tracing::warn!(body = %body, "Moneris response carried no checkout id");
            return Err(GatewayError::MissingIdentifier { details: body });
        };

        tracing::info!(checkout_id = %checkout_id, "Moneris checkout session created");

        Ok(CheckoutResponse {
            checkout_id,
            environment,
            moneris: body,
        })
    }
}
