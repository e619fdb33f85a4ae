//! Session State
//!
//! The checkout session as the browser sees it, plus the states the launcher
//! moves through while obtaining and using one.

use serde::{Deserialize, Serialize};

use crate::request::CheckoutResponse;

/// Environment used when the proxy does not report one
pub const DEFAULT_ENVIRONMENT: &str = "qa";

/// Configuration handed to the checkout widget
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    pub checkout_id: String,
    pub environment: String,
}

impl CheckoutConfig {
    pub fn new(checkout_id: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            checkout_id: checkout_id.into(),
            environment: environment.into(),
        }
    }
}

impl From<&CheckoutResponse> for CheckoutConfig {
    fn from(response: &CheckoutResponse) -> Self {
        let environment = if response.environment.is_empty() {
            DEFAULT_ENVIRONMENT.to_string()
        } else {
            response.environment.clone()
        };
        Self::new(response.checkout_id.clone(), environment)
    }
}

/// Browser-side session lifecycle
///
/// `NoSession → SessionRequested → SessionReady → Launched`, falling back to
/// `NoSession` whenever a request fails. Nothing survives a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    NoSession,
    SessionRequested,
    SessionReady(CheckoutConfig),
    Launched(CheckoutConfig),
}

impl SessionState {
    /// Stored session, if launching is currently allowed
    pub fn config(&self) -> Option<&CheckoutConfig> {
        match self {
            SessionState::SessionReady(config) | SessionState::Launched(config) => Some(config),
            SessionState::NoSession | SessionState::SessionRequested => None,
        }
    }

    pub fn can_launch(&self) -> bool {
        self.config().is_some()
    }
}
