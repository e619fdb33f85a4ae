//! Gateway Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Checkout session request errors
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Required credentials are not configured
    #[error("Missing required environment variables: {}", .missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    /// Bad or missing amount
    #[error("{0}")]
    Validation(String),

    /// Moneris answered with a non-success status
    #[error("{message}")]
    Gateway {
        status: u16,
        message: String,
        details: serde_json::Value,
    },

    /// Moneris answered 2xx but no checkout id could be found
    #[error("Checkout ID was not returned by Moneris.")]
    MissingIdentifier { details: serde_json::Value },

    /// The request never got an answer
    #[error("Moneris request failed: {0}")]
    Transport(String),
}

impl GatewayError {
    /// HTTP status to report to the browser
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Validation(_) => 400,
            GatewayError::Gateway { status, .. } => *status,
            GatewayError::Transport(_) => 502,
            GatewayError::Configuration { .. } | GatewayError::MissingIdentifier { .. } => 500,
        }
    }

    /// Raw gateway body, when there is one
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            GatewayError::Gateway { details, .. } | GatewayError::MissingIdentifier { details } => {
                Some(details)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}
