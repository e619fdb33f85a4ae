//! Gateway Configuration
//!
//! Read once at startup from the process environment. Credentials are only
//! checked when a checkout is requested, so a misconfigured server still
//! starts and answers every request with the list of what is missing.

use moneris_core::DEFAULT_ENVIRONMENT;

use crate::error::{GatewayError, Result};

/// Moneris preload endpoint (production)
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.moneris.com/chkt/request/request.php";

const STORE_ID_VAR: &str = "MONERIS_STORE_ID";
const API_TOKEN_VAR: &str = "MONERIS_API_TOKEN";

/// Moneris gateway settings
#[derive(Clone)]
pub struct GatewayConfig {
    /// `MONERIS_STORE_ID` (required per request)
    pub store_id: Option<String>,

    /// `MONERIS_API_TOKEN` (required per request)
    pub api_token: Option<String>,

    /// `MONERIS_URL`
    pub gateway_url: String,

    /// `MONERIS_ENV`, e.g. `qa` or `prod`
    pub environment: String,

    /// `MONERIS_DESCRIPTOR`, used when a request has no descriptor
    pub descriptor: Option<String>,
}

/// Borrowed, validated credentials
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub store_id: &'a str,
    pub api_token: &'a str,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            store_id: None,
            api_token: None,
            gateway_url: DEFAULT_GATEWAY_URL.into(),
            environment: DEFAULT_ENVIRONMENT.into(),
            descriptor: None,
        }
    }
}

impl GatewayConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            store_id: get(STORE_ID_VAR),
            api_token: get(API_TOKEN_VAR),
            gateway_url: get("MONERIS_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.into()),
            environment: get("MONERIS_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.into()),
            descriptor: get("MONERIS_DESCRIPTOR"),
        }
    }

    /// Config pointing at `gateway_url` with both credentials set
    pub fn with_credentials(
        gateway_url: impl Into<String>,
        store_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            store_id: Some(store_id.into()),
            api_token: Some(api_token.into()),
            gateway_url: gateway_url.into(),
            ..Default::default()
        }
    }

    /// Both credentials, or a configuration error naming every missing one
    pub fn credentials(&self) -> Result<Credentials<'_>> {
        match (self.store_id.as_deref(), self.api_token.as_deref()) {
            (Some(store_id), Some(api_token)) => Ok(Credentials {
                store_id,
                api_token,
            }),
            (store_id, api_token) => {
                let mut missing = Vec::new();
                if store_id.is_none() {
                    missing.push(STORE_ID_VAR);
                }
                if api_token.is_none() {
                    missing.push(API_TOKEN_VAR);
                }
                Err(GatewayError::Configuration { missing })
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    /// Environment tag as sent to Moneris
    pub fn environment_tag(&self) -> String {
        self.environment.to_lowercase()
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("store_id", &self.store_id)
            .field("api_token", &self.api_token.as_ref().map(|_| "***"))
            .field("gateway_url", &self.gateway_url)
            .field("environment", &self.environment)
            .field("descriptor", &self.descriptor)
            .finish()
    }
}
