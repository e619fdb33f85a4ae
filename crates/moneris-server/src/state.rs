//! Application State

use std::sync::Arc;

use moneris_gateway::MonerisClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Moneris preload client, built once at startup
    pub gateway: Arc<MonerisClient>,
}

impl AppState {
    pub fn new(gateway: MonerisClient) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
