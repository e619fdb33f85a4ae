//! Server Configuration

/// Port used when neither `BIND_ADDR` nor `PORT` is set
pub const DEFAULT_PORT: &str = "5174";

/// Listener and asset settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `BIND_ADDR`, else `0.0.0.0:$PORT`
    pub bind_addr: String,

    /// `STATIC_DIR`, the browser bundle served as fallback
    pub static_dir: String,
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| {
            let port = get("PORT").unwrap_or_else(|| DEFAULT_PORT.into());
            format!("0.0.0.0:{port}")
        });

        Self {
            bind_addr,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".into()),
        }
    }
}
