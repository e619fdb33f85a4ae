//! Error Types
//!
//! Every message here is shown to the shopper verbatim as status text.

use thiserror::Error;

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Launcher error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// Launch attempted before a checkout session was stored
    #[error("Request a checkout session first.")]
    NoSession,

    /// Form amount missing, non-numeric or not positive
    #[error("Enter a valid amount before requesting a checkout session.")]
    InvalidAmount,

    /// Session request to the proxy failed
    #[error("{0}")]
    Request(String),

    /// No usable SDK entry point on the page
    #[error("{0}")]
    SdkUnavailable(String),

    /// The SDK threw while being configured or launched
    #[error("{0}")]
    Sdk(String),
}

impl LaunchError {
    /// No SDK global, or it could be neither constructed nor configured
    pub fn sdk_missing() -> Self {
        Self::SdkUnavailable("Moneris Checkout SDK is not available.".into())
    }

    /// The resolved instance exposes none of the known launch methods
    pub fn no_launch_method() -> Self {
        Self::SdkUnavailable("Unable to locate a launch method for the Moneris checkout SDK.".into())
    }
}

/// Hosted tokenization error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizationError {
    /// Container still carries the placeholder profile id
    #[error("Update the data-moneris-tokenization-id attribute with your profile ID.")]
    MissingProfile,

    /// None of the known globals hold the library
    #[error("Hosted tokenization library not loaded.")]
    LibraryUnavailable,

    /// Library has no `start`, `show` or `open`
    #[error("Unable to locate a start method for hosted tokenization.")]
    NoStartMethod,

    /// The library threw
    #[error("{0}")]
    Library(String),
}
