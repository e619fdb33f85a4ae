//! # moneris-gateway
//!
//! Server-side half of the Moneris Checkout demo: turns a browser checkout
//! request into a Moneris preload request and normalizes whatever comes back.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │   Browser   │────▶│  MonerisClient   │────▶│  Moneris Gateway │
//! │ (amount...) │     │ validate + build │     │  request.php     │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//!        ▲                     │
//!        └──── checkoutId ─────┘
//! ```
//!
//! A single POST is made per request. Failures are surfaced as they are; the
//! shopper resubmits if they want to try again.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moneris_core::CheckoutRequest;
//! use moneris_gateway::MonerisClient;
//!
//! let client = MonerisClient::from_env();
//! let session = client
//!     .create_checkout(&CheckoutRequest::for_amount("19.99").with_order_id("ORD1"))
//!     .await?;
//!
//! // Hand session.checkout_id to the checkout widget
//! ```

mod client;
mod config;
mod error;
mod payload;
mod response;

pub use client::MonerisClient;
pub use config::{Credentials, GatewayConfig, DEFAULT_GATEWAY_URL};
pub use error::{GatewayError, Result};
pub use payload::{build_payload, generate_checkout_id, CheckoutPayload, PreloadRequest};
pub use response::{error_message, extract_checkout_id, parse_body};
