//! # moneris-core
//!
//! Shared checkout types and the browser-side launcher logic for the
//! Moneris Checkout demo.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     CheckoutLauncher                          │
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │ SessionState │  │ LauncherView │  │  WidgetProvider     │  │
//! │  │   machine    │──│ status + log │──│  (capability probe) │  │
//! │  └──────────────┘  └──────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The checkout SDK is loaded by the host page and its shape varies between
//! versions. `widget` turns those shapes into explicit probes that are
//! evaluated once, when an adapter is built, so the launcher itself only ever
//! talks to a `CheckoutWidget`.

pub mod error;
pub mod event;
pub mod launcher;
pub mod request;
pub mod session;
pub mod tokenization;
pub mod widget;

pub use error::{LaunchError, Result, TokenizationError};
pub use event::{EventKind, EventLog, LifecycleEvent};
pub use launcher::{CheckoutForm, CheckoutLauncher, LauncherView};
pub use request::{Amount, CheckoutRequest, CheckoutResponse, ErrorResponse};
pub use session::{CheckoutConfig, SessionState, DEFAULT_ENVIRONMENT};
pub use tokenization::{
    HostedLibrary, StartedLibraries, TokenizerEntry, TokenizerLog, TokenizerSink,
};
pub use widget::{
    CheckoutWidget, EventBinding, LaunchMethod, MethodProbe, SdkObject, WidgetProvider, WidgetShape,
};
