//! Checkout Launcher
//!
//! Drives the two-phase browser flow: request a session from the proxy, then
//! launch the hosted widget with it. The only observable output is what gets
//! written to the `LauncherView`.

use crate::error::{LaunchError, Result};
use crate::event::{EventKind, LifecycleEvent};
use crate::request::{fixed_two, CheckoutRequest, CheckoutResponse};
use crate::session::{CheckoutConfig, SessionState};
use crate::widget::{CheckoutWidget, EventBinding, WidgetProvider};

pub const STATUS_REQUESTING: &str = "Requesting checkout session…";
pub const STATUS_LAUNCHED: &str = "Checkout launched.";

/// Sink for everything the launcher shows to the shopper
pub trait LauncherView: Clone + 'static {
    fn set_status(&self, message: &str);

    /// Append to the event log
    fn record(&self, event: LifecycleEvent);

    fn set_launch_enabled(&self, enabled: bool);
}

/// Log an SDK event and update the status line for its binding
pub fn dispatch_event<V: LauncherView>(view: &V, binding: EventBinding, event: LifecycleEvent) {
    let status = binding.status_for(&event.event);
    view.record(event);
    if let Some(status) = status {
        view.set_status(status);
    }
}

/// Raw form input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub amount: String,
    pub order_id: String,
    pub transaction_type: String,
}

impl CheckoutForm {
    /// Request body for this form, if the amount is a positive number
    pub fn to_request(&self) -> Option<CheckoutRequest> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)?;

        let mut request = CheckoutRequest::for_amount(fixed_two(amount)?.as_str());
        let order_id = self.order_id.trim();
        if !order_id.is_empty() {
            request = request.with_order_id(order_id);
        }
        if !self.transaction_type.is_empty() {
            request = request.with_transaction_type(self.transaction_type.clone());
        }
        Some(request)
    }
}

/// Browser-side launcher
pub struct CheckoutLauncher<P: WidgetProvider, V: LauncherView> {
    provider: P,
    view: V,
    state: SessionState,
    widget: Option<P::Widget>,
}

impl<P: WidgetProvider, V: LauncherView> CheckoutLauncher<P, V> {
    pub fn new(provider: P, view: V) -> Self {
        view.set_launch_enabled(false);
        Self {
            provider,
            view,
            state: SessionState::NoSession,
            widget: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Start a session request
    ///
    /// Returns the body to POST, or `None` (with the status updated) when the
    /// amount is invalid. An invalid amount leaves any stored session alone.
    pub fn begin_request(&mut self, form: &CheckoutForm) -> Option<CheckoutRequest> {
        let Some(request) = form.to_request() else {
            self.view.set_status(&LaunchError::InvalidAmount.to_string());
            return None;
        };

        self.view.set_status(STATUS_REQUESTING);
        self.reset();
        self.state = SessionState::SessionRequested;
        Some(request)
    }

    /// Finish a session request
    ///
    /// Unconditionally overwrites the stored session, so with overlapping
    /// requests the last response wins.
    pub fn complete_request(
        &mut self,
        outcome: std::result::Result<CheckoutResponse, LaunchError>,
    ) {
        match outcome {
            Ok(response) => {
                let config = CheckoutConfig::from(&response);
                tracing::debug!(checkout_id = %config.checkout_id, "checkout session ready");
                self.view.set_status(&format!(
                    "Checkout session ready. ID: {}",
                    config.checkout_id
                ));
                self.view.set_launch_enabled(true);
                let payload = serde_json::to_value(&response).unwrap_or_default();
                self.view
                    .record(LifecycleEvent::new(EventKind::CheckoutSession, payload));
                self.state = SessionState::SessionReady(config);
            }
            Err(err) => {
                self.view.set_status(&err.to_string());
                self.reset();
            }
        }
    }

    /// Open the hosted checkout for the stored session
    ///
    /// The widget is resolved on first use and reused afterwards; a failed
    /// resolution is retried on the next attempt.
    pub fn launch(&mut self) -> Result<()> {
        let Some(config) = self.state.config().cloned() else {
            self.view.set_status(&LaunchError::NoSession.to_string());
            return Err(LaunchError::NoSession);
        };

        match self.launch_with(&config) {
            Ok(()) => {
                self.view.set_status(STATUS_LAUNCHED);
                self.state = SessionState::Launched(config);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "checkout launch failed");
                self.view.set_status(&err.to_string());
                Err(err)
            }
        }
    }

    fn launch_with(&mut self, config: &CheckoutConfig) -> Result<()> {
        let widget = match self.widget.take() {
            Some(widget) => widget,
            None => self.provider.resolve(self.view.clone())?,
        };
        let widget = self.widget.insert(widget);
        widget.apply_config(config)?;
        widget.launch(config)
    }

    fn reset(&mut self) {
        self.state = SessionState::NoSession;
        self.view.set_launch_enabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventLog;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Screen {
        status: String,
        log: EventLog,
        launch_enabled: bool,
    }

    #[derive(Clone, Default)]
    struct RecordingView(Rc<RefCell<Screen>>);

    impl RecordingView {
        fn status(&self) -> String {
            self.0.borrow().status.clone()
        }

        fn launch_enabled(&self) -> bool {
            self.0.borrow().launch_enabled
        }

        fn events(&self) -> Vec<String> {
            self.0
                .borrow()
                .log
                .entries()
                .iter()
                .map(|e| e.event.to_string())
                .collect()
        }
    }

    impl LauncherView for RecordingView {
        fn set_status(&self, message: &str) {
            self.0.borrow_mut().status = message.to_string();
        }

        fn record(&self, event: LifecycleEvent) {
            self.0.borrow_mut().log.push(event);
        }

        fn set_launch_enabled(&self, enabled: bool) {
            self.0.borrow_mut().launch_enabled = enabled;
        }
    }

    type Calls = Rc<RefCell<Vec<String>>>;

    struct FakeWidget {
        calls: Calls,
        fail_launch: bool,
    }

    impl CheckoutWidget for FakeWidget {
        fn apply_config(&mut self, config: &CheckoutConfig) -> Result<()> {
            self.calls.borrow_mut().push(format!("configure:{}", config.checkout_id));
            Ok(())
        }

        fn launch(&mut self, _config: &CheckoutConfig) -> Result<()> {
            if self.fail_launch {
                return Err(LaunchError::Sdk("boom".into()));
            }
            self.calls.borrow_mut().push("launch".into());
            Ok(())
        }

        fn binding(&self) -> EventBinding {
            EventBinding::Listener
        }
    }

    struct FakeProvider {
        calls: Calls,
        available: bool,
        fail_launch: bool,
    }

    impl FakeProvider {
        fn new(available: bool) -> Self {
            Self {
                calls: Calls::default(),
                available,
                fail_launch: false,
            }
        }
    }

    impl WidgetProvider for FakeProvider {
        type Widget = FakeWidget;

        fn resolve<V: LauncherView>(&self, _view: V) -> Result<FakeWidget> {
            self.calls.borrow_mut().push("resolve".into());
            if !self.available {
                return Err(LaunchError::sdk_missing());
            }
            Ok(FakeWidget {
                calls: self.calls.clone(),
                fail_launch: self.fail_launch,
            })
        }
    }

    fn form(amount: &str) -> CheckoutForm {
        CheckoutForm {
            amount: amount.into(),
            ..Default::default()
        }
    }

    fn response(id: &str) -> CheckoutResponse {
        CheckoutResponse {
            checkout_id: id.into(),
            environment: "qa".into(),
            moneris: json!({"response": {"checkout_id": id}}),
        }
    }

    #[test]
    fn test_launch_without_session_is_refused() {
        let provider = FakeProvider::new(true);
        let calls = provider.calls.clone();
        let view = RecordingView::default();
        let mut launcher = CheckoutLauncher::new(provider, view.clone());

        assert_eq!(launcher.launch(), Err(LaunchError::NoSession));
        assert_eq!(view.status(), "Request a checkout session first.");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_invalid_amount_is_rejected_locally() {
        let view = RecordingView::default();
        let mut launcher = CheckoutLauncher::new(FakeProvider::new(true), view.clone());

        for amount in ["", "0", "-1", "abc"] {
            assert!(launcher.begin_request(&form(amount)).is_none());
            assert_eq!(
                view.status(),
                "Enter a valid amount before requesting a checkout session."
            );
        }
        assert_eq!(launcher.state(), &SessionState::NoSession);
    }

    #[test]
    fn test_request_body_from_form() {
        let request = CheckoutForm {
            amount: "19.9".into(),
            order_id: "ORD1".into(),
            transaction_type: String::new(),
        }
        .to_request()
        .unwrap();

        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body, json!({"amount": "19.90", "orderId": "ORD1"}));
    }

    #[test]
    fn test_form_amount_rounds_ties_up() {
        let request = form("0.125").to_request().unwrap();
        assert_eq!(request.amount, Some("0.13".into()));

        let request = form("1.005").to_request().unwrap();
        assert_eq!(request.amount, Some("1.00".into()));
    }

    #[test]
    fn test_full_flow() {
        let provider = FakeProvider::new(true);
        let calls = provider.calls.clone();
        let view = RecordingView::default();
        let mut launcher = CheckoutLauncher::new(provider, view.clone());

        assert!(launcher.begin_request(&form("19.99")).is_some());
        assert_eq!(launcher.state(), &SessionState::SessionRequested);
        assert_eq!(view.status(), STATUS_REQUESTING);
        assert!(!view.launch_enabled());

        launcher.complete_request(Ok(response("abc123")));
        assert_eq!(view.status(), "Checkout session ready. ID: abc123");
        assert!(view.launch_enabled());
        assert_eq!(view.events(), vec!["checkout_session"]);

        assert_eq!(launcher.launch(), Ok(()));
        assert_eq!(view.status(), "Checkout launched.");
        assert_eq!(
            launcher.state(),
            &SessionState::Launched(CheckoutConfig::new("abc123", "qa"))
        );
        assert_eq!(*calls.borrow(), vec!["resolve", "configure:abc123", "launch"]);

        // relaunch reuses the resolved widget
        assert_eq!(launcher.launch(), Ok(()));
        assert_eq!(calls.borrow().iter().filter(|c| *c == "resolve").count(), 1);
    }

    #[test]
    fn test_request_failure_returns_to_no_session() {
        let view = RecordingView::default();
        let mut launcher = CheckoutLauncher::new(FakeProvider::new(true), view.clone());

        launcher.begin_request(&form("5"));
        launcher.complete_request(Err(LaunchError::Request(
            "Missing required environment variables: MONERIS_STORE_ID".into(),
        )));

        assert_eq!(launcher.state(), &SessionState::NoSession);
        assert_eq!(view.status(), "Missing required environment variables: MONERIS_STORE_ID");
        assert!(!view.launch_enabled());
    }

    #[test]
    fn test_last_response_wins() {
        let view = RecordingView::default();
        let mut launcher = CheckoutLauncher::new(FakeProvider::new(true), view.clone());

        launcher.begin_request(&form("5"));
        launcher.begin_request(&form("6"));
        launcher.complete_request(Ok(response("first")));
        launcher.complete_request(Ok(response("second")));

        assert_eq!(
            launcher.state().config().map(|c| c.checkout_id.as_str()),
            Some("second")
        );
    }

    #[test]
    fn test_unavailable_sdk_is_reported_and_retried() {
        let provider = FakeProvider::new(false);
        let calls = provider.calls.clone();
        let view = RecordingView::default();
        let mut launcher = CheckoutLauncher::new(provider, view.clone());

        launcher.begin_request(&form("5"));
        launcher.complete_request(Ok(response("abc")));

        assert_eq!(launcher.launch(), Err(LaunchError::sdk_missing()));
        assert_eq!(view.status(), "Moneris Checkout SDK is not available.");
        assert!(launcher.launch().is_err());
        assert_eq!(calls.borrow().len(), 2);
        // session survives a failed launch
        assert!(launcher.state().can_launch());
    }

    #[test]
    fn test_sdk_exception_becomes_status() {
        let mut provider = FakeProvider::new(true);
        provider.fail_launch = true;
        let view = RecordingView::default();
        let mut launcher = CheckoutLauncher::new(provider, view.clone());

        launcher.begin_request(&form("5"));
        launcher.complete_request(Ok(response("abc")));

        assert!(launcher.launch().is_err());
        assert_eq!(view.status(), "boom");
    }

    #[test]
    fn test_failed_launch_keeps_configured_widget() {
        let mut provider = FakeProvider::new(true);
        provider.fail_launch = true;
        let calls = provider.calls.clone();
        let mut launcher = CheckoutLauncher::new(provider, RecordingView::default());

        launcher.begin_request(&form("5"));
        launcher.complete_request(Ok(response("abc")));

        assert!(launcher.launch().is_err());
        assert!(launcher.launch().is_err());
        assert_eq!(
            *calls.borrow(),
            vec!["resolve", "configure:abc", "configure:abc"]
        );
    }

    #[test]
    fn test_dispatch_event_updates_status_after_logging() {
        let view = RecordingView::default();
        dispatch_event(
            &view,
            EventBinding::Callback,
            LifecycleEvent::new(EventKind::Cancel, json!({})),
        );
        assert_eq!(view.status(), "Checkout cancelled by shopper.");
        assert_eq!(view.events(), vec!["cancel"]);

        dispatch_event(
            &view,
            EventBinding::Callback,
            LifecycleEvent::new(EventKind::Custom("receipt".into()), json!({})),
        );
        assert_eq!(view.status(), "Checkout cancelled by shopper.");
        assert_eq!(view.events().len(), 2);
    }
}
