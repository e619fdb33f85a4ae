//! Lifecycle Events
//!
//! Events emitted by the checkout widget (and the launcher itself) are kept
//! in an append-ordered log for display. Nothing is deduplicated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event name
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    /// Recorded by the launcher once the proxy returns a session
    CheckoutSession,
    PaymentComplete,
    Cancel,
    Error,
    /// Any other name reported through a generic SDK callback
    Custom(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "checkout_session" => EventKind::CheckoutSession,
            "payment_complete" => EventKind::PaymentComplete,
            "cancel" => EventKind::Cancel,
            "error" => EventKind::Error,
            other => EventKind::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EventKind::CheckoutSession => "checkout_session",
            EventKind::PaymentComplete => "payment_complete",
            EventKind::Cancel => "cancel",
            EventKind::Error => "error",
            EventKind::Custom(name) => name,
        }
    }
}

impl From<String> for EventKind {
    fn from(name: String) -> Self {
        EventKind::from_name(&name)
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.name().to_string()
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single logged event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub event: EventKind,
    pub timestamp: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl LifecycleEvent {
    /// Create an event stamped with the current time
    pub fn new(event: EventKind, payload: serde_json::Value) -> Self {
        Self::at(event, payload, Utc::now())
    }

    pub fn at(event: EventKind, payload: serde_json::Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            event,
            timestamp,
            payload,
        }
    }

    /// Pretty JSON rendering used by the event log view
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.event.to_string())
    }
}

/// In-memory event log
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    entries: Vec<LifecycleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: LifecycleEvent) {
        self.entries.push(event);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were recorded
    pub fn entries(&self) -> &[LifecycleEvent] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&LifecycleEvent> {
        self.entries.last()
    }

    /// Display text, newest entry first
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .rev()
            .map(LifecycleEvent::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
