//! Signal-backed Views
//!
//! The launcher and tokenizer write into these; components only read.

use leptos::prelude::*;
use moneris_core::{EventLog, LauncherView, LifecycleEvent, TokenizerEntry, TokenizerLog, TokenizerSink};

#[derive(Clone, Copy)]
pub struct CheckoutView {
    pub status: RwSignal<String>,
    pub events: RwSignal<EventLog>,
    pub launch_enabled: RwSignal<bool>,
}

impl CheckoutView {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(String::new()),
            events: RwSignal::new(EventLog::new()),
            launch_enabled: RwSignal::new(false),
        }
    }
}

impl Default for CheckoutView {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherView for CheckoutView {
    fn set_status(&self, message: &str) {
        self.status.set(message.to_string());
    }

    fn record(&self, event: LifecycleEvent) {
        self.events.update(|log| log.push(event));
    }

    fn set_launch_enabled(&self, enabled: bool) {
        self.launch_enabled.set(enabled);
    }
}

#[derive(Clone, Copy)]
pub struct TokenizerOutput {
    pub log: RwSignal<TokenizerLog>,
}

impl TokenizerOutput {
    pub fn new() -> Self {
        Self {
            log: RwSignal::new(TokenizerLog::default()),
        }
    }
}

impl Default for TokenizerOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerSink for TokenizerOutput {
    fn write(&self, entry: TokenizerEntry) {
        self.log.update(|log| log.push(entry));
    }
}
