//! UI Components

use leptos::prelude::*;
use moneris_core::{EventLog, TokenizerLog};

/// Status line under the form
#[component]
pub fn StatusLine(status: RwSignal<String>) -> impl IntoView {
    view! {
        <p id="moneris-status" class="status" role="status">
            {move || status.get()}
        </p>
    }
}

/// Event log, newest entry first
#[component]
pub fn EventLogView(events: RwSignal<EventLog>) -> impl IntoView {
    view! {
        <pre id="moneris-events" class="event-log">
            {move || events.with(EventLog::render)}
        </pre>
    }
}

#[component]
pub fn TokenizerOutputView(log: RwSignal<TokenizerLog>) -> impl IntoView {
    view! {
        <pre id="tokenization-output" class="event-log">
            {move || log.with(TokenizerLog::render)}
        </pre>
    }
}
