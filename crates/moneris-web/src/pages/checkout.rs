//! Checkout Page

use leptos::prelude::*;
use moneris_core::{CheckoutForm, CheckoutLauncher};

use crate::api;
use crate::components::{EventLogView, StatusLine};
use crate::sdk::JsWidgetProvider;
use crate::view::CheckoutView;

type Launcher = CheckoutLauncher<JsWidgetProvider, CheckoutView>;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let view = CheckoutView::new();
    let launcher = StoredValue::new_local(Launcher::new(JsWidgetProvider, view));

    let (amount, set_amount) = signal(String::from("10.00"));
    let (order_id, set_order_id) = signal(String::new());
    let (transaction_type, set_transaction_type) = signal(String::from("purchase"));

    let request_session = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = CheckoutForm {
            amount: amount.get(),
            order_id: order_id.get(),
            transaction_type: transaction_type.get(),
        };
        let Some(request) = launcher
            .try_update_value(|l| l.begin_request(&form))
            .flatten()
        else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = api::request_checkout(&request).await;
            launcher.update_value(|l| l.complete_request(outcome));
        });
    };

    let launch = move |_| {
        // outcome is already on the status line
        launcher.update_value(|l| {
            let _ = l.launch();
        });
    };

    view! {
        <section class="checkout">
            <h2>"Moneris Checkout"</h2>
            <form id="moneris-options" on:submit=request_session>
                <div class="field">
                    <label for="amount">"Amount"</label>
                    <input
                        id="amount"
                        name="amount"
                        type="number"
                        min="0.01"
                        step="0.01"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="order-id">"Order ID"</label>
                    <input
                        id="order-id"
                        name="orderId"
                        type="text"
                        placeholder="Generated when empty"
                        prop:value=move || order_id.get()
                        on:input=move |ev| set_order_id.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="transaction-type">"Transaction type"</label>
                    <select
                        id="transaction-type"
                        name="transactionType"
                        prop:value=move || transaction_type.get()
                        on:change=move |ev| set_transaction_type.set(event_target_value(&ev))
                    >
                        <option value="purchase">"Purchase"</option>
                        <option value="preauth">"Pre-authorization"</option>
                    </select>
                </div>
                <button type="submit">"Request checkout session"</button>
            </form>

            <button
                id="launch-checkout"
                type="button"
                on:click=launch
                disabled=move || !view.launch_enabled.get()
            >
                "Launch checkout"
            </button>

            <StatusLine status=view.status />
            <h3>"Events"</h3>
            <EventLogView events=view.events />
        </section>
    }
}
