//! Main App Component

use leptos::prelude::*;

use crate::pages::{CheckoutPage, TokenizationPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <h1>"Moneris Checkout Demo"</h1>
            <CheckoutPage />
            <TokenizationPage />
        </main>
    }
}
