//! Hosted Tokenization Page

use leptos::prelude::*;
use moneris_core::tokenization::{StartedLibraries, PLACEHOLDER_PROFILE_ID, PROFILE_ATTRIBUTE};

use crate::components::TokenizerOutputView;
use crate::tokenizer::JsHostedLibrary;
use crate::view::TokenizerOutput;

const CONTAINER_ID: &str = "moneris-tokenizer";

/// Profile id baked in at build time, else the placeholder
fn configured_profile() -> &'static str {
    option_env!("MONERIS_TOKENIZATION_ID").unwrap_or(PLACEHOLDER_PROFILE_ID)
}

fn container_profile() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONTAINER_ID)?
        .get_attribute(PROFILE_ATTRIBUTE)
}

#[component]
pub fn TokenizationPage() -> impl IntoView {
    let output = TokenizerOutput::new();
    let libraries = StoredValue::new_local(StartedLibraries::<JsHostedLibrary>::default());

    let load = move |_| {
        let profile = container_profile();
        libraries.update_value(|started| {
            started.load(profile.as_deref(), CONTAINER_ID, JsHostedLibrary::locate, &output);
        });
    };

    view! {
        <section class="tokenization">
            <h2>"Hosted Tokenization"</h2>
            <button id="load-tokenizer" type="button" on:click=load>
                "Load tokenizer"
            </button>
            <div
                id=CONTAINER_ID
                class="tokenizer"
                data-moneris-tokenization-id=configured_profile()
            ></div>
            <TokenizerOutputView log=output.log />
        </section>
    }
}
