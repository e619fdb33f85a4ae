//! Moneris Checkout Web Frontend
//!
//! Leptos-based WASM page driving the Moneris Checkout SDK loaded by
//! `index.html`.

mod api;
mod app;
mod components;
mod js;
mod pages;
mod sdk;
mod tokenizer;
mod view;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
