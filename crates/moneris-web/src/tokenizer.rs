//! Hosted Tokenization Adapter

use js_sys::{Array, Object, Reflect};
use moneris_core::tokenization::{StartMethod, TokenizationOptions, LIBRARY_LOCATIONS};
use moneris_core::{HostedLibrary, MethodProbe, TokenizationError, TokenizerEntry, TokenizerSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::js::{self, JsObject};

/// The hosted tokenization library found on the page
///
/// Owns the `onTokenize`, `onError` and `onClose` closures handed to `setup`.
pub struct JsHostedLibrary {
    library: JsObject,
    callbacks: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl JsHostedLibrary {
    /// First library found under the known globals
    pub fn locate() -> Option<Self> {
        LIBRARY_LOCATIONS
            .iter()
            .find_map(|path| js::global(path))
            .map(|library| Self {
                library,
                callbacks: Vec::new(),
            })
    }

    fn callback<S: TokenizerSink>(
        &mut self,
        options: &Object,
        name: &str,
        sink: S,
        entry: fn(JsValue) -> TokenizerEntry,
    ) -> Result<(), TokenizationError> {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            sink.write(entry(value));
        });
        Reflect::set(options, &JsValue::from_str(name), callback.as_ref())
            .map_err(|e| TokenizationError::Library(js::error_text(&e)))?;
        self.callbacks.push(callback);
        Ok(())
    }
}

impl MethodProbe for JsHostedLibrary {
    fn has_method(&self, name: &str) -> bool {
        self.library.has_method(name)
    }

    fn is_callable(&self) -> bool {
        self.library.is_callable()
    }
}

impl HostedLibrary for JsHostedLibrary {
    fn setup<S: TokenizerSink>(
        &mut self,
        options: &TokenizationOptions,
        sink: S,
    ) -> Result<(), TokenizationError> {
        let object: Object = js::from_json(options)
            .map_err(TokenizationError::Library)?
            .unchecked_into();

        self.callback(&object, "onTokenize", sink.clone(), |result| {
            TokenizerEntry::Tokenize(js::to_json(&result))
        })?;
        self.callback(&object, "onError", sink.clone(), |error| {
            TokenizerEntry::Error(js::to_json(&error))
        })?;
        self.callback(&object, "onClose", sink, |_| TokenizerEntry::Close)?;

        self.library
            .call("setup", &Array::of1(&object))
            .map(drop)
            .map_err(TokenizationError::Library)
    }

    fn start(&mut self, method: StartMethod) -> Result<(), TokenizationError> {
        self.library
            .call(method.method_name(), &Array::new())
            .map(drop)
            .map_err(TokenizationError::Library)
    }
}
