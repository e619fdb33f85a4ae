//! JS Object Helpers
//!
//! Thin `Reflect` wrappers shared by the SDK and tokenizer adapters.

use js_sys::{Array, Function, Reflect};
use moneris_core::{MethodProbe, SdkObject};
use wasm_bindgen::{JsCast, JsValue};

/// A foreign object probed by property name
#[derive(Clone, Debug)]
pub struct JsObject(pub JsValue);

impl JsObject {
    /// Truthy property, like `obj.name && ...` in page scripts
    pub fn get(&self, name: &str) -> Option<JsObject> {
        Reflect::get(&self.0, &JsValue::from_str(name))
            .ok()
            .filter(JsValue::is_truthy)
            .map(JsObject)
    }

    /// Call `self[name](...args)` with `self` as receiver
    pub fn call(&self, name: &str, args: &Array) -> Result<JsValue, String> {
        let method = Reflect::get(&self.0, &JsValue::from_str(name))
            .map_err(|e| error_text(&e))?
            .dyn_into::<Function>()
            .map_err(|_| format!("{name} is not a function"))?;
        method.apply(&self.0, args).map_err(|e| error_text(&e))
    }

    /// Invoke the object itself as a function
    pub fn invoke(&self, args: &Array) -> Result<JsValue, String> {
        let function = self
            .0
            .dyn_ref::<Function>()
            .ok_or_else(|| "object is not callable".to_string())?;
        function.apply(&JsValue::UNDEFINED, args).map_err(|e| error_text(&e))
    }
}

impl MethodProbe for JsObject {
    fn has_method(&self, name: &str) -> bool {
        Reflect::get(&self.0, &JsValue::from_str(name)).is_ok_and(|v| v.is_function())
    }

    fn is_callable(&self) -> bool {
        self.0.is_function()
    }
}

impl SdkObject for JsObject {
    /// `new self()`; a throwing constructor is logged and yields `None`
    fn construct(&self) -> Option<Self> {
        let ctor = self.0.dyn_ref::<Function>()?;
        match Reflect::construct(ctor, &Array::new()) {
            Ok(instance) => Some(JsObject(instance)),
            Err(err) => {
                web_sys::console::warn_2(
                    &JsValue::from_str("Unable to instantiate MonerisCheckout"),
                    &err,
                );
                None
            }
        }
    }

    fn property(&self, name: &str) -> Option<Self> {
        self.get(name)
    }
}

/// Walk a dotted global path from `window`, stopping at the first falsy link
pub fn global(path: &[&str]) -> Option<JsObject> {
    let window = JsObject(web_sys::window()?.into());
    path.iter().try_fold(window, |object, name| object.get(name))
}

/// Message of a thrown value (`error.message`, else its string form)
pub fn error_text(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Copy a JS value into JSON; functions and cycles collapse to `null`
pub fn to_json(value: &JsValue) -> serde_json::Value {
    if value.is_undefined() {
        return serde_json::Value::Null;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .map(String::from)
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or(serde_json::Value::Null)
}

/// Build a JS object from anything serializable
pub fn from_json<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let text = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&text).map_err(|e| error_text(&e))
}
