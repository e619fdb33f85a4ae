//! Moneris Checkout SDK Adapter
//!
//! Resolves `window.MonerisCheckout` into a `CheckoutWidget`. The shape is
//! probed once by `WidgetShape::resolve`; the widget then only replays the
//! chosen calls.

use js_sys::Array;
use moneris_core::launcher::dispatch_event;
use moneris_core::widget::ConfigArgument;
use moneris_core::{
    CheckoutConfig, CheckoutWidget, EventBinding, EventKind, LaunchError, LaunchMethod,
    LauncherView, LifecycleEvent, Result, WidgetProvider, WidgetShape,
};
use wasm_bindgen::prelude::*;

use crate::js::{self, JsObject};

const SDK_GLOBAL: &str = "MonerisCheckout";

/// Handles that must outlive the SDK's references to them
#[allow(dead_code)]
enum EventHandlers {
    Listeners(Vec<Closure<dyn FnMut(JsValue)>>),
    Callback(Closure<dyn FnMut(JsValue, JsValue)>),
    Unbound,
}

/// A resolved checkout instance
pub struct JsCheckoutWidget {
    shape: WidgetShape<JsObject>,
    _handlers: EventHandlers,
}

impl CheckoutWidget for JsCheckoutWidget {
    fn apply_config(&mut self, config: &CheckoutConfig) -> Result<()> {
        for setter in &self.shape.setters {
            let argument = match setter.argument(config) {
                ConfigArgument::Text(text) => JsValue::from_str(text),
                ConfigArgument::Config(config) => js::from_json(config).map_err(LaunchError::Sdk)?,
            };
            self.shape
                .instance
                .call(setter.method_name(), &Array::of1(&argument))
                .map_err(LaunchError::Sdk)?;
        }
        Ok(())
    }

    fn launch(&mut self, config: &CheckoutConfig) -> Result<()> {
        let WidgetShape { sdk, instance, .. } = &self.shape;
        let outcome = match self.shape.launch_method()? {
            LaunchMethod::InstanceStartCheckout => instance.call("startCheckout", &Array::new()),
            LaunchMethod::InstanceShow => instance.call("show", &Array::new()),
            LaunchMethod::StaticStartCheckout => sdk.call(
                "startCheckout",
                &Array::of1(&JsValue::from_str(&config.checkout_id)),
            ),
            LaunchMethod::CallSdk => {
                let config = js::from_json(config).map_err(LaunchError::Sdk)?;
                sdk.invoke(&Array::of1(&config))
            }
        };
        outcome.map(drop).map_err(LaunchError::Sdk)
    }

    fn binding(&self) -> EventBinding {
        self.shape.binding
    }
}

/// Provider reading the SDK from the page's globals
#[derive(Clone, Copy, Debug, Default)]
pub struct JsWidgetProvider;

impl WidgetProvider for JsWidgetProvider {
    type Widget = JsCheckoutWidget;

    fn resolve<V: LauncherView>(&self, view: V) -> Result<JsCheckoutWidget> {
        let shape = WidgetShape::resolve(js::global(&[SDK_GLOBAL]))?;
        let handlers = match shape.binding {
            EventBinding::Listener => bind_listeners(&shape.instance, &shape.listeners, view)?,
            EventBinding::Callback => bind_callback(&shape.instance, view)?,
            EventBinding::Unbound => EventHandlers::Unbound,
        };

        Ok(JsCheckoutWidget {
            shape,
            _handlers: handlers,
        })
    }
}

fn bind_listeners<V: LauncherView>(
    instance: &JsObject,
    listeners: &[(JsObject, EventKind)],
    view: V,
) -> Result<EventHandlers> {
    let mut handlers = Vec::with_capacity(listeners.len());
    for (name, kind) in listeners {
        let view = view.clone();
        let kind = kind.clone();
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            let event = LifecycleEvent::new(kind.clone(), js::to_json(&payload));
            dispatch_event(&view, EventBinding::Listener, event);
        });
        instance
            .call("addEventListener", &Array::of2(&name.0, handler.as_ref()))
            .map_err(LaunchError::Sdk)?;
        handlers.push(handler);
    }
    Ok(EventHandlers::Listeners(handlers))
}

fn bind_callback<V: LauncherView>(instance: &JsObject, view: V) -> Result<EventHandlers> {
    let handler = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |name: JsValue, payload: JsValue| {
        let kind = EventKind::from_name(&name.as_string().unwrap_or_default());
        let event = LifecycleEvent::new(kind, js::to_json(&payload));
        dispatch_event(&view, EventBinding::Callback, event);
    });
    instance
        .call("setCallback", &Array::of1(handler.as_ref()))
        .map_err(LaunchError::Sdk)?;
    Ok(EventHandlers::Callback(handler))
}
