//! Checkout Widget Capabilities
//!
//! The Moneris Checkout SDK has shipped several interface shapes: a
//! constructor, a static object with `configure`, event constants with
//! `addEventListener` or a single `setCallback`, and a handful of launch
//! entry points. Each shape is captured here as a probe over a
//! `MethodProbe`, evaluated once when an adapter is resolved.
//!
//! Probe orders are fixed and must not be reshuffled.

use crate::error::{LaunchError, Result};
use crate::event::EventKind;
use crate::launcher::LauncherView;
use crate::session::CheckoutConfig;

/// Duck-typed view of a foreign object
pub trait MethodProbe {
    /// Whether `name` is a callable property
    fn has_method(&self, name: &str) -> bool;

    /// Whether the object itself can be called (or constructed)
    fn is_callable(&self) -> bool;
}

/// A foreign SDK object that can be constructed and read by property
pub trait SdkObject: MethodProbe + Clone {
    /// `new self()`, or `None` when construction throws
    fn construct(&self) -> Option<Self>;

    /// Truthy property value
    fn property(&self, name: &str) -> Option<Self>;
}

// ============================================================================
// Instance resolution
// ============================================================================

/// Where the widget instance comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstanceSource {
    /// `new MonerisCheckout()`
    Construct,
    /// The global itself, when it exposes `configure`
    StaticObject,
}

impl InstanceSource {
    /// Candidate sources in the order they should be tried
    ///
    /// A failed construction falls through to the next candidate.
    pub fn candidates(sdk: &impl MethodProbe) -> Vec<Self> {
        let mut sources = Vec::with_capacity(2);
        if sdk.is_callable() {
            sources.push(InstanceSource::Construct);
        }
        if sdk.has_method("configure") {
            sources.push(InstanceSource::StaticObject);
        }
        sources
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Setter through which part of the config reaches the instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigMethod {
    SetCheckoutId,
    SetEnvironment,
    SetMode,
    Configure,
}

/// Value passed to a config setter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigArgument<'a> {
    Text(&'a str),
    Config(&'a CheckoutConfig),
}

impl ConfigMethod {
    /// Application order
    pub const ALL: [ConfigMethod; 4] = [
        ConfigMethod::SetCheckoutId,
        ConfigMethod::SetEnvironment,
        ConfigMethod::SetMode,
        ConfigMethod::Configure,
    ];

    pub fn method_name(self) -> &'static str {
        match self {
            ConfigMethod::SetCheckoutId => "setCheckoutId",
            ConfigMethod::SetEnvironment => "setEnvironment",
            ConfigMethod::SetMode => "setMode",
            ConfigMethod::Configure => "configure",
        }
    }

    pub fn argument(self, config: &CheckoutConfig) -> ConfigArgument<'_> {
        match self {
            ConfigMethod::SetCheckoutId => ConfigArgument::Text(&config.checkout_id),
            ConfigMethod::SetEnvironment | ConfigMethod::SetMode => {
                ConfigArgument::Text(&config.environment)
            }
            ConfigMethod::Configure => ConfigArgument::Config(config),
        }
    }

    /// Setters present on the instance; absent ones are skipped
    pub fn probe(instance: &impl MethodProbe) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|m| instance.has_method(m.method_name()))
            .collect()
    }
}

// ============================================================================
// Events
// ============================================================================

/// How lifecycle events reach the launcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventBinding {
    /// `addEventListener(Events.X, handler)` per constant
    Listener,
    /// `setCallback((eventName, payload) => ...)`
    Callback,
    /// Nothing to bind to; events are never seen
    Unbound,
}

impl EventBinding {
    /// `has_events` is whether an `Events` table exists on the instance or
    /// the SDK global
    pub fn probe(has_events: bool, instance: &impl MethodProbe) -> Self {
        if has_events && instance.has_method("addEventListener") {
            EventBinding::Listener
        } else if instance.has_method("setCallback") {
            EventBinding::Callback
        } else {
            EventBinding::Unbound
        }
    }

    /// `Events` constants bound in listener mode, with the kind each maps to
    pub fn listener_constants() -> [(&'static str, EventKind); 3] {
        [
            ("PAYMENT_COMPLETE", EventKind::PaymentComplete),
            ("CANCEL", EventKind::Cancel),
            ("ERROR", EventKind::Error),
        ]
    }

    /// Status text shown when an event of `kind` arrives through this binding
    pub fn status_for(self, kind: &EventKind) -> Option<&'static str> {
        match kind {
            EventKind::PaymentComplete => Some(match self {
                EventBinding::Listener => "Payment complete. See event log for details.",
                EventBinding::Callback | EventBinding::Unbound => "Payment complete.",
            }),
            EventKind::Cancel => Some("Checkout cancelled by shopper."),
            EventKind::Error => Some("Checkout reported an error."),
            EventKind::CheckoutSession | EventKind::Custom(_) => None,
        }
    }
}

// ============================================================================
// Launch
// ============================================================================

/// Entry point used to open the hosted checkout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchMethod {
    /// `instance.startCheckout()`
    InstanceStartCheckout,
    /// `instance.show()`
    InstanceShow,
    /// `MonerisCheckout.startCheckout(checkoutId)`
    StaticStartCheckout,
    /// `MonerisCheckout(config)`
    CallSdk,
}

impl LaunchMethod {
    pub fn probe(instance: &impl MethodProbe, sdk: &impl MethodProbe) -> Result<Self> {
        if instance.has_method("startCheckout") {
            Ok(LaunchMethod::InstanceStartCheckout)
        } else if instance.has_method("show") {
            Ok(LaunchMethod::InstanceShow)
        } else if sdk.is_callable() && sdk.has_method("startCheckout") {
            Ok(LaunchMethod::StaticStartCheckout)
        } else if sdk.is_callable() {
            Ok(LaunchMethod::CallSdk)
        } else {
            Err(LaunchError::no_launch_method())
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Everything probed from an SDK when a widget is built
#[derive(Clone, Debug)]
pub struct WidgetShape<T> {
    pub sdk: T,
    pub instance: T,
    pub setters: Vec<ConfigMethod>,
    /// `None` when neither the instance nor the SDK can open the checkout;
    /// the widget still configures and binds, then fails at launch
    pub launch: Option<LaunchMethod>,
    pub binding: EventBinding,
    /// Event name values to register in listener mode, in constant order
    pub listeners: Vec<(T, EventKind)>,
}

impl<T: SdkObject> WidgetShape<T> {
    /// Probe `sdk`, failing only when no instance can be obtained
    pub fn resolve(sdk: Option<T>) -> Result<Self> {
        let sdk = sdk.ok_or_else(LaunchError::sdk_missing)?;
        let instance = InstanceSource::candidates(&sdk)
            .into_iter()
            .find_map(|source| match source {
                InstanceSource::Construct => sdk.construct(),
                InstanceSource::StaticObject => Some(sdk.clone()),
            })
            .ok_or_else(LaunchError::sdk_missing)?;

        let events = instance.property("Events").or_else(|| sdk.property("Events"));
        let binding = EventBinding::probe(events.is_some(), &instance);
        let listeners = match (binding, events) {
            (EventBinding::Listener, Some(events)) => EventBinding::listener_constants()
                .into_iter()
                .filter_map(|(constant, kind)| events.property(constant).map(|name| (name, kind)))
                .collect(),
            _ => Vec::new(),
        };
        let setters = ConfigMethod::probe(&instance);
        let launch = LaunchMethod::probe(&instance, &sdk).ok();

        Ok(Self {
            sdk,
            instance,
            setters,
            launch,
            binding,
            listeners,
        })
    }

    /// Launch method, or the error shown when there is none
    pub fn launch_method(&self) -> Result<LaunchMethod> {
        self.launch.ok_or_else(LaunchError::no_launch_method)
    }
}

// ============================================================================
// Adapter traits
// ============================================================================

/// A resolved checkout widget
///
/// Implementations bind lifecycle events once, while being built, and hold
/// whatever handles keep those bindings alive.
pub trait CheckoutWidget {
    /// Push the session into the widget through every available setter
    fn apply_config(&mut self, config: &CheckoutConfig) -> Result<()>;

    /// Open the hosted checkout
    fn launch(&mut self, config: &CheckoutConfig) -> Result<()>;

    /// Event binding chosen at resolution
    fn binding(&self) -> EventBinding;
}

/// Produces a widget from whatever SDK is loaded on the page
pub trait WidgetProvider {
    type Widget: CheckoutWidget;

    /// Resolve the SDK and bind its events to `view`
    fn resolve<V: LauncherView>(&self, view: V) -> Result<Self::Widget>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[derive(Clone, Debug, PartialEq)]
    struct Shape {
        label: &'static str,
        methods: HashSet<&'static str>,
        callable: bool,
        props: HashMap<&'static str, Shape>,
        builds: Option<Box<Shape>>,
    }

    impl Shape {
        fn new(callable: bool, methods: &[&'static str]) -> Self {
            Self {
                label: "",
                methods: methods.iter().copied().collect(),
                callable,
                props: HashMap::new(),
                builds: None,
            }
        }

        fn named(label: &'static str) -> Self {
            Self {
                label,
                ..Self::new(false, &[])
            }
        }

        fn with(mut self, name: &'static str, value: Shape) -> Self {
            self.props.insert(name, value);
            self
        }

        fn building(mut self, instance: Shape) -> Self {
            self.builds = Some(Box::new(instance));
            self
        }
    }

    impl SdkObject for Shape {
        fn construct(&self) -> Option<Self> {
            self.builds.as_deref().cloned()
        }

        fn property(&self, name: &str) -> Option<Self> {
            self.props.get(name).cloned()
        }
    }

    impl MethodProbe for Shape {
        fn has_method(&self, name: &str) -> bool {
            self.methods.contains(name)
        }

        fn is_callable(&self) -> bool {
            self.callable
        }
    }

    #[test]
    fn test_instance_candidates() {
        let ctor = Shape::new(true, &["configure"]);
        assert_eq!(
            InstanceSource::candidates(&ctor),
            vec![InstanceSource::Construct, InstanceSource::StaticObject]
        );

        let object = Shape::new(false, &["configure"]);
        assert_eq!(InstanceSource::candidates(&object), vec![InstanceSource::StaticObject]);

        let nothing = Shape::new(false, &["show"]);
        assert!(InstanceSource::candidates(&nothing).is_empty());
    }

    #[test]
    fn test_config_methods_keep_order_and_skip_missing() {
        let instance = Shape::new(false, &["configure", "setMode", "setCheckoutId"]);
        assert_eq!(
            ConfigMethod::probe(&instance),
            vec![ConfigMethod::SetCheckoutId, ConfigMethod::SetMode, ConfigMethod::Configure]
        );
    }

    #[test]
    fn test_config_arguments() {
        let config = CheckoutConfig::new("abc", "qa");
        assert_eq!(ConfigMethod::SetCheckoutId.argument(&config), ConfigArgument::Text("abc"));
        assert_eq!(ConfigMethod::SetMode.argument(&config), ConfigArgument::Text("qa"));
        assert_eq!(ConfigMethod::Configure.argument(&config), ConfigArgument::Config(&config));
    }

    #[test]
    fn test_listener_preferred_over_callback() {
        let both = Shape::new(false, &["addEventListener", "setCallback"]);
        assert_eq!(EventBinding::probe(true, &both), EventBinding::Listener);
        // without an Events table the listener API is useless
        assert_eq!(EventBinding::probe(false, &both), EventBinding::Callback);
        assert_eq!(EventBinding::probe(true, &Shape::new(false, &[])), EventBinding::Unbound);
    }

    #[test]
    fn test_status_text_depends_on_binding() {
        assert_eq!(
            EventBinding::Listener.status_for(&EventKind::PaymentComplete),
            Some("Payment complete. See event log for details.")
        );
        assert_eq!(
            EventBinding::Callback.status_for(&EventKind::PaymentComplete),
            Some("Payment complete.")
        );
        assert_eq!(
            EventBinding::Callback.status_for(&EventKind::Custom("receipt".into())),
            None
        );
    }

    #[test]
    fn test_launch_probe_order() {
        let sdk = Shape::new(true, &["startCheckout"]);

        let instance = Shape::new(false, &["startCheckout", "show"]);
        assert_eq!(LaunchMethod::probe(&instance, &sdk), Ok(LaunchMethod::InstanceStartCheckout));

        let instance = Shape::new(false, &["show"]);
        assert_eq!(LaunchMethod::probe(&instance, &sdk), Ok(LaunchMethod::InstanceShow));

        let instance = Shape::new(false, &[]);
        assert_eq!(LaunchMethod::probe(&instance, &sdk), Ok(LaunchMethod::StaticStartCheckout));

        let plain = Shape::new(true, &[]);
        assert_eq!(LaunchMethod::probe(&instance, &plain), Ok(LaunchMethod::CallSdk));
    }

    #[test]
    fn test_static_object_without_launch_method() {
        let sdk = Shape::new(false, &["configure", "startCheckout"]);
        assert_eq!(LaunchMethod::probe(&sdk, &sdk), Ok(LaunchMethod::InstanceStartCheckout));

        let sdk = Shape::new(false, &["configure"]);
        assert_eq!(LaunchMethod::probe(&sdk, &sdk), Err(LaunchError::no_launch_method()));
    }

    #[test]
    fn test_resolve_without_sdk() {
        assert_eq!(
            WidgetShape::<Shape>::resolve(None).unwrap_err(),
            LaunchError::sdk_missing()
        );
        let inert = Shape::new(false, &["show"]);
        assert_eq!(
            WidgetShape::resolve(Some(inert)).unwrap_err(),
            LaunchError::sdk_missing()
        );
    }

    #[test]
    fn test_resolve_failed_construction_falls_back_to_static_object() {
        // callable but `new` throws
        let sdk = Shape::new(true, &["configure", "startCheckout"]);
        let shape = WidgetShape::resolve(Some(sdk.clone())).unwrap();

        assert_eq!(shape.instance, sdk);
        assert_eq!(shape.setters, vec![ConfigMethod::Configure]);
        assert_eq!(shape.launch, Some(LaunchMethod::InstanceStartCheckout));
    }

    #[test]
    fn test_resolve_constructed_instance_with_partial_events() {
        let events = Shape::named("events")
            .with("PAYMENT_COMPLETE", Shape::named("complete"))
            .with("ERROR", Shape::named("error"));
        let instance = Shape::new(false, &["addEventListener", "setCheckoutId", "show"]);
        let sdk = Shape::new(true, &[]).with("Events", events).building(instance.clone());

        let shape = WidgetShape::resolve(Some(sdk)).unwrap();

        assert_eq!(shape.instance, instance);
        assert_eq!(shape.binding, EventBinding::Listener);
        assert_eq!(
            shape
                .listeners
                .iter()
                .map(|(name, kind)| (name.label, kind.clone()))
                .collect::<Vec<_>>(),
            vec![("complete", EventKind::PaymentComplete), ("error", EventKind::Error)]
        );
        assert_eq!(shape.setters, vec![ConfigMethod::SetCheckoutId]);
        assert_eq!(shape.launch, Some(LaunchMethod::InstanceShow));
    }

    #[test]
    fn test_resolve_instance_events_take_precedence() {
        let own = Shape::named("own").with("CANCEL", Shape::named("own-cancel"));
        let global = Shape::named("global").with("CANCEL", Shape::named("global-cancel"));
        let instance = Shape::new(false, &["addEventListener", "startCheckout"]).with("Events", own);
        let sdk = Shape::new(true, &[]).with("Events", global).building(instance);

        let shape = WidgetShape::resolve(Some(sdk)).unwrap();
        assert_eq!(shape.listeners.len(), 1);
        assert_eq!(shape.listeners[0].0.label, "own-cancel");
    }

    #[test]
    fn test_resolve_without_launch_method_still_configures() {
        let sdk = Shape::new(false, &["configure", "setCallback"]);
        let shape = WidgetShape::resolve(Some(sdk)).unwrap();

        assert_eq!(shape.launch, None);
        assert_eq!(shape.setters, vec![ConfigMethod::Configure]);
        assert_eq!(shape.binding, EventBinding::Callback);
        assert!(shape.listeners.is_empty());
        assert_eq!(shape.launch_method(), Err(LaunchError::no_launch_method()));
    }
}
