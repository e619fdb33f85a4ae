//! Checkout Wire Types
//!
//! Bodies exchanged between the browser and `POST /api/moneris/checkout`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Amount as sent by a client: a JSON number or a numeric string.
/// Any other JSON value lands in `Other` and never parses as a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    Other(Value),
}

impl Amount {
    /// Whether the client sent nothing usable (blank string or `false`)
    pub fn is_blank(&self) -> bool {
        match self {
            Amount::Text(s) => s.trim().is_empty(),
            Amount::Other(value) => matches!(value, Value::Bool(false)),
            Amount::Number(_) => false,
        }
    }

    /// Finite numeric value
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s.trim().parse::<f64>().ok()?,
            Amount::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Numeric value if strictly positive
    pub fn positive(&self) -> Option<f64> {
        self.value().filter(|v| *v > 0.0)
    }

    /// Two-decimal rendering used for `txn_total`
    pub fn formatted(&self) -> Option<String> {
        self.positive().and_then(fixed_two)
    }
}

/// Two decimals of the exact binary value, ties rounded away from zero.
/// `0.125` renders as `0.13` and `1.005` (stored below the tie) as `1.00`.
pub fn fixed_two(value: f64) -> Option<String> {
    let exact = Decimal::from_f64_retain(value)?;
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Some(format!("{rounded:.2}"))
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

/// Checkout request sent by the browser
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Charge amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    /// Merchant order number (defaults to the checkout id)
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// `purchase`, `preauth`, ... (defaults to `purchase`)
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    /// Client-chosen checkout id (generated when absent)
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub status_callback_url: Option<String>,

    /// Statement descriptor override
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub dynamic_descriptor: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Billing details, forwarded untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Value>,

    /// Shipping details, forwarded untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Value>,
}

impl CheckoutRequest {
    /// Request for an amount with everything else defaulted
    pub fn for_amount(amount: impl Into<Amount>) -> Self {
        Self {
            amount: Some(amount.into()),
            ..Default::default()
        }
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_transaction_type(mut self, transaction_type: impl Into<String>) -> Self {
        self.transaction_type = Some(transaction_type.into());
        self
    }
}

/// Text field that also takes scalars: numbers and `true` become their
/// JSON text, `null` `false` and `0` count as absent
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".into())),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Treat empty strings the same as absent fields
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Successful session response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Identifier handed to the checkout widget
    pub checkout_id: String,

    /// Environment tag (`qa`, `prod`, ...)
    #[serde(default)]
    pub environment: String,

    /// Raw gateway response, kept for display
    pub moneris: Value,
}

/// Error body for any failed session request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
