//! Gateway Response Handling
//!
//! Moneris responses are only partly specified, so fields are looked up by
//! the few shapes known to occur in practice.

use serde_json::{json, Value};

/// Parse a response body, wrapping non-JSON text as `{"raw": text}`
pub fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

/// Error message for a failed response
///
/// `response.error_message`, then top-level `error`, then the status text.
pub fn error_message(body: &Value, status_text: &str) -> String {
    text_of(body.pointer("/response/error_message"))
        .or_else(|| text_of(body.get("error")))
        .unwrap_or_else(|| status_text.to_string())
}

/// Checkout id from `response.checkout_id`, `checkout_id` or `id`, in that
/// order
pub fn extract_checkout_id(body: &Value) -> Option<String> {
    text_of(body.pointer("/response/checkout_id"))
        .or_else(|| text_of(body.get("checkout_id")))
        .or_else(|| text_of(body.get("id")))
}

/// Text for a field that is present and non-empty
fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        value @ (Value::Object(_) | Value::Array(_)) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_wraps_text() {
        assert_eq!(parse_body("<html>oops</html>"), json!({"raw": "<html>oops</html>"}));
        assert_eq!(parse_body(r#"{"id": "x"}"#), json!({"id": "x"}));
    }

    #[test]
    fn test_checkout_id_precedence() {
        let body = json!({"response": {"checkout_id": "nested"}, "checkout_id": "top", "id": "plain"});
        assert_eq!(extract_checkout_id(&body).as_deref(), Some("nested"));

        let body = json!({"checkout_id": "top", "id": "plain"});
        assert_eq!(extract_checkout_id(&body).as_deref(), Some("top"));

        let body = json!({"response": {"checkout_id": ""}, "id": "plain"});
        assert_eq!(extract_checkout_id(&body).as_deref(), Some("plain"));

        assert_eq!(extract_checkout_id(&json!({"id": 42})).as_deref(), Some("42"));
        assert_eq!(extract_checkout_id(&json!({"response": {"success": "true"}})), None);
        assert_eq!(extract_checkout_id(&json!({"raw": "nope"})), None);
    }

    #[test]
    fn test_error_message_precedence() {
        let body = json!({"response": {"error_message": "Invalid store"}, "error": "generic"});
        assert_eq!(error_message(&body, "Bad Request"), "Invalid store");

        let body = json!({"error": "generic"});
        assert_eq!(error_message(&body, "Bad Request"), "generic");

        assert_eq!(error_message(&json!({"raw": ""}), "Bad Gateway"), "Bad Gateway");
    }
}
