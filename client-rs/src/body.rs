//! Request body encoding

use serde_json::Value;

/// Encodes a message payload into a request body
///
/// JSON text is sent in its compact form. Anything else is sent as a JSON
/// string. No payload means an empty body.
pub fn encode_body(content: Option<&str>) -> String {
    match content {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => value.to_string(),
            Err(_) => Value::String(text.to_string()).to_string(),
        },
        None => String::new(),
    }
}
