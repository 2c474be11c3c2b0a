//! JSON formatting for display purposes.

use serde::Serialize;

/// Formats `value` as an indented JSON string, returning the encoding error
/// message instead when serialization fails. Meant for log and debug
/// output where an error string is more useful than a failure.
pub fn format<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(formatted) => formatted,
        Err(err) => format!("JSON encoding failed: {err}"),
    }
}
