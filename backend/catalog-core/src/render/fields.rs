//! Absence-tolerant accessors over sparse JSON entries.
//!
//! Every accessor returns a value; a missing, `null`, or oddly-typed field turns
//! into a placeholder instead of an error.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Shown for absent scalar fields.
pub const PLACEHOLDER: &str = "?";

/// Distance assumed for entries that carry none.
pub const DEFAULT_DISTANCE: f64 = 1.0;

/// `entry[key]`, treating `null` as absent.
pub fn field<'a>(entry: &'a Value, key: &str) -> Option<&'a Value> {
    entry.get(key).filter(|value| !value.is_null())
}

/// Strings without quotes, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn text_or(entry: &Value, key: &str, default: &str) -> String {
    field(entry, key)
        .map(display_value)
        .unwrap_or_else(|| default.to_string())
}

pub fn text(entry: &Value, key: &str) -> String {
    text_or(entry, key, PLACEHOLDER)
}

/// Truthiness as a scripting language sees it: `null`, `false`, `0`, `""`,
/// `[]` and `{}` are all false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub fn truthy_field<'a>(entry: &'a Value, key: &str) -> Option<&'a Value> {
    field(entry, key).filter(|value| is_truthy(value))
}

/// summary, else name, else workflow_id, else empty.
pub fn display_name(entry: &Value) -> String {
    truthy_field(entry, "summary")
        .or_else(|| truthy_field(entry, "name"))
        .or_else(|| field(entry, "workflow_id"))
        .map(display_value)
        .unwrap_or_default()
}

/// distance, else match_score, else `?`. Numbers get three decimals; anything
/// else is printed as-is.
pub fn score(entry: &Value) -> String {
    match field(entry, "distance").or_else(|| field(entry, "match_score")) {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(score) => format!("{score:.3}"),
            None => n.to_string(),
        },
        Some(other) => display_value(other),
        None => PLACEHOLDER.to_string(),
    }
}

/// Sort key for merged public results.
pub fn distance(entry: &Value) -> f64 {
    field(entry, "distance")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_DISTANCE)
}

/// The array at `payload[key]`, or an empty slice.
pub fn array<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    field(payload, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Pretty JSON with a custom indent. Falls back to compact output.
pub fn pretty_json(value: &Value, indent: &[u8]) -> String {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent));

    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buffer).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
