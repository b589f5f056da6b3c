use serde_json::Value;

/// Read `key` from a JSON object as text.
///
/// Strings are taken as-is, other scalars keep their JSON rendering, and a
/// missing key, a `null`, or a non-object `item` yield `default`.
pub fn text_field(item: &Value, key: &str, default: &str) -> String {
    match item.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
