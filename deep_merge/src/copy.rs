//! Structural deep copies of dynamic values.

use serde_json::{Map, Value};

/// Recursively copy `value`, returning a tree that shares no container
/// storage with the input.
///
/// Mappings are copied entry by entry and sequences element by element,
/// preserving order; leaves (null, booleans, numbers, strings) are returned
/// by value. The result is deeply equal to the input at the moment of the
/// call and wholly owned by the caller, so later mutation of either tree is
/// never observable through the other.
///
/// # Examples
///
/// ```rust
/// use deep_merge::deep_copy_value;
/// use serde_json::json;
///
/// let original = json!({"nested": {"items": [1, 2, 3]}});
/// let copy = deep_copy_value(&original);
/// assert_eq!(copy, original);
/// ```
#[must_use]
pub fn deep_copy_value(value: &Value) -> Value {
    match value {
        Value::Object(mapping) => Value::Object(copy_mapping(mapping)),
        Value::Array(sequence) => Value::Array(copy_sequence(sequence)),
        leaf => leaf.clone(),
    }
}

/// Copy a mapping entry by entry, recursing into each value.
#[must_use]
pub fn copy_mapping(mapping: &Map<String, Value>) -> Map<String, Value> {
    mapping
        .iter()
        .map(|(key, value)| (key.clone(), deep_copy_value(value)))
        .collect()
}

/// Copy a sequence element by element, preserving order.
#[must_use]
pub fn copy_sequence(sequence: &[Value]) -> Vec<Value> {
    sequence.iter().map(deep_copy_value).collect()
}
