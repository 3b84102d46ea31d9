//! Recursive overlay merging of dynamic mappings.

use serde_json::{Map, Value};

use crate::copy::{copy_mapping, deep_copy_value};
use crate::error::{MergeError, MergeResult, MergeRole};

/// Merge `overlay` on top of `base`, returning a new mapping.
///
/// The result starts as a deep copy of `base`. For each overlay key, a
/// mapping on both sides merges recursively; every other pairing (scalar,
/// sequence, null, or a key absent from `base`) resolves to a deep copy of
/// the overlay value. Sequences are atomic: they replace wholesale and are
/// never merged element by element. Keys present only in `base` keep their
/// copied value. Neither input is mutated, and the result shares no
/// container storage with either.
///
/// # Examples
///
/// ```rust
/// use deep_merge::merge_mappings;
/// use serde_json::{Value, json};
///
/// let Value::Object(base) = json!({"retries": 3, "limits": {"cpu": 1}}) else {
///     unreachable!()
/// };
/// let Value::Object(overlay) = json!({"limits": {"memory": 2}}) else {
///     unreachable!()
/// };
/// let merged = merge_mappings(&base, &overlay);
/// assert_eq!(
///     Value::Object(merged),
///     json!({"retries": 3, "limits": {"cpu": 1, "memory": 2}}),
/// );
/// ```
#[must_use]
pub fn merge_mappings(
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = copy_mapping(base);
    for (key, overlay_value) in overlay {
        let entry = match (base.get(key), overlay_value) {
            (Some(Value::Object(base_mapping)), Value::Object(overlay_mapping)) => {
                Value::Object(merge_mappings(base_mapping, overlay_mapping))
            }
            _ => deep_copy_value(overlay_value),
        };
        merged.insert(key.clone(), entry);
    }
    merged
}

/// Merge two dynamic values that are expected to hold mappings.
///
/// This is the checked entry point for callers holding untyped values;
/// the merge semantics are those of [`merge_mappings`].
///
/// # Errors
///
/// Returns [`MergeError::NotAMapping`] identifying the offending argument
/// when either value holds any other kind. No partial merge is attempted.
///
/// # Examples
///
/// ```rust
/// use deep_merge::deep_merge;
/// use serde_json::json;
///
/// let merged = deep_merge(
///     &json!({"baz": [1, 2, 3], "keep": true}),
///     &json!({"baz": [7, 8, 9]}),
/// )?;
/// assert_eq!(merged, json!({"baz": [7, 8, 9], "keep": true}));
///
/// assert!(deep_merge(&json!([1]), &json!({})).is_err());
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn deep_merge(base: &Value, overlay: &Value) -> MergeResult<Value> {
    let Value::Object(base_mapping) = base else {
        return Err(MergeError::not_a_mapping(MergeRole::Base, base));
    };
    let Value::Object(overlay_mapping) = overlay else {
        return Err(MergeError::not_a_mapping(MergeRole::Overlay, overlay));
    };
    tracing::trace!(
        base_keys = base_mapping.len(),
        overlay_keys = overlay_mapping.len(),
        "merging overlay mapping into base"
    );
    Ok(Value::Object(merge_mappings(base_mapping, overlay_mapping)))
}
