//! Conversions between typed values and dynamic mappings.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{MergeError, MergeResult, MergeRole};
use crate::merge::merge_mappings;

/// Serialise `value` into a dynamic mapping.
///
/// # Errors
///
/// Returns [`MergeError::Serialize`] when serialisation fails, or
/// [`MergeError::NotAMapping`] when `value` serialises to something other
/// than a mapping (a bare scalar or sequence, for example).
pub fn to_mapping<T: Serialize>(value: &T) -> MergeResult<Map<String, Value>> {
    match serde_json::to_value(value).map_err(MergeError::serialize)? {
        Value::Object(mapping) => Ok(mapping),
        other => Err(MergeError::not_a_mapping(MergeRole::Struct, &other)),
    }
}

/// Deserialise a merged mapping into `T`.
///
/// # Errors
///
/// Returns [`MergeError::Deserialize`] when the mapping does not satisfy
/// `T`'s shape.
pub fn from_mapping<T: DeserializeOwned>(mapping: Map<String, Value>) -> MergeResult<T> {
    serde_json::from_value(Value::Object(mapping)).map_err(MergeError::deserialize)
}

/// Merge two typed values by round-tripping through the dynamic
/// representation.
///
/// Fields present on `overlay` replace those on `base` under the usual
/// tie-break rule, and nested map-shaped fields merge recursively. A field
/// that serialises to null replaces the base value; annotate optional fields
/// with `#[serde(skip_serializing_if = "Option::is_none")]` when unset
/// options should leave the base value intact.
///
/// # Errors
///
/// Returns [`MergeError::Serialize`] or [`MergeError::NotAMapping`] when
/// either value does not serialise to a mapping, and
/// [`MergeError::Deserialize`] when the merged mapping does not satisfy
/// `T`'s shape.
///
/// # Examples
///
/// ```rust
/// use deep_merge::merge_structs;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Deserialize, PartialEq, Serialize)]
/// struct Settings {
///     host: String,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     port: Option<u16>,
/// }
///
/// let defaults = Settings { host: "localhost".into(), port: Some(80) };
/// let cli = Settings { host: "example.net".into(), port: None };
///
/// let merged = merge_structs(&defaults, &cli)?;
/// assert_eq!(merged.host, "example.net");
/// assert_eq!(merged.port, Some(80));
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn merge_structs<T>(base: &T, overlay: &T) -> MergeResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let merged = merge_mappings(&to_mapping(base)?, &to_mapping(overlay)?);
    from_mapping(merged)
}
