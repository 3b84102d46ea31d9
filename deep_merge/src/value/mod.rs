//! Runtime kind classification for dynamic values.

use std::fmt;

use serde_json::Value;

/// The runtime kind of a dynamic [`Value`].
///
/// For merge purposes a value has exactly one of three shapes: a mapping, a
/// sequence, or a leaf. Leaves retain their scalar kind here so diagnostics
/// can name what a caller actually supplied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    /// The explicit absence marker.
    Null,
    /// A boolean leaf.
    Bool,
    /// A numeric leaf.
    Number,
    /// A string leaf.
    String,
    /// An ordered sequence of dynamic values.
    Sequence,
    /// An associative container from string keys to dynamic values.
    Mapping,
}

impl ValueKind {
    /// Classify `value` by its runtime kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deep_merge::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!({"key": 1})), ValueKind::Mapping);
    /// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Sequence);
    /// assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
    /// ```
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// Returns `true` only for [`ValueKind::Mapping`].
    #[must_use]
    pub const fn is_mapping(self) -> bool {
        matches!(self, Self::Mapping)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}
