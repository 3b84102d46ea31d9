//! Error types produced by merge and conversion operations.

use serde_json::Value;
use thiserror::Error;

use crate::value::ValueKind;

/// Result alias used throughout the crate.
pub type MergeResult<T> = Result<T, MergeError>;

/// Position an offending value occupied when an operation rejected it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MergeRole {
    /// The base argument of a merge.
    Base,
    /// The overlay argument of a merge.
    Overlay,
    /// A layer pushed onto a [`crate::MergeStack`].
    Layer,
    /// A typed value serialised for merging.
    Struct,
}

impl std::fmt::Display for MergeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Base => "base argument",
            Self::Overlay => "overlay argument",
            Self::Layer => "pushed layer",
            Self::Struct => "serialised value",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while merging or converting dynamic values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// A value that must be a mapping held some other kind.
    #[error("the {role} must be a mapping, but a {kind} was supplied")]
    NotAMapping {
        /// Position the value occupied in the failed call.
        role: MergeRole,
        /// Kind the value actually held.
        kind: ValueKind,
    },

    /// A typed value could not be serialised into the dynamic representation.
    #[error("failed to serialise value for merging: {source}")]
    Serialize {
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },

    /// A merged mapping could not be deserialised into the requested type.
    #[error("failed to deserialise merged mapping: {source}")]
    Deserialize {
        /// Underlying deserialisation error.
        #[source]
        source: serde_json::Error,
    },
}

impl MergeError {
    /// Construct a [`MergeError::NotAMapping`] for `value` at `role`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deep_merge::{MergeError, MergeRole};
    /// use serde_json::json;
    ///
    /// let err = MergeError::not_a_mapping(MergeRole::Base, &json!([1, 2]));
    /// assert_eq!(
    ///     err.to_string(),
    ///     "the base argument must be a mapping, but a sequence was supplied",
    /// );
    /// ```
    #[must_use]
    pub fn not_a_mapping(role: MergeRole, value: &Value) -> Self {
        Self::NotAMapping {
            role,
            kind: ValueKind::of(value),
        }
    }

    /// Construct a serialisation failure from a [`serde_json::Error`].
    #[must_use]
    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }

    /// Construct a deserialisation failure from a [`serde_json::Error`].
    #[must_use]
    pub fn deserialize(source: serde_json::Error) -> Self {
        Self::Deserialize { source }
    }
}
