//! Deep copy and recursive overlay merging for dynamic values.
//!
//! The crate operates on [`serde_json::Value`] trees, the closed union of
//! mappings, sequences, and leaf scalars. Two primitives do the work:
//! [`deep_copy_value`] produces a fully independent clone of any value, and
//! [`deep_merge`] combines two mappings, recursing where both sides hold a
//! mapping and replacing wholesale everywhere else. Sequences are atomic for
//! merge purposes: they are never concatenated or merged element by element.
//!
//! [`MergeStack`] folds an ordered run of overlay layers into one mapping,
//! and [`merge_structs`] applies the same semantics to typed values by
//! round-tripping through the dynamic representation.
//!
//! # Example
//!
//! ```rust
//! use deep_merge::deep_merge;
//! use serde_json::json;
//!
//! let base = json!({"map": {"key": "value", "baz": "foo"}, "port": 80});
//! let overlay = json!({"map": {"key": "other", "foo": "baz"}});
//! let merged = deep_merge(&base, &overlay)?;
//! assert_eq!(
//!     merged,
//!     json!({"map": {"key": "other", "baz": "foo", "foo": "baz"}, "port": 80}),
//! );
//! # Ok::<_, deep_merge::MergeError>(())
//! ```

mod convert;
mod copy;
mod error;
mod merge;
mod stack;
mod value;

pub use convert::{from_mapping, merge_structs, to_mapping};
pub use copy::{copy_mapping, copy_sequence, deep_copy_value};
pub use error::{MergeError, MergeResult, MergeRole};
pub use merge::{deep_merge, merge_mappings};
pub use stack::MergeStack;
pub use value::ValueKind;
