//! Ordered stacks of overlay mappings.

use serde_json::{Map, Value};

use crate::error::{MergeError, MergeResult, MergeRole};
use crate::merge::merge_mappings;

/// Accumulates mapping layers and collapses them into one merged mapping.
///
/// Layers apply in push order, so later layers take precedence over earlier
/// ones under the usual tie-break rule: mappings merge recursively and
/// everything else replaces wholesale.
///
/// # Examples
///
/// ```rust
/// use deep_merge::MergeStack;
/// use serde_json::{Value, json};
///
/// let mut stack = MergeStack::new();
/// stack.push_value(json!({"host": "localhost", "limits": {"cpu": 1}}))?;
/// stack.push_value(json!({"limits": {"memory": 2}}))?;
/// stack.push_value(json!({"host": "example.net"}))?;
///
/// let merged = stack.collapse();
/// assert_eq!(
///     Value::Object(merged),
///     json!({"host": "example.net", "limits": {"cpu": 1, "memory": 2}}),
/// );
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MergeStack {
    layers: Vec<Map<String, Value>>,
}

impl MergeStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a stack with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a mapping layer.
    pub fn push(&mut self, layer: Map<String, Value>) {
        self.layers.push(layer);
    }

    /// Push a dynamic value expected to hold a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::NotAMapping`] when `layer` holds any other
    /// kind; the stack is left unchanged.
    pub fn push_value(&mut self, layer: Value) -> MergeResult<()> {
        match layer {
            Value::Object(mapping) => {
                self.layers.push(mapping);
                Ok(())
            }
            other => Err(MergeError::not_a_mapping(MergeRole::Layer, &other)),
        }
    }

    /// Number of layers currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when no layers have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Collapse the stack into a single mapping, later layers winning.
    ///
    /// An empty stack collapses to an empty mapping.
    #[must_use]
    pub fn collapse(self) -> Map<String, Value> {
        tracing::trace!(layers = self.layers.len(), "collapsing merge stack");
        self.layers
            .into_iter()
            .fold(Map::new(), |merged, layer| merge_mappings(&merged, &layer))
    }
}

impl IntoIterator for MergeStack {
    type Item = Map<String, Value>;
    type IntoIter = std::vec::IntoIter<Map<String, Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

impl Extend<Map<String, Value>> for MergeStack {
    fn extend<I: IntoIterator<Item = Map<String, Value>>>(&mut self, layers: I) {
        self.layers.extend(layers);
    }
}
