//! Flattening of nested provider attributes.
//!
//! Identity providers return claim values of unknown shape: scalars, lists,
//! and nested objects of arbitrary depth. The materializer walks such a
//! value and writes every nested key as a top-level attribute on the target
//! store, optionally retaining the original composite value under its
//! original key.

use serde_json::{Map, Value};

use crate::attribute::{AttributeLocation, AttributeSink};
use crate::error::{ProfileError, Result};

/// Recursion ceiling for nested attribute values.
///
/// Provider claim trees nest one or two levels in practice; anything
/// deeper is treated as pathological input and refused.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Flattens nested attribute values into a flat attribute store.
///
/// Nested object entries become top-level attributes at the same location,
/// losing their namespace prefix. With `keep_nested_attributes` set (the
/// default), the original composite value is additionally retained under
/// its original key, so callers see both the flattened children and the
/// nested shape.
///
/// The flag is fixed at construction; a materializer is immutable
/// afterwards and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct AttributeMaterializer {
    keep_nested_attributes: bool,
}

impl Default for AttributeMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeMaterializer {
    /// Creates a materializer that retains nested attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keep_nested_attributes: true,
        }
    }

    /// Sets whether original nested values are retained alongside their
    /// flattened children.
    #[must_use]
    pub const fn with_keep_nested_attributes(mut self, keep: bool) -> Self {
        self.keep_nested_attributes = keep;
        self
    }

    /// Returns whether nested attributes are retained.
    #[must_use]
    pub const fn keep_nested_attributes(&self) -> bool {
        self.keep_nested_attributes
    }

    /// Converts `value` and adds it to `sink` under `name` at `location`.
    ///
    /// Object values are flattened recursively: every nested key becomes a
    /// top-level attribute at `location`. Scalars, arrays, and nulls are
    /// written through unchanged. Key collisions are not an error; the
    /// sink's last-write-wins semantics resolve them.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NestingTooDeep`] when `value` nests deeper
    /// than [`MAX_NESTING_DEPTH`].
    pub fn convert_and_add(
        &self,
        sink: &mut dyn AttributeSink,
        location: AttributeLocation,
        name: &str,
        value: Value,
    ) -> Result<()> {
        self.convert_and_add_at_depth(sink, location, name, value, 0)
    }

    /// Materializes every entry of a decoded claim map.
    ///
    /// Equivalent to calling [`convert_and_add`](Self::convert_and_add) for
    /// each top-level claim, in the map's order.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NestingTooDeep`] when any claim value nests
    /// deeper than [`MAX_NESTING_DEPTH`].
    pub fn materialize_map(
        &self,
        sink: &mut dyn AttributeSink,
        location: AttributeLocation,
        claims: Map<String, Value>,
    ) -> Result<()> {
        for (name, value) in claims {
            self.convert_and_add(sink, location, &name, value)?;
        }
        Ok(())
    }

    fn convert_and_add_at_depth(
        &self,
        sink: &mut dyn AttributeSink,
        location: AttributeLocation,
        name: &str,
        value: Value,
        depth: usize,
    ) -> Result<()> {
        match value {
            Value::Object(entries) => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(ProfileError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                    });
                }

                tracing::debug!(name, entries = entries.len(), "flattening nested attribute");

                // Children first, then the retained parent; last write wins
                // on collisions.
                for (key, nested) in &entries {
                    self.convert_and_add_at_depth(sink, location, key, nested.clone(), depth + 1)?;
                }

                if self.keep_nested_attributes {
                    sink.set_attribute(location, name, Value::Object(entries));
                }

                Ok(())
            }
            other => {
                sink.set_attribute(location, name, other);
                Ok(())
            }
        }
    }
}
