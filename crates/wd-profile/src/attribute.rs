//! Attribute locations and the base-write seam.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical scope an attribute is written to.
///
/// The materializer forwards the location unchanged; only the receiving
/// store gives it meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeLocation {
    /// Identity attributes of the user.
    Profile,
    /// Attributes of the authentication itself (method, context, factors).
    Authentication,
}

/// Base write operation for attribute stores.
///
/// The materializer mutates a store only through this seam; storage is the
/// implementor's concern. Keys are unique per location and the last write
/// for a key wins.
pub trait AttributeSink {
    /// Sets attribute `name` to `value` at `location`.
    fn set_attribute(&mut self, location: AttributeLocation, name: &str, value: Value);
}
