//! The flat user profile.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attribute::{AttributeLocation, AttributeSink};

/// A flat key-value identity record built from provider-supplied
/// attributes.
///
/// Keys are unique per location; the last write for a key wins. A profile
/// is built once per authenticated session and mutated incrementally while
/// attributes are ingested. Mutation must stay confined to one logical
/// request; the profile carries no internal locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Subject identifier, once one has been established.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    id: Option<String>,

    /// Identity attributes.
    #[serde(default)]
    attributes: HashMap<String, Value>,

    /// Authentication-context attributes.
    #[serde(default)]
    authentication_attributes: HashMap<String, Value>,
}

impl Profile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the subject identifier, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the subject identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Returns the identity attribute `name`, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns the authentication-context attribute `name`, if present.
    #[must_use]
    pub fn authentication_attribute(&self, name: &str) -> Option<&Value> {
        self.authentication_attributes.get(name)
    }

    /// Returns all attributes at `location`.
    #[must_use]
    pub const fn attributes(&self, location: AttributeLocation) -> &HashMap<String, Value> {
        match location {
            AttributeLocation::Profile => &self.attributes,
            AttributeLocation::Authentication => &self.authentication_attributes,
        }
    }

    /// Removes the attribute `name` at `location`, returning its value.
    pub fn remove_attribute(
        &mut self,
        location: AttributeLocation,
        name: &str,
    ) -> Option<Value> {
        match location {
            AttributeLocation::Profile => self.attributes.remove(name),
            AttributeLocation::Authentication => self.authentication_attributes.remove(name),
        }
    }
}

impl AttributeSink for Profile {
    fn set_attribute(&mut self, location: AttributeLocation, name: &str, value: Value) {
        let map = match location {
            AttributeLocation::Profile => &mut self.attributes,
            AttributeLocation::Authentication => &mut self.authentication_attributes,
        };
        map.insert(name.to_string(), value);
    }
}
