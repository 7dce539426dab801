//! The resource object: top-level attributes plus declared schema URIs.

use super::attribute::Attribute;
use super::value::ScalarValue;
use std::collections::BTreeMap;

/// A SCIM resource as an attribute tree.
///
/// Created empty by the caller, populated by the decoder, mutated in place by
/// the validators and read by the encoder. Ownership is strictly top-down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceObject {
    schemas: Vec<String>,
    attributes: BTreeMap<String, Attribute>,
}

impl ResourceObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a schema URI. Already-declared URIs are ignored.
    pub fn set_schema(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        if !self.has_schema(&uri) {
            self.schemas.push(uri);
        }
    }

    /// Declared schema URIs in declaration order.
    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }

    pub fn has_schema(&self, uri: &str) -> bool {
        self.schemas.iter().any(|declared| declared == uri)
    }

    /// Attach a top-level attribute keyed by its name, returning any it replaced.
    pub fn set_attribute(&mut self, attribute: impl Into<Attribute>) -> Option<Attribute> {
        let attribute = attribute.into();
        self.attributes
            .insert(attribute.name().to_string(), attribute)
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.get_mut(name)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Top-level attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// A copy of the present attribute names.
    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }

    /// The resource `id`, when present as a string.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
            .and_then(Attribute::value)
            .and_then(ScalarValue::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
