//! Resource type schemas and the SCIM schema documents they are assembled from.

use super::types::{AttributeSchema, validate_attribute_list};
use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A SCIM schema document.
///
/// Represents one schema (such as the core User schema) with its metadata and
/// attribute definitions, in the JSON format published by RFC 7643.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Unique schema identifier (URI)
    pub id: String,
    /// Human-readable schema name
    pub name: String,
    /// Schema description
    #[serde(default)]
    pub description: String,
    /// List of attribute definitions
    pub attributes: Vec<AttributeSchema>,
}

impl SchemaDefinition {
    /// Parse a schema document from JSON text and check its attribute invariants.
    pub fn from_json_str(content: &str) -> BuildResult<Self> {
        let definition: SchemaDefinition =
            serde_json::from_str(content).map_err(|e| BuildError::InvalidSchemaJson {
                message: e.to_string(),
            })?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check the schema id and every attribute definition.
    pub fn validate(&self) -> BuildResult<()> {
        if !(self.id.starts_with("urn:") || self.id.starts_with("http")) {
            return Err(BuildError::InvalidSchemaJson {
                message: format!("schema id '{}' is not a URI", self.id),
            });
        }
        validate_attribute_list(&self.attributes)
    }
}

/// Static description of one resource type.
///
/// An ordered list of attribute schemas plus the schema URIs a conforming
/// resource must declare. Immutable after construction and safe to share
/// across concurrent decode and validate calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTypeSchema {
    name: String,
    endpoint: String,
    schemas: Vec<String>,
    attributes: Vec<AttributeSchema>,
}

impl ResourceTypeSchema {
    /// Build a resource type schema, checking the structural invariants.
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        schemas: Vec<String>,
        attributes: Vec<AttributeSchema>,
    ) -> BuildResult<Self> {
        let name = name.into();
        if schemas.is_empty() {
            return Err(BuildError::EmptySchemaList {
                resource_type: name,
            });
        }

        let mut seen = HashSet::new();
        for uri in &schemas {
            if !seen.insert(uri.as_str()) {
                return Err(BuildError::DuplicateSchemaUri { uri: uri.clone() });
            }
        }

        validate_attribute_list(&attributes)?;

        Ok(Self {
            name,
            endpoint: endpoint.into(),
            schemas,
            attributes,
        })
    }

    /// Assemble a resource type from shared common attributes and schema documents.
    ///
    /// Attributes appear in order: common attributes first, then each schema's.
    pub fn from_definitions(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        common_attributes: &[AttributeSchema],
        definitions: &[&SchemaDefinition],
    ) -> BuildResult<Self> {
        let schemas = definitions.iter().map(|d| d.id.clone()).collect();
        let attributes = common_attributes
            .iter()
            .chain(definitions.iter().flat_map(|d| d.attributes.iter()))
            .cloned()
            .collect();
        Self::new(name, endpoint, schemas, attributes)
    }

    /// Resource type name, e.g. "User".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoint the resource type is served at, e.g. "Users".
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Schema URIs a conforming resource must declare.
    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }

    /// Top-level attribute schemas in declaration order.
    pub fn attributes(&self) -> &[AttributeSchema] {
        &self.attributes
    }

    /// Look up a top-level attribute schema by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }
}
