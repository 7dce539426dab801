//! Schema registry for loading, managing, and accessing SCIM schemas.
//!
//! The registry owns the schema documents it has loaded and the resource type
//! schemas assembled from them. It ships with the embedded core User and Group
//! resource types.

use super::embedded;
use super::resource_type::{ResourceTypeSchema, SchemaDefinition};
use super::types::{AttributeSchema, validate_attribute_list};
use crate::error::{BuildError, BuildResult};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Registry for SCIM schema documents and resource types.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<String, SchemaDefinition>,
    resource_types: HashMap<String, ResourceTypeSchema>,
    common_attributes: Vec<AttributeSchema>,
}

impl SchemaRegistry {
    /// Create a new schema registry with the embedded core schemas and the
    /// `User` and `Group` resource types.
    pub fn new() -> BuildResult<Self> {
        let common_attributes = Self::load_attributes_from_str(embedded::common_attributes())?;
        let user = Self::load_schema_from_str(embedded::core_user_schema())?;
        let group = Self::load_schema_from_str(embedded::core_group_schema())?;

        let mut registry = Self {
            schemas: HashMap::new(),
            resource_types: HashMap::new(),
            common_attributes,
        };

        let user_type = registry.build_resource_type("User", "Users", &[&user])?;
        let group_type = registry.build_resource_type("Group", "Groups", &[&group])?;

        registry.add_schema(user);
        registry.add_schema(group);
        registry.register_resource_type(user_type);
        registry.register_resource_type(group_type);

        Ok(registry)
    }

    /// Load a schema document from a JSON file.
    pub fn load_schema_from_file<P: AsRef<Path>>(path: P) -> BuildResult<SchemaDefinition> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| BuildError::InvalidSchemaJson {
                message: format!("{}: {}", path.as_ref().display(), e),
            })?;
        Self::load_schema_from_str(&content)
    }

    /// Load a schema document from a JSON string.
    pub fn load_schema_from_str(content: &str) -> BuildResult<SchemaDefinition> {
        SchemaDefinition::from_json_str(content)
    }

    fn load_attributes_from_str(content: &str) -> BuildResult<Vec<AttributeSchema>> {
        let attributes: Vec<AttributeSchema> =
            serde_json::from_str(content).map_err(|e| BuildError::InvalidSchemaJson {
                message: e.to_string(),
            })?;
        validate_attribute_list(&attributes)?;
        Ok(attributes)
    }

    /// Assemble a resource type from the common attributes and schema documents.
    pub fn build_resource_type(
        &self,
        name: &str,
        endpoint: &str,
        definitions: &[&SchemaDefinition],
    ) -> BuildResult<ResourceTypeSchema> {
        ResourceTypeSchema::from_definitions(name, endpoint, &self.common_attributes, definitions)
    }

    /// Add a schema document to the registry, replacing one with the same id.
    pub fn add_schema(&mut self, schema: SchemaDefinition) {
        self.schemas.insert(schema.id.clone(), schema);
    }

    /// Register a resource type, replacing one with the same name.
    pub fn register_resource_type(&mut self, resource_type: ResourceTypeSchema) {
        self.resource_types
            .insert(resource_type.name().to_string(), resource_type);
    }

    /// Get all loaded schema documents.
    pub fn get_schemas(&self) -> Vec<&SchemaDefinition> {
        self.schemas.values().collect()
    }

    /// Get a schema document by id.
    pub fn get_schema(&self, id: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(id)
    }

    /// Get a resource type by name.
    pub fn get_resource_type(&self, name: &str) -> Option<&ResourceTypeSchema> {
        self.resource_types.get(name)
    }

    /// Get all registered resource types.
    pub fn get_resource_types(&self) -> Vec<&ResourceTypeSchema> {
        self.resource_types.values().collect()
    }

    /// The common attributes prepended to every resource type.
    pub fn common_attributes(&self) -> &[AttributeSchema] {
        &self.common_attributes
    }

    /// The core `User` resource type.
    pub fn user_resource_type(&self) -> &ResourceTypeSchema {
        &self.resource_types["User"]
    }

    /// The core `Group` resource type.
    pub fn group_resource_type(&self) -> &ResourceTypeSchema {
        &self.resource_types["Group"]
    }
}
