//! Core schema type definitions for SCIM resources.
//!
//! This module contains the data structures that describe attributes and their
//! characteristics as specified in RFC 7643. They are pure data: the decoder,
//! the validators and the attribute-construction step read them, nothing
//! mutates them after construction.

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Definition of a SCIM attribute.
///
/// Only [`DataType::Complex`] attributes carry sub-attributes; every other
/// type is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSchema {
    /// Attribute name
    pub name: String,
    /// Data type of the attribute
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Whether this attribute can have multiple values
    #[serde(default)]
    pub multi_valued: bool,
    /// Whether this attribute is required
    #[serde(default)]
    pub required: bool,
    /// Mutability characteristics
    #[serde(default)]
    pub mutability: Mutability,
    /// How the attribute is returned in responses
    #[serde(default)]
    pub returned: Returned,
    /// Sub-attributes for complex types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_attributes: Vec<AttributeSchema>,
}

/// The structural shape an attribute takes on the wire and in the attribute tree.
///
/// This is the one place the (data type, multi-valued) pair is turned into a
/// decision about nesting; decoder, validators and attribute construction all
/// dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeShape {
    /// A single scalar value
    Simple,
    /// A JSON array of scalars
    PrimitiveMultiValued,
    /// A JSON object of sub-attributes
    Complex,
    /// A JSON array of objects, each holding sub-attributes
    ComplexMultiValued,
}

impl AttributeSchema {
    /// Create a single-valued, optional, read-write attribute.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            multi_valued: false,
            required: false,
            mutability: Mutability::ReadWrite,
            returned: Returned::Default,
            sub_attributes: Vec::new(),
        }
    }

    /// Create a complex attribute with the given sub-attributes.
    pub fn complex(name: impl Into<String>, sub_attributes: Vec<AttributeSchema>) -> Self {
        Self {
            sub_attributes,
            ..Self::new(name, DataType::Complex)
        }
    }

    /// Mark the attribute as multi-valued.
    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// Mark the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    pub fn with_returned(mut self, returned: Returned) -> Self {
        self.returned = returned;
        self
    }

    /// Structural shape implied by the data type and multi-valued flag.
    pub fn shape(&self) -> AttributeShape {
        match (self.data_type == DataType::Complex, self.multi_valued) {
            (false, false) => AttributeShape::Simple,
            (false, true) => AttributeShape::PrimitiveMultiValued,
            (true, false) => AttributeShape::Complex,
            (true, true) => AttributeShape::ComplexMultiValued,
        }
    }

    /// Look up a direct sub-attribute by name.
    pub fn sub_attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.sub_attributes.iter().find(|sub| sub.name == name)
    }

    /// Check the structural invariants of this attribute and its sub-attributes.
    pub fn validate(&self) -> BuildResult<()> {
        if self.name.trim().is_empty() {
            return Err(BuildError::EmptyAttributeName);
        }

        match self.data_type {
            DataType::Complex if self.sub_attributes.is_empty() => {
                Err(BuildError::MissingSubAttributes {
                    name: self.name.clone(),
                })
            }
            DataType::Complex => validate_attribute_list(&self.sub_attributes),
            _ if !self.sub_attributes.is_empty() => Err(BuildError::UnexpectedSubAttributes {
                name: self.name.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// Validate a sibling list of attributes: unique names, each well formed.
pub(crate) fn validate_attribute_list(attributes: &[AttributeSchema]) -> BuildResult<()> {
    let mut seen = HashSet::new();
    for attribute in attributes {
        attribute.validate()?;
        if !seen.insert(attribute.name.as_str()) {
            return Err(BuildError::DuplicateAttribute {
                name: attribute.name.clone(),
            });
        }
    }
    Ok(())
}

/// SCIM attribute data types.
///
/// Represents the valid data types for SCIM attributes as defined in RFC 7643.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    /// String value
    String,
    /// Boolean value
    Boolean,
    /// Binary data (base64 encoded on the wire)
    Binary,
    /// DateTime in RFC3339 format
    DateTime,
    /// Decimal number
    Decimal,
    /// Integer number
    Integer,
    /// URI reference
    Reference,
    /// Complex attribute with sub-attributes
    Complex,
}

impl DataType {
    /// The SCIM schema token for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Binary => "binary",
            DataType::DateTime => "dateTime",
            DataType::Decimal => "decimal",
            DataType::Integer => "integer",
            DataType::Reference => "reference",
            DataType::Complex => "complex",
        }
    }
}

impl Default for DataType {
    fn default() -> Self {
        Self::String
    }
}

/// Attribute mutability characteristics.
///
/// Defines whether and how an attribute can be modified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Mutability {
    /// Read-only attribute (managed by server)
    ReadOnly,
    /// Read-write attribute (can be modified by clients)
    ReadWrite,
    /// Immutable attribute (set once, never modified)
    Immutable,
    /// Write-only attribute (passwords, etc.)
    WriteOnly,
}

impl Default for Mutability {
    fn default() -> Self {
        Self::ReadWrite
    }
}

/// When an attribute is returned in a response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Returned {
    /// Always returned, regardless of request parameters
    Always,
    /// Never returned
    Never,
    /// Returned unless excluded
    Default,
    /// Returned only when explicitly requested
    Request,
}

impl Default for Returned {
    fn default() -> Self {
        Self::Default
    }
}
