//! Error types for SCIM protocol core operations.
//!
//! Every fallible operation in this crate returns [`ScimResult`]. Errors carry a
//! human-readable detail string and, for caller errors, a machine-readable
//! [`ScimType`] reason code as defined by RFC 7644.

use serde::{Deserialize, Serialize};

/// Main error type for SCIM core operations.
///
/// Decoding, validation and filter parsing either succeed completely or fail
/// with one of these variants; there is no partial success.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// The request body or a request parameter violates the expected grammar
    /// or the schema-declared JSON kind of an attribute
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    /// A required attribute or sub-attribute is absent
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Filter expression could not be parsed
    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    /// An update attempted to change the value of an immutable attribute
    #[error("Attribute '{attribute}' is immutable and cannot be modified")]
    MutabilityViolation { attribute: String },

    /// The resource's schema URIs don't match its resource type
    #[error("Schema inconsistency: {message}")]
    SchemaInconsistency { message: String },

    /// Internal defects such as a schema that contradicts the attribute built from it
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Resource not found in the storage provider
    #[error("Resource not found: {resource_type} with ID {id}")]
    ResourceNotFound { resource_type: String, id: String },

    /// The storage provider refused to create a duplicate resource
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Errors from the user-provided resource provider
    #[error("Resource provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// SCIM `scimType` reason codes carried by client errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScimType {
    /// Request body structure was invalid or did not conform to the schema
    InvalidSyntax,
    /// A required value was missing or a value was not compatible
    InvalidValue,
    /// Filter syntax was invalid or the operator is not supported
    InvalidFilter,
    /// The attempted modification is not compatible with the attribute's mutability
    Mutability,
    /// One or more unique attribute values are already in use
    Uniqueness,
}

impl ScimType {
    /// The wire token for this reason code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScimType::InvalidSyntax => "invalidSyntax",
            ScimType::InvalidValue => "invalidValue",
            ScimType::InvalidFilter => "invalidFilter",
            ScimType::Mutability => "mutability",
            ScimType::Uniqueness => "uniqueness",
        }
    }
}

impl std::fmt::Display for ScimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building schemas.
///
/// These are configuration mistakes and should surface during development
/// rather than in response to user input.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Schema document is not valid JSON or doesn't match the schema format
    #[error("Invalid schema document: {message}")]
    InvalidSchemaJson { message: String },

    /// An attribute was declared without a name
    #[error("Attribute name cannot be empty")]
    EmptyAttributeName,

    /// Two attributes with the same name at the same level
    #[error("Duplicate attribute '{name}'")]
    DuplicateAttribute { name: String },

    /// Only complex attributes may carry sub-attributes
    #[error("Attribute '{name}' is not complex but declares sub-attributes")]
    UnexpectedSubAttributes { name: String },

    /// A complex attribute must declare its sub-attributes
    #[error("Complex attribute '{name}' declares no sub-attributes")]
    MissingSubAttributes { name: String },

    /// A resource type must name at least one schema URI
    #[error("Resource type '{resource_type}' declares no schema URIs")]
    EmptySchemaList { resource_type: String },

    /// Schema URI listed twice for one resource type
    #[error("Duplicate schema URI: {uri}")]
    DuplicateSchemaUri { uri: String },
}

// Convenience methods for creating common errors
impl ScimError {
    /// Create a malformed request error
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an invalid filter error
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    /// Create a mutability violation error
    pub fn mutability_violation(attribute: impl Into<String>) -> Self {
        Self::MutabilityViolation {
            attribute: attribute.into(),
        }
    }

    /// Create a schema inconsistency error
    pub fn schema_inconsistency(message: impl Into<String>) -> Self {
        Self::SchemaInconsistency {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a resource not found error
    pub fn resource_not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Wrap a provider error
    pub fn provider_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Provider(Box::new(error))
    }

    /// The SCIM reason code for this error, if it is a caller error.
    pub fn scim_type(&self) -> Option<ScimType> {
        match self {
            ScimError::MalformedRequest { .. } => Some(ScimType::InvalidSyntax),
            ScimError::MissingRequiredAttribute { .. } => Some(ScimType::InvalidValue),
            ScimError::InvalidFilter { .. } => Some(ScimType::InvalidFilter),
            ScimError::MutabilityViolation { .. } => Some(ScimType::Mutability),
            ScimError::Conflict { .. } => Some(ScimType::Uniqueness),
            _ => None,
        }
    }

    /// Whether the error was caused by the caller rather than a server defect.
    pub fn is_client_error(&self) -> bool {
        self.scim_type().is_some() || matches!(self, ScimError::ResourceNotFound { .. })
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type BuildResult<T> = Result<T, BuildError>;
