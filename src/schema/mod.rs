//! Schema model for SCIM resources.
//!
//! Static, read-only descriptions of resource types: attribute schemas with
//! their data type, cardinality, required flag, mutability and return policy,
//! grouped into resource type schemas. The decoder and the validators are
//! driven entirely by these descriptions.
//!
//! # Key Types
//!
//! - [`AttributeSchema`] - Individual attribute specification
//! - [`ResourceTypeSchema`] - Ordered attributes plus required schema URIs
//! - [`SchemaRegistry`] - Embedded core schemas and registered resource types
//!
//! # Examples
//!
//! ```rust
//! use scim_core::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let user_type = registry.user_resource_type();
//! assert!(user_type.attribute("userName").unwrap().required);
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod resource_type;
pub mod types;


// Re-export the main types for convenience
pub use embedded::{GROUP_SCHEMA_URI, USER_SCHEMA_URI};
pub use registry::SchemaRegistry;
pub use resource_type::{ResourceTypeSchema, SchemaDefinition};
pub use types::{AttributeSchema, AttributeShape, DataType, Mutability, Returned};
