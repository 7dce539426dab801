//! SCIM 2.0 protocol core for Rust.
//!
//! A schema-driven attribute model plus the algorithms that move resources
//! between wire JSON and that model, enforce schema contracts, and parse
//! filter queries. Transport, persistence and authentication live elsewhere.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - Resource type schemas, with the core User and Group built in
//! - [`ResourceObject`] - The runtime attribute tree of one resource
//! - [`codec`] - JSON decoding and encoding driven by a resource type schema
//! - [`validation`] - Required, mutability and return-policy enforcement
//! - [`filter`] - Filter tokenizer and parser producing a [`FilterNode`] tree
//! - [`ResourceProvider`] - Trait for implementing storage backends
//!
//! # Quick Start
//!
//! ```rust
//! use scim_core::{ResourceObject, ScimCoreConfig, SchemaRegistry};
//! use scim_core::codec::{decode_resource, encode_value};
//! use scim_core::validation::{filter_on_return, validate_created_object};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let user_type = registry.user_resource_type();
//!
//! let mut user = decode_resource(
//!     r#"{"userName": "bjensen", "password": "t1meMa$heen"}"#,
//!     user_type,
//!     ResourceObject::new(),
//! )?;
//! validate_created_object(&mut user, user_type, &ScimCoreConfig::default())?;
//! filter_on_return(&mut user, user_type, None, None);
//!
//! let json = encode_value(&user);
//! assert_eq!(json["userName"], "bjensen");
//! assert!(json.get("password").is_none());
//! assert!(json["id"].is_string());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod providers;
pub mod resource;
pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::ScimCoreConfig;
pub use error::{BuildError, BuildResult, ScimError, ScimResult, ScimType};
pub use filter::{FilterNode, parse_filter};
pub use providers::{ListQuery, ResourceProvider};
pub use resource::{Attribute, ResourceObject, ScalarValue};
pub use schema::{AttributeSchema, ResourceTypeSchema, SchemaRegistry};
pub use validation::AttributeSelection;
