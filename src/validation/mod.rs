//! Schema-driven validation of resource objects.
//!
//! Stateless operations over a [`ResourceObject`](crate::resource::ResourceObject)
//! and its [`ResourceTypeSchema`](crate::schema::ResourceTypeSchema). None of them
//! re-parses JSON. A resource passes through them in order:
//! read-only stripping, required and schema-list checks, mutability
//! enforcement on update, and return filtering before encoding.
//!
//! # Examples
//!
//! ```rust
//! use scim_core::codec::decode_resource;
//! use scim_core::resource::ResourceObject;
//! use scim_core::schema::SchemaRegistry;
//! use scim_core::validation::{filter_on_return, validate_required_attributes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let user_type = registry.user_resource_type();
//! let mut user = decode_resource(
//!     r#"{"userName": "bjensen", "password": "t1meMa$heen"}"#,
//!     user_type,
//!     ResourceObject::new(),
//! )?;
//!
//! validate_required_attributes(&user, user_type)?;
//! filter_on_return(&mut user, user_type, None, None);
//! assert!(!user.contains_attribute("password"));
//! # Ok(())
//! # }
//! ```

pub mod mutability;
pub mod read_only;
pub mod required;
pub mod returned;
pub mod server;

pub use mutability::enforce_mutability_on_update;
pub use read_only::strip_read_only_attributes;
pub use required::{validate_required_attributes, validate_schema_list};
pub use returned::{AttributeSelection, apply_return_policy, filter_on_return};
pub use server::{content_version, validate_created_object, validate_updated_object};
