//! Conversion between wire JSON and the attribute model.
//!
//! # Examples
//!
//! ```rust
//! use scim_core::codec::{decode_resource, encode_value};
//! use scim_core::resource::ResourceObject;
//! use scim_core::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let user = decode_resource(
//!     r#"{"userName": "bjensen", "emails": [{"value": "bjensen@example.com", "type": "work"}]}"#,
//!     registry.user_resource_type(),
//!     ResourceObject::new(),
//! )?;
//!
//! let json = encode_value(&user);
//! assert_eq!(json["userName"], "bjensen");
//! assert_eq!(json["emails"][0]["type"], "work");
//! # Ok(())
//! # }
//! ```

pub mod decoder;
pub mod encoder;


pub use decoder::{decode_resource, decode_value};
pub use encoder::{encode_resource, encode_value};
