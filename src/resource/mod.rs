//! Attribute model for SCIM resources.
//!
//! The runtime value tree the decoder builds, the validators mutate and the
//! encoder serializes. An [`Attribute`] is Simple, Complex or MultiValued; a
//! [`ResourceObject`] holds the top-level attributes and the declared schema
//! URIs.

pub mod attribute;
pub mod factory;
pub mod object;
pub mod value;
pub mod version;

pub use attribute::{
    Attribute, ComplexAttribute, DEFAULT_ELEMENT_TOKEN, MultiValuedAttribute, MultiValues,
    SimpleAttribute, composite_element_name,
};
pub use factory::{create_attribute, create_element};
pub use object::ResourceObject;
pub use value::ScalarValue;
pub use version::ResourceVersion;
