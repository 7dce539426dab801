//! Removal of client-supplied read-only attributes.

use crate::resource::{Attribute, ResourceObject};
use crate::schema::{AttributeSchema, Mutability, ResourceTypeSchema};

use log::debug;

/// Remove every read-only attribute and sub-attribute from the object.
///
/// Applied to create and replace payloads before they are accepted. Total and
/// idempotent.
pub fn strip_read_only_attributes(object: &mut ResourceObject, schema: &ResourceTypeSchema) {
    for attribute_schema in schema.attributes() {
        if attribute_schema.mutability == Mutability::ReadOnly {
            if object.remove_attribute(&attribute_schema.name).is_some() {
                debug!(
                    "Stripped read-only attribute '{}' from {} payload",
                    attribute_schema.name,
                    schema.name()
                );
            }
        } else if let Some(attribute) = object.attribute_mut(&attribute_schema.name) {
            strip_sub_attributes(attribute_schema, attribute);
        }
    }
}

fn strip_sub_attributes(schema: &AttributeSchema, attribute: &mut Attribute) {
    for element in attribute.complex_elements_mut() {
        for sub_schema in &schema.sub_attributes {
            if sub_schema.mutability == Mutability::ReadOnly {
                if element.remove_sub_attribute(&sub_schema.name).is_some() {
                    debug!(
                        "Stripped read-only sub-attribute '{}.{}'",
                        schema.name, sub_schema.name
                    );
                }
            } else if let Some(sub) = element.sub_attribute_mut(&sub_schema.name) {
                strip_sub_attributes(sub_schema, sub);
            }
        }
    }
}
