//! Required-attribute and schema-list checks.

use crate::error::{ScimError, ScimResult};
use crate::resource::{Attribute, ComplexAttribute, ResourceObject};
use crate::schema::{AttributeSchema, ResourceTypeSchema};

/// Fail if any required attribute is absent.
///
/// Required sub-attributes must be present in a complex attribute and in every
/// element of a multi-valued complex attribute, when the parent is present.
/// The error names the dotted path of the first missing attribute.
pub fn validate_required_attributes(
    object: &ResourceObject,
    schema: &ResourceTypeSchema,
) -> ScimResult<()> {
    for attribute_schema in schema.attributes() {
        match object.attribute(&attribute_schema.name) {
            Some(attribute) => check_sub_attributes(attribute_schema, attribute)?,
            None if attribute_schema.required => {
                return Err(ScimError::missing_required(attribute_schema.name.as_str()));
            }
            None => {}
        }
    }
    Ok(())
}

fn check_sub_attributes(schema: &AttributeSchema, attribute: &Attribute) -> ScimResult<()> {
    for element in attribute.complex_elements() {
        check_element(schema, element)?;
    }
    Ok(())
}

fn check_element(schema: &AttributeSchema, element: &ComplexAttribute) -> ScimResult<()> {
    for sub_schema in &schema.sub_attributes {
        match element.sub_attribute(&sub_schema.name) {
            Some(sub) => check_sub_attributes(sub_schema, sub)
                .map_err(|e| prefix_path(&schema.name, e))?,
            None if sub_schema.required => {
                return Err(ScimError::missing_required(format!(
                    "{}.{}",
                    schema.name, sub_schema.name
                )));
            }
            None => {}
        }
    }
    Ok(())
}

fn prefix_path(parent: &str, error: ScimError) -> ScimError {
    match error {
        ScimError::MissingRequiredAttribute { attribute } => {
            ScimError::missing_required(format!("{}.{}", parent, attribute))
        }
        other => other,
    }
}

/// Fail if the object does not declare every schema URI of its resource type.
pub fn validate_schema_list(object: &ResourceObject, schema: &ResourceTypeSchema) -> ScimResult<()> {
    match schema.schemas().iter().find(|uri| !object.has_schema(uri)) {
        Some(missing) => Err(ScimError::schema_inconsistency(format!(
            "{} resource does not declare schema '{}'",
            schema.name(),
            missing
        ))),
        None => Ok(()),
    }
}
