//! Central attribute-construction step.
//!
//! Every attribute the decoder produces passes through [`create_attribute`]
//! before it is attached to its parent. A mismatch between the attribute and
//! the schema it was built from is a defect in the caller, never user input,
//! and is reported as an internal error.

use super::attribute::{Attribute, ComplexAttribute, MultiValues};
use crate::error::{ScimError, ScimResult};
use crate::schema::{AttributeSchema, AttributeShape, DataType};

/// Check an attribute against its schema and hand it back for attachment.
pub fn create_attribute(schema: &AttributeSchema, attribute: Attribute) -> ScimResult<Attribute> {
    if attribute.name() != schema.name {
        return Err(ScimError::internal(format!(
            "Attribute '{}' was built from schema '{}'",
            attribute.name(),
            schema.name
        )));
    }

    check_shape(schema, &attribute)?;
    Ok(attribute)
}

/// Check a complex element of a multi-valued attribute against its schema.
///
/// Elements carry their composite element name, so only the shape is checked.
pub fn create_element(
    schema: &AttributeSchema,
    element: ComplexAttribute,
) -> ScimResult<ComplexAttribute> {
    if schema.shape() != AttributeShape::ComplexMultiValued {
        return Err(shape_mismatch(schema, "a multi-valued element"));
    }
    check_complex(schema, &element)?;
    Ok(element)
}

fn check_shape(schema: &AttributeSchema, attribute: &Attribute) -> ScimResult<()> {
    match (schema.shape(), attribute) {
        (AttributeShape::Simple, Attribute::Simple(simple)) => {
            check_data_type(schema, simple.value.data_type())
        }
        (AttributeShape::Complex, Attribute::Complex(complex)) => check_complex(schema, complex),
        (AttributeShape::PrimitiveMultiValued, Attribute::MultiValued(multi)) => {
            match &multi.values {
                MultiValues::Primitive(values) => values
                    .iter()
                    .try_for_each(|value| check_data_type(schema, value.data_type())),
                MultiValues::Complex(_) => Err(shape_mismatch(schema, "complex elements")),
            }
        }
        (AttributeShape::ComplexMultiValued, Attribute::MultiValued(multi)) => {
            match &multi.values {
                MultiValues::Complex(elements) => elements
                    .iter()
                    .try_for_each(|element| check_complex(schema, element)),
                MultiValues::Primitive(values) if values.is_empty() => Ok(()),
                MultiValues::Primitive(_) => Err(shape_mismatch(schema, "scalar elements")),
            }
        }
        (_, Attribute::Simple(_)) => Err(shape_mismatch(schema, "a simple value")),
        (_, Attribute::Complex(_)) => Err(shape_mismatch(schema, "a complex value")),
        (_, Attribute::MultiValued(_)) => Err(shape_mismatch(schema, "a multi-valued value")),
    }
}

fn check_complex(schema: &AttributeSchema, complex: &ComplexAttribute) -> ScimResult<()> {
    for sub in complex.sub_attributes() {
        let sub_schema = schema.sub_attribute(sub.name()).ok_or_else(|| {
            ScimError::internal(format!(
                "Sub-attribute '{}' is not declared by '{}'",
                sub.name(),
                schema.name
            ))
        })?;
        check_shape(sub_schema, sub)?;
    }
    Ok(())
}

fn check_data_type(schema: &AttributeSchema, actual: DataType) -> ScimResult<()> {
    if actual == schema.data_type {
        Ok(())
    } else {
        Err(ScimError::internal(format!(
            "Attribute '{}' is declared {} but holds a {} value",
            schema.name,
            schema.data_type.as_str(),
            actual.as_str()
        )))
    }
}

fn shape_mismatch(schema: &AttributeSchema, found: &str) -> ScimError {
    ScimError::internal(format!(
        "Attribute '{}' is declared as {:?} but holds {}",
        schema.name,
        schema.shape(),
        found
    ))
}
