//! Attribute-tree to JSON encoding.
//!
//! The structural inverse of decoding. The encoder does not consult a schema:
//! whatever the validators left in the tree is emitted.

use crate::error::{ScimError, ScimResult};
use crate::resource::{Attribute, ComplexAttribute, MultiValues, ResourceObject};

use serde_json::{Map, Value};

/// Encode a resource object as JSON text.
pub fn encode_resource(object: &ResourceObject) -> ScimResult<String> {
    serde_json::to_string(&encode_value(object))
        .map_err(|e| ScimError::internal(format!("Failed to serialize resource: {}", e)))
}

/// Encode a resource object as a JSON value, `schemas` first.
pub fn encode_value(object: &ResourceObject) -> Value {
    let mut fields = Map::new();

    if !object.schemas().is_empty() {
        fields.insert(
            "schemas".to_string(),
            Value::Array(
                object
                    .schemas()
                    .iter()
                    .map(|uri| Value::String(uri.clone()))
                    .collect(),
            ),
        );
    }

    for attribute in object.attributes() {
        fields.insert(attribute.name().to_string(), encode_attribute(attribute));
    }

    Value::Object(fields)
}

fn encode_attribute(attribute: &Attribute) -> Value {
    match attribute {
        Attribute::Simple(simple) => simple.value.to_json(),
        Attribute::Complex(complex) => encode_complex(complex),
        Attribute::MultiValued(multi) => match &multi.values {
            MultiValues::Primitive(values) => {
                Value::Array(values.iter().map(|value| value.to_json()).collect())
            }
            MultiValues::Complex(elements) => {
                Value::Array(elements.iter().map(encode_complex).collect())
            }
        },
    }
}

fn encode_complex(complex: &ComplexAttribute) -> Value {
    Value::Object(
        complex
            .sub_attributes()
            .map(|sub| (sub.name().to_string(), encode_attribute(sub)))
            .collect(),
    )
}
