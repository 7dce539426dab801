//! JSON to attribute-tree decoding.
//!
//! Decoding is driven entirely by the resource type schema: keys the schema
//! does not declare are ignored, a `null` value means the attribute is absent,
//! and a JSON value of the wrong kind for its attribute is a malformed request.

use crate::error::{ScimError, ScimResult};
use crate::resource::value::json_kind;
use crate::resource::{
    Attribute, ComplexAttribute, MultiValuedAttribute, ResourceObject, ScalarValue,
    SimpleAttribute, composite_element_name, create_attribute, create_element,
};
use crate::schema::{AttributeSchema, AttributeShape, ResourceTypeSchema};

use log::{debug, warn};
use serde_json::{Map, Value};

/// Decode a JSON document into `object`.
///
/// The object is seeded with every schema URI of the resource type and then
/// populated attribute by attribute. It is consumed and returned so that a
/// failure anywhere leaves the caller with nothing half-built.
pub fn decode_resource(
    json: &str,
    schema: &ResourceTypeSchema,
    object: ResourceObject,
) -> ScimResult<ResourceObject> {
    let document: Value = serde_json::from_str(json).map_err(|e| {
        warn!("Rejecting {} payload that is not valid JSON: {}", schema.name(), e);
        ScimError::malformed_request(format!("Request body is not valid JSON: {}", e))
    })?;

    decode_value(&document, schema, object)
}

/// Decode an already parsed JSON document into `object`.
pub fn decode_value(
    document: &Value,
    schema: &ResourceTypeSchema,
    mut object: ResourceObject,
) -> ScimResult<ResourceObject> {
    let fields = document.as_object().ok_or_else(|| {
        ScimError::malformed_request(format!(
            "{} resource must be a JSON object, got {}",
            schema.name(),
            json_kind(document)
        ))
    })?;

    for uri in schema.schemas() {
        object.set_schema(uri.as_str());
    }

    for attribute_schema in schema.attributes() {
        if let Some(attribute) = decode_field(fields, attribute_schema)? {
            object.set_attribute(attribute);
        }
    }

    debug!(
        "Decoded {} resource with {} attributes",
        schema.name(),
        object.attribute_names().len()
    );
    Ok(object)
}

/// Decode the key named by `schema` out of a JSON object, if present and non-null.
fn decode_field(
    fields: &Map<String, Value>,
    schema: &AttributeSchema,
) -> ScimResult<Option<Attribute>> {
    match fields.get(&schema.name) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => decode_attribute(schema, raw).map(Some),
    }
}

fn decode_attribute(schema: &AttributeSchema, raw: &Value) -> ScimResult<Attribute> {
    let attribute: Attribute = match schema.shape() {
        AttributeShape::Simple => {
            if raw.is_array() || raw.is_object() {
                return Err(wrong_kind(schema, "a single value", raw));
            }
            SimpleAttribute {
                name: schema.name.clone(),
                value: ScalarValue::from_json(&schema.name, schema.data_type, raw)?,
            }
            .into()
        }
        AttributeShape::PrimitiveMultiValued => {
            let elements = raw
                .as_array()
                .ok_or_else(|| wrong_kind(schema, "an array", raw))?;
            let values = elements
                .iter()
                .filter(|element| !element.is_null())
                .map(|element| {
                    if element.is_array() || element.is_object() {
                        Err(wrong_kind(schema, "an array of single values", element))
                    } else {
                        ScalarValue::from_json(&schema.name, schema.data_type, element)
                    }
                })
                .collect::<ScimResult<Vec<_>>>()?;
            MultiValuedAttribute::primitive(schema.name.as_str(), values).into()
        }
        AttributeShape::Complex => {
            let fields = raw
                .as_object()
                .ok_or_else(|| wrong_kind(schema, "an object", raw))?;
            decode_complex(schema, schema.name.as_str(), fields)?.into()
        }
        AttributeShape::ComplexMultiValued => {
            let elements = raw
                .as_array()
                .ok_or_else(|| wrong_kind(schema, "an array", raw))?;
            let mut values = Vec::with_capacity(elements.len());
            for element in elements {
                let fields = element
                    .as_object()
                    .ok_or_else(|| wrong_kind(schema, "an array of objects", element))?;
                let mut complex = decode_complex(schema, schema.name.as_str(), fields)?;
                let label = composite_element_name(&schema.name, &complex);
                complex.set_name(label);
                values.push(create_element(schema, complex)?);
            }
            MultiValuedAttribute::complex(schema.name.as_str(), values).into()
        }
    };

    create_attribute(schema, attribute)
}

fn decode_complex(
    schema: &AttributeSchema,
    name: &str,
    fields: &Map<String, Value>,
) -> ScimResult<ComplexAttribute> {
    let mut complex = ComplexAttribute::new(name);
    for sub_schema in &schema.sub_attributes {
        if let Some(sub) = decode_field(fields, sub_schema)? {
            complex.set_sub_attribute(sub);
        }
    }
    Ok(complex)
}

fn wrong_kind(schema: &AttributeSchema, expected: &str, raw: &Value) -> ScimError {
    ScimError::malformed_request(format!(
        "Attribute '{}' expects {}, got {}",
        schema.name,
        expected,
        json_kind(raw)
    ))
}
