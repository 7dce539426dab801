//! Server-side processing of created and replaced resources.
//!
//! These compose the individual validators into the create and replace
//! pipelines and stamp the server-managed attributes (`id` and `meta`).

use super::mutability::enforce_mutability_on_update;
use super::read_only::strip_read_only_attributes;
use super::required::{validate_required_attributes, validate_schema_list};
use crate::codec::encode_resource;
use crate::config::ScimCoreConfig;
use crate::error::ScimResult;
use crate::resource::{
    Attribute, ComplexAttribute, ResourceObject, ResourceVersion, ScalarValue, SimpleAttribute,
    create_attribute,
};
use crate::schema::{AttributeSchema, ResourceTypeSchema};

use chrono::{DateTime, SubsecRound, Utc};
use log::{debug, info};
use uuid::Uuid;

/// Accept a decoded payload as a newly created resource.
///
/// Strips read-only attributes, assigns a fresh `id`, stamps `meta` and runs
/// the required-attribute and schema-list checks. On error `object` is left
/// unchanged.
pub fn validate_created_object(
    object: &mut ResourceObject,
    schema: &ResourceTypeSchema,
    config: &ScimCoreConfig,
) -> ScimResult<()> {
    let mut staged = object.clone();
    strip_read_only_attributes(&mut staged, schema);

    let id = Uuid::new_v4().to_string();
    if let Some(id_schema) = schema.attribute("id") {
        staged.set_attribute(create_attribute(
            id_schema,
            SimpleAttribute::new("id", id.as_str()).into(),
        )?);
    }

    if let Some(meta_schema) = schema.attribute("meta") {
        let now = now();
        let version = content_version(&staged)?;
        let mut meta = ComplexAttribute::new(meta_schema.name.as_str());

        stamp(meta_schema, &mut meta, "resourceType", ScalarValue::from(schema.name()))?;
        stamp(meta_schema, &mut meta, "created", ScalarValue::DateTime(now))?;
        stamp(meta_schema, &mut meta, "lastModified", ScalarValue::DateTime(now))?;
        stamp(
            meta_schema,
            &mut meta,
            "location",
            ScalarValue::Reference(config.location(schema.endpoint(), &id)),
        )?;
        stamp(meta_schema, &mut meta, "version", ScalarValue::from(version.to_string()))?;

        staged.set_attribute(create_attribute(meta_schema, meta.into())?);
    }

    validate_required_attributes(&staged, schema)?;
    validate_schema_list(&staged, schema)?;

    info!("Accepted new {} resource {}", schema.name(), id);
    *object = staged;
    Ok(())
}

/// Accept a decoded payload as the replacement of a stored resource.
///
/// Enforces mutability against `old`, refreshes `meta.lastModified` and
/// `meta.version`, then runs the required-attribute and schema-list checks.
/// On error `new` is left unchanged.
pub fn validate_updated_object(
    old: &ResourceObject,
    new: &mut ResourceObject,
    schema: &ResourceTypeSchema,
) -> ScimResult<()> {
    let mut staged = new.clone();
    enforce_mutability_on_update(old, &mut staged, schema)?;

    if let Some(meta_schema) = schema.attribute("meta") {
        let version = content_version(&staged)?;
        let mut meta = match staged.remove_attribute(&meta_schema.name) {
            Some(Attribute::Complex(meta)) => meta,
            _ => ComplexAttribute::new(meta_schema.name.as_str()),
        };

        if !meta.contains_sub_attribute("resourceType") {
            stamp(meta_schema, &mut meta, "resourceType", ScalarValue::from(schema.name()))?;
        }
        stamp(meta_schema, &mut meta, "lastModified", ScalarValue::DateTime(now()))?;
        stamp(meta_schema, &mut meta, "version", ScalarValue::from(version.to_string()))?;

        staged.set_attribute(create_attribute(meta_schema, meta.into())?);
    }

    validate_required_attributes(&staged, schema)?;
    validate_schema_list(&staged, schema)?;

    debug!(
        "Accepted replacement of {} resource {}",
        schema.name(),
        staged.id().unwrap_or("<no id>")
    );
    *new = staged;
    Ok(())
}

/// Version of a resource's content, excluding `meta`.
pub fn content_version(object: &ResourceObject) -> ScimResult<ResourceVersion> {
    let mut content = object.clone();
    content.remove_attribute("meta");
    let encoded = encode_resource(&content)?;
    Ok(ResourceVersion::from_content(encoded.as_bytes()))
}

// Millisecond precision survives an encode/decode round trip unchanged.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Set a `meta` sub-attribute if the schema declares it.
fn stamp(
    meta_schema: &AttributeSchema,
    meta: &mut ComplexAttribute,
    name: &str,
    value: ScalarValue,
) -> ScimResult<()> {
    if let Some(sub_schema) = meta_schema.sub_attribute(name) {
        meta.set_sub_attribute(create_attribute(
            sub_schema,
            SimpleAttribute::new(name, value).into(),
        )?);
    }
    Ok(())
}
