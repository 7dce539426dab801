//! Create and replace pipelines.

use crate::assert_scim_error;
use crate::common::{decode_ok, fixtures::rfc_examples, string_value, sub_string_value, user_type};
use scim_core::resource::{Attribute, ResourceVersion, ScalarValue};
use scim_core::validation::{content_version, validate_created_object, validate_updated_object};
use scim_core::{ScimCoreConfig, ScimError};
use serde_json::json;

fn config() -> ScimCoreConfig {
    ScimCoreConfig::new("https://example.com")
}

fn meta_value<'a>(object: &'a scim_core::ResourceObject, name: &str) -> Option<&'a ScalarValue> {
    object
        .attribute("meta")
        .and_then(Attribute::as_complex)
        .and_then(|meta| meta.sub_attribute(name))
        .and_then(Attribute::value)
}

#[test]
fn test_create_assigns_id_and_meta() {
    let schema = user_type();
    let mut user = decode_ok(json!({"userName": "bjensen"}), &schema);
    validate_created_object(&mut user, &schema, &config()).unwrap();

    let id = user.id().unwrap().to_string();
    assert_eq!(id.len(), 36);
    assert_eq!(sub_string_value(&user, "meta", "resourceType"), Some("User"));
    assert_eq!(
        sub_string_value(&user, "meta", "location"),
        Some(format!("https://example.com/v2/Users/{}", id).as_str())
    );

    let created = meta_value(&user, "created").unwrap();
    assert!(matches!(created, ScalarValue::DateTime(_)));
    assert_eq!(meta_value(&user, "lastModified"), Some(created));

    let version = sub_string_value(&user, "meta", "version").unwrap();
    assert_eq!(version, content_version(&user).unwrap().as_str());
}

#[test]
fn test_create_replaces_client_supplied_server_attributes() {
    let schema = user_type();
    let mut user = decode_ok(rfc_examples::user_full(), &schema);
    validate_created_object(&mut user, &schema, &config()).unwrap();

    assert_ne!(user.id(), Some("2819c223-7f76-453a-919d-413861904646"));
    assert!(!user.contains_attribute("groups"));
    assert_ne!(
        sub_string_value(&user, "meta", "version"),
        Some("W/\"a330bc54f0671c9\"")
    );
}

#[test]
fn test_create_assigns_distinct_ids() {
    let schema = user_type();
    let payload = decode_ok(json!({"userName": "bjensen"}), &schema);

    let mut first = payload.clone();
    let mut second = payload;
    validate_created_object(&mut first, &schema, &config()).unwrap();
    validate_created_object(&mut second, &schema, &config()).unwrap();

    assert_ne!(first.id(), second.id());
}

#[test]
fn test_failed_create_leaves_object_untouched() {
    let schema = user_type();
    let mut user = decode_ok(json!({"id": "client", "nickName": "Babs"}), &schema);
    let before = user.clone();

    let result = validate_created_object(&mut user, &schema, &config());
    assert_scim_error!(
        result,
        ScimError::MissingRequiredAttribute { ref attribute } if attribute == "userName"
    );
    assert_eq!(user, before);
}

#[test]
fn test_update_carries_server_attributes_forward() {
    let schema = user_type();
    let mut stored = decode_ok(json!({"userName": "bjensen", "nickName": "Babs"}), &schema);
    validate_created_object(&mut stored, &schema, &config()).unwrap();

    let mut replacement = decode_ok(json!({"userName": "bjensen", "nickName": "Barbara"}), &schema);
    validate_updated_object(&stored, &mut replacement, &schema).unwrap();

    assert_eq!(replacement.id(), stored.id());
    assert_eq!(string_value(&replacement, "nickName"), Some("Barbara"));
    assert_eq!(meta_value(&replacement, "created"), meta_value(&stored, "created"));
    assert_eq!(
        sub_string_value(&replacement, "meta", "location"),
        sub_string_value(&stored, "meta", "location")
    );
    assert_ne!(
        sub_string_value(&replacement, "meta", "version"),
        sub_string_value(&stored, "meta", "version")
    );
}

#[test]
fn test_unchanged_content_keeps_version() {
    let schema = user_type();
    let mut stored = decode_ok(json!({"userName": "bjensen"}), &schema);
    validate_created_object(&mut stored, &schema, &config()).unwrap();

    let mut replacement = decode_ok(json!({"userName": "bjensen"}), &schema);
    validate_updated_object(&stored, &mut replacement, &schema).unwrap();

    assert_eq!(
        sub_string_value(&replacement, "meta", "version"),
        sub_string_value(&stored, "meta", "version")
    );
}

#[test]
fn test_failed_update_leaves_object_untouched() {
    let schema = user_type();
    let mut stored = decode_ok(json!({"userName": "bjensen"}), &schema);
    validate_created_object(&mut stored, &schema, &config()).unwrap();

    let mut replacement = decode_ok(json!({"nickName": "Babs"}), &schema);
    let before = replacement.clone();

    let result = validate_updated_object(&stored, &mut replacement, &schema);
    assert_scim_error!(result, ScimError::MissingRequiredAttribute { .. });
    assert_eq!(replacement, before);
}

#[test]
fn test_content_version_ignores_meta() {
    let schema = user_type();
    let minimal = decode_ok(rfc_examples::user_minimal(), &schema);
    let mut without_meta = minimal.clone();
    without_meta.remove_attribute("meta");

    let version: ResourceVersion = content_version(&minimal).unwrap();
    assert_eq!(version, content_version(&without_meta).unwrap());
    assert!(version.etag().starts_with("W/\""));
}
