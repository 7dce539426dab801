//! Malformed input: wrong JSON kinds are rejected, never coerced.

use crate::assert_scim_error;
use crate::common::{decode, user_type};
use scim_core::ScimError;
use scim_core::codec::decode_resource;
use scim_core::resource::ResourceObject;
use scim_core::schema::{AttributeSchema, DataType, ResourceTypeSchema};
use serde_json::json;

fn age_type() -> ResourceTypeSchema {
    ResourceTypeSchema::new(
        "Person",
        "People",
        vec!["urn:example:params:scim:schemas:Person".to_string()],
        vec![AttributeSchema::new("age", DataType::String)],
    )
    .unwrap()
}

#[test]
fn test_object_for_single_valued_string_is_malformed() {
    let result = decode(json!({"age": {"x": 1}}), &age_type());
    assert_scim_error!(result, ScimError::MalformedRequest { .. });
}

#[test]
fn test_number_for_string_is_not_coerced() {
    let result = decode(json!({"age": 42}), &age_type());
    assert_scim_error!(result, ScimError::MalformedRequest { .. });
}

#[test]
fn test_scalar_for_multi_valued_is_malformed() {
    let result = decode(
        json!({"userName": "bjensen", "emails": "bjensen@example.com"}),
        &user_type(),
    );
    assert_scim_error!(result, ScimError::MalformedRequest { .. });
}

#[test]
fn test_nested_error_aborts_the_whole_decode() {
    let result = decode(
        json!({
            "userName": "bjensen",
            "emails": [
                {"value": "bjensen@example.com"},
                {"value": "babs@jensen.org", "primary": "yes"}
            ]
        }),
        &user_type(),
    );
    assert_scim_error!(result, ScimError::MalformedRequest { .. });
}

#[test]
fn test_invalid_date_time_is_malformed() {
    let result = decode(
        json!({"userName": "bjensen", "meta": {"created": "23/01/2010"}}),
        &user_type(),
    );
    crate::assert_error_message_contains!(result, "created");
}

#[test]
fn test_invalid_binary_is_malformed() {
    let result = decode(
        json!({"userName": "bjensen", "x509Certificates": [{"value": "%%%"}]}),
        &user_type(),
    );
    assert_scim_error!(result, ScimError::MalformedRequest { .. });
}

#[test]
fn test_invalid_json_text_is_malformed() {
    for text in ["", "{", r#"{"userName": }"#, "null", "[]", "\"bjensen\""] {
        let result = decode_resource(text, &user_type(), ResourceObject::new());
        assert!(
            matches!(result, Err(ScimError::MalformedRequest { .. })),
            "expected malformed request for {:?}",
            text
        );
    }
}

#[test]
fn test_malformed_errors_carry_invalid_syntax() {
    let error = decode(json!({"age": [1]}), &age_type()).unwrap_err();
    assert_eq!(error.scim_type(), Some(scim_core::ScimType::InvalidSyntax));
    assert!(error.is_client_error());
}
