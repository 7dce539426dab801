//! Required-attribute and schema-list checks.

use crate::assert_scim_error;
use crate::common::{decode_ok, fixtures::rfc_examples, group_type, policy_type, user_type};
use proptest::prelude::*;
use scim_core::ScimError;
use scim_core::resource::{ResourceObject, SimpleAttribute};
use scim_core::validation::{validate_required_attributes, validate_schema_list};
use serde_json::json;

#[test]
fn test_rfc_examples_pass() {
    let user = decode_ok(rfc_examples::user_full(), &user_type());
    assert!(validate_required_attributes(&user, &user_type()).is_ok());

    let group = decode_ok(rfc_examples::group_basic(), &group_type());
    assert!(validate_required_attributes(&group, &group_type()).is_ok());
}

#[test]
fn test_missing_top_level_attribute() {
    let user = decode_ok(json!({"nickName": "Babs"}), &user_type());
    let result = validate_required_attributes(&user, &user_type());

    assert_scim_error!(
        result,
        ScimError::MissingRequiredAttribute { ref attribute } if attribute == "userName"
    );
}

#[test]
fn test_required_sub_attribute_checked_on_every_element() {
    let schema = policy_type();
    let account = decode_ok(
        json!({
            "userName": "bjensen",
            "emails": [
                {"value": "bjensen@example.com", "type": "work"},
                {"type": "home"}
            ]
        }),
        &schema,
    );

    let result = validate_required_attributes(&account, &schema);
    assert_scim_error!(
        result,
        ScimError::MissingRequiredAttribute { ref attribute } if attribute == "emails.value"
    );
}

#[test]
fn test_absent_parent_does_not_require_children() {
    let schema = policy_type();
    let account = decode_ok(json!({"userName": "bjensen"}), &schema);
    assert!(validate_required_attributes(&account, &schema).is_ok());
}

#[test]
fn test_schema_list_must_cover_resource_type() {
    let schema = user_type();
    let decoded = decode_ok(json!({"userName": "bjensen"}), &schema);
    assert!(validate_schema_list(&decoded, &schema).is_ok());

    let mut bare = ResourceObject::new();
    bare.set_attribute(SimpleAttribute::new("userName", "bjensen"));
    let result = validate_schema_list(&bare, &schema);
    assert_scim_error!(result, ScimError::SchemaInconsistency { .. });
}

#[test]
fn test_schema_inconsistency_is_not_a_client_error() {
    let error = validate_schema_list(&ResourceObject::new(), &user_type()).unwrap_err();
    assert!(!error.is_client_error());
}

proptest! {
    // The check fails exactly when a required attribute is absent.
    #[test]
    fn prop_required_check_fails_iff_required_absent(
        user_name in prop::option::of("[a-z]{1,10}"),
        email_values in prop::collection::vec(prop::option::of("[a-z]{1,6}@example\\.com"), 0..4),
    ) {
        let schema = policy_type();
        let mut document = json!({});
        if let Some(user_name) = &user_name {
            document["userName"] = json!(user_name);
        }
        if !email_values.is_empty() {
            document["emails"] = email_values
                .iter()
                .map(|value| match value {
                    Some(value) => json!({"value": value, "type": "work"}),
                    None => json!({"type": "work"}),
                })
                .collect();
        }

        let account = decode_ok(document, &schema);
        let expect_missing = user_name.is_none() || email_values.iter().any(Option::is_none);
        prop_assert_eq!(
            validate_required_attributes(&account, &schema).is_err(),
            expect_missing
        );
    }
}
