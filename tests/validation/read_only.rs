//! Read-only stripping.

use crate::common::{decode_ok, fixtures::rfc_examples, group_type, policy_type, user_type};
use proptest::prelude::*;
use scim_core::resource::Attribute;
use scim_core::validation::strip_read_only_attributes;
use serde_json::json;

#[test]
fn test_top_level_read_only_attributes_are_removed() {
    let schema = user_type();
    let mut user = decode_ok(rfc_examples::user_full(), &schema);
    strip_read_only_attributes(&mut user, &schema);

    assert!(!user.contains_attribute("id"));
    assert!(!user.contains_attribute("meta"));
    assert!(!user.contains_attribute("groups"));
    assert!(user.contains_attribute("userName"));
    assert!(user.contains_attribute("emails"));
}

#[test]
fn test_read_only_sub_attributes_are_removed_from_every_element() {
    let schema = group_type();
    let mut group = decode_ok(rfc_examples::group_basic(), &schema);
    strip_read_only_attributes(&mut group, &schema);

    let members = group
        .attribute("members")
        .and_then(Attribute::as_multi_valued)
        .unwrap();
    assert_eq!(members.len(), 2);
    for member in members.complex_values() {
        assert!(!member.contains_sub_attribute("display"));
        assert!(member.contains_sub_attribute("value"));
        assert!(member.contains_sub_attribute("$ref"));
    }
}

#[test]
fn test_stripping_never_fails_on_empty_objects() {
    let schema = policy_type();
    let mut account = decode_ok(json!({}), &schema);
    strip_read_only_attributes(&mut account, &schema);
    assert!(account.is_empty());
}

proptest! {
    #[test]
    fn prop_stripping_is_idempotent(
        id in prop::option::of("[a-f0-9]{8}"),
        nick_name in prop::option::of("[a-z]{1,8}"),
        emails in prop::collection::vec(("[a-z]{1,6}", prop::option::of(any::<bool>())), 0..3),
    ) {
        let schema = policy_type();
        let mut document = json!({"userName": "bjensen"});
        if let Some(id) = id {
            document["id"] = json!(id);
        }
        if let Some(nick_name) = nick_name {
            document["nickName"] = json!(nick_name);
        }
        if !emails.is_empty() {
            document["emails"] = emails
                .iter()
                .map(|(value, verified)| match verified {
                    Some(verified) => json!({"value": value, "verified": verified}),
                    None => json!({"value": value}),
                })
                .collect();
        }

        let mut once = decode_ok(document, &schema);
        strip_read_only_attributes(&mut once, &schema);
        let mut twice = once.clone();
        strip_read_only_attributes(&mut twice, &schema);

        prop_assert_eq!(&twice, &once);
        prop_assert!(!once.contains_attribute("id"));
    }
}
