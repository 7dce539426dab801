//! Filter trees produced by `parse_filter`.

use crate::assert_error_message_contains;
use crate::assert_scim_error;
use scim_core::filter::{ComparisonOperator, FilterNode, LogicalOperator, parse_filter, tokenize};
use scim_core::{ScimError, ScimType};

#[test]
fn test_and_root_with_or_child() {
    let node = parse_filter(r#"userName eq "bob" and (active eq true or active pr)"#).unwrap();

    let root = node.as_operation().expect("root should be an operation");
    assert_eq!(root.operator, LogicalOperator::And);

    let left = root.left.as_deref().and_then(FilterNode::as_expression).unwrap();
    assert_eq!(left.attribute_path, "userName");
    assert_eq!(left.value.as_deref(), Some("bob"));

    let right = root.right.as_operation().unwrap();
    assert_eq!(right.operator, LogicalOperator::Or);
    assert_eq!(
        right.left.as_deref().and_then(FilterNode::as_expression).map(|e| e.operator),
        Some(ComparisonOperator::Equal)
    );
    assert_eq!(
        right.right.as_expression().map(|e| e.operator),
        Some(ComparisonOperator::Present)
    );
}

#[test]
fn test_not_wraps_comparison() {
    let node = parse_filter("not active eq true").unwrap();
    assert_eq!(
        node,
        FilterNode::not(FilterNode::comparison(
            "active",
            ComparisonOperator::Equal,
            Some("true".to_string())
        ))
    );
}

#[test]
fn test_not_binds_tighter_than_and() {
    let node = parse_filter("not a pr and b pr").unwrap();
    assert_eq!(
        node,
        FilterNode::and(
            FilterNode::not(FilterNode::comparison("a", ComparisonOperator::Present, None)),
            FilterNode::comparison("b", ComparisonOperator::Present, None),
        )
    );
}

#[test]
fn test_operator_extraction() {
    let node = parse_filter(r#"emails.value co "example.com""#).unwrap();
    let expression = node.as_expression().unwrap();
    assert_eq!(expression.attribute_path, "emails.value");
    assert_eq!(expression.operator, ComparisonOperator::Contains);
    assert_eq!(expression.value.as_deref(), Some("example.com"));

    let node = parse_filter("active pr").unwrap();
    let expression = node.as_expression().unwrap();
    assert_eq!(expression.operator, ComparisonOperator::Present);
    assert_eq!(expression.value, None);
}

#[test]
fn test_keywords_ignore_case() {
    let lower = parse_filter(r#"userName eq "bob" and not (title pr or nickName pr)"#).unwrap();
    let upper = parse_filter(r#"userName EQ "bob" AND NOT (title PR Or nickName pR)"#).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_unquoted_literals() {
    let node = parse_filter("meta.version ge 42").unwrap();
    assert_eq!(node.as_expression().unwrap().value.as_deref(), Some("42"));
}

#[test]
fn test_nested_parentheses() {
    let node = parse_filter("((a pr))").unwrap();
    assert_eq!(node, FilterNode::comparison("a", ComparisonOperator::Present, None));
}

#[test]
fn test_invalid_filters_carry_scim_type() {
    let result = parse_filter(r#"userName xx "bob""#);
    let error = result.as_ref().unwrap_err();
    assert_eq!(error.scim_type(), Some(ScimType::InvalidFilter));
    assert!(error.is_client_error());
    assert_scim_error!(result, ScimError::InvalidFilter { .. });
}

#[test]
fn test_unterminated_quote_is_rejected() {
    assert_scim_error!(tokenize(r#"title eq "Tour"#), ScimError::InvalidFilter { .. });
    assert_error_message_contains!(parse_filter("userName eq"), "userName");
}

#[test]
fn test_operator_serde_names() {
    let json = serde_json::to_string(&ComparisonOperator::GreaterThanOrEqual).unwrap();
    assert_eq!(json, "\"ge\"");
    let operator: ComparisonOperator = serde_json::from_str("\"sw\"").unwrap();
    assert_eq!(operator, ComparisonOperator::StartsWith);
}

#[test]
fn test_trailing_text_after_quoted_value_is_rejected() {
    assert_scim_error!(
        parse_filter(r#"userName eq "bob" extra"#),
        ScimError::InvalidFilter { .. }
    );
    assert_error_message_contains!(parse_filter(r#"userName eq "a" "b""#), "\"b\"");

    let node = parse_filter(r#"title eq "a \"quoted\" word""#).unwrap();
    assert_eq!(
        node.as_expression().unwrap().value.as_deref(),
        Some(r#"a "quoted" word"#)
    );
}
