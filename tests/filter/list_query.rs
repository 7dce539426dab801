//! List query construction from request parameters.

use scim_core::ListQuery;
use scim_core::filter::{FilterNode, LogicalOperator};
use scim_core::providers::SortOrder;

#[test]
fn test_query_carries_parsed_filter() {
    let query = ListQuery::from_parameters(
        Some(r#"userName sw "b" or emails.type eq "work""#),
        Some(3),
        Some(25),
    )
    .unwrap();

    let root = query.filter.as_ref().and_then(FilterNode::as_operation).unwrap();
    assert_eq!(root.operator, LogicalOperator::Or);
    assert_eq!(query.start_index, Some(3));
    assert_eq!(query.count, Some(25));
}

#[test]
fn test_builder_methods() {
    let query = ListQuery::new()
        .with_filter("active pr")
        .unwrap()
        .with_count(5)
        .with_sort("userName", SortOrder::Descending);

    assert!(query.filter.is_some());
    assert_eq!(query.count, Some(5));
    assert_eq!(query.sort_by.as_deref(), Some("userName"));
    assert_eq!(query.sort_order, Some(SortOrder::Descending));
}

#[test]
fn test_invalid_filter_fails_construction() {
    assert!(ListQuery::new().with_filter("active pr and").is_err());
    assert!(ListQuery::from_parameters(Some("(active pr"), None, None).is_err());
}

#[test]
fn test_pagination_past_the_end() {
    let query = ListQuery::new().with_start_index(10).with_count(5);
    assert!(query.paginate(vec!["a", "b", "c"]).is_empty());
}
