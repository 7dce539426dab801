//! A minimal in-memory provider used to exercise the provider boundary.

use scim_core::filter::{ComparisonOperator, ExpressionNode, FilterNode, LogicalOperator};
use scim_core::providers::{ListQuery, ResourceProvider, SortOrder};
use scim_core::resource::{Attribute, MultiValues, ResourceObject};
use scim_core::ScimError;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Resources keyed by resource type, then id.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    data: RwLock<HashMap<String, HashMap<String, ResourceObject>>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self, resource_type: &str) -> usize {
        let data = self.data.read().await;
        data.get(resource_type).map_or(0, HashMap::len)
    }
}

fn resource_id(resource: &ResourceObject) -> Result<String, ScimError> {
    resource
        .id()
        .map(str::to_string)
        .ok_or_else(|| ScimError::internal("resource has no id"))
}

impl ResourceProvider for InMemoryProvider {
    type Error = ScimError;

    async fn create_resource(
        &self,
        resource_type: &str,
        resource: ResourceObject,
    ) -> Result<ResourceObject, Self::Error> {
        let id = resource_id(&resource)?;
        let mut data = self.data.write().await;
        let resources = data.entry(resource_type.to_string()).or_default();
        if resources.contains_key(&id) {
            return Err(ScimError::conflict(format!(
                "{} {} already exists",
                resource_type, id
            )));
        }
        resources.insert(id, resource.clone());
        Ok(resource)
    }

    async fn get_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> Result<Option<ResourceObject>, Self::Error> {
        let data = self.data.read().await;
        Ok(data
            .get(resource_type)
            .and_then(|resources| resources.get(id))
            .cloned())
    }

    async fn update_resource(
        &self,
        resource_type: &str,
        old: &ResourceObject,
        new: ResourceObject,
    ) -> Result<ResourceObject, Self::Error> {
        let id = resource_id(old)?;
        let mut data = self.data.write().await;
        let stored = data
            .get_mut(resource_type)
            .and_then(|resources| resources.get_mut(&id))
            .ok_or_else(|| ScimError::resource_not_found(resource_type, &id))?;
        *stored = new.clone();
        Ok(new)
    }

    async fn delete_resource(&self, resource_type: &str, id: &str) -> Result<(), Self::Error> {
        let mut data = self.data.write().await;
        data.get_mut(resource_type)
            .and_then(|resources| resources.remove(id))
            .map(|_| ())
            .ok_or_else(|| ScimError::resource_not_found(resource_type, id))
    }

    async fn list_resources(
        &self,
        resource_type: &str,
        query: &ListQuery,
    ) -> Result<Vec<ResourceObject>, Self::Error> {
        let data = self.data.read().await;
        let mut matching: Vec<ResourceObject> = data
            .get(resource_type)
            .map(|resources| {
                resources
                    .values()
                    .filter(|resource| {
                        query
                            .filter
                            .as_ref()
                            .is_none_or(|filter| matches(filter, resource))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let sort_by = query.sort_by.as_deref().unwrap_or("id");
        matching.sort_by_key(|resource| values_at(resource, sort_by).into_iter().next());
        if query.sort_order == Some(SortOrder::Descending) {
            matching.reverse();
        }

        Ok(query.paginate(matching))
    }
}

/// Evaluate a filter tree against a resource.
pub fn matches(filter: &FilterNode, resource: &ResourceObject) -> bool {
    match filter {
        FilterNode::Operation(operation) => {
            let left = operation
                .left
                .as_deref()
                .is_some_and(|left| matches(left, resource));
            let right = matches(&operation.right, resource);
            match operation.operator {
                LogicalOperator::And => left && right,
                LogicalOperator::Or => left || right,
                LogicalOperator::Not => !right,
            }
        }
        FilterNode::Expression(expression) => compare(expression, resource),
    }
}

fn compare(expression: &ExpressionNode, resource: &ResourceObject) -> bool {
    let values = values_at(resource, &expression.attribute_path);
    let Some(target) = expression.value.as_deref().map(str::to_lowercase) else {
        return !values.is_empty();
    };

    let test = |value: &String| match expression.operator {
        ComparisonOperator::Equal => *value == target,
        ComparisonOperator::NotEqual => *value != target,
        ComparisonOperator::Contains => value.contains(&target),
        ComparisonOperator::StartsWith => value.starts_with(&target),
        ComparisonOperator::EndsWith => value.ends_with(&target),
        ComparisonOperator::GreaterThan => *value > target,
        ComparisonOperator::GreaterThanOrEqual => *value >= target,
        ComparisonOperator::LessThan => *value < target,
        ComparisonOperator::LessThanOrEqual => *value <= target,
        ComparisonOperator::Present => true,
    };
    values.iter().any(test)
}

/// Lowercased text of every value found at a one- or two-segment path.
fn values_at(resource: &ResourceObject, path: &str) -> Vec<String> {
    let (name, sub) = match path.split_once('.') {
        Some((name, sub)) => (name, Some(sub)),
        None => (path, None),
    };
    let Some(attribute) = resource.attribute(name) else {
        return Vec::new();
    };

    let values: Vec<String> = match (attribute, sub) {
        (Attribute::Simple(simple), None) => vec![simple.value.to_string()],
        (Attribute::MultiValued(multi), None) => match &multi.values {
            MultiValues::Primitive(values) => values.iter().map(ToString::to_string).collect(),
            MultiValues::Complex(elements) => elements
                .iter()
                .filter_map(|element| element.sub_attribute("value"))
                .filter_map(Attribute::value)
                .map(ToString::to_string)
                .collect(),
        },
        (attribute, Some(sub)) => attribute
            .complex_elements()
            .into_iter()
            .filter_map(|element| element.sub_attribute(sub))
            .filter_map(Attribute::value)
            .map(ToString::to_string)
            .collect(),
        (Attribute::Complex(_), None) => Vec::new(),
    };
    values.into_iter().map(|value| value.to_lowercase()).collect()
}
