//! Resource provider trait for SCIM data access.
//!
//! The storage boundary of the core: a provider receives validated resource
//! objects to persist and parsed filter trees to evaluate. How it stores
//! resources and evaluates filters is entirely its own business.

use crate::error::{ScimError, ScimResult};
use crate::filter::{FilterNode, parse_filter};
use crate::resource::ResourceObject;

use serde::{Deserialize, Serialize};
use std::future::Future;

/// Resource provider trait for generic SCIM operations
pub trait ResourceProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a validated new resource and return it as stored
    fn create_resource(
        &self,
        resource_type: &str,
        resource: ResourceObject,
    ) -> impl Future<Output = Result<ResourceObject, Self::Error>> + Send;

    /// Read a resource by id
    fn get_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<ResourceObject>, Self::Error>> + Send;

    /// Replace a stored resource. `old` is the version the replacement was
    /// validated against.
    fn update_resource(
        &self,
        resource_type: &str,
        old: &ResourceObject,
        new: ResourceObject,
    ) -> impl Future<Output = Result<ResourceObject, Self::Error>> + Send;

    /// Delete a resource by id
    fn delete_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// List the resources matching a query
    fn list_resources(
        &self,
        resource_type: &str,
        query: &ListQuery,
    ) -> impl Future<Output = Result<Vec<ResourceObject>, Self::Error>> + Send;
}

/// Sort direction of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse the `sortOrder` request parameter, ignoring ASCII case.
    pub fn from_parameter(value: &str) -> ScimResult<Self> {
        if value.eq_ignore_ascii_case("ascending") {
            Ok(SortOrder::Ascending)
        } else if value.eq_ignore_ascii_case("descending") {
            Ok(SortOrder::Descending)
        } else {
            Err(ScimError::malformed_request(format!(
                "sortOrder must be 'ascending' or 'descending', got '{}'",
                value
            )))
        }
    }
}

/// Query parameters for listing resources.
///
/// The filter arrives already parsed; a provider only evaluates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// Parsed filter expression
    pub filter: Option<FilterNode>,
    /// 1-based index of the first result
    pub start_index: Option<usize>,
    /// Maximum number of results to return
    pub count: Option<usize>,
    /// Attribute path to sort by
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ListQuery {
    /// Create a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw request parameters, parsing the filter.
    pub fn from_parameters(
        filter: Option<&str>,
        start_index: Option<usize>,
        count: Option<usize>,
    ) -> ScimResult<Self> {
        let filter = match filter.map(str::trim) {
            Some(text) if !text.is_empty() => Some(parse_filter(text)?),
            _ => None,
        };

        Ok(Self {
            filter,
            start_index,
            count,
            ..Self::default()
        })
    }

    /// Set the filter from filter text.
    pub fn with_filter(mut self, filter: &str) -> ScimResult<Self> {
        self.filter = Some(parse_filter(filter)?);
        Ok(self)
    }

    /// Set the starting index.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Set the maximum count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(sort_order);
        self
    }

    /// Apply `start_index` and `count` to an already filtered result list.
    pub fn paginate<T>(&self, results: Vec<T>) -> Vec<T> {
        let skip = self.start_index.unwrap_or(1).saturating_sub(1);
        let take = self.count.unwrap_or(usize::MAX);
        results.into_iter().skip(skip).take(take).collect()
    }
}
