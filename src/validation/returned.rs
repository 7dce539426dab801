//! Return-policy filtering of response resources.
//!
//! Applies each attribute's `returned` characteristic together with the
//! request's `attributes` or `excludeAttributes` parameter (RFC 7644 section
//! 3.9). Filtering never fails.

use crate::resource::{Attribute, ResourceObject};
use crate::schema::{AttributeSchema, ResourceTypeSchema, Returned};

use log::debug;

/// Attribute selection requested by a client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeSelection {
    /// No selection parameter was given
    #[default]
    Default,
    /// `attributes`: return only these paths plus `Always` attributes
    Include(Vec<String>),
    /// `excludeAttributes`: return the default set minus these paths
    Exclude(Vec<String>),
}

impl AttributeSelection {
    /// Build a selection from the raw comma-separated request parameters.
    ///
    /// When both are supplied, `attributes` wins. Empty lists count as absent.
    /// Paths may be qualified with a schema URI, which is dropped.
    pub fn from_parameters(attributes: Option<&str>, excluded_attributes: Option<&str>) -> Self {
        let included = attributes.map(parse_path_list).unwrap_or_default();
        if !included.is_empty() {
            return AttributeSelection::Include(included);
        }

        let excluded = excluded_attributes
            .map(parse_path_list)
            .unwrap_or_default();
        if !excluded.is_empty() {
            return AttributeSelection::Exclude(excluded);
        }

        AttributeSelection::Default
    }
}

fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(|path| match path.strip_prefix("urn:") {
            Some(qualified) => qualified
                .rsplit(':')
                .next()
                .unwrap_or(qualified)
                .to_string(),
            None => path.to_string(),
        })
        .collect()
}

fn is_listed(list: &[String], path: &str) -> bool {
    list.iter().any(|listed| listed.eq_ignore_ascii_case(path))
}

/// Filter a resource for return from the raw request parameters.
pub fn filter_on_return(
    object: &mut ResourceObject,
    schema: &ResourceTypeSchema,
    attributes: Option<&str>,
    excluded_attributes: Option<&str>,
) {
    let selection = AttributeSelection::from_parameters(attributes, excluded_attributes);
    apply_return_policy(object, schema, &selection);
}

/// Filter a resource for return according to an attribute selection.
pub fn apply_return_policy(
    object: &mut ResourceObject,
    schema: &ResourceTypeSchema,
    selection: &AttributeSelection,
) {
    for attribute_schema in schema.attributes() {
        let name = attribute_schema.name.as_str();
        let Some(attribute) = object.attribute(name) else {
            continue;
        };

        let keep = match (attribute_schema.returned, selection) {
            (Returned::Never, _) => false,
            (Returned::Always, _) => true,
            (returned, AttributeSelection::Default) => returned == Returned::Default,
            (_, AttributeSelection::Include(list)) => {
                is_listed(list, name) || requests_sub_attribute(list, name, attribute)
            }
            (returned, AttributeSelection::Exclude(list)) => {
                returned == Returned::Default && !is_listed(list, name)
            }
        };

        if !keep {
            debug!("Omitting '{}' from returned {}", name, schema.name());
            object.remove_attribute(name);
        } else if let Some(attribute) = object.attribute_mut(name) {
            filter_sub_attributes(attribute_schema, attribute, selection);
        }
    }
}

/// Whether any `name.sub` path of a present sub-attribute is requested.
fn requests_sub_attribute(list: &[String], name: &str, attribute: &Attribute) -> bool {
    attribute.complex_elements().iter().any(|element| {
        element
            .sub_attributes()
            .any(|sub| is_listed(list, &format!("{}.{}", name, sub.name())))
    })
}

fn filter_sub_attributes(
    schema: &AttributeSchema,
    attribute: &mut Attribute,
    selection: &AttributeSelection,
) {
    let parent = schema.name.as_str();

    for element in attribute.complex_elements_mut() {
        for sub_name in element.sub_attribute_names() {
            let Some(sub_schema) = schema.sub_attribute(&sub_name) else {
                continue;
            };
            let path = format!("{}.{}", parent, sub_name);

            let keep = match (sub_schema.returned, selection) {
                (Returned::Never, _) => false,
                (Returned::Always, _) => true,
                (returned, AttributeSelection::Default) => returned == Returned::Default,
                (returned, AttributeSelection::Include(list)) => {
                    is_listed(list, &path)
                        || ((is_listed(list, parent) || schema.returned == Returned::Always)
                            && returned != Returned::Request)
                }
                (returned, AttributeSelection::Exclude(list)) => {
                    returned == Returned::Default && !is_listed(list, &path)
                }
            };

            if !keep {
                element.remove_sub_attribute(&sub_name);
            }
        }
    }
}
