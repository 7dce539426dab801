//! The runtime attribute tree.
//!
//! An [`Attribute`] is one of three mutually exclusive variants, each carrying
//! its name. Consumers match on the variant; there is no dynamic type
//! inspection anywhere in the crate.

use super::value::ScalarValue;
use std::collections::BTreeMap;

/// Token substituted for a missing `value` or `type` in a composite element name.
pub const DEFAULT_ELEMENT_TOKEN: &str = "default";

/// A named node of the attribute tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Simple(SimpleAttribute),
    Complex(ComplexAttribute),
    MultiValued(MultiValuedAttribute),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::Simple(attribute) => &attribute.name,
            Attribute::Complex(attribute) => &attribute.name,
            Attribute::MultiValued(attribute) => &attribute.name,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleAttribute> {
        match self {
            Attribute::Simple(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexAttribute> {
        match self {
            Attribute::Complex(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn as_complex_mut(&mut self) -> Option<&mut ComplexAttribute> {
        match self {
            Attribute::Complex(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn as_multi_valued(&self) -> Option<&MultiValuedAttribute> {
        match self {
            Attribute::MultiValued(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn as_multi_valued_mut(&mut self) -> Option<&mut MultiValuedAttribute> {
        match self {
            Attribute::MultiValued(attribute) => Some(attribute),
            _ => None,
        }
    }

    /// Scalar value of a simple attribute.
    pub fn value(&self) -> Option<&ScalarValue> {
        self.as_simple().map(|simple| &simple.value)
    }

    /// The complex parts of this attribute: itself if it is complex, every
    /// element if it is a multi-valued collection of complex values, and
    /// nothing otherwise.
    pub fn complex_elements(&self) -> Vec<&ComplexAttribute> {
        match self {
            Attribute::Simple(_) => Vec::new(),
            Attribute::Complex(complex) => vec![complex],
            Attribute::MultiValued(multi) => multi.complex_values().iter().collect(),
        }
    }

    /// Mutable counterpart of [`Attribute::complex_elements`].
    pub fn complex_elements_mut(&mut self) -> Vec<&mut ComplexAttribute> {
        match self {
            Attribute::Simple(_) => Vec::new(),
            Attribute::Complex(complex) => vec![complex],
            Attribute::MultiValued(multi) => multi.complex_values_mut().iter_mut().collect(),
        }
    }
}

impl From<SimpleAttribute> for Attribute {
    fn from(attribute: SimpleAttribute) -> Self {
        Attribute::Simple(attribute)
    }
}

impl From<ComplexAttribute> for Attribute {
    fn from(attribute: ComplexAttribute) -> Self {
        Attribute::Complex(attribute)
    }
}

impl From<MultiValuedAttribute> for Attribute {
    fn from(attribute: MultiValuedAttribute) -> Self {
        Attribute::MultiValued(attribute)
    }
}

/// An attribute holding a single scalar value.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleAttribute {
    pub name: String,
    pub value: ScalarValue,
}

impl SimpleAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An attribute holding named sub-attributes, at most one per name.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexAttribute {
    pub name: String,
    sub_attributes: BTreeMap<String, Attribute>,
}

impl ComplexAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub_attributes: BTreeMap::new(),
        }
    }

    /// Builder-style variant of [`ComplexAttribute::set_sub_attribute`].
    pub fn with_sub_attribute(mut self, attribute: impl Into<Attribute>) -> Self {
        self.set_sub_attribute(attribute);
        self
    }

    /// Insert a sub-attribute keyed by its name, returning any it replaced.
    pub fn set_sub_attribute(&mut self, attribute: impl Into<Attribute>) -> Option<Attribute> {
        let attribute = attribute.into();
        self.sub_attributes
            .insert(attribute.name().to_string(), attribute)
    }

    pub fn sub_attribute(&self, name: &str) -> Option<&Attribute> {
        self.sub_attributes.get(name)
    }

    pub fn sub_attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.sub_attributes.get_mut(name)
    }

    pub fn remove_sub_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.sub_attributes.remove(name)
    }

    pub fn contains_sub_attribute(&self, name: &str) -> bool {
        self.sub_attributes.contains_key(name)
    }

    /// Sub-attributes in name order.
    pub fn sub_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.sub_attributes.values()
    }

    /// A copy of the present sub-attribute names, safe to iterate while
    /// removing entries from this attribute.
    pub fn sub_attribute_names(&self) -> Vec<String> {
        self.sub_attributes.keys().cloned().collect()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_empty(&self) -> bool {
        self.sub_attributes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sub_attributes.len()
    }
}

/// The elements of a multi-valued attribute: scalars or complex values, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum MultiValues {
    Primitive(Vec<ScalarValue>),
    Complex(Vec<ComplexAttribute>),
}

/// An attribute holding a sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiValuedAttribute {
    pub name: String,
    pub values: MultiValues,
}

impl MultiValuedAttribute {
    /// A multi-valued attribute of scalar values.
    pub fn primitive(name: impl Into<String>, values: Vec<ScalarValue>) -> Self {
        Self {
            name: name.into(),
            values: MultiValues::Primitive(values),
        }
    }

    /// A multi-valued attribute of complex values.
    pub fn complex(name: impl Into<String>, values: Vec<ComplexAttribute>) -> Self {
        Self {
            name: name.into(),
            values: MultiValues::Complex(values),
        }
    }

    /// Scalar elements; empty for a collection of complex values.
    pub fn primitive_values(&self) -> &[ScalarValue] {
        match &self.values {
            MultiValues::Primitive(values) => values,
            MultiValues::Complex(_) => &[],
        }
    }

    /// Complex elements; empty for a collection of scalars.
    pub fn complex_values(&self) -> &[ComplexAttribute] {
        match &self.values {
            MultiValues::Complex(values) => values,
            MultiValues::Primitive(_) => &[],
        }
    }

    pub fn complex_values_mut(&mut self) -> &mut [ComplexAttribute] {
        match &mut self.values {
            MultiValues::Complex(values) => values,
            MultiValues::Primitive(_) => &mut [],
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.values, MultiValues::Complex(_))
    }

    pub fn len(&self) -> usize {
        match &self.values {
            MultiValues::Primitive(values) => values.len(),
            MultiValues::Complex(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a complex element by its composite element name.
    ///
    /// The label is recomputed from each element's current `value` and `type`,
    /// so an element whose `value` or `type` changed is found under its new label.
    pub fn find_element(&self, label: &str) -> Option<&ComplexAttribute> {
        self.complex_values()
            .iter()
            .find(|element| composite_element_name(&self.name, element) == label)
    }
}

/// Composite element name `"{attr}_{value}_{type}"` of a multi-valued complex element.
///
/// Missing `value` or `type` sub-attributes are replaced by
/// [`DEFAULT_ELEMENT_TOKEN`].
pub fn composite_element_name(attribute_name: &str, element: &ComplexAttribute) -> String {
    let token = |name: &str| {
        element
            .sub_attribute(name)
            .and_then(Attribute::value)
            .map(ToString::to_string)
            .unwrap_or_else(|| DEFAULT_ELEMENT_TOKEN.to_string())
    };

    format!("{}_{}_{}", attribute_name, token("value"), token("type"))
}
