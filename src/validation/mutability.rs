//! Mutability enforcement when a resource is replaced.

use crate::error::{ScimError, ScimResult};
use crate::resource::{Attribute, ComplexAttribute, ResourceObject, composite_element_name};
use crate::schema::{AttributeSchema, Mutability, ResourceTypeSchema};

use log::debug;

/// Reconcile a replacement object with the stored one.
///
/// - Immutable: a changed value fails with a mutability violation; an omitted
///   value is carried forward from `old`.
/// - ReadOnly: the stored value replaces whatever `new` supplied; with no
///   stored value the supplied one is discarded.
///
/// An immutable complex value may omit stored sub-attributes; they are
/// carried forward before the value is compared.
///
/// Both rules are applied to top-level attributes and one level into complex
/// and multi-valued complex sub-attributes. Multi-valued elements are paired
/// with their stored versions by composite element name; element order of
/// `new` is kept. On error `new` is left unchanged.
pub fn enforce_mutability_on_update(
    old: &ResourceObject,
    new: &mut ResourceObject,
    schema: &ResourceTypeSchema,
) -> ScimResult<()> {
    let mut staged = new.clone();

    for attribute_schema in schema.attributes() {
        let name = attribute_schema.name.as_str();
        let stored = old.attribute(name);

        match attribute_schema.mutability {
            Mutability::Immutable => {
                if let Some(stored) = stored {
                    match staged.attribute_mut(name) {
                        Some(supplied) => {
                            carry_omitted_sub_attributes(stored, supplied);
                            if *supplied != *stored {
                                return Err(ScimError::mutability_violation(name));
                            }
                        }
                        None => {
                            debug!("Carrying immutable attribute '{}' forward", name);
                            staged.set_attribute(stored.clone());
                        }
                    }
                }
            }
            Mutability::ReadOnly => {
                match stored {
                    Some(stored) => {
                        staged.set_attribute(stored.clone());
                    }
                    None => {
                        if staged.remove_attribute(name).is_some() {
                            debug!("Discarding client-supplied read-only attribute '{}'", name);
                        }
                    }
                }
                continue;
            }
            Mutability::ReadWrite | Mutability::WriteOnly => {}
        }

        if let Some(supplied) = staged.attribute_mut(name) {
            enforce_sub_attributes(attribute_schema, stored, supplied)?;
        }
    }

    *new = staged;
    Ok(())
}

/// Copy sub-attributes present in the stored value but omitted from the
/// supplied one. Multi-valued elements are paired by composite element name.
fn carry_omitted_sub_attributes(stored: &Attribute, supplied: &mut Attribute) {
    match (stored, supplied) {
        (Attribute::Complex(stored), Attribute::Complex(supplied)) => {
            fill_omitted(stored, supplied);
        }
        (Attribute::MultiValued(stored), Attribute::MultiValued(supplied)) => {
            let name = supplied.name.clone();
            for element in supplied.complex_values_mut() {
                let label = composite_element_name(&name, element);
                if let Some(previous) = stored.find_element(&label) {
                    fill_omitted(previous, element);
                }
            }
        }
        _ => {}
    }
}

fn fill_omitted(stored: &ComplexAttribute, supplied: &mut ComplexAttribute) {
    for sub in stored.sub_attributes() {
        if !supplied.contains_sub_attribute(sub.name()) {
            debug!("Carrying immutable sub-attribute '{}' forward", sub.name());
            supplied.set_sub_attribute(sub.clone());
        }
    }
}

fn enforce_sub_attributes(
    schema: &AttributeSchema,
    stored: Option<&Attribute>,
    supplied: &mut Attribute,
) -> ScimResult<()> {
    match supplied {
        Attribute::Simple(_) => Ok(()),
        Attribute::Complex(element) => {
            let stored = stored.and_then(Attribute::as_complex);
            enforce_element(schema, stored, element)
        }
        Attribute::MultiValued(multi) => {
            let stored = stored.and_then(Attribute::as_multi_valued);
            for element in multi.complex_values_mut() {
                let label = composite_element_name(&schema.name, element);
                let previous = stored.and_then(|stored| stored.find_element(&label));
                enforce_element(schema, previous, element)?;
            }
            Ok(())
        }
    }
}

fn enforce_element(
    schema: &AttributeSchema,
    stored: Option<&ComplexAttribute>,
    supplied: &mut ComplexAttribute,
) -> ScimResult<()> {
    for sub_schema in &schema.sub_attributes {
        let name = sub_schema.name.as_str();
        let previous = stored.and_then(|stored| stored.sub_attribute(name));

        match sub_schema.mutability {
            Mutability::Immutable => {
                if let Some(previous) = previous {
                    match supplied.sub_attribute(name) {
                        Some(current) if current != previous => {
                            return Err(ScimError::mutability_violation(format!(
                                "{}.{}",
                                schema.name, name
                            )));
                        }
                        Some(_) => {}
                        None => {
                            supplied.set_sub_attribute(previous.clone());
                        }
                    }
                }
            }
            Mutability::ReadOnly => match previous {
                Some(previous) => {
                    supplied.set_sub_attribute(previous.clone());
                }
                None => {
                    supplied.remove_sub_attribute(name);
                }
            },
            Mutability::ReadWrite | Mutability::WriteOnly => {}
        }
    }
    Ok(())
}
