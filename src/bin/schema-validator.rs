//! # SCIM Schema Validator
//!
//! A command-line utility for checking SCIM schema documents before they are
//! loaded by the core.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin schema-validator schemas/Device.json
//! cargo run --bin schema-validator ./schemas/
//! ```
//!
//! Each document is parsed, its attribute definitions are checked (unique
//! names, sub-attributes only on complex attributes, a URI id) and it is
//! assembled into a resource type together with the common `id`, `externalId`
//! and `meta` attributes.
//!
//! ## Output Example
//!
//! ```text
//! Validating schema file: schemas/Device.json
//! ✓ Schema is valid!
//!
//! Schema Summary:
//!   ID: urn:example:params:scim:schemas:Device
//!   Name: Device
//!   Attributes: 3
//!   Required attributes: 1
//!   Multi-valued attributes: 1
//!   Attribute types:
//!     - string: 2
//!     - complex: 1
//!   Required attribute names: serialNumber
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: All schemas are valid
//! - `1`: One or more schemas are invalid or validation error occurred

use scim_core::schema::{SchemaDefinition, SchemaRegistry};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <schema-file-or-directory>", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} schemas/Device.json", args[0]);
        eprintln!("  {} ./schemas/", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);

    if path.is_file() {
        validate_single_file(path);
    } else if path.is_dir() {
        validate_directory(path);
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            path.display()
        );
        process::exit(1);
    }
}

fn validate_single_file(file_path: &Path) {
    println!("Validating schema file: {}", file_path.display());

    match load_and_assemble(file_path) {
        Ok(schema) => {
            println!("✓ Schema is valid!");
            print_schema_summary(&schema);
        }
        Err(e) => {
            eprintln!("❌ Schema validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn validate_directory(dir_path: &Path) {
    println!("Validating schemas in directory: {}", dir_path.display());

    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory: {}", e);
            process::exit(1);
        }
    };

    let mut valid = Vec::new();
    let mut error_count = 0;

    for path in entries.flatten().map(|entry| entry.path()) {
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("\nValidating: {}", file_name);

        match load_and_assemble(&path) {
            Ok(schema) => {
                println!("  ✓ Valid - {} ({})", schema.name, schema.id);
                valid.push(schema);
            }
            Err(e) => {
                eprintln!("  ❌ Invalid - {}", e);
                error_count += 1;
            }
        }
    }

    println!("\nValidation Summary:");
    println!("  Valid schemas: {}", valid.len());
    println!("  Invalid schemas: {}", error_count);

    if error_count > 0 {
        process::exit(1);
    }

    println!("\nTesting schema registry loading...");
    match register_all(valid) {
        Ok(registry) => {
            println!("✓ Schema registry loaded successfully");
            let schemas = registry.get_schemas();
            println!("  Total schemas loaded: {}", schemas.len());
            for schema in schemas {
                println!("    - {} ({})", schema.name, schema.id);
            }
        }
        Err(e) => {
            eprintln!("❌ Failed to load schema registry: {}", e);
            process::exit(1);
        }
    }
}

/// Load a schema document and assemble it into a resource type.
fn load_and_assemble(file_path: &Path) -> Result<SchemaDefinition, Box<dyn std::error::Error>> {
    let schema = SchemaRegistry::load_schema_from_file(file_path)?;
    if schema.name.trim().is_empty() {
        return Err("Schema name cannot be empty".into());
    }

    let registry = SchemaRegistry::new()?;
    registry.build_resource_type(&schema.name, &format!("{}s", schema.name), &[&schema])?;
    Ok(schema)
}

/// Register every schema alongside the core schemas, one resource type each.
fn register_all(
    schemas: Vec<SchemaDefinition>,
) -> Result<SchemaRegistry, Box<dyn std::error::Error>> {
    let mut registry = SchemaRegistry::new()?;
    for schema in schemas {
        if registry.get_schema(&schema.id).is_some() {
            return Err(format!("Schema '{}' is defined twice", schema.id).into());
        }
        let resource_type =
            registry.build_resource_type(&schema.name, &format!("{}s", schema.name), &[&schema])?;
        registry.add_schema(schema);
        registry.register_resource_type(resource_type);
    }
    Ok(registry)
}

fn print_schema_summary(schema: &SchemaDefinition) {
    println!();
    println!("Schema Summary:");
    println!("  ID: {}", schema.id);
    println!("  Name: {}", schema.name);
    if !schema.description.is_empty() {
        println!("  Description: {}", schema.description);
    }
    println!("  Attributes: {}", schema.attributes.len());

    let mut type_counts = BTreeMap::new();
    for attr in &schema.attributes {
        *type_counts.entry(attr.data_type.as_str()).or_insert(0) += 1;
    }
    let required: Vec<&str> = schema
        .attributes
        .iter()
        .filter(|attr| attr.required)
        .map(|attr| attr.name.as_str())
        .collect();
    let multi_valued_count = schema
        .attributes
        .iter()
        .filter(|attr| attr.multi_valued)
        .count();

    println!("  Required attributes: {}", required.len());
    println!("  Multi-valued attributes: {}", multi_valued_count);
    println!("  Attribute types:");
    for (attr_type, count) in type_counts {
        println!("    - {}: {}", attr_type, count);
    }

    if !required.is_empty() {
        println!("  Required attribute names: {}", required.join(", "));
    }
}
