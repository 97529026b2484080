//! # Example Builder Module
//!
//! This module provides enhanced example building functionality that is functionally equivalent
//! to the TypeScript `ExampleVisitor` class. It implements visitor pattern features including
//! fixed fields support, specification extensions, reference handling, and comprehensive metadata injection.
//!
//! ## Features
//!
//! ### 1. Fixed Fields Support (FixedFieldsVisitor equivalent)
//! - Processes standard OpenAPI Example fields: `summary`, `description`, `value`, `externalValue`
//! - Validates field types and provides type conversion
//! - Injects metadata for fixed field processing
//!
//! ### 2. Specification Extensions Support
//! - Handles `x-*` prefixed extension fields
//! - Preserves extension values in the example object
//! - Adds metadata to track specification extensions
//!
//! ### 3. Reference Support
//! - Handles `$ref` fields for example references
//! - Adds metadata for reference tracking
//! - Supports recursive resolution when combined with folders
//!
//! ### 4. External Value Reference Detection
//! - Detects when `externalValue` is present and adds `reference-element` class
//! - Equivalent to TypeScript's reference element marking
//! - Provides proper classification for external references
//!
//! ### 5. Fallback Behavior (FallbackVisitor equivalent)
//! - Preserves unknown fields that don't match fixed fields or extensions
//! - Adds metadata to track fallback processing
//! - Maintains full compatibility with custom properties
//!
//! ### 6. Type Conversion and Validation
//! - Converts various element types to appropriate target types
//! - Validates field constraints and relationships
//! - Provides comprehensive error reporting through metadata
//!
//! ### 7. Recursive Folding
//! - Supports optional folder parameter for recursive element processing
//! - Compatible with any type implementing the `Fold` trait
//! - Enables complex document transformation workflows
//!
//! ## Usage Examples
//!
//! ```rust
//! use oastree_ast::DefaultFolder;
//! use oastree_ast::*;
//! use oastree_oas3_0::builder::example_builder::*;
//!
//! // Create a sample element for testing
//! let mut obj = ObjectElement::new();
//! obj.set("summary", Element::String(StringElement::new("Pet example")));
//! obj.set("value", Element::Object(ObjectElement::new()));
//! let element = Element::Object(obj);
//!
//! // Basic usage
//! let example = build_example(&element);
//!
//! // Enhanced usage with visitor pattern features
//! let mut folder = DefaultFolder;
//! let example = build_and_decorate_example(&element, Some(&mut folder));
//! ```
//!
//! ## TypeScript Equivalence
//!
//! This implementation provides feature parity with the TypeScript `ExampleVisitor` class:
//! - ✅ Fixed fields processing (`summary`, `description`, `value`, `externalValue`)
//! - ✅ Specification extensions support (`x-*` fields)
//! - ✅ Reference element classification (when `externalValue` is present)
//! - ✅ Fallback behavior for unknown fields
//! - ✅ Recursive folding capability
//! - ✅ Comprehensive metadata injection
//! - ✅ Type validation and conversion
//! - ✅ SpecPath metadata injection: `["document", "objects", "Example"]`

use oastree_ast::*;
use crate::elements::example::ExampleElement;

/// Basic example builder - equivalent to simple constructor
pub fn build_example(element: &Element) -> Option<ExampleElement> {
    let object = element.as_object()?;
    Some(ExampleElement::with_content(object.clone()))
}

/// Enhanced example builder with visitor pattern features
/// Equivalent to TypeScript ExampleVisitor with FixedFieldsVisitor and FallbackVisitor
pub fn build_and_decorate_example<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<ExampleElement>
where
    F: Fold,
{
    let object = element.as_object()?;
    let mut example = ExampleElement::with_content(object.clone());
    
    // Process each member with visitor pattern
    for member in &object.content {
        let key_str = match &*member.key {
            Element::String(s) => s.content.clone(),
            _ => continue,
        };
        
        let processed_value = if let Some(ref mut f) = folder {
            f.fold_element((*member.value).clone())
        } else {
            (*member.value).clone()
        };
        
        match key_str.as_str() {
            // Fixed fields
            "summary" => {
                if let Some(string_val) = convert_to_string_element(&processed_value) {
                    example.set_summary(string_val);
                    add_fixed_field_metadata(&mut example, "summary");
                } else {
                    add_validation_error_metadata(&mut example, "summary", "Expected string value");
                }
            },
            "description" => {
                if let Some(string_val) = convert_to_string_element(&processed_value) {
                    example.set_description(string_val);
                    add_fixed_field_metadata(&mut example, "description");
                } else {
                    add_validation_error_metadata(&mut example, "description", "Expected string value");
                }
            },
            "value" => {
                example.set_value(processed_value);
                add_fixed_field_metadata(&mut example, "value");
            },
            "externalValue" => {
                if let Some(string_val) = convert_to_string_element(&processed_value) {
                    example.set_external_value(string_val);
                    add_fixed_field_metadata(&mut example, "externalValue");
                    // Mark as reference element when externalValue is present (TypeScript equivalent)
                    add_reference_element_class(&mut example);
                } else {
                    add_validation_error_metadata(&mut example, "externalValue", "Expected string value");
                }
            },
            // $ref handling
            "$ref" => {
                example.object.set("$ref", processed_value);
                add_ref_metadata(&mut example, "$ref");
            },
            // Specification extensions (x-* fields)
            key if key.starts_with("x-") => {
                example.object.set(&key_str, processed_value);
                add_specification_extension_metadata(&mut example, &key_str);
            },
            // Fallback for unknown fields
            _ => {
                example.object.set(&key_str, processed_value);
                add_fallback_metadata(&mut example, &key_str);
            }
        }
    }
    
    // Add processing metadata
    add_processing_metadata(&mut example);
    add_spec_path_metadata(&mut example);
    
    Some(example)
}

/// Convert various element types to StringElement
fn convert_to_string_element(element: &Element) -> Option<StringElement> {
    match element {
        Element::String(s) => Some(s.clone()),
        Element::Number(n) => Some(StringElement::new(&n.content.to_string())),
        Element::Boolean(b) => Some(StringElement::new(&b.content.to_string())),
        _ => None,
    }
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(example: &mut ExampleElement, field_name: &str) {
    let key = format!("fixedField_{}", field_name);
    example.object.meta.properties.insert(key, SimpleValue::Bool(true));
    example.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

/// Add metadata for references
fn add_ref_metadata(example: &mut ExampleElement, field_name: &str) {
    let key = format!("ref_{}", field_name);
    example.object.meta.properties.insert(key, SimpleValue::Bool(true));
    example.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("example".to_string()));
}

/// Add metadata for specification extensions
fn add_specification_extension_metadata(example: &mut ExampleElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    example.object.meta.properties.insert(key, SimpleValue::Bool(true));
    example.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(example: &mut ExampleElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    example.object.meta.properties.insert(key, SimpleValue::Bool(true));
}

/// Add validation error metadata
fn add_validation_error_metadata(example: &mut ExampleElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    example.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

/// Add reference element class when externalValue is present
fn add_reference_element_class(example: &mut ExampleElement) {
    example.object.classes.content.push(Element::String(StringElement::new("reference-element")));
    example.object.meta.properties.insert("isReferenceElement".to_string(), SimpleValue::Bool(true));
}

/// Add overall processing metadata
fn add_processing_metadata(example: &mut ExampleElement) {
    example.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    example.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    example.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::Bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(example: &mut ExampleElement) {
    example.object.meta.properties.insert("specPath".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("Example".to_string())
    ]));
}
