//! # Discriminator Builder Module
//!
//! This module provides enhanced discriminator building functionality that is functionally equivalent
//! to the TypeScript `DiscriminatorVisitor` class. It implements visitor pattern features including
//! fixed fields support, mapping handling, fallback behavior, and comprehensive metadata injection.
//!
//! ## Features
//!
//! ### 1. Fixed Fields Support (FixedFieldsVisitor equivalent)
//! - Processes standard OpenAPI Discriminator fields: `propertyName`, `mapping`
//! - Validates field types and provides proper handling
//! - Injects metadata for fixed field processing
//!
//! ### 2. Mapping Support (MappingVisitor equivalent)
//! - Handles `mapping` field as specialized DiscriminatorMappingElement
//! - Provides recursive folding for mapping structure
//! - Maintains Map type semantics rather than generic Object
//!
//! ### 3. Fallback Behavior (FallbackVisitor equivalent)
//! - Preserves unknown fields that don't match fixed fields
//! - Adds metadata to track fallback processing
//! - Maintains compatibility with custom properties
//!
//! ### 4. Reference Support
//! - Handles `$ref` fields for discriminator references
//! - Adds metadata for reference tracking
//! - Supports recursive resolution when combined with folders
//!
//! ### 5. Field Validation
//! - Validates that `propertyName` is a string
//! - Ensures `mapping` contains valid schema references
//! - Provides comprehensive error reporting through metadata
//!
//! ### 6. Recursive Folding
//! - Supports optional folder parameter for recursive element processing
//! - Compatible with any type implementing the `Fold` trait
//! - Enables complex document transformation workflows
//!
//! ## TypeScript Equivalence
//!
//! This implementation provides feature parity with the TypeScript `DiscriminatorVisitor` class:
//! - ✅ Fixed fields processing
//! - ✅ Specialized mapping handling
//! - ✅ Fallback behavior for unknown fields
//! - ✅ Recursive folding capability
//! - ✅ Comprehensive metadata injection
//! - ✅ Field validation
//! - ✅ Reference handling
//! - ❌ Specification extensions (disabled by design, matching TypeScript)

use oastree_ast::*;
use crate::elements::discriminator::DiscriminatorElement;
use crate::builder::discriminator_mapping_builder::build_and_decorate_discriminator_mapping;

/// Basic discriminator builder - equivalent to simple constructor
pub fn build_discriminator(element: &Element) -> Option<DiscriminatorElement> {
    let object = element.as_object()?;
    Some(DiscriminatorElement::with_content(object.clone()))
}

/// Enhanced discriminator builder with visitor pattern features
/// Equivalent to TypeScript DiscriminatorVisitor with FixedFieldsVisitor and FallbackVisitor
pub fn build_and_decorate_discriminator<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<DiscriminatorElement>
where
    F: Fold,
{
    let object = element.as_object()?;
    let mut discriminator = DiscriminatorElement::with_content(object.clone());
    
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
            // Fixed field: propertyName
            "propertyName" => {
                if let Some(string_val) = convert_to_string_element(&processed_value) {
                    discriminator.set_property_name(string_val);
                    add_fixed_field_metadata(&mut discriminator, "propertyName");
                    add_type_conversion_metadata(&mut discriminator, "propertyName", "string");
                } else {
                    add_validation_error_metadata(&mut discriminator, "propertyName", "Expected string value");
                }
            },
            // Fixed field: mapping (specialized handling)
            "mapping" => {
                if let Some(mapping_obj) = processed_value.as_object() {
                    // Use specialized mapping builder
                    if let Some(mapping_element) = build_and_decorate_discriminator_mapping(&processed_value, folder.as_deref_mut()) {
                        discriminator.set_mapping(mapping_element.object);
                        add_fixed_field_metadata(&mut discriminator, "mapping");
                        add_mapping_metadata(&mut discriminator);
                    } else {
                        // Fallback to regular object
                        discriminator.set_mapping(mapping_obj.clone());
                        add_validation_error_metadata(&mut discriminator, "mapping", "Failed to process mapping object");
                    }
                } else {
                    add_validation_error_metadata(&mut discriminator, "mapping", "Expected object value for mapping");
                }
            },
            // $ref handling
            "$ref" => {
                discriminator.object.set("$ref", processed_value);
                add_ref_metadata(&mut discriminator, "$ref");
            },
            // Fallback for unknown fields (specification extensions are disabled)
            _ => {
                discriminator.object.set(&key_str, processed_value);
                add_fallback_metadata(&mut discriminator, &key_str);
            }
        }
    }
    
    // Validate discriminator structure
    validate_discriminator(&mut discriminator);
    
    // Add processing metadata
    add_processing_metadata(&mut discriminator);
    add_spec_path_metadata(&mut discriminator);
    
    Some(discriminator)
}

/// Convert various element types to StringElement with fallback behavior
fn convert_to_string_element(element: &Element) -> Option<StringElement> {
    match element {
        Element::String(s) => Some(s.clone()),
        Element::Number(n) => Some(StringElement::new(&n.content.to_string())),
        Element::Boolean(b) => Some(StringElement::new(&b.content.to_string())),
        _ => None,
    }
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(discriminator: &mut DiscriminatorElement, _field_name: &str) {
    let key = format!("fixedField_{}", _field_name);
    discriminator.object.meta.properties.insert(key, SimpleValue::bool(true));
}

/// Add metadata for type conversions
fn add_type_conversion_metadata(discriminator: &mut DiscriminatorElement, field_name: &str, expected_type: &str) {
    let key = format!("typeConversion_{}", field_name);
    discriminator.object.meta.properties.insert(key, SimpleValue::string(expected_type.to_string()));
}

/// Add metadata for mapping processing
fn add_mapping_metadata(discriminator: &mut DiscriminatorElement) {
    discriminator.object.meta.properties.insert("mappingProcessed".to_string(), SimpleValue::bool(true));
}

/// Add metadata for references
fn add_ref_metadata(discriminator: &mut DiscriminatorElement, field_name: &str) {
    let key = format!("ref_{}", field_name);
    discriminator.object.meta.properties.insert(key, SimpleValue::bool(true));
    discriminator.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::string("discriminator".to_string()));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(discriminator: &mut DiscriminatorElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    discriminator.object.meta.properties.insert(key, SimpleValue::bool(true));
}

/// Add validation error metadata
fn add_validation_error_metadata(discriminator: &mut DiscriminatorElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    discriminator.object.meta.properties.insert(key, SimpleValue::string(error_msg.to_string()));
}

/// Add overall processing metadata
fn add_processing_metadata(discriminator: &mut DiscriminatorElement) {
    discriminator.object.meta.properties.insert("processed".to_string(), SimpleValue::bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(discriminator: &mut DiscriminatorElement) {
    discriminator.object.meta.properties.insert("specPath".to_string(), SimpleValue::array(vec![
        SimpleValue::string("document".to_string()),
        SimpleValue::string("objects".to_string()),
        SimpleValue::string("Discriminator".to_string())
    ]));
}

/// Validate discriminator structure
fn validate_discriminator(discriminator: &mut DiscriminatorElement) {
    let has_property_name = discriminator.property_name().is_some();
    
    if !has_property_name {
        add_validation_error_metadata(
            discriminator,
            "discriminator",
            "Discriminator must have a propertyName field"
        );
    } else {
        discriminator.object.meta.properties.insert("validDiscriminator".to_string(), SimpleValue::bool(true));
    }
    
    // Validate mapping if present
    if let Some(mapping) = discriminator.mapping() {
        if mapping.content.is_empty() {
            add_validation_error_metadata(
                discriminator,
                "mapping",
                "Mapping should not be empty if present"
            );
        } else {
            discriminator.object.meta.properties.insert("validMapping".to_string(), SimpleValue::bool(true));
        }
    }
}
