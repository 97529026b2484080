/*!
 * OpenAPI 3.0 License Element Builder
 * 
 * This module provides comprehensive License element building functionality
 * equivalent to the TypeScript LicenseVisitor. It supports:
 * - Fixed fields support (name, url)
 * - Specification extensions support (x-* fields)
 * - Reference support ($ref handling)
 * - Fallback behavior for unknown fields
 * - Type conversion and validation
 * - Recursive folding support
 */

use oastree_ast::*;
use crate::elements::license::LicenseElement;

/// Build a basic LicenseElement from a generic Element
pub fn build_license(element: &Element) -> Option<LicenseElement> {
    let object = element.as_object()?;
    Some(LicenseElement::with_content(object.clone()))
}

/// Build and decorate LicenseElement with enhanced visitor pattern features
/// 
/// This function provides equivalent functionality to the TypeScript LicenseVisitor:
/// - Fixed fields processing with metadata injection (name, url)
/// - Specification extensions support (x-* fields)
/// - Reference handling with metadata
/// - Fallback behavior for unknown fields
/// - Type conversion and validation
/// - Recursive folding support
pub fn build_and_decorate_license<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<LicenseElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut license = LicenseElement::new();
    
    // Add processing metadata
    add_processing_metadata(&mut license);
    add_spec_path_metadata(&mut license);
    
    // Check if it's a reference
    if let Some(ref_value) = obj.get("$ref") {
        if let Some(ref_str) = ref_value.as_string() {
            license.object.set("$ref", Element::String(ref_str.clone()));
            add_ref_metadata(&mut license, &ref_str.content);
            return Some(license);
        }
    }
    
    // Process all object members
    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();
            
            match key.as_str() {
                // Fixed fields
                "name" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        license.set_name(string_elem);
                        add_fixed_field_metadata(&mut license, "name");
                    } else {
                        add_validation_error_metadata(&mut license, "name", "Expected string value");
                    }
                }
                "url" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        // Validate URL format
                        if validate_url_format(&string_elem.content) {
                            license.set_url(string_elem);
                            add_fixed_field_metadata(&mut license, "url");
                        } else {
                            add_validation_error_metadata(&mut license, "url", "Invalid URL format");
                        }
                    } else {
                        add_validation_error_metadata(&mut license, "url", "Expected string value");
                    }
                }
                _ => {
                    // Handle specification extensions and fallback fields
                    if key.starts_with("x-") {
                        // Specification extension
                        let processed_value = if let Some(ref mut f) = folder {
                            f.fold_element(value.clone())
                        } else {
                            value.clone()
                        };
                        
                        license.object.set(key, processed_value);
                        add_specification_extension_metadata(&mut license, key);
                    } else {
                        // Fallback field
                        let processed_value = if let Some(ref mut f) = folder {
                            f.fold_element(value.clone())
                        } else {
                            value.clone()
                        };
                        
                        license.object.set(key, processed_value);
                        add_fallback_metadata(&mut license, key);
                    }
                }
            }
        }
    }
    
    // Validate required fields
    validate_license(&mut license);
    
    Some(license)
}

/// Convert element to StringElement with type conversion
fn convert_to_string_element(element: &Element) -> Option<StringElement> {
    match element {
        Element::String(s) => Some(s.clone()),
        Element::Number(n) => Some(StringElement::new(&n.content.to_string())),
        Element::Boolean(b) => Some(StringElement::new(&b.content.to_string())),
        _ => None,
    }
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(license: &mut LicenseElement, field_name: &str) {
    let key = format!("fixed-field_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::Bool(true));
    license.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

/// Add metadata for references
fn add_ref_metadata(license: &mut LicenseElement, ref_path: &str) {
    license.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("license".to_string()));
    license.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String(ref_path.to_string()));
}

/// Add metadata for specification extensions
fn add_specification_extension_metadata(license: &mut LicenseElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::Bool(true));
    license.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(license: &mut LicenseElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::Bool(true));
    license.object.classes.content.push(Element::String(StringElement::new("fallback-field")));
}

/// Add metadata for validation errors
fn add_validation_error_metadata(license: &mut LicenseElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::string(error_msg.to_string()));
}

/// Add overall processing metadata
fn add_processing_metadata(license: &mut LicenseElement) {
    license.object.meta.properties.insert("processed".to_string(), SimpleValue::bool(true));
    license.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::bool(true));
    license.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::bool(true));
    license.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(license: &mut LicenseElement) {
    license.object.meta.properties.insert("spec-path".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("License".to_string())
    ]));
}

/// Validate URL format (basic validation)
fn validate_url_format(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:")
}

/// Validate license constraints
fn validate_license(license: &mut LicenseElement) {
    // Check for required fields
    if license.name().is_none() {
        add_validation_error_metadata(license, "license", "Missing required field: name");
    }
    
    // If validation passes
    if license.name().is_some() {
        license.object.meta.properties.insert("validLicense".to_string(), SimpleValue::bool(true));
    }
}
