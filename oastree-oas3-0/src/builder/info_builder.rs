/*!
 * OpenAPI 3.0 Info Element Builder
 * 
 * This module provides comprehensive Info element building functionality
 * equivalent to the TypeScript InfoVisitor. It supports:
 * - Fixed fields support (title, version, description, etc.)
 * - Specification extensions support (x-* fields)
 * - Reference support ($ref handling)
 * - Fallback behavior for unknown fields
 * - Type conversion and validation
 * - Recursive folding support
 * - Contact and License sub-element processing
 * - Version element class injection (api-version, version)
 */

use oastree_ast::*;
use crate::elements::info::InfoElement;
use crate::builder::{build_contact, build_license};

/// Build a basic InfoElement from a generic Element
pub fn build_info(element: &Element) -> Option<InfoElement> {
    let object = element.as_object()?;
    Some(InfoElement::with_content(object.clone()))
}

/// Build and decorate InfoElement with enhanced visitor pattern features
/// 
/// This function provides equivalent functionality to the TypeScript InfoVisitor:
/// - Fixed fields processing with metadata injection
/// - Specification extensions support
/// - Reference handling with metadata
/// - Fallback behavior for unknown fields
/// - Type conversion and validation
/// - Recursive folding support
/// - Contact/License sub-element processing
pub fn build_and_decorate_info<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<InfoElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut info = InfoElement::new();
    
    // Add processing metadata
    add_processing_metadata(&mut info);
    add_spec_path_metadata(&mut info);
    
    // Check if it's a reference
    if let Some(ref_value) = obj.get("$ref") {
        if let Some(ref_str) = ref_value.as_string() {
            info.object.set("$ref", Element::String(ref_str.clone()));
            add_ref_metadata(&mut info, &ref_str.content);
            return Some(info);
        }
    }
    
    // Process all object members
    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();
            
            match key.as_str() {
                // Fixed fields
                "title" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        info.set_title(string_elem);
                        add_fixed_field_metadata(&mut info, "title");
                    } else {
                        add_validation_error_metadata(&mut info, "title", "Expected string value");
                    }
                }
                "version" => {
                    if let Some(mut string_elem) = convert_to_string_element(value) {
                        // Add version-specific classes (equivalent to VersionVisitor)
                        string_elem.meta.properties.insert("api-version".to_string(), SimpleValue::bool(true));
                        string_elem.meta.properties.insert("version".to_string(), SimpleValue::bool(true));
                        info.set_version(string_elem);
                        add_fixed_field_metadata(&mut info, "version");
                    } else {
                        add_validation_error_metadata(&mut info, "version", "Expected string value");
                    }
                }
                "description" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        info.set_description(string_elem);
                        add_fixed_field_metadata(&mut info, "description");
                    } else {
                        add_validation_error_metadata(&mut info, "description", "Expected string value");
                    }
                }
                "termsOfService" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        info.set_terms_of_service(string_elem);
                        add_fixed_field_metadata(&mut info, "termsOfService");
                    } else {
                        add_validation_error_metadata(&mut info, "termsOfService", "Expected string value");
                    }
                }
                "contact" => {
                    // Process contact with recursive folding
                    let processed_contact = if let Some(ref mut f) = folder {
                        f.fold_element(value.clone())
                    } else {
                        value.clone()
                    };
                    
                    if let Some(contact_elem) = build_contact(&processed_contact) {
                        info.set_contact(contact_elem);
                        add_fixed_field_metadata(&mut info, "contact");
                    } else {
                        // Fallback: set as generic object
                        if let Some(obj_elem) = processed_contact.as_object() {
                            info.object.set("contact", Element::Object(obj_elem.clone()));
                            add_fallback_metadata(&mut info, "contact");
                        }
                    }
                }
                "license" => {
                    // Process license with recursive folding
                    let processed_license = if let Some(ref mut f) = folder {
                        f.fold_element(value.clone())
                    } else {
                        value.clone()
                    };
                    
                    if let Some(license_elem) = build_license(&processed_license) {
                        info.set_license(license_elem);
                        add_fixed_field_metadata(&mut info, "license");
                    } else {
                        // Fallback: set as generic object
                        if let Some(obj_elem) = processed_license.as_object() {
                            info.object.set("license", Element::Object(obj_elem.clone()));
                            add_fallback_metadata(&mut info, "license");
                        }
                    }
                }
                _ => {
                    // Handle specification extensions and fallback fields
                    if key.starts_with("x-") {
                        // Specification extension
                        info.object.set(key, value.clone());
                        add_specification_extension_metadata(&mut info, key);
                    } else {
                        // Fallback field
                        info.object.set(key, value.clone());
                        add_fallback_metadata(&mut info, key);
                    }
                }
            }
        }
    }
    
    // Validate required fields
    validate_info(&mut info);
    
    Some(info)
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
fn add_fixed_field_metadata(info: &mut InfoElement, field_name: &str) {
    let key = format!("fixed-field_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::Bool(true));
    info.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

/// Add metadata for references
fn add_ref_metadata(info: &mut InfoElement, ref_path: &str) {
    info.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("info".to_string()));
    info.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String(ref_path.to_string()));
}

/// Add metadata for specification extensions
fn add_specification_extension_metadata(info: &mut InfoElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::bool(true));
    info.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(info: &mut InfoElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::bool(true));
    info.object.classes.content.push(Element::String(StringElement::new("fallback-field")));
}

/// Add metadata for validation errors
fn add_validation_error_metadata(info: &mut InfoElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::string(error_msg.to_string()));
}

/// Add overall processing metadata
fn add_processing_metadata(info: &mut InfoElement) {
    info.object.meta.properties.insert("processed".to_string(), SimpleValue::bool(true));
    info.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::bool(true));
    info.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::bool(true));
    info.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(info: &mut InfoElement) {
    info.object.meta.properties.insert("specPath".to_string(), SimpleValue::array(vec![
        SimpleValue::string("document".to_string()),
        SimpleValue::string("objects".to_string()),
        SimpleValue::string("Info".to_string())
    ]));
}

/// Validate info constraints
fn validate_info(info: &mut InfoElement) {
    // Check for required fields
    if info.title().is_none() {
        add_validation_error_metadata(info, "info", "Missing required field: title");
    }
    
    if info.version().is_none() {
        add_validation_error_metadata(info, "info", "Missing required field: version");
    }
    
    // If validation passes
    if info.title().is_some() && info.version().is_some() {
        info.object.meta.properties.insert("validInfo".to_string(), SimpleValue::bool(true));
    }
}
