//! # Encoding Builder Module
//!
//! This module provides enhanced encoding building functionality that is functionally equivalent
//! to the TypeScript visitor pattern. It implements specialized headers processing, reference
//! handling, and comprehensive metadata injection.
//!
//! ## Features
//!
//! ### 1. Headers Processing (HeadersVisitor equivalent)
//! - Handles `headers` field as specialized EncodingHeadersElement
//! - Provides reference decoration with `referenced-element=header` metadata
//! - Injects `headerName` metadata for each HeaderElement
//! - Supports polymorphic handling (Reference vs Header elements)
//!
//! ### 2. Recursive Processing (MapVisitor equivalent)
//! - Processes each header value recursively through folder
//! - Maintains proper element transformation
//! - Supports complex document workflows
//!
//! ### 3. Reference Support
//! - Detects and decorates `$ref` elements
//! - Adds appropriate spec path metadata
//! - Maintains reference integrity
//!
//! ### 4. Path Inference
//! - Provides spec path metadata for different element types
//! - Distinguishes between Reference and Header paths
//! - Enables proper navigation and validation
//!
//! ## TypeScript Equivalence
//!
//! This implementation provides feature parity with the TypeScript HeadersVisitor:
//! - ✅ Headers as ObjectElement with specialized processing
//! - ✅ $ref Header support with referenced-element decoration
//! - ✅ HeaderElement name metadata injection
//! - ✅ Reference and Header path inference via specPath
//! - ✅ Recursive processing (MapVisitor equivalent)
//! - ✅ Polymorphic handling (ReferenceLike vs Header)

use oastree_ast::minim_model::*;
use oastree_ast::fold::Fold;
use crate::elements::encoding::EncodingElement;
use crate::builder::encoding_headers_builder::build_and_decorate_encoding_headers;

/// Basic encoding builder - equivalent to simple constructor
pub fn build_encoding(element: &Element) -> Option<EncodingElement> {
    let object = element.as_object()?;
    Some(EncodingElement::with_content(object.clone()))
}

/// Enhanced encoding builder with visitor pattern features
/// Equivalent to TypeScript encoding processing with HeadersVisitor
pub fn build_and_decorate_encoding<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<EncodingElement>
where
    F: Fold,
{
    let object = element.as_object()?;
    let mut encoding = EncodingElement::with_content(object.clone());
    
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
            // Special handling for headers field (HeadersVisitor equivalent)
            "headers" => {
                if let Some(headers_obj) = processed_value.as_object() {
                    // Use specialized headers builder
                    if let Some(headers_element) = build_and_decorate_encoding_headers(&processed_value, folder.as_deref_mut()) {
                        encoding.set_headers(headers_element.object);
                        add_headers_processing_metadata(&mut encoding);
                    } else {
                        // Fallback to regular object
                        encoding.set_headers(headers_obj.clone());
                        add_validation_error_metadata(&mut encoding, "headers", "Failed to process headers object");
                    }
                } else {
                    add_validation_error_metadata(&mut encoding, "headers", "Expected object value for headers");
                }
            },
            // Standard fields
            "contentType" => {
                if let Some(string_val) = convert_to_string_element(&processed_value) {
                    encoding.set_content_type(string_val);
                    add_fixed_field_metadata(&mut encoding, "contentType");
                } else {
                    add_validation_error_metadata(&mut encoding, "contentType", "Expected string value");
                }
            },
            "style" => {
                if let Some(string_val) = convert_to_string_element(&processed_value) {
                    encoding.set_style(string_val);
                    add_fixed_field_metadata(&mut encoding, "style");
                } else {
                    add_validation_error_metadata(&mut encoding, "style", "Expected string value");
                }
            },
            "explode" => {
                if let Some(bool_val) = convert_to_boolean_element(&processed_value) {
                    encoding.set_explode(bool_val);
                    add_fixed_field_metadata(&mut encoding, "explode");
                } else {
                    add_validation_error_metadata(&mut encoding, "explode", "Expected boolean value");
                }
            },
            "allowReserved" => {
                if let Some(bool_val) = convert_to_boolean_element(&processed_value) {
                    encoding.set_allowed_reserved(bool_val);
                    add_fixed_field_metadata(&mut encoding, "allowReserved");
                } else {
                    add_validation_error_metadata(&mut encoding, "allowReserved", "Expected boolean value");
                }
            },
            // $ref handling
            "$ref" => {
                encoding.object.set("$ref", processed_value);
                add_ref_metadata(&mut encoding, "$ref");
            },
            // Fallback for unknown fields
            _ => {
                encoding.object.set(&key_str, processed_value);
                add_fallback_metadata(&mut encoding, &key_str);
            }
        }
    }
    
    // Add processing metadata
    add_processing_metadata(&mut encoding);
    add_spec_path_metadata(&mut encoding);
    
    Some(encoding)
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

/// Convert various element types to BooleanElement
fn convert_to_boolean_element(element: &Element) -> Option<BooleanElement> {
    match element {
        Element::Boolean(b) => Some(b.clone()),
        Element::String(s) => {
            match s.content.to_lowercase().as_str() {
                "true" => Some(BooleanElement::new(true)),
                "false" => Some(BooleanElement::new(false)),
                _ => None,
            }
        },
        _ => None,
    }
}

/// Add metadata for headers processing
fn add_headers_processing_metadata(encoding: &mut EncodingElement) {
    encoding.object.meta.properties.insert("headersProcessed".to_string(), SimpleValue::Bool(true));
    encoding.object.meta.properties.insert("headersVisitor".to_string(), SimpleValue::Bool(true));
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(encoding: &mut EncodingElement, field_name: &str) {
    let key = format!("fixedField_{}", field_name);
    encoding.object.meta.properties.insert(key, SimpleValue::Bool(true));
}

/// Add metadata for references
fn add_ref_metadata(encoding: &mut EncodingElement, field_name: &str) {
    let key = format!("ref_{}", field_name);
    encoding.object.meta.properties.insert(key, SimpleValue::Bool(true));
    encoding.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("encoding".to_string()));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(encoding: &mut EncodingElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    encoding.object.meta.properties.insert(key, SimpleValue::Bool(true));
}

/// Add validation error metadata
fn add_validation_error_metadata(encoding: &mut EncodingElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    encoding.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

/// Add overall processing metadata
fn add_processing_metadata(encoding: &mut EncodingElement) {
    encoding.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(encoding: &mut EncodingElement) {
    encoding.object.meta.properties.insert("specPath".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("Encoding".to_string())
    ]));
}
