use oastree_ast::*;
use crate::elements::tag::TagElement;

/// Comprehensive OpenAPI Tag Builder
/// 
/// This module provides tag construction with full TypeScript TagVisitor equivalence.
/// 
/// Features supported:
/// - Fixed fields support (name, description, externalDocs)
/// - Specification extensions (x-*) with metadata
/// - Fallback behavior for unknown fields
/// - Type conversion between element types
/// - Comprehensive metadata injection
/// - Element classification and spec path metadata
/// - External documentation processing with recursive folding
/// - Validation with early rejection of invalid structures

/// Build a basic TagElement from a generic Element
pub fn build_tag(element: &Element) -> Option<TagElement> {
    let obj = element.as_object()?.clone();
    let tag = TagElement::with_content(obj);
    
    // Validate name field exists (OpenAPI requirement)
    if tag.name().is_none() {
        return None; // Invalid Tag (name is required in OpenAPI spec)
    }
    
    Some(tag)
}

/// Build and decorate TagElement with enhanced visitor pattern features
pub fn build_and_decorate_tag<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<TagElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut tag = TagElement::new();
    
    // Process object members with fixed field support and fallback handling
    for member in &obj.content {
        if let Element::String(key) = member.key.as_ref() {
            let key_str = &key.content;
            let value = member.value.as_ref();
            
            match key_str.as_str() {
                // Fixed fields - direct mapping with type conversion
                "name" => {
                    if let Some(converted) = convert_to_string_element(value) {
                        tag.object.set(key_str, Element::String(converted));
                        add_fixed_field_metadata(&mut tag.object, key_str);
                    } else if let Some(folded) = folder.as_mut().map(|f| f.fold_element(value.clone())) {
                        tag.object.set(key_str, folded);
                        add_fixed_field_metadata(&mut tag.object, key_str);
                    }
                }
                "description" => {
                    if let Some(converted) = convert_to_string_element(value) {
                        tag.object.set(key_str, Element::String(converted));
                        add_fixed_field_metadata(&mut tag.object, key_str);
                    } else if let Some(folded) = folder.as_mut().map(|f| f.fold_element(value.clone())) {
                        tag.object.set(key_str, folded);
                        add_fixed_field_metadata(&mut tag.object, key_str);
                    }
                }
                "externalDocs" => {
                    // Process external documentation with recursive folding
                    if let Element::Object(_external_docs_obj) = value {
                        let processed_external_docs = if let Some(ref mut f) = folder {
                            f.fold_element(value.clone())
                        } else {
                            value.clone()
                        };
                        
                        // Try to build as ExternalDocumentation if it's an object
                        if let Element::Object(_processed_obj) = &processed_external_docs {
                            if let Some(external_docs) = crate::builder::external_documentation_builder::build_external_docs(&processed_external_docs) {
                                tag.object.set("externalDocs", Element::Object(external_docs.object));
                            } else {
                                tag.object.set("externalDocs", processed_external_docs);
                            }
                        } else {
                            tag.object.set("externalDocs", processed_external_docs);
                        }
                        
                        add_fixed_field_metadata(&mut tag.object, "externalDocs");
                        add_external_docs_metadata(&mut tag.object);
                    }
                }
                "$ref" => {
                    // Handle $ref with reference metadata
                    if let Element::String(ref_str) = value {
                        tag.object.set("$ref", value.clone());
                        add_reference_metadata(&mut tag.object, &ref_str.content, "tag");
                    }
                }
                _ => {
                    // Handle specification extensions (x-*) and fallback fields
                    if key_str.starts_with("x-") {
                        // Specification extension
                        let processed_value = if let Some(ref mut f) = folder {
                            f.fold_element(value.clone())
                        } else {
                            value.clone()
                        };
                        tag.object.set(key_str, processed_value);
                        add_specification_extension_metadata(&mut tag.object, key_str);
                    } else {
                        // Fallback field - preserve unknown fields
                        let processed_value = if let Some(ref mut f) = folder {
                            f.fold_element(value.clone())
                        } else {
                            value.clone()
                        };
                        tag.object.set(key_str, processed_value);
                        add_fallback_field_metadata(&mut tag.object, key_str);
                    }
                }
            }
        }
    }
    
    // Add element class metadata
    tag.object.add_class("tag");
    tag.object.meta.properties.insert(
        "element-type".to_string(),
        SimpleValue::string("tag".to_string())
    );
    
    // Add spec path metadata (equivalent to TypeScript specPath)
    add_spec_path_metadata(&mut tag.object);
    
    // Validate tag structure
    validate_tag(&tag)?;
    
    Some(tag)
}

/// Convert element to StringElement with type safety
fn convert_to_string_element(element: &Element) -> Option<StringElement> {
    match element {
        Element::String(s) => Some(s.clone()),
        Element::Number(n) => Some(StringElement::new(&n.content.to_string())),
        Element::Boolean(b) => Some(StringElement::new(&b.content.to_string())),
        _ => None,
    }
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(obj: &mut ObjectElement, field_name: &str) {
    obj.meta.properties.insert(
        format!("fixed-field-{}", field_name),
        SimpleValue::bool(true)
    );
}

/// Add metadata for specification extensions
fn add_specification_extension_metadata(obj: &mut ObjectElement, field_name: &str) {
    obj.add_class("specification-extension");
    obj.meta.properties.insert(
        "specification-extension".to_string(),
        SimpleValue::string(field_name.to_string())
    );
}

/// Add metadata for fallback fields
fn add_fallback_field_metadata(obj: &mut ObjectElement, field_name: &str) {
    obj.meta.properties.insert(
        format!("fallback-field-{}", field_name),
        SimpleValue::bool(true)
    );
}

/// Add metadata for $ref references
fn add_reference_metadata(obj: &mut ObjectElement, ref_path: &str, element_type: &str) {
    obj.add_class("reference");
    obj.meta.properties.insert(
        "referenced-element".to_string(),
        SimpleValue::string(element_type.to_string())
    );
    obj.meta.properties.insert(
        "reference-path".to_string(),
        SimpleValue::string(ref_path.to_string())
    );
}

/// Add metadata for external documentation
fn add_external_docs_metadata(obj: &mut ObjectElement) {
    obj.meta.properties.insert(
        "has-external-docs".to_string(),
        SimpleValue::bool(true)
    );
}

/// Add spec path metadata (equivalent to TypeScript specPath)
fn add_spec_path_metadata(obj: &mut ObjectElement) {
    obj.meta.properties.insert(
        "spec-path".to_string(),
        SimpleValue::array(vec![
            SimpleValue::string("document".to_string()),
            SimpleValue::string("objects".to_string()),
            SimpleValue::string("Tag".to_string()),
        ])
    );
}

/// Validate tag structure
fn validate_tag(tag: &TagElement) -> Option<()> {
    // If this is a $ref tag, skip standard validation
    if tag.object.get("$ref").is_some() {
        return Some(()); // $ref tags are valid without other required fields
    }
    
    // Check required fields for non-reference tags
    if tag.name().is_none() {
        return None; // name is required for non-reference tags
    }
    
    // Additional validation can be added here
    Some(())
}
