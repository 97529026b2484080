use oastree_ast::*;
use crate::elements::reference::ReferenceElement;
use std::collections::HashMap;

/// Enhanced Reference builder with TypeScript ReferenceVisitor equivalence
/// Provides fixed field processing, $ref validation, class injection, and metadata handling
pub fn build_reference(element: &Element) -> Option<ReferenceElement> {
    let obj = element.as_object()?.clone();
    build_and_decorate_reference(obj)
}

/// Core builder function with comprehensive field processing
pub fn build_and_decorate_reference(mut obj: ObjectElement) -> Option<ReferenceElement> {
    // Set element type and base classes
    obj.set_element_type("reference");
    obj.add_class("openapi-reference");
    
    // Create reference element
    let mut reference = ReferenceElement::with_content(obj.clone());
    
    // Process all fields with structured validation
    process_reference_fields(&mut reference, &obj);
    
    // Inject comprehensive metadata
    inject_reference_metadata(&mut reference.object, &obj);
    
    Some(reference)
}

/// Process reference fields with validation and class injection
fn process_reference_fields(reference: &mut ReferenceElement, source: &ObjectElement) {
    // Process fixed fields
    process_fixed_fields(reference, source);
    
    // Process $ref field with special handling
    process_ref_field(reference, source);
    
    // Handle specification extensions (explicitly disabled for Reference)
    validate_no_spec_extensions(reference, source);
    
    // Process fallback fields (preserve unknown fields)
    process_fallback_fields(reference, source);
}

/// Process fixed fields: $ref, summary, description
fn process_fixed_fields(reference: &mut ReferenceElement, source: &ObjectElement) {
    let fixed_fields = ["$ref", "summary", "description"];
    
    for field_name in &fixed_fields {
        if let Some(field_value) = source.get(field_name) {
            // Copy field to reference element
            reference.object.set(field_name, field_value.clone());
            
            // Add fixed field metadata
            add_fixed_field_metadata(&mut reference.object, field_name);
        }
    }
}

/// Process $ref field with type validation and class injection
fn process_ref_field(reference: &mut ReferenceElement, source: &ObjectElement) {
    if let Some(ref_elem) = source.get("$ref") {
        if let Some(ref_str) = ref_elem.as_string() {
            // Valid $ref string element
            
            // 1. Inject reference-element class (equivalent to TypeScript ReferenceVisitor)
            reference.object.add_class("reference-element");
            
            // 2. Process $ref value with reference-value class (equivalent to $RefVisitor)
            // Since StringElement doesn't have classes, use metadata instead
            let mut enhanced_ref = ref_str.clone();
            enhanced_ref.meta.properties.insert(
                "class".to_string(),
                SimpleValue::string("reference-value".to_string())
            );
            reference.object.set("$ref", Element::String(enhanced_ref));
            
            // 3. Add $ref validation metadata
            add_ref_validation_metadata(&mut reference.object, &ref_str.content, true);
            
        } else {
            // Invalid $ref type - add validation error
            add_ref_validation_metadata(&mut reference.object, "", false);
            
            // Still preserve the original value for debugging
            reference.object.set("$ref", ref_elem.clone());
        }
    }
}

/// Validate that no specification extensions are present (canSupportSpecificationExtensions = false)
fn validate_no_spec_extensions(reference: &mut ReferenceElement, source: &ObjectElement) {
    let mut spec_extensions = Vec::new();
    
    for member in &source.content {
        if let Element::String(key_str) = &*member.key {
            if key_str.content.starts_with("x-") {
                spec_extensions.push(key_str.content.clone());
            }
        }
    }
    
    if !spec_extensions.is_empty() {
        // Add validation warning for specification extensions
        reference.object.meta.properties.insert(
            "specification-extensions-not-supported".to_string(),
            SimpleValue::array(spec_extensions.into_iter().map(SimpleValue::string).collect())
        );
        
        // Add warning class
        reference.object.add_class("specification-extensions-warning");
    }
}

/// Process fallback fields (preserve unknown fields for debugging/compatibility)
fn process_fallback_fields(reference: &mut ReferenceElement, source: &ObjectElement) {
    let known_fields = ["$ref", "summary", "description"];
    
    for member in &source.content {
        if let Element::String(key_str) = &*member.key {
            let field_name = &key_str.content;
            
            // Skip known fields and spec extensions (already handled)
            if !known_fields.contains(&field_name.as_str()) && !field_name.starts_with("x-") {
                // Add as fallback field
                reference.object.set(field_name, (*member.value).clone());
                add_fallback_field_metadata(&mut reference.object, field_name);
            }
        }
    }
}

/// Inject comprehensive metadata for reference
fn inject_reference_metadata(obj: &mut ObjectElement, source: &ObjectElement) {
    // Add element type metadata
    obj.meta.properties.insert(
        "element-type".to_string(),
        SimpleValue::string("reference".to_string())
    );
    
    // Add spec path metadata
    obj.meta.properties.insert(
        "spec-path".to_string(),
        SimpleValue::array(vec![
            SimpleValue::string("document".to_string()),
            SimpleValue::string("objects".to_string()),
            SimpleValue::string("Reference".to_string())
        ])
    );
    
    // Add field count metadata
    obj.meta.properties.insert(
        "field-count".to_string(),
        SimpleValue::integer(source.content.len() as i64)
    );
    
    // Add specification extensions support flag
    obj.meta.properties.insert(
        "can-support-specification-extensions".to_string(),
        SimpleValue::bool(false)
    );
    
    // Add processing timestamp
    obj.meta.properties.insert(
        "processed-at".to_string(),
        SimpleValue::string(chrono::Utc::now().to_rfc3339())
    );
    
    // Add visitor information
    obj.meta.properties.insert(
        "processed-by".to_string(),
        SimpleValue::string("ReferenceVisitor".to_string())
    );
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(obj: &mut ObjectElement, field_name: &str) {
    obj.meta.properties.insert(
        format!("fixed-field-{}", field_name),
        SimpleValue::bool(true)
    );
}

/// Add metadata for $ref validation
fn add_ref_validation_metadata(obj: &mut ObjectElement, ref_value: &str, is_valid: bool) {
    let mut validation_map = HashMap::new();
    validation_map.insert("is-valid".to_string(), SimpleValue::bool(is_valid));
    validation_map.insert("ref-value".to_string(), SimpleValue::string(ref_value.to_string()));
    validation_map.insert("is-string-element".to_string(), SimpleValue::bool(is_valid));

    obj.meta.properties.insert(
        "ref-validation".to_string(),
        SimpleValue::object(validation_map)
    );
    
    if is_valid {
        obj.meta.properties.insert(
            "referenced-element".to_string(),
            SimpleValue::string("reference".to_string())
        );
        obj.meta.properties.insert(
            "reference-path".to_string(),
            SimpleValue::string(ref_value.to_string())
        );
    }
}

/// Add metadata for fallback fields
fn add_fallback_field_metadata(obj: &mut ObjectElement, field_name: &str) {
    obj.meta.properties.insert(
        format!("fallback-field-{}", field_name),
        SimpleValue::bool(true)
    );
}
