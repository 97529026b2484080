use oastree_ast::minim_model::*;
use oastree_ast::fold::Fold;
use crate::elements::discriminator_mapping::DiscriminatorMappingElement;

/// Basic discriminator mapping builder
pub fn build_discriminator_mapping(element: &Element) -> Option<DiscriminatorMappingElement> {
    let object = element.as_object()?;
    Some(DiscriminatorMappingElement::with_content(object.clone()))
}

/// Enhanced discriminator mapping builder with visitor pattern features
/// Equivalent to TypeScript MappingVisitor with MapVisitor and FallbackVisitor
pub fn build_and_decorate_discriminator_mapping<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<DiscriminatorMappingElement>
where
    F: Fold,
{
    let object = element.as_object()?;
    let mut mapping = DiscriminatorMappingElement::with_content(object.clone());
    
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
        
        // All fields in discriminator mapping should be string values
        if let Some(string_val) = convert_to_string_element(&processed_value) {
            mapping.set_mapping(&key_str, string_val);
            add_mapping_field_metadata(&mut mapping, &key_str);
            add_type_conversion_metadata(&mut mapping, &key_str, "string");
        } else {
            // Add fallback for non-string values
            mapping.object.set(&key_str, processed_value);
            add_fallback_metadata(&mut mapping, &key_str);
            add_validation_error_metadata(&mut mapping, &key_str, "Expected string value for mapping");
        }
    }
    
    // Add processing metadata
    add_processing_metadata(&mut mapping);
    add_spec_path_metadata(&mut mapping);
    
    Some(mapping)
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

/// Add metadata for mapping fields
fn add_mapping_field_metadata(mapping: &mut DiscriminatorMappingElement, field_name: &str) {
    let key = format!("mappingField_{}", field_name);
    mapping.object.meta.properties.insert(key, SimpleValue::Bool(true));
}

/// Add metadata for type conversions
fn add_type_conversion_metadata(mapping: &mut DiscriminatorMappingElement, field_name: &str, expected_type: &str) {
    let key = format!("typeConversion_{}", field_name);
    mapping.object.meta.properties.insert(key, SimpleValue::String(expected_type.to_string()));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(mapping: &mut DiscriminatorMappingElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    mapping.object.meta.properties.insert(key, SimpleValue::Bool(true));
}

/// Add validation error metadata
fn add_validation_error_metadata(mapping: &mut DiscriminatorMappingElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    mapping.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

/// Add overall processing metadata
fn add_processing_metadata(mapping: &mut DiscriminatorMappingElement) {
    mapping.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(mapping: &mut DiscriminatorMappingElement) {
    mapping.object.meta.properties.insert("specPath".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("value".to_string())
    ]));
}
