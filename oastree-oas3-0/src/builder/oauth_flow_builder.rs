/*!
 * OpenAPI 3.0 OAuth Flow Element Builder
 * 
 * This module provides comprehensive OAuth Flow element building functionality
 * equivalent to the TypeScript OAuthFlowVisitor. It supports:
 * - Fixed fields support (authorizationUrl, tokenUrl, refreshUrl, scopes)
 * - Specification extensions support (x-* fields)
 * - Reference support ($ref handling)
 * - Fallback behavior for unknown fields
 * - Type conversion and validation
 * - Recursive folding support
 * - Scopes handling with proper Map visitor pattern
 * - URL format validation
 */

use oastree_ast::minim_model::*;
use oastree_ast::fold::Fold;
use crate::elements::oauth_flow::OAuthFlowElement;

/// Build a basic OAuthFlowElement from a generic Element
pub fn build_oauth_flow(element: &Element) -> Option<OAuthFlowElement> {
    let obj = element.as_object()?;
    let mut flow = OAuthFlowElement::new();

    for member in &obj.content {
        if let Element::String(key) = &*member.key {
            match key.content.as_str() {
                "authorizationUrl" => {
                    if let Element::String(val) = &*member.value {
                        flow.set_authorization_url(val.clone());
                    }
                }
                "tokenUrl" => {
                    if let Element::String(val) = &*member.value {
                        flow.set_token_url(val.clone());
                    }
                }
                "refreshUrl" => {
                    if let Element::String(val) = &*member.value {
                        flow.set_refresh_url(val.clone());
                    }
                }
                "scopes" => {
                    if let Element::Object(val) = &*member.value {
                        flow.set_scopes(val.clone());
                    }
                }
                _ => {
                    // 保留未知字段（可选）
                    flow.object.set(&key.content, (*member.value).clone());
                }
            }
        }
    }

    Some(flow)
}

/// Build and decorate OAuthFlowElement with enhanced visitor pattern features
/// 
/// This function provides equivalent functionality to the TypeScript OAuthFlowVisitor:
/// - Fixed fields processing with metadata injection
/// - Specification extensions support (x-* fields)
/// - Reference handling with metadata
/// - Fallback behavior for unknown fields
/// - Type conversion and validation
/// - Recursive folding support
/// - Scopes handling with Map visitor pattern
/// - URL format validation
pub fn build_and_decorate_oauth_flow<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<OAuthFlowElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut flow = OAuthFlowElement::new();
    
    // Add processing metadata
    add_processing_metadata(&mut flow);
    add_spec_path_metadata(&mut flow);
    
    // Check if it's a reference
    if let Some(ref_value) = obj.get("$ref") {
        if let Some(ref_str) = ref_value.as_string() {
            flow.object.set("$ref", Element::String(ref_str.clone()));
            add_ref_metadata(&mut flow, &ref_str.content);
            return Some(flow);
        }
    }
    
    // Process all object members
    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();
            
            match key.as_str() {
                // Fixed fields
                "authorizationUrl" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        // Validate URL format
                        if validate_url_format(&string_elem.content) {
                            flow.set_authorization_url(string_elem);
                            add_fixed_field_metadata(&mut flow, "authorizationUrl");
                        } else {
                            add_validation_error_metadata(&mut flow, "authorizationUrl", "Invalid URL format");
                        }
                    } else {
                        add_validation_error_metadata(&mut flow, "authorizationUrl", "Expected string value");
                    }
                }
                "tokenUrl" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        // Validate URL format
                        if validate_url_format(&string_elem.content) {
                            flow.set_token_url(string_elem);
                            add_fixed_field_metadata(&mut flow, "tokenUrl");
                        } else {
                            add_validation_error_metadata(&mut flow, "tokenUrl", "Invalid URL format");
                        }
                    } else {
                        add_validation_error_metadata(&mut flow, "tokenUrl", "Expected string value");
                    }
                }
                "refreshUrl" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        // Validate URL format
                        if validate_url_format(&string_elem.content) {
                            flow.set_refresh_url(string_elem);
                            add_fixed_field_metadata(&mut flow, "refreshUrl");
                        } else {
                            add_validation_error_metadata(&mut flow, "refreshUrl", "Invalid URL format");
                        }
                    } else {
                        add_validation_error_metadata(&mut flow, "refreshUrl", "Expected string value");
                    }
                }
                "scopes" => {
                    // Process scopes with Map visitor pattern (equivalent to ScopesVisitor)
                    let processed_scopes = if let Some(ref mut f) = folder {
                        f.fold_element(value.clone())
                    } else {
                        value.clone()
                    };
                    
                    if let Some(obj_elem) = processed_scopes.as_object() {
                        let mut scopes_obj = obj_elem.clone();
                        // Add scopes-specific metadata (equivalent to OAuthFlowScopesElement)
                        add_scopes_metadata(&mut scopes_obj);
                        flow.set_scopes(scopes_obj);
                        add_fixed_field_metadata(&mut flow, "scopes");
                    } else {
                        add_validation_error_metadata(&mut flow, "scopes", "Expected object value");
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
                        
                        flow.object.set(key, processed_value);
                        add_specification_extension_metadata(&mut flow, key);
                    } else {
                        // Fallback field
                        let processed_value = if let Some(ref mut f) = folder {
                            f.fold_element(value.clone())
                        } else {
                            value.clone()
                        };
                        
                        flow.object.set(key, processed_value);
                        add_fallback_metadata(&mut flow, key);
                    }
                }
            }
        }
    }
    
    // Validate OAuth flow constraints
    validate_oauth_flow(&mut flow);
    
    Some(flow)
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
fn add_fixed_field_metadata(flow: &mut OAuthFlowElement, field_name: &str) {
    let key = format!("fixedField_{}", field_name);
    flow.object.meta.properties.insert(key, SimpleValue::Bool(true));
    flow.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

/// Add metadata for references
fn add_ref_metadata(flow: &mut OAuthFlowElement, ref_path: &str) {
    flow.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("oAuthFlow".to_string()));
    flow.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String(ref_path.to_string()));
    flow.object.classes.content.push(Element::String(StringElement::new("reference-element")));
}

/// Add metadata for specification extensions
fn add_specification_extension_metadata(flow: &mut OAuthFlowElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    flow.object.meta.properties.insert(key, SimpleValue::Bool(true));
    flow.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(flow: &mut OAuthFlowElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    flow.object.meta.properties.insert(key, SimpleValue::Bool(true));
    flow.object.classes.content.push(Element::String(StringElement::new("fallback-field")));
}

/// Add metadata for validation errors
fn add_validation_error_metadata(flow: &mut OAuthFlowElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    flow.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

/// Add overall processing metadata
fn add_processing_metadata(flow: &mut OAuthFlowElement) {
    flow.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    flow.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    flow.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::Bool(true));
    flow.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::Bool(true));
}

/// Add spec path metadata
fn add_spec_path_metadata(flow: &mut OAuthFlowElement) {
    flow.object.meta.properties.insert("specPath".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("OAuthFlow".to_string())
    ]));
}

/// Add scopes-specific metadata (equivalent to OAuthFlowScopesElement)
fn add_scopes_metadata(scopes: &mut ObjectElement) {
    scopes.meta.properties.insert("mapVisitor".to_string(), SimpleValue::Bool(true));
    scopes.meta.properties.insert("scopesElement".to_string(), SimpleValue::Bool(true));
    scopes.meta.properties.insert("specPath".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("value".to_string())
    ]));
    scopes.classes.content.push(Element::String(StringElement::new("oauth-flow-scopes")));
}

/// Validate URL format (basic validation)
fn validate_url_format(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validate OAuth flow constraints
fn validate_oauth_flow(flow: &mut OAuthFlowElement) {
    let mut has_errors = false;
    
    // Check flow type requirements based on presence of certain fields
    let has_authorization_url = flow.authorization_url().is_some();
    let has_token_url = flow.token_url().is_some();
    let has_scopes = flow.scopes().is_some();
    
    // Basic validation: scopes should always be present
    if !has_scopes {
        add_validation_error_metadata(flow, "oAuthFlow", "Missing required field: scopes");
        has_errors = true;
    }
    
    // Validate flow type consistency
    if has_authorization_url && !has_token_url {
        // Authorization Code flow requires both authorizationUrl and tokenUrl
        add_validation_error_metadata(flow, "oAuthFlow", "Authorization Code flow requires tokenUrl");
        has_errors = true;
    }
    
    // If validation passes
    if !has_errors {
        flow.object.meta.properties.insert("validOAuthFlow".to_string(), SimpleValue::Bool(true));
    }
}
