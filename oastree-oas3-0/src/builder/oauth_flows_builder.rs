 /*!
 * OpenAPI 3.0 OAuth Flows Element Builder
 * 
 * This module provides comprehensive OAuth Flows element building functionality
 * equivalent to the TypeScript OAuthFlowsVisitor. It supports:
 * - Fixed fields support (implicit, password, clientCredentials, authorizationCode)
 * - Specification extensions support (x-* fields)
 * - Reference support ($ref handling)
 * - Fallback behavior for unknown fields
 * - Type conversion and validation
 * - Recursive folding support
 * - Metadata injection with classes and spec path
 * - OAuth flow validation and constraints
 */

use oastree_ast::*;
use crate::elements::oauth_flows::OAuthFlowsElement;
use crate::builder::oauth_flow_builder::{build_oauth_flow, build_and_decorate_oauth_flow};

/// Build a basic OAuthFlowsElement from a generic Element
pub fn build_oauth_flows(element: &Element) -> Option<OAuthFlowsElement> {
    let obj = element.as_object()?;
    let mut flows = OAuthFlowsElement::new();

    for member in &obj.content {
        if let Element::String(key) = &*member.key {
            match key.content.as_str() {
                "implicit" | "password" | "clientCredentials" | "authorizationCode" => {
                    if let Some(flow) = build_oauth_flow(&*member.value) {
                        match key.content.as_str() {
                            "implicit" => flows.set_implicit(flow),
                            "password" => flows.set_password(flow),
                            "clientCredentials" => flows.set_client_credentials(flow),
                            "authorizationCode" => flows.set_authorization_code(flow),
                            _ => {}
                        }
                    }
                }
                _ => {
                    // Retain unknown fields
                    flows.object.set(&key.content, (*member.value).clone());
                }
            }
        }
    }

    Some(flows)
}

/// Build and decorate OAuthFlowsElement with enhanced visitor pattern features
/// 
/// This function provides equivalent functionality to the TypeScript OAuthFlowsVisitor:
/// - Fixed fields processing with metadata injection
/// - Specification extensions support (x-* fields)
/// - Reference handling with metadata
/// - Fallback behavior for unknown fields
/// - Type conversion and validation
/// - Recursive folding support
/// - OAuth flows validation and constraints
/// - Metadata injection with classes and spec path
pub fn build_and_decorate_oauth_flows<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<OAuthFlowsElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut flows = OAuthFlowsElement::new();
    
    // Add processing metadata
    add_processing_metadata(&mut flows);
    add_spec_path_metadata(&mut flows);
    
    // Check if it's a reference
    if let Some(ref_value) = obj.get("$ref") {
        if let Some(ref_str) = ref_value.as_string() {
            flows.object.set("$ref", Element::String(ref_str.clone()));
            add_ref_metadata(&mut flows, &ref_str.content);
            return Some(flows);
        }
    }
    
    // Process all object members
    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();
            
            match key.as_str() {
                // Fixed fields (OAuth flow types)
                "implicit" => {
                    if let Some(flow) = build_and_decorate_oauth_flow(value, folder.as_deref_mut()) {
                        flows.set_implicit(flow);
                        add_fixed_field_metadata(&mut flows, "implicit");
                    } else {
                        add_validation_error_metadata(&mut flows, "implicit", "Invalid OAuth flow structure");
                    }
                }
                "password" => {
                    if let Some(flow) = build_and_decorate_oauth_flow(value, folder.as_deref_mut()) {
                        flows.set_password(flow);
                        add_fixed_field_metadata(&mut flows, "password");
                    } else {
                        add_validation_error_metadata(&mut flows, "password", "Invalid OAuth flow structure");
                    }
                }
                "clientCredentials" => {
                    if let Some(flow) = build_and_decorate_oauth_flow(value, folder.as_deref_mut()) {
                        flows.set_client_credentials(flow);
                        add_fixed_field_metadata(&mut flows, "clientCredentials");
                    } else {
                        add_validation_error_metadata(&mut flows, "clientCredentials", "Invalid OAuth flow structure");
                    }
                }
                "authorizationCode" => {
                    if let Some(flow) = build_and_decorate_oauth_flow(value, folder.as_deref_mut()) {
                        flows.set_authorization_code(flow);
                        add_fixed_field_metadata(&mut flows, "authorizationCode");
                    } else {
                        add_validation_error_metadata(&mut flows, "authorizationCode", "Invalid OAuth flow structure");
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
                        
                        flows.object.set(key, processed_value);
                        add_specification_extension_metadata(&mut flows, key);
                    } else {
                        // Fallback field
                        let processed_value = if let Some(ref mut f) = folder {
                            f.fold_element(value.clone())
                        } else {
                            value.clone()
                        };
                        
                        flows.object.set(key, processed_value);
                        add_fallback_metadata(&mut flows, key);
                    }
                }
            }
        }
    }
    
    // Validate OAuth flows constraints
    validate_oauth_flows(&mut flows);
    
    Some(flows)
}

/// Add metadata for fixed fields
fn add_fixed_field_metadata(flows: &mut OAuthFlowsElement, field_name: &str) {
    let key = format!("fixedField_{}", field_name);
    flows.object.meta.properties.insert(key, SimpleValue::Bool(true));
    flows.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

/// Add metadata for references
fn add_ref_metadata(flows: &mut OAuthFlowsElement, ref_path: &str) {
    flows.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("oAuthFlows".to_string()));
    flows.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String(ref_path.to_string()));
    flows.object.classes.content.push(Element::String(StringElement::new("reference-element")));
}

/// Add metadata for specification extensions
fn add_specification_extension_metadata(flows: &mut OAuthFlowsElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    flows.object.meta.properties.insert(key, SimpleValue::Bool(true));
    flows.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

/// Add metadata for fallback handling
fn add_fallback_metadata(flows: &mut OAuthFlowsElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    flows.object.meta.properties.insert(key, SimpleValue::Bool(true));
    flows.object.classes.content.push(Element::String(StringElement::new("fallback-field")));
}

/// Add metadata for validation errors
fn add_validation_error_metadata(flows: &mut OAuthFlowsElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    flows.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

/// Add overall processing metadata
fn add_processing_metadata(flows: &mut OAuthFlowsElement) {
    flows.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    flows.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    flows.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::Bool(true));
    flows.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::Bool(true));
    
    // Add OAuth flows specific classes
    flows.object.classes.content.push(Element::String(StringElement::new("oauth-flows")));
}

/// Add spec path metadata
fn add_spec_path_metadata(flows: &mut OAuthFlowsElement) {
    flows.object.meta.properties.insert("specPath".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("OAuthFlows".to_string())
    ]));
}

/// Validate OAuth flows constraints
fn validate_oauth_flows(flows: &mut OAuthFlowsElement) {
    let mut has_errors = false;
    let mut flow_count = 0;
    
    // Check that at least one flow type is defined
    if flows.implicit().is_some() {
        flow_count += 1;
    }
    if flows.password().is_some() {
        flow_count += 1;
    }
    if flows.client_credentials().is_some() {
        flow_count += 1;
    }
    if flows.authorization_code().is_some() {
        flow_count += 1;
    }
    
    if flow_count == 0 {
        add_validation_error_metadata(flows, "oAuthFlows", "At least one OAuth flow must be defined");
        has_errors = true;
    }
    
    // Validate individual flows
    if let Some(implicit_flow) = flows.implicit() {
        if implicit_flow.authorization_url().is_none() {
            add_validation_error_metadata(flows, "implicit", "Implicit flow requires authorizationUrl");
            has_errors = true;
        }
    }
    
    if let Some(password_flow) = flows.password() {
        if password_flow.token_url().is_none() {
            add_validation_error_metadata(flows, "password", "Password flow requires tokenUrl");
            has_errors = true;
        }
    }
    
    if let Some(client_creds_flow) = flows.client_credentials() {
        if client_creds_flow.token_url().is_none() {
            add_validation_error_metadata(flows, "clientCredentials", "Client credentials flow requires tokenUrl");
            has_errors = true;
        }
    }
    
    if let Some(auth_code_flow) = flows.authorization_code() {
        if auth_code_flow.authorization_url().is_none() || auth_code_flow.token_url().is_none() {
            add_validation_error_metadata(flows, "authorizationCode", "Authorization code flow requires both authorizationUrl and tokenUrl");
            has_errors = true;
        }
    }
    
    // If validation passes
    if !has_errors {
        flows.object.meta.properties.insert("validOAuthFlows".to_string(), SimpleValue::Bool(true));
    }
}
