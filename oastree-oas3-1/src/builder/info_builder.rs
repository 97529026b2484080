/*!
 * OpenAPI 3.1 Info Element Builder
 *
 * Fixed fields: title, summary, description, termsOfService, contact,
 * license, version. 3.1 adds `summary` alongside `description`.
 */

use oastree_ast::*;
use crate::elements::info::InfoElement;
use crate::builder::{build_contact, build_license};

/// Build a basic InfoElement from a generic Element
pub fn build_info(element: &Element) -> Option<InfoElement> {
    let object = element.as_object()?;
    Some(InfoElement::with_content(object.clone()))
}

/// Build and decorate InfoElement with fixed-field processing, spec
/// extensions, reference handling, and Contact/License sub-element
/// processing.
pub fn build_and_decorate_info<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<InfoElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut info = InfoElement::new();

    add_processing_metadata(&mut info);
    add_spec_path_metadata(&mut info);

    if let Some(ref_value) = obj.get("$ref") {
        if let Some(ref_str) = ref_value.as_string() {
            info.object.set("$ref", Element::String(ref_str.clone()));
            add_ref_metadata(&mut info, &ref_str.content);
            return Some(info);
        }
    }

    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();

            match key.as_str() {
                "title" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        info.set_title(string_elem);
                        add_fixed_field_metadata(&mut info, "title");
                    } else {
                        add_validation_error_metadata(&mut info, "title", "Expected string value");
                    }
                }
                "summary" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        info.set_summary(string_elem);
                        add_fixed_field_metadata(&mut info, "summary");
                    } else {
                        add_validation_error_metadata(&mut info, "summary", "Expected string value");
                    }
                }
                "version" => {
                    if let Some(mut string_elem) = convert_to_string_element(value) {
                        string_elem.meta.properties.insert("api-version".to_string(), SimpleValue::Bool(true));
                        string_elem.meta.properties.insert("version".to_string(), SimpleValue::Bool(true));
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
                    let processed_contact = if let Some(ref mut f) = folder {
                        f.fold_element(value.clone())
                    } else {
                        value.clone()
                    };

                    if let Some(contact_elem) = build_contact(&processed_contact) {
                        info.set_contact(contact_elem);
                        add_fixed_field_metadata(&mut info, "contact");
                    } else if let Some(obj_elem) = processed_contact.as_object() {
                        info.object.set("contact", Element::Object(obj_elem.clone()));
                        add_fallback_metadata(&mut info, "contact");
                    }
                }
                "license" => {
                    let processed_license = if let Some(ref mut f) = folder {
                        f.fold_element(value.clone())
                    } else {
                        value.clone()
                    };

                    if let Some(license_elem) = build_license(&processed_license) {
                        info.set_license(license_elem);
                        add_fixed_field_metadata(&mut info, "license");
                    } else if let Some(obj_elem) = processed_license.as_object() {
                        info.object.set("license", Element::Object(obj_elem.clone()));
                        add_fallback_metadata(&mut info, "license");
                    }
                }
                _ => {
                    if key.starts_with("x-") {
                        info.object.set(key, value.clone());
                        add_specification_extension_metadata(&mut info, key);
                    } else {
                        info.object.set(key, value.clone());
                        add_fallback_metadata(&mut info, key);
                    }
                }
            }
        }
    }

    validate_info(&mut info);

    Some(info)
}

fn convert_to_string_element(element: &Element) -> Option<StringElement> {
    match element {
        Element::String(s) => Some(s.clone()),
        Element::Number(n) => Some(StringElement::new(&n.content.to_string())),
        Element::Boolean(b) => Some(StringElement::new(&b.content.to_string())),
        _ => None,
    }
}

fn add_fixed_field_metadata(info: &mut InfoElement, field_name: &str) {
    let key = format!("fixed-field_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::Bool(true));
    info.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

fn add_ref_metadata(info: &mut InfoElement, ref_path: &str) {
    info.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("info".to_string()));
    info.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String(ref_path.to_string()));
}

fn add_specification_extension_metadata(info: &mut InfoElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::Bool(true));
    info.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

fn add_fallback_metadata(info: &mut InfoElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::Bool(true));
    info.object.classes.content.push(Element::String(StringElement::new("fallback-field")));
}

fn add_validation_error_metadata(info: &mut InfoElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    info.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

fn add_processing_metadata(info: &mut InfoElement) {
    info.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    info.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    info.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::Bool(true));
    info.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::Bool(true));
}

fn add_spec_path_metadata(info: &mut InfoElement) {
    info.object.meta.properties.insert("spec-path".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("Info".to_string())
    ]));
}

fn validate_info(info: &mut InfoElement) {
    if info.title().is_none() {
        add_validation_error_metadata(info, "info", "Missing required field: title");
    }

    if info.version().is_none() {
        add_validation_error_metadata(info, "info", "Missing required field: version");
    }

    if info.title().is_some() && info.version().is_some() {
        info.object.meta.properties.insert("validInfo".to_string(), SimpleValue::Bool(true));
    }
}
