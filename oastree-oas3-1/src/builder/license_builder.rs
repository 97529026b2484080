/*!
 * OpenAPI 3.1 License Element Builder
 *
 * Fixed fields: name, url, identifier. `identifier` (an SPDX expression) and
 * `url` are mutually exclusive per the 3.1 spec; the builder flags it as a
 * validation error rather than rejecting the document outright.
 */

use oastree_ast::*;
use crate::elements::license::LicenseElement;

/// Build a basic LicenseElement from a generic Element
pub fn build_license(element: &Element) -> Option<LicenseElement> {
    let object = element.as_object()?;
    Some(LicenseElement::with_content(object.clone()))
}

/// Build and decorate LicenseElement with fixed-field processing, spec
/// extensions, fallback fields, and metadata injection.
pub fn build_and_decorate_license<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<LicenseElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut license = LicenseElement::new();

    add_processing_metadata(&mut license);
    add_spec_path_metadata(&mut license);

    if let Some(ref_value) = obj.get("$ref") {
        if let Some(ref_str) = ref_value.as_string() {
            license.object.set("$ref", Element::String(ref_str.clone()));
            add_ref_metadata(&mut license, &ref_str.content);
            return Some(license);
        }
    }

    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();

            match key.as_str() {
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
                        license.set_url(string_elem);
                        add_fixed_field_metadata(&mut license, "url");
                    } else {
                        add_validation_error_metadata(&mut license, "url", "Expected string value");
                    }
                }
                "identifier" => {
                    if let Some(string_elem) = convert_to_string_element(value) {
                        license.set_identifier(string_elem);
                        add_fixed_field_metadata(&mut license, "identifier");
                    } else {
                        add_validation_error_metadata(&mut license, "identifier", "Expected string value");
                    }
                }
                _ => {
                    let processed_value = if let Some(ref mut f) = folder {
                        f.fold_element(value.clone())
                    } else {
                        value.clone()
                    };

                    if key.starts_with("x-") {
                        license.object.set(key, processed_value);
                        add_specification_extension_metadata(&mut license, key);
                    } else {
                        license.object.set(key, processed_value);
                        add_fallback_metadata(&mut license, key);
                    }
                }
            }
        }
    }

    validate_license(&mut license);

    Some(license)
}

fn convert_to_string_element(element: &Element) -> Option<StringElement> {
    match element {
        Element::String(s) => Some(s.clone()),
        Element::Number(n) => Some(StringElement::new(&n.content.to_string())),
        Element::Boolean(b) => Some(StringElement::new(&b.content.to_string())),
        _ => None,
    }
}

fn add_fixed_field_metadata(license: &mut LicenseElement, field_name: &str) {
    let key = format!("fixed-field_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::Bool(true));
    license.object.classes.content.push(Element::String(StringElement::new("fixed-field")));
}

fn add_ref_metadata(license: &mut LicenseElement, ref_path: &str) {
    license.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("license".to_string()));
    license.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String(ref_path.to_string()));
}

fn add_specification_extension_metadata(license: &mut LicenseElement, field_name: &str) {
    let key = format!("specificationExtension_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::Bool(true));
    license.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

fn add_fallback_metadata(license: &mut LicenseElement, field_name: &str) {
    let key = format!("fallback_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::Bool(true));
    license.object.classes.content.push(Element::String(StringElement::new("fallback-field")));
}

fn add_validation_error_metadata(license: &mut LicenseElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    license.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

fn add_processing_metadata(license: &mut LicenseElement) {
    license.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    license.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    license.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::Bool(true));
    license.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::Bool(true));
}

fn add_spec_path_metadata(license: &mut LicenseElement) {
    license.object.meta.properties.insert("spec-path".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("License".to_string())
    ]));
}

/// Validate license constraints: `name` is required, `identifier` and `url`
/// are mutually exclusive.
fn validate_license(license: &mut LicenseElement) {
    if license.name().is_none() {
        add_validation_error_metadata(license, "license", "Missing required field: name");
    }

    if license.identifier().is_some() && license.url().is_some() {
        add_validation_error_metadata(license, "license", "identifier and url are mutually exclusive");
    }

    if license.name().is_some() {
        license.object.meta.properties.insert("validLicense".to_string(), SimpleValue::Bool(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_license_builder() {
        let mut obj = ObjectElement::new();
        obj.set("name", Element::String(StringElement::new("MIT")));
        obj.set("identifier", Element::String(StringElement::new("MIT")));

        let license = build_license(&Element::Object(obj));
        assert!(license.is_some());

        let license = license.unwrap();
        assert_eq!(license.name().unwrap().content, "MIT");
        assert_eq!(license.identifier().unwrap().content, "MIT");
    }

    #[test]
    fn test_license_with_identifier() {
        let mut obj = ObjectElement::new();
        obj.set("name", Element::String(StringElement::new("Apache 2.0")));
        obj.set("identifier", Element::String(StringElement::new("Apache-2.0")));

        let mut folder = DefaultFolder;
        let license = build_and_decorate_license(&Element::Object(obj), Some(&mut folder)).unwrap();

        assert_eq!(license.identifier().unwrap().content, "Apache-2.0");
        assert!(license.object.meta.properties.contains_key("fixed-field_identifier"));
        assert!(license.object.meta.properties.contains_key("validLicense"));
    }

    #[test]
    fn test_license_identifier_and_url_mutually_exclusive() {
        let mut obj = ObjectElement::new();
        obj.set("name", Element::String(StringElement::new("Custom")));
        obj.set("identifier", Element::String(StringElement::new("MIT")));
        obj.set("url", Element::String(StringElement::new("https://opensource.org/licenses/MIT")));

        let mut folder = DefaultFolder;
        let license = build_and_decorate_license(&Element::Object(obj), Some(&mut folder)).unwrap();

        assert_eq!(
            license.object.meta.properties.get("validationError_license"),
            Some(&SimpleValue::String("identifier and url are mutually exclusive".to_string()))
        );
    }

    #[test]
    fn test_license_validation_errors() {
        let mut obj = ObjectElement::new();
        obj.set("url", Element::String(StringElement::new("https://example.com/license")));

        let mut folder = DefaultFolder;
        let license = build_and_decorate_license(&Element::Object(obj), Some(&mut folder)).unwrap();

        assert!(license.object.meta.properties.contains_key("validationError_license"));
    }
}
