use oastree_ast::*;
use crate::elements::openapi3_1::OpenApi3_1Element;
use crate::builder::{build_and_decorate_info, build_and_decorate_components};

/// Build the OpenAPI 3.1.x/3.2.x document root as a plain copy-through,
/// without fixed-field decoration or sub-element folding.
pub fn build_openapi3_1(root: &Element) -> Option<OpenApi3_1Element> {
    let obj = root.as_object()?.clone();
    Some(OpenApi3_1Element::with_content(obj))
}

/// Build and decorate the document root: fold `info`/`components` through
/// their own builders, copy `paths`/`webhooks`/`servers`/`security`/`tags`/
/// `externalDocs` through as-is (the Walker descends into them separately),
/// and record `jsonSchemaDialect` alongside the rest of 3.1's fixed fields.
pub fn build_and_decorate_openapi3_1<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<OpenApi3_1Element>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut api = OpenApi3_1Element::new();

    add_processing_metadata(&mut api);
    add_spec_path_metadata(&mut api);

    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();

            match key.as_str() {
                "openapi" => {
                    if let Some(s) = value.as_string() {
                        api.set_openapi(s.clone());
                        add_fixed_field_metadata(&mut api, "openapi");
                    } else {
                        add_validation_error_metadata(&mut api, "openapi", "Expected string value");
                    }
                }
                "jsonSchemaDialect" => {
                    if let Some(s) = value.as_string() {
                        api.set_json_schema_dialect(s.clone());
                        add_fixed_field_metadata(&mut api, "jsonSchemaDialect");
                    } else {
                        add_validation_error_metadata(&mut api, "jsonSchemaDialect", "Expected string value");
                    }
                }
                "info" => {
                    let processed = if let Some(ref mut f) = folder { f.fold_element(value.clone()) } else { value.clone() };
                    if let Some(info) = build_and_decorate_info(&processed, folder.as_deref_mut()) {
                        api.set_info(info.object);
                        add_fixed_field_metadata(&mut api, "info");
                    } else {
                        add_validation_error_metadata(&mut api, "info", "Expected object value");
                    }
                }
                "servers" => {
                    if let Some(arr) = value.as_array() {
                        api.set_servers(arr.clone());
                        add_fixed_field_metadata(&mut api, "servers");
                    } else {
                        add_validation_error_metadata(&mut api, "servers", "Expected array value");
                    }
                }
                "paths" => {
                    if let Some(obj) = value.as_object() {
                        api.set_paths(obj.clone());
                        add_fixed_field_metadata(&mut api, "paths");
                    } else {
                        add_validation_error_metadata(&mut api, "paths", "Expected object value");
                    }
                }
                "webhooks" => {
                    if let Some(obj) = value.as_object() {
                        api.set_webhooks(obj.clone());
                        add_fixed_field_metadata(&mut api, "webhooks");
                    } else {
                        add_validation_error_metadata(&mut api, "webhooks", "Expected object value");
                    }
                }
                "components" => {
                    let processed = if let Some(ref mut f) = folder { f.fold_element(value.clone()) } else { value.clone() };
                    if let Some(components) = build_and_decorate_components(&processed, folder.as_deref_mut()) {
                        api.set_components(components.object);
                        add_fixed_field_metadata(&mut api, "components");
                    } else {
                        add_validation_error_metadata(&mut api, "components", "Expected object value");
                    }
                }
                "security" => {
                    if let Some(arr) = value.as_array() {
                        api.set_security(arr.clone());
                        add_fixed_field_metadata(&mut api, "security");
                    } else {
                        add_validation_error_metadata(&mut api, "security", "Expected array value");
                    }
                }
                "tags" => {
                    if let Some(arr) = value.as_array() {
                        api.set_tags(arr.clone());
                        add_fixed_field_metadata(&mut api, "tags");
                    } else {
                        add_validation_error_metadata(&mut api, "tags", "Expected array value");
                    }
                }
                "externalDocs" => {
                    if let Some(obj) = value.as_object() {
                        api.set_external_docs(obj.clone());
                        add_fixed_field_metadata(&mut api, "externalDocs");
                    } else {
                        add_validation_error_metadata(&mut api, "externalDocs", "Expected object value");
                    }
                }
                _ => {
                    let processed = if let Some(ref mut f) = folder { f.fold_element(value.clone()) } else { value.clone() };
                    if key.starts_with("x-") {
                        api.object.set(key, processed);
                        add_specification_extension_metadata(&mut api, key);
                    } else {
                        api.object.set(key, processed);
                        add_fallback_metadata(&mut api, key);
                    }
                }
            }
        }
    }

    validate_openapi3_1(&mut api);

    Some(api)
}

fn add_fixed_field_metadata(api: &mut OpenApi3_1Element, field_name: &str) {
    api.object.meta.properties.insert(format!("fixed-field_{}", field_name), SimpleValue::Bool(true));
}

fn add_validation_error_metadata(api: &mut OpenApi3_1Element, field_name: &str, error_msg: &str) {
    api.object.meta.properties.insert(format!("validationError_{}", field_name), SimpleValue::String(error_msg.to_string()));
}

fn add_specification_extension_metadata(api: &mut OpenApi3_1Element, field_name: &str) {
    api.object.meta.properties.insert(format!("specificationExtension_{}", field_name), SimpleValue::Bool(true));
    api.object.add_class("specification-extension");
}

fn add_fallback_metadata(api: &mut OpenApi3_1Element, field_name: &str) {
    api.object.meta.properties.insert(format!("fallback_{}", field_name), SimpleValue::Bool(true));
}

fn add_processing_metadata(api: &mut OpenApi3_1Element) {
    api.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    api.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    api.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::Bool(true));
    api.object.add_class("openapi-document");
}

fn add_spec_path_metadata(api: &mut OpenApi3_1Element) {
    api.object.meta.properties.insert("spec-path".to_string(), SimpleValue::Array(vec![
        SimpleValue::String("document".to_string()),
        SimpleValue::String("objects".to_string()),
        SimpleValue::String("OpenApi".to_string())
    ]));
}

fn validate_openapi3_1(api: &mut OpenApi3_1Element) {
    if api.openapi().is_none() {
        add_validation_error_metadata(api, "openapi", "Missing required field: openapi");
    }
    if api.info().is_none() {
        add_validation_error_metadata(api, "info", "Missing required field: info");
    }
    if api.paths().is_none() && api.webhooks().is_none() && api.object.get("components").is_some() {
        // A document with only reusable components and no paths/webhooks is
        // unusual but not invalid per 3.1 (components can stand alone).
        api.object.meta.properties.insert("componentsOnlyDocument".to_string(), SimpleValue::Bool(true));
    }
    if api.openapi().is_some() && api.info().is_some() {
        api.object.meta.properties.insert("validOpenApiDocument".to_string(), SimpleValue::Bool(true));
    }
}
