use oastree_ast::minim_model::*;
use oastree_ast::fold::Fold;
use crate::elements::components::ComponentsElement;

/// Enhanced Components builder — fixed-field processing for each component
/// map, reference detection and metadata injection per entry, and a 3.1-only
/// `pathItems` map (reusable `PathItem`s, referenced via `$ref`).
pub fn build_and_decorate_components<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<ComponentsElement>
where
    F: Fold,
{
    let obj = element.as_object()?;
    let mut components = ComponentsElement::new();

    add_processing_metadata(&mut components);
    add_spec_path_metadata(&mut components);

    if let Some(ref_value) = obj.get("$ref") {
        if let Some(ref_str) = ref_value.as_string() {
            components.object.set("$ref", Element::String(ref_str.clone()));
            add_ref_metadata(&mut components, &ref_str.content);
            return Some(components);
        }
    }

    for member in &obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let key = &key_str.content;
            let value = member.value.as_ref();

            match key.as_str() {
                "schemas" => {
                    if let Some(processed) = process_component_map(value, "schema", folder.as_deref_mut()) {
                        components.set_schemas(processed);
                        add_field_metadata(&mut components, "schemas", "ComponentsSchemasElement");
                    }
                }
                "responses" => {
                    if let Some(processed) = process_component_map(value, "response", folder.as_deref_mut()) {
                        components.set_responses(processed);
                        add_field_metadata(&mut components, "responses", "ComponentsResponsesElement");
                    }
                }
                "parameters" => {
                    if let Some(processed) = process_component_map(value, "parameter", folder.as_deref_mut()) {
                        components.set_parameters(processed);
                        add_field_metadata(&mut components, "parameters", "ComponentsParametersElement");
                    }
                }
                "examples" => {
                    if let Some(processed) = process_component_map(value, "example", folder.as_deref_mut()) {
                        components.set_examples(processed);
                        add_field_metadata(&mut components, "examples", "ComponentsExamplesElement");
                    }
                }
                "requestBodies" => {
                    if let Some(processed) = process_component_map(value, "requestBody", folder.as_deref_mut()) {
                        components.set_request_bodies(processed);
                        add_field_metadata(&mut components, "requestBodies", "ComponentsRequestBodiesElement");
                    }
                }
                "headers" => {
                    if let Some(processed) = process_component_map(value, "header", folder.as_deref_mut()) {
                        components.set_headers(processed);
                        add_field_metadata(&mut components, "headers", "ComponentsHeadersElement");
                    }
                }
                "securitySchemes" => {
                    if let Some(processed) = process_component_map(value, "securityScheme", folder.as_deref_mut()) {
                        components.set_security_schemes(processed);
                        add_field_metadata(&mut components, "securitySchemes", "ComponentsSecuritySchemesElement");
                    }
                }
                "links" => {
                    if let Some(processed) = process_component_map(value, "link", folder.as_deref_mut()) {
                        components.set_links(processed);
                        add_field_metadata(&mut components, "links", "ComponentsLinksElement");
                    }
                }
                "callbacks" => {
                    if let Some(processed) = process_component_map(value, "callback", folder.as_deref_mut()) {
                        components.set_callbacks(processed);
                        add_field_metadata(&mut components, "callbacks", "ComponentsCallbacksElement");
                    }
                }
                "pathItems" => {
                    if let Some(processed) = process_component_map(value, "pathItem", folder.as_deref_mut()) {
                        components.set_path_items(processed);
                        add_field_metadata(&mut components, "pathItems", "ComponentsPathItemsElement");
                    }
                }
                _ if key.starts_with("x-") => {
                    components.object.set(key, value.clone());
                    add_specification_extension_metadata(&mut components, key);
                }
                _ => {
                    components.object.set(key, value.clone());
                    add_unknown_field_metadata(&mut components, key);
                }
            }
        }
    }

    Some(components)
}

/// Process a fixed-field component map entry by entry: detect `$ref` children
/// and tag them, otherwise fold the member and tag it with its component
/// type and map key. Shared across all nine of `Components`'s maps — they
/// all follow the identical name-keyed, reference-or-inline shape.
fn process_component_map<F>(value: &Element, component_type: &str, mut folder: Option<&mut F>) -> Option<ObjectElement>
where
    F: Fold,
{
    let obj = value.as_object()?;
    let mut map_obj = obj.clone();

    for member in &mut map_obj.content {
        if let Element::String(key_str) = member.key.as_ref() {
            let member_name = key_str.content.clone();

            if let Element::Object(member_obj) = member.value.as_mut() {
                if let Some(ref_value) = member_obj.get("$ref") {
                    if let Some(ref_str) = ref_value.as_string() {
                        member_obj.meta.properties.insert(
                            "referenced-element".to_string(),
                            SimpleValue::String(component_type.to_string())
                        );
                        member_obj.meta.properties.insert(
                            "reference-path".to_string(),
                            SimpleValue::String(ref_str.content.clone())
                        );
                        member_obj.classes.content.push(Element::String(StringElement::new("reference")));
                        member_obj.classes.content.push(Element::String(StringElement::new(format!("{}-reference", component_type))));
                    }
                } else if let Some(f) = folder.as_deref_mut() {
                    member_obj.set_element_type(component_type);
                    let folded = f.fold_object_element(member_obj.clone());
                    if let Element::Object(folded_obj) = folded {
                        *member_obj = folded_obj;
                    }
                }

                member_obj.meta.properties.insert(
                    format!("{}-name", component_type),
                    SimpleValue::String(member_name)
                );
                member_obj.meta.properties.insert(
                    "component-type".to_string(),
                    SimpleValue::String(component_type.to_string())
                );
            }
        }
    }

    Some(map_obj)
}

fn add_processing_metadata(components: &mut ComponentsElement) {
    components.object.meta.properties.insert("processing-metadata".to_string(), SimpleValue::Bool(true));
    components.object.meta.properties.insert("visitor-type".to_string(), SimpleValue::String("ComponentsVisitor".to_string()));
    components.object.classes.content.push(Element::String(StringElement::new("components")));
    components.object.classes.content.push(Element::String(StringElement::new("openapi-components")));
}

fn add_spec_path_metadata(components: &mut ComponentsElement) {
    components.object.meta.properties.insert("spec-path".to_string(), SimpleValue::String("document.objects.Components".to_string()));
    components.object.meta.properties.insert("element-type".to_string(), SimpleValue::String("components".to_string()));
}

fn add_ref_metadata(components: &mut ComponentsElement, ref_path: &str) {
    components.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("components".to_string()));
    components.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String(ref_path.to_string()));
    components.object.meta.properties.insert("is-reference".to_string(), SimpleValue::Bool(true));
    components.object.classes.content.push(Element::String(StringElement::new("reference")));
    components.object.classes.content.push(Element::String(StringElement::new("components-reference")));
}

fn add_field_metadata(components: &mut ComponentsElement, field_name: &str, element_type: &str) {
    components.object.meta.properties.insert(format!("fixed-field-{}", field_name), SimpleValue::Bool(true));
    components.object.meta.properties.insert(format!("{}-element-type", field_name), SimpleValue::String(element_type.to_string()));
    components.object.meta.properties.insert(format!("{}-processed", field_name), SimpleValue::Bool(true));
}

fn add_specification_extension_metadata(components: &mut ComponentsElement, field_name: &str) {
    components.object.meta.properties.insert("has-specification-extensions".to_string(), SimpleValue::Bool(true));
    components.object.meta.properties.insert(format!("spec-extension-{}", field_name), SimpleValue::Bool(true));
    components.object.classes.content.push(Element::String(StringElement::new("specification-extension")));
}

fn add_unknown_field_metadata(components: &mut ComponentsElement, field_name: &str) {
    components.object.meta.properties.insert("has-unknown-fields".to_string(), SimpleValue::Bool(true));
    components.object.meta.properties.insert(format!("unknown-field-{}", field_name), SimpleValue::Bool(true));
}

pub fn build_components(element: &Element) -> Option<ComponentsElement> {
    build_and_decorate_components::<oastree_ast::fold::DefaultFolder>(element, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_object(json_value: serde_json::Value) -> ObjectElement {
        match Element::from_json_value(json_value) {
            Element::Object(obj) => obj,
            _ => panic!("Expected object element"),
        }
    }

    #[test]
    fn test_basic_components_builder() {
        let obj = create_test_object(json!({
            "schemas": {
                "Pet": {"type": "object"}
            }
        }));

        let components = build_components(&Element::Object(obj));
        assert!(components.is_some());
        assert!(components.unwrap().schemas().is_some());
    }

    #[test]
    fn test_components_path_items() {
        let obj = create_test_object(json!({
            "pathItems": {
                "PetOps": {
                    "get": {"responses": {"200": {"description": "ok"}}}
                }
            }
        }));

        let mut folder = oastree_ast::fold::DefaultFolder;
        let components = build_and_decorate_components(&Element::Object(obj), Some(&mut folder)).unwrap();

        assert!(components.path_items().is_some());
        assert!(components.object.meta.properties.contains_key("fixed-field-pathItems"));

        if let Some(Element::Object(path_item)) = components.path_items().unwrap().get("PetOps") {
            assert_eq!(
                path_item.meta.properties.get("component-type"),
                Some(&SimpleValue::String("pathItem".to_string()))
            );
        }
    }

    #[test]
    fn test_components_reference_detection() {
        let obj = create_test_object(json!({
            "schemas": {
                "Pet": {"$ref": "#/components/schemas/Animal"}
            }
        }));

        let components = build_components(&Element::Object(obj)).unwrap();
        if let Some(Element::Object(pet)) = components.schemas().unwrap().get("Pet") {
            assert_eq!(
                pet.meta.properties.get("referenced-element"),
                Some(&SimpleValue::String("schema".to_string()))
            );
        }
    }
}
