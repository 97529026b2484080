use oastree_ast::*;

/// The `components` fixed field: reusable named objects keyed by type
/// (schemas, responses, parameters, ...), each entry an inline object or a
/// `$ref` (spec §3, "main-component" entity category).
#[derive(Debug, Clone)]
pub struct ComponentsElement {
    pub object: ObjectElement,
}

macro_rules! map_field {
    ($getter:ident, $setter:ident, $key:literal) => {
        pub fn $getter(&self) -> Option<&ObjectElement> {
            self.object.get($key).and_then(Element::as_object)
        }

        pub fn $setter(&mut self, value: ObjectElement) {
            self.object.set($key, Element::Object(value));
        }
    };
}

impl ComponentsElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("components");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("components");
        Self { object: content }
    }

    map_field!(schemas, set_schemas, "schemas");
    map_field!(responses, set_responses, "responses");
    map_field!(parameters, set_parameters, "parameters");
    map_field!(examples, set_examples, "examples");
    map_field!(request_bodies, set_request_bodies, "requestBodies");
    map_field!(headers, set_headers, "headers");
    map_field!(security_schemes, set_security_schemes, "securitySchemes");
    map_field!(links, set_links, "links");
    map_field!(callbacks, set_callbacks, "callbacks");
}

impl Default for ComponentsElement {
    fn default() -> Self {
        Self::new()
    }
}
