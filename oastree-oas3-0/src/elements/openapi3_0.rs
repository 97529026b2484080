use oastree_ast::*;

/// The OpenAPI 3.0.x document root (spec §3, `Document`): the single entry
/// point the Walker starts a pre-order traversal from.
#[derive(Debug, Clone)]
pub struct OpenApi3_0Element {
    pub object: ObjectElement,
}

impl OpenApi3_0Element {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("openApi3_0");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("openApi3_0");
        Self { object: content }
    }

    pub fn openapi(&self) -> Option<&StringElement> {
        self.object.get("openapi").and_then(Element::as_string)
    }

    pub fn set_openapi(&mut self, value: StringElement) {
        self.object.set("openapi", Element::String(value));
    }

    pub fn info(&self) -> Option<&ObjectElement> {
        self.object.get("info").and_then(Element::as_object)
    }

    pub fn set_info(&mut self, value: ObjectElement) {
        self.object.set("info", Element::Object(value));
    }

    pub fn servers(&self) -> Option<&ArrayElement> {
        self.object.get("servers").and_then(Element::as_array)
    }

    pub fn set_servers(&mut self, value: ArrayElement) {
        self.object.set("servers", Element::Array(value));
    }

    pub fn paths(&self) -> Option<&ObjectElement> {
        self.object.get("paths").and_then(Element::as_object)
    }

    pub fn set_paths(&mut self, value: ObjectElement) {
        self.object.set("paths", Element::Object(value));
    }

    pub fn components(&self) -> Option<&ObjectElement> {
        self.object.get("components").and_then(Element::as_object)
    }

    pub fn set_components(&mut self, value: ObjectElement) {
        self.object.set("components", Element::Object(value));
    }

    pub fn security(&self) -> Option<&ArrayElement> {
        self.object.get("security").and_then(Element::as_array)
    }

    pub fn set_security(&mut self, value: ArrayElement) {
        self.object.set("security", Element::Array(value));
    }

    pub fn tags(&self) -> Option<&ArrayElement> {
        self.object.get("tags").and_then(Element::as_array)
    }

    pub fn set_tags(&mut self, value: ArrayElement) {
        self.object.set("tags", Element::Array(value));
    }

    pub fn external_docs(&self) -> Option<&ObjectElement> {
        self.object.get("externalDocs").and_then(Element::as_object)
    }

    pub fn set_external_docs(&mut self, value: ObjectElement) {
        self.object.set("externalDocs", Element::Object(value));
    }
}

impl Default for OpenApi3_0Element {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_fixed_fields() {
        let mut api = OpenApi3_0Element::new();
        api.set_openapi(StringElement::new("3.0.3"));
        api.set_paths(ObjectElement::new());
        assert_eq!(api.openapi().unwrap().content, "3.0.3");
        assert!(api.paths().is_some());
    }
}
