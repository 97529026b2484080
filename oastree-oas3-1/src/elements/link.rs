use oastree_ast::*;

/// The `link` fixed field: a design-time relationship between a response and
/// another operation, addressed by `operationRef` or `operationId`
/// (mutually exclusive — enforced by the builder, not this type).
#[derive(Debug, Clone)]
pub struct LinkElement {
    pub object: ObjectElement,
}

impl LinkElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("link");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("link");
        Self { object: content }
    }

    pub fn operation_ref(&self) -> Option<&StringElement> {
        self.object.get("operationRef").and_then(Element::as_string)
    }

    pub fn set_operation_ref(&mut self, value: StringElement) {
        self.object.set("operationRef", Element::String(value));
    }

    pub fn operation_id(&self) -> Option<&StringElement> {
        self.object.get("operationId").and_then(Element::as_string)
    }

    pub fn set_operation_id(&mut self, value: StringElement) {
        self.object.set("operationId", Element::String(value));
    }

    pub fn parameters(&self) -> Option<&ObjectElement> {
        self.object.get("parameters").and_then(Element::as_object)
    }

    pub fn set_parameters(&mut self, value: ObjectElement) {
        self.object.set("parameters", Element::Object(value));
    }

    pub fn request_body(&self) -> Option<&Element> {
        self.object.get("requestBody")
    }

    pub fn set_request_body(&mut self, value: Element) {
        self.object.set("requestBody", value);
    }

    pub fn description(&self) -> Option<&StringElement> {
        self.object.get("description").and_then(Element::as_string)
    }

    pub fn set_description(&mut self, value: StringElement) {
        self.object.set("description", Element::String(value));
    }

    pub fn server(&self) -> Option<&ObjectElement> {
        self.object.get("server").and_then(Element::as_object)
    }

    pub fn set_server(&mut self, value: ObjectElement) {
        self.object.set("server", Element::Object(value));
    }
}

impl Default for LinkElement {
    fn default() -> Self {
        Self::new()
    }
}

/// The `parameters` map nested under a [`LinkElement`]: parameter name to
/// a runtime expression string (`$request.path.id`, `$response.body#/id`, ...).
#[derive(Debug, Clone)]
pub struct LinkParametersElement {
    pub object: ObjectElement,
}

impl LinkParametersElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("linkParameters");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("linkParameters");
        Self { object: content }
    }
}

impl Default for LinkParametersElement {
    fn default() -> Self {
        Self::new()
    }
}
