use oastree_ast::*;

/// OpenAPI 3.1 Reference Element. Unlike 3.0 (where `$ref` excludes every
/// sibling key), 3.1 allows `summary`/`description` alongside `$ref` —
/// callers may use them to override the referenced component's own.
#[derive(Debug, Clone)]
pub struct ReferenceElement {
    pub object: ObjectElement,
}

impl ReferenceElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("reference");
        obj.add_class("openapi-reference");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("reference");
        content.add_class("openapi-reference");
        Self { object: content }
    }

    pub fn ref_(&self) -> Option<&StringElement> {
        self.object.get("$ref").and_then(Element::as_string)
    }

    pub fn set_ref(&mut self, value: StringElement) {
        self.object.set("$ref", Element::String(value));
    }

    pub fn summary(&self) -> Option<&StringElement> {
        self.object.get("summary").and_then(Element::as_string)
    }

    pub fn set_summary(&mut self, value: StringElement) {
        self.object.set("summary", Element::String(value));
    }

    pub fn description(&self) -> Option<&StringElement> {
        self.object.get("description").and_then(Element::as_string)
    }

    pub fn set_description(&mut self, value: StringElement) {
        self.object.set("description", Element::String(value));
    }
}

impl Default for ReferenceElement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_and_description_survive_alongside_ref() {
        let mut r = ReferenceElement::new();
        r.set_ref(StringElement::new("#/components/schemas/Pet"));
        r.set_summary(StringElement::new("A pet"));
        assert_eq!(r.ref_().unwrap().content, "#/components/schemas/Pet");
        assert_eq!(r.summary().unwrap().content, "A pet");
    }
}
