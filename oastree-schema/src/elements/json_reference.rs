use oastree_ast::{Element, ObjectElement, StringElement};

/// A bare `{ "$ref": "..." }` object, before the core's resolver has
/// classified it into a `Schema::Reference` or chased it to a target.
#[derive(Debug, Clone)]
pub struct JsonReferenceElement {
    pub object: ObjectElement,
}

impl JsonReferenceElement {
    pub fn new(object: ObjectElement) -> Self {
        Self { object }
    }

    pub fn get_ref(&self) -> Option<&StringElement> {
        self.object.get("$ref").and_then(Element::as_string)
    }

    pub fn set_ref(&mut self, value: StringElement) {
        self.object.set("$ref", Element::String(value));
    }
}
