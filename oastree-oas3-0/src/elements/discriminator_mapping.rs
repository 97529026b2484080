use oastree_ast::*;

/// The `discriminator.mapping` object: schema-name-or-value to `$ref` (or
/// schema name) lookup table used by the polymorphic classifier (spec §4.4)
/// to find which concrete schema a `oneOf`/`anyOf` branch corresponds to.
#[derive(Debug, Clone)]
pub struct DiscriminatorMappingElement {
    pub object: ObjectElement,
}

impl DiscriminatorMappingElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("discriminatorMapping");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("discriminatorMapping");
        Self { object: content }
    }

    pub fn get_mapping(&self, key: &str) -> Option<&StringElement> {
        self.object.get(key).and_then(Element::as_string)
    }

    pub fn set_mapping(&mut self, key: &str, value: StringElement) {
        self.object.set(key, Element::String(value));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.object.keys()
    }
}

impl Default for DiscriminatorMappingElement {
    fn default() -> Self {
        Self::new()
    }
}
