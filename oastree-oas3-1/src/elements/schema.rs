use oastree_ast::minim_model::*;
use oastree_schema::ConcreteSchemaElement;

/// OpenAPI 3.1 Schema Element: the JSON Schema 2020-12 body
/// (`oastree_schema::ConcreteSchemaElement`) plus the OpenAPI-only
/// extensions (`discriminator`, `xml`, `externalDocs`, ...). Unlike 3.0,
/// there is no `nullable` flag — a nullable schema expresses it via
/// `type: [..., "null"]`, which `ConcreteSchemaElement::is_nullable`
/// already understands.
#[derive(Debug, Clone)]
pub struct OpenApiSchemaElement {
    pub base: ConcreteSchemaElement,
}

impl OpenApiSchemaElement {
    pub fn new() -> Self {
        let mut base = ConcreteSchemaElement::new();
        base.object.set_element_type("schema");
        base.object.add_class("json-schema");
        Self { base }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut base = ConcreteSchemaElement::with_content(content);
        base.object.set_element_type("schema");
        base.object.add_class("json-schema");
        Self { base }
    }

    pub fn set_type(&mut self, val: Element) {
        self.base.set_type(val);
    }

    pub fn type_(&self) -> Option<&Element> {
        self.base.type_()
    }

    pub fn discriminator(&self) -> Option<&ObjectElement> {
        self.base.object.get("discriminator").and_then(Element::as_object)
    }

    pub fn set_discriminator(&mut self, val: ObjectElement) {
        self.base.object.set("discriminator", Element::Object(val));
    }

    pub fn xml(&self) -> Option<&ObjectElement> {
        self.base.object.get("xml").and_then(Element::as_object)
    }

    pub fn set_xml(&mut self, val: ObjectElement) {
        self.base.object.set("xml", Element::Object(val));
    }

    pub fn external_docs(&self) -> Option<&ObjectElement> {
        self.base.object.get("externalDocs").and_then(Element::as_object)
    }

    pub fn set_external_docs(&mut self, val: ObjectElement) {
        self.base.object.set("externalDocs", Element::Object(val));
    }

    pub fn example(&self) -> Option<&Element> {
        self.base.object.get("example")
    }

    pub fn set_example(&mut self, val: Element) {
        self.base.object.set("example", val);
    }

    pub fn deprecated(&self) -> Option<&BooleanElement> {
        self.base.object.get("deprecated").and_then(Element::as_boolean)
    }

    pub fn set_deprecated(&mut self, val: BooleanElement) {
        self.base.object.set("deprecated", Element::Boolean(val));
    }

    pub fn read_only(&self) -> Option<&BooleanElement> {
        self.base.object.get("readOnly").and_then(Element::as_boolean)
    }

    pub fn set_read_only(&mut self, val: BooleanElement) {
        self.base.object.set("readOnly", Element::Boolean(val));
    }

    pub fn write_only(&self) -> Option<&BooleanElement> {
        self.base.object.get("writeOnly").and_then(Element::as_boolean)
    }

    pub fn set_write_only(&mut self, val: BooleanElement) {
        self.base.object.set("writeOnly", Element::Boolean(val));
    }
}

impl Default for OpenApiSchemaElement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_via_type_array_not_flag() {
        let mut obj = ObjectElement::new();
        let mut types = ArrayElement::new_empty();
        types.push(Element::String(StringElement::new("string")));
        types.push(Element::String(StringElement::new("null")));
        obj.set("type", Element::Array(types));
        let schema = OpenApiSchemaElement::with_content(obj);
        assert!(schema.base.is_nullable());
    }
}
