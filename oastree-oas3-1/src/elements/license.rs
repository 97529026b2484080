use oastree_ast::minim_model::*;

/// OpenAPI `License` Element. 3.1 adds `identifier` (an SPDX expression) as
/// a `url` alternative — the two are mutually exclusive per the spec text,
/// not enforced here (see `oastree_ast::validators` for that kind of check).
#[derive(Debug, Clone)]
pub struct LicenseElement {
    pub object: ObjectElement,
}

impl LicenseElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("license");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("license");
        Self { object: content }
    }

    pub fn name(&self) -> Option<&StringElement> {
        self.object.get("name").and_then(Element::as_string)
    }

    pub fn set_name(&mut self, value: StringElement) {
        self.object.set("name", Element::String(value));
    }

    pub fn url(&self) -> Option<&StringElement> {
        self.object.get("url").and_then(Element::as_string)
    }

    pub fn set_url(&mut self, value: StringElement) {
        self.object.set("url", Element::String(value));
    }

    pub fn identifier(&self) -> Option<&StringElement> {
        self.object.get("identifier").and_then(Element::as_string)
    }

    pub fn set_identifier(&mut self, value: StringElement) {
        self.object.set("identifier", Element::String(value));
    }
}

impl Default for LicenseElement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_and_url_both_roundtrip() {
        let mut license = LicenseElement::new();
        license.set_name(StringElement::new("Apache 2.0"));
        license.set_identifier(StringElement::new("Apache-2.0"));
        assert_eq!(license.name().unwrap().content, "Apache 2.0");
        assert_eq!(license.identifier().unwrap().content, "Apache-2.0");
        assert!(license.url().is_none());
    }
}
