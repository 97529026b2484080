use oastree_ast::*;

/// A `security` entry: a map from security-scheme name to the list of scopes
/// required (empty for non-OAuth2/OIDC schemes).
#[derive(Debug, Clone)]
pub struct SecurityRequirementElement {
    pub object: ObjectElement,
}

impl SecurityRequirementElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("securityRequirement");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("securityRequirement");
        Self { object: content }
    }

    pub fn scopes(&self, scheme_name: &str) -> Option<&ArrayElement> {
        self.object.get(scheme_name).and_then(Element::as_array)
    }

    pub fn set_scopes(&mut self, scheme_name: &str, scopes: ArrayElement) {
        self.object.set(scheme_name, Element::Array(scopes));
    }

    pub fn scheme_names(&self) -> impl Iterator<Item = &str> {
        self.object.keys()
    }
}

impl Default for SecurityRequirementElement {
    fn default() -> Self {
        Self::new()
    }
}
