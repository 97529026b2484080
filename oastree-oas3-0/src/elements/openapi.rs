use oastree_ast::*;

/// The bare `openapi` version-string fixed field (e.g. `"3.0.3"`), wrapped
/// rather than left as a plain `StringElement` so it can carry its own
/// `fixed-field` class like every other named element.
#[derive(Debug, Clone)]
pub struct OpenapiElement {
    pub string: StringElement,
}

impl OpenapiElement {
    pub fn from_element(mut string: StringElement) -> Self {
        string.set_element_type("openapi");
        Self { string }
    }

    pub fn version(&self) -> &str {
        &self.string.content
    }
}
