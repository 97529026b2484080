use oastree_ast::*;
use crate::elements::openapi::OpenapiElement;

/// Build the bare `openapi` version-string fixed field from a Minim
/// `StringElement` (e.g. `"3.1.1"`).
pub fn build_openapi(element: &Element) -> Option<OpenapiElement> {
    element.as_string().map(|s| OpenapiElement::from_element(s.clone()))
}
