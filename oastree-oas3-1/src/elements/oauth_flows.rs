use oastree_ast::*;

use crate::elements::oauth_flow::OAuthFlowElement;

/// The `securityScheme.flows` fixed field: up to one of each OAuth2 grant
/// type's flow description.
#[derive(Debug, Clone)]
pub struct OAuthFlowsElement {
    pub object: ObjectElement,
}

macro_rules! flow_field {
    ($getter:ident, $setter:ident, $key:literal) => {
        pub fn $getter(&self) -> Option<OAuthFlowElement> {
            self.object.get($key).and_then(Element::as_object).cloned().map(OAuthFlowElement::with_content)
        }

        pub fn $setter(&mut self, flow: OAuthFlowElement) {
            self.object.set($key, Element::Object(flow.object));
        }
    };
}

impl OAuthFlowsElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("oAuthFlows");
        Self { object: obj }
    }

    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("oAuthFlows");
        Self { object: content }
    }

    flow_field!(implicit, set_implicit, "implicit");
    flow_field!(password, set_password, "password");
    flow_field!(client_credentials, set_client_credentials, "clientCredentials");
    flow_field!(authorization_code, set_authorization_code, "authorizationCode");
}

impl Default for OAuthFlowsElement {
    fn default() -> Self {
        Self::new()
    }
}
