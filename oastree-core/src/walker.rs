//! Walker (§4.3): a lazy, restartable pre-order traversal yielding every
//! visitable node with its location, invoking a caller-supplied match
//! dispatcher on each visit. Scoped to structural descent through one
//! document's tree — descending through a resolved `$ref` into another
//! document is the Index Builder's job (§4.5), which drives a fresh
//! `Walker` per entered document and stitches the location stacks together
//! at the boundary.

use oastree_ast::minim_model::{Element, ObjectElement};

use crate::cancel::CancellationToken;
use crate::dispatcher::{DispatchControl, EntityKind, MatchDispatcher};
use crate::document::Document;
use crate::location::Location;
use crate::node::NodeView;

/// One visited node: its classified kind and its location "as written" in
/// the currently-walked document.
#[derive(Debug, Clone)]
pub struct WalkItem {
    pub kind: EntityKind,
    pub location: Location,
}

/// The distinguished termination value (§6 "Walk termination sentinel"):
/// consumers match on `WalkControl::Terminated` by identity rather than
/// treating it as a generic error.
#[derive(Debug)]
pub enum WalkControl<E> {
    Terminated,
    Cancelled,
    Error(E),
}

/// Maps a builder-tagged `element` type string onto the entity-kind the
/// walker (and the Index Builder, which needs the same classification
/// when it isn't driving a `Walker` directly — see `index.rs`) yields.
pub(crate) fn classify(obj: &ObjectElement) -> EntityKind {
    match obj.element.as_str() {
        "openApi3_0" | "openApi3_1" | "openapi" => EntityKind::Document,
        "info" => EntityKind::Info,
        "contact" => EntityKind::Contact,
        "license" => EntityKind::License,
        "server" => EntityKind::Server,
        "serverVariable" => EntityKind::ServerVariable,
        "components" => EntityKind::Components,
        "paths" => EntityKind::Paths,
        "pathItem" => EntityKind::PathItem,
        "operation" => EntityKind::Operation,
        "externalDocumentation" => EntityKind::ExternalDocumentation,
        "parameter" => EntityKind::Parameter,
        "requestBody" => EntityKind::RequestBody,
        "mediaType" => EntityKind::MediaType,
        "encoding" | "encodingHeaders" => EntityKind::Encoding,
        "responses" => EntityKind::Responses,
        "response" | "responseContent" | "responseHeaders" | "responseLinks" => EntityKind::Response,
        "callback" => EntityKind::Callback,
        "example" => EntityKind::Example,
        "link" | "linkParameters" => EntityKind::Link,
        "header" => EntityKind::Header,
        "tag" => EntityKind::Tag,
        "reference" => EntityKind::Reference,
        "schema" | "JSONSchema" => EntityKind::Schema,
        "securityScheme" => EntityKind::SecurityScheme,
        "securityRequirement" => EntityKind::SecurityRequirement,
        "discriminator" | "discriminatorMapping" => EntityKind::Discriminator,
        "xml" => EntityKind::Xml,
        "oAuthFlow" | "oAuthFlows" => EntityKind::Other,
        _ => EntityKind::Other,
    }
}

/// Pre-order DFS over an `Element` tree. Only object nodes are yielded as
/// [`WalkItem`]s — arrays are transparent structure the walker descends
/// through (an array's items inherit their parent field's name plus their
/// index, per [`Location::array_index`]), and bare scalars carry no
/// entity kind to classify. Scalar-valued fields (descriptions, summaries,
/// etc.) are read directly off the yielded object's `NodeView`, not
/// visited independently.
pub struct Walker {
    stack: Vec<(Element, Location)>,
}

impl Walker {
    pub fn new(root: Element) -> Self {
        Self { stack: vec![(root, Location::root())] }
    }

    pub fn from_document(document: &Document) -> Self {
        Self::new((*document.root).clone())
    }

    /// Advances the walk by one visited object node. Returns `None` once
    /// the tree is exhausted — calling `next` again after that continues
    /// to return `None` (the walk doesn't restart itself; construct a new
    /// `Walker` to restart, per §4.3 "restartable").
    pub fn next<E>(
        &mut self,
        cancel: &CancellationToken,
        dispatcher: &mut MatchDispatcher<'_, E>,
    ) -> Option<Result<WalkItem, WalkControl<E>>> {
        loop {
            if cancel.is_cancelled() {
                return Some(Err(WalkControl::Cancelled));
            }
            let (element, location) = self.stack.pop()?;
            let obj = match &element {
                Element::Object(obj) => obj,
                _ => continue,
            };

            for member in obj.content.iter().rev() {
                let Some(key) = member.key_str() else { continue };
                let child = member.value.as_ref().clone();
                match &child {
                    Element::Array(arr) => {
                        for (index, item) in arr.content.iter().enumerate().rev() {
                            self.stack.push((item.clone(), location.array_index(key, index)));
                        }
                    }
                    _ => self.stack.push((child, location.field(key))),
                }
            }

            let kind = classify(obj);
            let view = NodeView::new(obj);
            return match dispatcher.dispatch(kind, &view, &location) {
                DispatchControl::Continue => Some(Ok(WalkItem { kind, location })),
                DispatchControl::Terminate => Some(Err(WalkControl::Terminated)),
                DispatchControl::Error(e) => Some(Err(WalkControl::Error(e))),
            };
        }
    }
}
