//! Match dispatcher (§6, §9): "a record of optional callbacks keyed by
//! variant. Callers register only the kinds they care about... in
//! statically-typed targets a sealed-trait/visitor approach is preferred
//! over runtime reflection." Grounded on the teacher's
//! `apidom-ns-openapi-3-0/src/specification.rs` `VisitorSpec`/
//! `ObjectVisitors` shape (one optional callback slot per OpenAPI object
//! kind) collapsed here into a generic record over the entity-kind enum
//! the Walker actually yields.

use crate::location::Location;
use crate::node::NodeView;

/// The OpenAPI/JSON-Schema entity kinds the Walker can categorize a
/// visited node as, for dispatch purposes (§4.5 names the same set for
/// index categorization). `Other` covers any object the walker descends
/// into that isn't individually named here (e.g. a bare `tag` array
/// entry) — callers needing those register the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Document,
    Info,
    Contact,
    License,
    Server,
    ServerVariable,
    Components,
    Paths,
    PathItem,
    Operation,
    ExternalDocumentation,
    Parameter,
    RequestBody,
    MediaType,
    Encoding,
    Responses,
    Response,
    Callback,
    Example,
    Link,
    Header,
    Tag,
    Reference,
    Schema,
    SecurityScheme,
    SecurityRequirement,
    Discriminator,
    Xml,
    Other,
}

/// What a dispatcher callback returns: continue the walk, stop it (the
/// "distinguished termination sentinel" of §6), or surface a caller error.
pub enum DispatchControl<E> {
    Continue,
    Terminate,
    Error(E),
}

/// One optional callback per [`EntityKind`] plus a catch-all. A
/// `MatchDispatcher` with no callbacks registered is legal — the Walker
/// then just visits without calling out, which is how a plain "collect
/// every location" traversal is expressed.
pub struct MatchDispatcher<'a, E> {
    callbacks: std::collections::HashMap<EntityKind, Box<dyn FnMut(&NodeView, &Location) -> DispatchControl<E> + 'a>>,
    catch_all: Option<Box<dyn FnMut(EntityKind, &NodeView, &Location) -> DispatchControl<E> + 'a>>,
}

impl<'a, E> Default for MatchDispatcher<'a, E> {
    fn default() -> Self {
        Self { callbacks: std::collections::HashMap::new(), catch_all: None }
    }
}

impl<'a, E> MatchDispatcher<'a, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, kind: EntityKind, callback: impl FnMut(&NodeView, &Location) -> DispatchControl<E> + 'a) -> Self {
        self.callbacks.insert(kind, Box::new(callback));
        self
    }

    pub fn on_any(mut self, callback: impl FnMut(EntityKind, &NodeView, &Location) -> DispatchControl<E> + 'a) -> Self {
        self.catch_all = Some(Box::new(callback));
        self
    }

    /// Invokes the registered callback for `kind` if present, else the
    /// catch-all if present, else `Continue` (no callback registered at
    /// all is not an error — it just means this caller doesn't care about
    /// this node).
    pub fn dispatch(&mut self, kind: EntityKind, node: &NodeView, location: &Location) -> DispatchControl<E> {
        if let Some(callback) = self.callbacks.get_mut(&kind) {
            return callback(node, location);
        }
        if let Some(catch_all) = self.catch_all.as_mut() {
            return catch_all(kind, node, location);
        }
        DispatchControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oastree_ast::minim_model::ObjectElement;

    #[test]
    fn specific_callback_wins_over_catch_all() {
        let mut seen_specific = false;
        let mut seen_catch_all = false;
        let mut dispatcher: MatchDispatcher<()> = MatchDispatcher::new()
            .on(EntityKind::Schema, |_node, _loc| {
                seen_specific = true;
                DispatchControl::Continue
            })
            .on_any(|_kind, _node, _loc| {
                seen_catch_all = true;
                DispatchControl::Continue
            });

        let obj = ObjectElement::new();
        let view = NodeView::new(&obj);
        let _ = dispatcher.dispatch(EntityKind::Schema, &view, &Location::root());
        assert!(seen_specific);
        assert!(!seen_catch_all);
    }

    #[test]
    fn catch_all_runs_for_unregistered_kind() {
        let mut seen_catch_all = false;
        let mut dispatcher: MatchDispatcher<()> = MatchDispatcher::new().on_any(|_kind, _node, _loc| {
            seen_catch_all = true;
            DispatchControl::Continue
        });

        let obj = ObjectElement::new();
        let view = NodeView::new(&obj);
        let _ = dispatcher.dispatch(EntityKind::Tag, &view, &Location::root());
        assert!(seen_catch_all);
    }

    #[test]
    fn no_callbacks_is_a_harmless_continue() {
        let mut dispatcher: MatchDispatcher<()> = MatchDispatcher::new();
        let obj = ObjectElement::new();
        let view = NodeView::new(&obj);
        assert!(matches!(dispatcher.dispatch(EntityKind::Schema, &view, &Location::root()), DispatchControl::Continue));
    }
}
