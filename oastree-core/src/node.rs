//! Node (§3): a read-only view over an already-built [`ObjectElement`] that
//! surfaces the four things every tree entity exposes — source position,
//! declared fields, the `x-` extension map, and the unknown-properties list
//! collected during parsing (via the builder-layer's `fallback_*` /
//! `unknown-field-*` metadata markers).

use oastree_ast::minim_model::*;

/// Borrowed view over a node. Construct with [`NodeView::new`]; all
/// accessors are derived on demand from the underlying `ObjectElement`
/// rather than duplicated into owned state, since the root document
/// exclusively owns the parsed tree (§3 "Ownership rules").
pub struct NodeView<'a> {
    object: &'a ObjectElement,
}

impl<'a> NodeView<'a> {
    pub fn new(object: &'a ObjectElement) -> Self {
        Self { object }
    }

    pub fn object(&self) -> &'a ObjectElement {
        self.object
    }

    /// Coarse line/column position stamped by the marshaller, if any.
    pub fn position(&self) -> Option<Position> {
        self.object.position
    }

    /// Declared field names, in source order.
    pub fn declared_fields(&self) -> Vec<&'a str> {
        self.object.content.iter().filter_map(|m| m.key_str()).collect()
    }

    /// Members whose key begins with `x-` (the specification-extension
    /// map). Every OpenAPI/JSON-Schema object may carry these regardless
    /// of its fixed-field set.
    pub fn extensions(&self) -> Vec<(&'a str, &'a Element)> {
        self.object.extensions().collect()
    }

    /// Field names the builder layer flagged as unrecognized for this
    /// node's element type (`fallback_*` / `unknown-field-*` meta
    /// markers), one entry per unknown key.
    pub fn unknown_properties(&self) -> Vec<String> {
        self.object
            .meta
            .properties
            .keys()
            .filter_map(|key| {
                key.strip_prefix("fallback_")
                    .or_else(|| key.strip_prefix("unknown-field-"))
                    .map(|field| field.to_string())
            })
            .collect()
    }
}
