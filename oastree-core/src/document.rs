//! Document and Document Cache (§3, §4.2).
//!
//! A [`Document`] is a parsed tree plus its absolute source location; every
//! document either carries a `file://`/`http(s)://` locator or is the root
//! of the resolution session. The [`DocumentCache`] is the root document's
//! process-scoped map from absolute path to parsed tree, ensuring each
//! external document is fetched and parsed at most once per session (§8).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use oastree_ast::minim_model::Element;

/// Where a document's bytes came from. The session root has no locator of
/// its own — it's identified by the synthetic path `"<root>"` in the
/// cache, never actually looked up there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentLocation {
    Root,
    Url(String),
}

impl DocumentLocation {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentLocation::Root => "<root>",
            DocumentLocation::Url(s) => s,
        }
    }
}

/// A parsed OpenAPI tree. Cheap to clone (an `Rc` bump) since the cache and
/// every resolved reference into it share the same underlying tree rather
/// than copying it (§3 "the underlying T is shared (not copied)").
#[derive(Debug, Clone)]
pub struct Document {
    pub location: DocumentLocation,
    pub root: Rc<Element>,
}

impl Document {
    pub fn new(location: DocumentLocation, root: Element) -> Self {
        Self { location, root: Rc::new(root) }
    }

    pub fn root_object(&self) -> Option<&oastree_ast::minim_model::ObjectElement> {
        self.root.as_object()
    }
}

/// Process-scoped (in practice: per-resolution-session) map from absolute
/// document path to parsed tree. Mutated only by the
/// [`crate::resolver::ReferenceResolver`]; reads are cheap `Rc` clones.
///
/// This is a single-threaded `RefCell`-backed cache, matching §5's
/// single-threaded cooperative scheduling model. A caller that drives
/// concurrent resolution sessions sharing one cache must serialize writes
/// itself (a per-path single-flight mutex, per §4.2) — that discipline
/// lives above this type, which assumes one writer at a time.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: RefCell<HashMap<String, Document>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached document for `absolute_path`, if present.
    pub fn get(&self, absolute_path: &str) -> Option<Document> {
        self.entries.borrow().get(absolute_path).cloned()
    }

    pub fn contains(&self, absolute_path: &str) -> bool {
        self.entries.borrow().contains_key(absolute_path)
    }

    /// Installs a freshly-fetched document, keyed by its own absolute
    /// path. No-op (keeps the existing entry) if another caller already
    /// installed the same path — this is what makes "fetched at most once
    /// per absolute path per resolution session" hold even if two
    /// references to the same external document race to resolve.
    pub fn install(&self, document: Document) -> Document {
        let key = document.location.as_str().to_string();
        let mut entries = self.entries.borrow_mut();
        entries.entry(key).or_insert(document).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
