//! Location stack (§3, §9 "Location stack"): an ordered sequence of
//! immutable segments. Appending shares the existing tail rather than
//! mutating it in place, because multiple [`crate::walker::WalkItem`]s
//! branch off the same prefix (e.g. siblings in a map or array).

use std::rc::Rc;

/// How a segment was reached from its parent node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A named field on an object, e.g. `.info`.
    Field(String),
    /// A key in a map-shaped field, e.g. `.schemas["User"]`.
    MapKey { field: String, key: String },
    /// An index in an array-shaped field, e.g. `.servers[0]`.
    ArrayIndex { field: String, index: usize },
}

impl Segment {
    fn pointer_token(&self) -> Vec<String> {
        match self {
            Segment::Field(name) => vec![escape(name)],
            Segment::MapKey { field, key } => vec![escape(field), escape(key)],
            Segment::ArrayIndex { field, index } => vec![escape(field), index.to_string()],
        }
    }
}

fn escape(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[derive(Debug)]
struct Node {
    segment: Segment,
    parent: Option<Location>,
}

/// An immutable, structurally-shared path from a document root to a node
/// *as written* in the source — not in any resolved/inlined graph.
/// Cloning is O(1) (an `Rc` bump); the empty location is the document
/// root.
#[derive(Debug, Clone)]
pub struct Location(Option<Rc<Node>>);

impl Location {
    /// The document root: the empty location.
    pub fn root() -> Self {
        Location(None)
    }

    /// Derive a child location by appending one segment. Never mutates
    /// `self` — returns a new handle sharing this location as its tail.
    pub fn child(&self, segment: Segment) -> Self {
        Location(Some(Rc::new(Node { segment, parent: Some(self.clone()) })))
    }

    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(Segment::Field(name.into()))
    }

    pub fn map_key(&self, field: impl Into<String>, key: impl Into<String>) -> Self {
        self.child(Segment::MapKey { field: field.into(), key: key.into() })
    }

    pub fn array_index(&self, field: impl Into<String>, index: usize) -> Self {
        self.child(Segment::ArrayIndex { field: field.into(), index })
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// Segments from the root down to this location, in traversal order.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut cur = self.0.as_ref();
        while let Some(node) = cur {
            out.push(node.segment.clone());
            cur = node.parent.as_ref().and_then(|p| p.0.as_ref());
        }
        out.reverse();
        out
    }

    /// Render as an RFC 6901 JSON Pointer, e.g. `/components/schemas/User`.
    /// The root location renders as the empty string.
    pub fn to_json_pointer(&self) -> String {
        let mut out = String::new();
        for segment in self.segments() {
            for token in segment.pointer_token() {
                out.push('/');
                out.push_str(&token);
            }
        }
        out
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json_pointer())
    }
}
