use std::collections::HashMap;

pub use crate::simple_value::SimpleValue;

/// A 1-based line/column position in the original source text.
///
/// The full CST layer that would carry exact byte offsets and raw tokens is
/// an external collaborator (see the marshaller note in the crate root docs);
/// this is the coarse position the default marshaller is able to stamp on
/// every node without owning a full parse tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Framework-level metadata attached to every element (not part of the
/// document's own field set). Mirrors `meta.properties` as used throughout
/// the namespace crates to stash validation/bookkeeping data on a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaElement {
    pub properties: HashMap<String, SimpleValue>,
}

impl MetaElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&SimpleValue> {
        self.properties.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: SimpleValue) {
        self.properties.insert(key.into(), value);
    }
}

/// Specification-level attributes (as distinct from `meta`, which is purely
/// internal bookkeeping). Used sparingly today; kept so builders have
/// somewhere to record things like `inheritedClasses` without overloading
/// `meta`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributesElement {
    pub properties: HashMap<String, SimpleValue>,
}

/// The `classes` list every element carries, e.g. `openapi-reference`,
/// `fixed-field`. Kept as a bare vector of string elements rather than a full
/// `ArrayElement` so that `ArrayElement` itself doesn't need to embed its own
/// type recursively by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassesElement {
    pub content: Vec<Element>,
}

impl ClassesElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.content
            .iter()
            .any(|e| e.as_string().map(|s| s.content.as_str()) == Some(class))
    }

    pub fn push(&mut self, class: &str) {
        if !self.contains(class) {
            self.content.push(Element::String(StringElement::new(class)));
        }
    }

    pub fn as_strings(&self) -> Vec<String> {
        self.content
            .iter()
            .filter_map(|e| e.as_string().map(|s| s.content.clone()))
            .collect()
    }
}

/// A single `key: value` pair inside an [`ObjectElement`]. Boxed so that
/// `Element` (which contains `ObjectElement`, which contains
/// `Vec<MemberElement>`) doesn't need member fields to be an unboxed `Element`
/// directly, keeping clone cost proportional to what's actually touched.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberElement {
    pub key: Box<Element>,
    pub value: Box<Element>,
}

impl MemberElement {
    pub fn new(key: Element, value: Element) -> Self {
        Self {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn key_str(&self) -> Option<&str> {
        self.key.as_string().map(|s| s.content.as_str())
    }
}

macro_rules! common_element_fields {
    () => {
        pub element: String,
        pub meta: MetaElement,
        pub attributes: AttributesElement,
        pub classes: ClassesElement,
        pub position: Option<Position>,
    };
}

/// Methods shared by every element variant, regardless of its content shape.
pub trait ElementMeta {
    fn meta_mut(&mut self) -> &mut MetaElement;
    fn classes_mut(&mut self) -> &mut ClassesElement;
    fn element_mut(&mut self) -> &mut String;

    fn set_element_type(&mut self, element_type: &str) {
        *self.element_mut() = element_type.to_string();
    }

    fn add_class(&mut self, class: &str) {
        self.classes_mut().push(class);
    }
}

macro_rules! impl_element_meta {
    ($ty:ty) => {
        impl ElementMeta for $ty {
            fn meta_mut(&mut self) -> &mut MetaElement {
                &mut self.meta
            }
            fn classes_mut(&mut self) -> &mut ClassesElement {
                &mut self.classes
            }
            fn element_mut(&mut self) -> &mut String {
                &mut self.element
            }
        }
    };
}

/// An OpenAPI / JSON Schema object node: an ordered sequence of members.
/// Ordering is preserved exactly as parsed (insertion order), which is what
/// lets the marshaller round-trip field order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectElement {
    common_element_fields!();
    pub content: Vec<MemberElement>,
}

impl ObjectElement {
    pub fn new() -> Self {
        Self {
            element: "object".to_string(),
            meta: MetaElement::default(),
            attributes: AttributesElement::default(),
            classes: ClassesElement::default(),
            position: None,
            content: Vec::new(),
        }
    }

    pub fn set_element_type(&mut self, element_type: &str) {
        self.element = element_type.to_string();
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.push(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn get(&self, key: &str) -> Option<&Element> {
        self.content
            .iter()
            .find(|m| m.key_str() == Some(key))
            .map(|m| m.value.as_ref())
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Element> {
        self.content
            .iter_mut()
            .find(|m| m.key_str() == Some(key))
            .map(|m| m.value.as_mut())
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`, preserving its existing position in `content`
    /// if it is already present, else appending (document order is the
    /// insertion order, matching how the original source was read).
    pub fn set(&mut self, key: &str, value: Element) {
        if let Some(member) = self.content.iter_mut().find(|m| m.key_str() == Some(key)) {
            member.value = Box::new(value);
        } else {
            self.content
                .push(MemberElement::new(Element::String(StringElement::new(key)), value));
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Element> {
        let index = self.content.iter().position(|m| m.key_str() == Some(key))?;
        Some(*self.content.remove(index).value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(|m| m.key_str())
    }

    /// Keys beginning with `x-`, in document order.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.content
            .iter()
            .filter_map(|m| m.key_str().map(|k| (k, m.value.as_ref())))
            .filter(|(k, _)| k.starts_with("x-"))
    }

    /// Keys not named in `known` and not an `x-` extension — the "unknown
    /// properties" list named in the data model (§3): populated by a typed
    /// builder diffing the object's keys against its fixed-field list.
    pub fn unknown_fields(&self, known: &[&str]) -> Vec<&str> {
        self.keys()
            .filter(|k| !known.contains(k) && !k.starts_with("x-"))
            .collect()
    }
}

impl Default for ObjectElement {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered list node.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayElement {
    common_element_fields!();
    pub content: Vec<Element>,
}

impl ArrayElement {
    pub fn new_empty() -> Self {
        Self {
            element: "array".to_string(),
            meta: MetaElement::default(),
            attributes: AttributesElement::default(),
            classes: ClassesElement::default(),
            position: None,
            content: Vec::new(),
        }
    }

    pub fn set_element_type(&mut self, element_type: &str) {
        self.element = element_type.to_string();
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.push(class);
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.content.get(index)
    }

    pub fn push(&mut self, value: Element) {
        self.content.push(value);
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for ArrayElement {
    fn default() -> Self {
        Self::new_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringElement {
    common_element_fields!();
    pub content: String,
}

impl StringElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            element: "string".to_string(),
            meta: MetaElement::default(),
            attributes: AttributesElement::default(),
            classes: ClassesElement::default(),
            position: None,
            content: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberElement {
    common_element_fields!();
    pub content: f64,
}

impl NumberElement {
    pub fn new(value: f64) -> Self {
        Self {
            element: "number".to_string(),
            meta: MetaElement::default(),
            attributes: AttributesElement::default(),
            classes: ClassesElement::default(),
            position: None,
            content: value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanElement {
    common_element_fields!();
    pub content: bool,
}

impl BooleanElement {
    pub fn new(value: bool) -> Self {
        Self {
            element: "boolean".to_string(),
            meta: MetaElement::default(),
            attributes: AttributesElement::default(),
            classes: ClassesElement::default(),
            position: None,
            content: value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullElement {
    common_element_fields!();
}

impl NullElement {
    pub fn new() -> Self {
        Self {
            element: "null".to_string(),
            meta: MetaElement::default(),
            attributes: AttributesElement::default(),
            classes: ClassesElement::default(),
            position: None,
        }
    }
}

impl Default for NullElement {
    fn default() -> Self {
        Self::new()
    }
}

impl_element_meta!(StringElement);
impl_element_meta!(NumberElement);
impl_element_meta!(BooleanElement);
impl_element_meta!(NullElement);
impl_element_meta!(ObjectElement);
impl_element_meta!(ArrayElement);

/// The generic AST node. Every OpenAPI / JSON Schema concept in the
/// namespace crates is a typed wrapper around one of these variants —
/// see e.g. `oastree_oas3_0::elements::ReferenceElement`, which wraps
/// `Element::Object`.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Null(NullElement),
    Boolean(BooleanElement),
    Number(NumberElement),
    String(StringElement),
    Array(ArrayElement),
    Object(ObjectElement),
}

impl Element {
    pub fn element_type(&self) -> &str {
        match self {
            Element::Null(e) => &e.element,
            Element::Boolean(e) => &e.element,
            Element::Number(e) => &e.element,
            Element::String(e) => &e.element,
            Element::Array(e) => &e.element,
            Element::Object(e) => &e.element,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Element::Null(e) => e.position,
            Element::Boolean(e) => e.position,
            Element::Number(e) => e.position,
            Element::String(e) => e.position,
            Element::Array(e) => e.position,
            Element::Object(e) => e.position,
        }
    }

    pub fn classes(&self) -> &ClassesElement {
        match self {
            Element::Null(e) => &e.classes,
            Element::Boolean(e) => &e.classes,
            Element::Number(e) => &e.classes,
            Element::String(e) => &e.classes,
            Element::Array(e) => &e.classes,
            Element::Object(e) => &e.classes,
        }
    }

    pub fn as_null(&self) -> Option<&NullElement> {
        match self {
            Element::Null(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<&BooleanElement> {
        match self {
            Element::Boolean(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&NumberElement> {
        match self {
            Element::Number(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringElement> {
        match self {
            Element::String(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayElement> {
        match self {
            Element::Array(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectElement> {
        match self {
            Element::Object(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectElement> {
        match self {
            Element::Object(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut ArrayElement> {
        match self {
            Element::Array(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_ref(&self) -> bool {
        self.as_object()
            .map(|o| o.has_key("$ref"))
            .unwrap_or(false)
    }

    /// Converts to a plain `serde_json::Value`, discarding all meta/classes/
    /// position bookkeeping. Used by the default marshaller and by tests that
    /// want to assert on shape rather than on element plumbing.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Element::Null(_) => serde_json::Value::Null,
            Element::Boolean(e) => serde_json::Value::Bool(e.content),
            Element::Number(e) => serde_json::json!(e.content),
            Element::String(e) => serde_json::Value::String(e.content.clone()),
            Element::Array(e) => serde_json::Value::Array(e.content.iter().map(Element::to_json_value).collect()),
            Element::Object(e) => {
                let mut map = serde_json::Map::new();
                for member in &e.content {
                    if let Some(key) = member.key_str() {
                        map.insert(key.to_string(), member.value.to_json_value());
                    }
                }
                serde_json::Value::Object(map)
            }
        }
    }

    /// Builds an `Element` tree from a `serde_json::Value`, the shape the
    /// default marshaller (and most unit tests) start from.
    pub fn from_json_value(value: serde_json::Value) -> Element {
        match value {
            serde_json::Value::Null => Element::Null(NullElement::new()),
            serde_json::Value::Bool(b) => Element::Boolean(BooleanElement::new(b)),
            serde_json::Value::Number(n) => Element::Number(NumberElement::new(n.as_f64().unwrap_or(0.0))),
            serde_json::Value::String(s) => Element::String(StringElement::new(s)),
            serde_json::Value::Array(items) => {
                let mut array = ArrayElement::new_empty();
                for item in items {
                    array.push(Element::from_json_value(item));
                }
                Element::Array(array)
            }
            serde_json::Value::Object(map) => {
                let mut object = ObjectElement::new();
                for (key, value) in map {
                    object.set(&key, Element::from_json_value(value));
                }
                Element::Object(object)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_set_preserves_insertion_order() {
        let mut obj = ObjectElement::new();
        obj.set("b", Element::String(StringElement::new("2")));
        obj.set("a", Element::String(StringElement::new("1")));
        obj.set("b", Element::String(StringElement::new("2-updated")));
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(obj.get("b").unwrap().as_string().unwrap().content, "2-updated");
    }

    #[test]
    fn extensions_and_unknown_fields() {
        let mut obj = ObjectElement::new();
        obj.set("title", Element::String(StringElement::new("X")));
        obj.set("x-internal", Element::Boolean(BooleanElement::new(true)));
        obj.set("mystery", Element::Boolean(BooleanElement::new(false)));

        let exts: Vec<_> = obj.extensions().map(|(k, _)| k).collect();
        assert_eq!(exts, vec!["x-internal"]);

        let unknown = obj.unknown_fields(&["title"]);
        assert_eq!(unknown, vec!["mystery"]);
    }

    #[test]
    fn classes_dedupe() {
        let mut obj = ObjectElement::new();
        obj.add_class("openapi-reference");
        obj.add_class("openapi-reference");
        assert_eq!(obj.classes.as_strings(), vec!["openapi-reference".to_string()]);
    }

    #[test]
    fn json_round_trip() {
        let value = serde_json::json!({"a": [1, 2, "x"], "b": null});
        let element = Element::from_json_value(value.clone());
        assert_eq!(element.to_json_value(), value);
    }
}
