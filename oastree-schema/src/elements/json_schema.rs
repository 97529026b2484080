use oastree_ast::{ArrayElement, BooleanElement, Element, ObjectElement, StringElement};

/// The body of a *Concrete* [`crate::Schema`] — only the JSON Schema keywords
/// the core's circular-reference classifier actually inspects (spec §4.4):
/// `type`/`nullable`, `properties`/`required`, `items`/`minItems`,
/// `additionalProperties`/`minProperties`, and the `oneOf`/`anyOf`/`allOf`
/// polymorphic combinators. Everything else on the underlying object is kept
/// (it round-trips through transformers) but isn't given a typed accessor
/// here — this crate is not a general JSON Schema model.
#[derive(Debug, Clone)]
pub struct ConcreteSchemaElement {
    pub object: ObjectElement,
}

impl ConcreteSchemaElement {
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("JSONSchema");
        Self { object: obj }
    }

    pub fn with_content(mut content: ObjectElement) -> Self {
        content.set_element_type("JSONSchema");
        Self { object: content }
    }

    pub fn title(&self) -> Option<&StringElement> {
        self.object.get("title").and_then(Element::as_string)
    }

    /// `type` as the list of declared JSON types (handles both the 3.0-style
    /// single string and the 3.1+-style `[type, ...]` array; a bare string is
    /// treated as a one-element list).
    pub fn types(&self) -> Vec<String> {
        match self.object.get("type") {
            Some(Element::String(s)) => vec![s.content.clone()],
            Some(Element::Array(arr)) => arr
                .content
                .iter()
                .filter_map(Element::as_string)
                .map(|s| s.content.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// True if `type` includes `"null"` (3.1+) or `nullable: true` is set
    /// (3.0.x). Termination analysis (spec §4.4) treats both as nullable.
    pub fn is_nullable(&self) -> bool {
        if self.types().iter().any(|t| t == "null") {
            return true;
        }
        self.object
            .get("nullable")
            .and_then(Element::as_boolean)
            .map(|b| b.content)
            .unwrap_or(false)
    }

    /// The raw `type` value, before the string-or-array normalization that
    /// [`Self::types`] performs — kept for callers that want to distinguish
    /// the two written forms rather than just the resulting type set.
    pub fn type_(&self) -> Option<&Element> {
        self.object.get("type")
    }

    pub fn properties(&self) -> Option<&ObjectElement> {
        self.object.get("properties").and_then(Element::as_object)
    }

    pub fn required(&self) -> Vec<String> {
        self.object
            .get("required")
            .and_then(Element::as_array)
            .map(|arr| arr.content.iter().filter_map(Element::as_string).map(|s| s.content.clone()).collect())
            .unwrap_or_default()
    }

    /// A property counts as required either via the `required` list (object
    /// schemas) or implicitly for tuple-style `items` (array schemas don't use
    /// this; kept for symmetry with the classifier's per-segment record).
    pub fn property_is_required(&self, name: &str) -> bool {
        self.required().iter().any(|r| r == name)
    }

    pub fn items(&self) -> Option<&Element> {
        self.object.get("items")
    }

    pub fn min_items(&self) -> Option<i64> {
        self.object.get("minItems").and_then(Element::as_number).map(|n| n.content as i64)
    }

    pub fn additional_properties(&self) -> Option<&Element> {
        self.object.get("additionalProperties")
    }

    pub fn min_properties(&self) -> Option<i64> {
        self.object.get("minProperties").and_then(Element::as_number).map(|n| n.content as i64)
    }

    pub fn one_of(&self) -> Option<&ArrayElement> {
        self.object.get("oneOf").and_then(Element::as_array)
    }

    pub fn any_of(&self) -> Option<&ArrayElement> {
        self.object.get("anyOf").and_then(Element::as_array)
    }

    pub fn all_of(&self) -> Option<&ArrayElement> {
        self.object.get("allOf").and_then(Element::as_array)
    }

    pub fn set_title(&mut self, title: StringElement) {
        self.object.set("title", Element::String(title));
    }

    pub fn set_properties(&mut self, props: ObjectElement) {
        self.object.set("properties", Element::Object(props));
    }

    pub fn set_type(&mut self, value: Element) {
        self.object.set("type", value);
    }

    pub fn set_nullable(&mut self, value: bool) {
        self.object.set("nullable", Element::Boolean(BooleanElement::new(value)));
    }
}

impl Default for ConcreteSchemaElement {
    fn default() -> Self {
        Self::new()
    }
}
