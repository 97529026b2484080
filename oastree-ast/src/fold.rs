//! A pre-order `Fold` over the generic [`Element`] tree.
//!
//! Namespace crates (`oastree-oas3-0`, `oastree-oas3-1`) implement `Fold` to
//! turn a generic parsed tree into their typed element wrappers one object at
//! a time, falling back to [`DefaultFolder`] to recurse into children they
//! don't special-case. The walker in `oastree-core` builds its own traversal
//! on top of the same shape (a match dispatcher keyed by element kind) but
//! needs location tracking that a pure `Fold` doesn't carry, so the two are
//! siblings rather than one being built on the other.

use crate::minim_model::{ArrayElement, BooleanElement, Element, MemberElement, NullElement, NumberElement, ObjectElement, StringElement};

pub trait Fold {
    fn fold_element(&mut self, element: Element) -> Element {
        default_fold_element(self, element)
    }

    fn fold_object_element(&mut self, element: ObjectElement) -> Element {
        Element::Object(default_fold_object_children(self, element))
    }

    fn fold_array_element(&mut self, element: ArrayElement) -> Element {
        Element::Array(default_fold_array_children(self, element))
    }

    fn fold_string_element(&mut self, element: StringElement) -> Element {
        Element::String(element)
    }

    fn fold_number_element(&mut self, element: NumberElement) -> Element {
        Element::Number(element)
    }

    fn fold_boolean_element(&mut self, element: BooleanElement) -> Element {
        Element::Boolean(element)
    }

    fn fold_null_element(&mut self, element: NullElement) -> Element {
        Element::Null(element)
    }
}

/// Dispatches to the variant-specific fold method. Free function (rather than
/// a provided trait method with a default body calling back into `self`) so
/// that `dyn Fold` callers and generic callers go through the same place.
pub fn default_fold_element<F: Fold + ?Sized>(folder: &mut F, element: Element) -> Element {
    match element {
        Element::Object(e) => folder.fold_object_element(e),
        Element::Array(e) => folder.fold_array_element(e),
        Element::String(e) => folder.fold_string_element(e),
        Element::Number(e) => folder.fold_number_element(e),
        Element::Boolean(e) => folder.fold_boolean_element(e),
        Element::Null(e) => folder.fold_null_element(e),
    }
}

/// Folds every member's key and value, keeping the object's own metadata.
pub fn default_fold_object_children<F: Fold + ?Sized>(folder: &mut F, mut element: ObjectElement) -> ObjectElement {
    let old_content = std::mem::take(&mut element.content);
    element.content = old_content
        .into_iter()
        .map(|member| {
            let MemberElement { key, value } = member;
            MemberElement::new(folder.fold_element(*key), folder.fold_element(*value))
        })
        .collect();
    element
}

/// Folds every item, keeping the array's own metadata.
pub fn default_fold_array_children<F: Fold + ?Sized>(folder: &mut F, mut element: ArrayElement) -> ArrayElement {
    let old_content = std::mem::take(&mut element.content);
    element.content = old_content.into_iter().map(|item| folder.fold_element(item)).collect();
    element
}

/// A `Fold` that changes nothing but still recurses into every child — the
/// fallback namespace folders reach for when a node isn't one of the kinds
/// they special-case.
#[derive(Debug, Default)]
pub struct DefaultFolder;

impl Fold for DefaultFolder {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minim_model::StringElement;

    struct UppercaseStrings;

    impl Fold for UppercaseStrings {
        fn fold_string_element(&mut self, element: StringElement) -> Element {
            Element::String(StringElement::new(element.content.to_uppercase()))
        }
    }

    #[test]
    fn recurses_through_objects_and_arrays() {
        let mut obj = ObjectElement::new();
        obj.set("a", Element::String(StringElement::new("x")));
        obj.set(
            "b",
            Element::Array(ArrayElement {
                content: vec![Element::String(StringElement::new("y"))],
                ..ArrayElement::new_empty()
            }),
        );

        let folded = UppercaseStrings.fold_element(Element::Object(obj));
        let folded = folded.as_object().unwrap();
        assert_eq!(folded.get("a").unwrap().as_string().unwrap().content, "X");
        assert_eq!(
            folded.get("b").unwrap().as_array().unwrap().get(0).unwrap().as_string().unwrap().content,
            "Y"
        );
    }

    #[test]
    fn default_folder_is_identity() {
        let mut obj = ObjectElement::new();
        obj.set("a", Element::String(StringElement::new("x")));
        let element = Element::Object(obj.clone());
        let folded = DefaultFolder.fold_element(element.clone());
        assert_eq!(folded, element);
    }
}
