//! Inline (§4.6): replaces every reference with a deep-structural copy of
//! its resolved target, erasing `$ref`. A non-terminating cycle can't be
//! inlined (the copy would never stop), so it surfaces as
//! [`TransformError::NonTerminatingCycle`] rather than hanging.

use std::collections::HashSet;

use oastree_ast::minim_model::{Element, ObjectElement};

use super::{collect_reachable_references, component_name_from_reference, ref_string};
use crate::config::{InlineOptions, ResolveOptions};
use crate::document::{Document, DocumentCache};
use crate::error::TransformError;
use crate::index::Index;
use crate::resolver::ReferenceResolver;

/// Walks `element` (declared at `document`), replacing every `$ref`
/// wrapper with a deep copy of its resolved target. `chain` is the set of
/// absolute references currently being inlined on this path — re-entering
/// one is exactly the non-terminating-cycle case §4.6 calls out, since the
/// Index Builder has already classified it (an invalid cycle can only be
/// walked by `inline` if the classifier let it through, which it doesn't
/// for schema chains, but path-item/parameter/etc. cycles are only
/// detected, not classified, per §4.4's scope note — so this check is the
/// transformer's own backstop, not a duplicate of the classifier).
fn inline_element(
    element: &Element,
    root: &Document,
    cache: &DocumentCache,
    resolve_options: &ResolveOptions,
    document: &str,
    chain: &mut HashSet<String>,
) -> Result<Element, TransformError> {
    if resolve_options.cancellation.is_cancelled() {
        return Err(TransformError::Cancelled);
    }
    let Some(obj) = element.as_object() else {
        if let Element::Array(arr) = element {
            let mut copy = oastree_ast::minim_model::ArrayElement::new_empty();
            for item in &arr.content {
                copy.push(inline_element(item, root, cache, resolve_options, document, chain)?);
            }
            return Ok(Element::Array(copy));
        }
        return Ok(element.clone());
    };

    if let Some(reference) = ref_string(obj) {
        let resolver = ReferenceResolver::new(root, cache, resolve_options);
        let outcome = resolver.resolve(&reference, document).map_err(TransformError::from)?;
        if !chain.insert(outcome.info.absolute_reference.clone()) {
            return Err(TransformError::NonTerminatingCycle(outcome.info.absolute_reference));
        }
        let target_document = outcome.info.absolute_document_path.clone();
        let inlined = inline_element(&outcome.node, root, cache, resolve_options, &target_document, chain)?;
        chain.remove(&outcome.info.absolute_reference);
        return Ok(inlined);
    }

    let mut copy = ObjectElement::new();
    copy.set_element_type(&obj.element);
    for member in &obj.content {
        let Some(key) = member.key_str() else { continue };
        let value = inline_element(&member.value, root, cache, resolve_options, document, chain)?;
        copy.set(key, value);
    }
    Ok(Element::Object(copy))
}

/// Deletes every `components/<kind>/<name>` entry not reached from the
/// rewritten (reference-free) tree's `paths`/`webhooks`, per `Inline`'s
/// `RemoveUnusedComponents` post-pass (§4.6) — evaluated against the
/// *original* tree's reference graph, since the rewritten tree no longer
/// has any references to walk.
fn remove_unused_components(
    original_root: &Element,
    root: &Document,
    cache: &DocumentCache,
    resolve_options: &ResolveOptions,
    inlined: &mut Element,
) {
    let Some(original_obj) = original_root.as_object() else { return };
    let mut reachable = Vec::new();
    let mut visited = HashSet::new();
    for section in ["paths", "webhooks"] {
        if let Some(section_element) = original_obj.get(section) {
            collect_reachable_references(section_element, root, cache, resolve_options, root.location.as_str(), &mut visited, &mut reachable);
        }
    }
    let mut keep: std::collections::HashMap<String, HashSet<String>> = std::collections::HashMap::new();
    for reference in &reachable {
        if let Some((kind, name)) = component_name_from_reference(reference) {
            keep.entry(kind).or_default().insert(name);
        }
    }

    let Some(inlined_obj) = inlined.as_object_mut() else { return };
    let Some(Element::Object(components)) = inlined_obj.get_mut("components") else { return };
    let kind_keys: Vec<String> = components.content.iter().filter_map(|m| m.key_str().map(str::to_string)).collect();
    for kind in kind_keys {
        let kept_names = keep.get(&kind).cloned().unwrap_or_default();
        if let Some(Element::Object(bucket)) = components.get_mut(&kind) {
            bucket.content.retain(|member| member.key_str().is_some_and(|name| kept_names.contains(name)));
        }
    }
}

/// `Inline`: erase every `$ref` in `document`'s tree with a deep copy of
/// what it pointed to. `index` is accepted for parity with the other
/// transformers (a future caller may want to short-circuit on
/// `index.circular_errors()` before even attempting the rewrite) but isn't
/// itself consulted here — the cycle backstop is the `chain` set above.
#[tracing::instrument(level = "debug", skip_all)]
pub fn inline(document: &Document, cache: &DocumentCache, resolve_options: &ResolveOptions, options: &InlineOptions, _index: &Index) -> Result<Element, TransformError> {
    let root_element = (*document.root).clone();
    let mut chain = HashSet::new();
    let mut result = inline_element(&root_element, document, cache, resolve_options, document.location.as_str(), &mut chain)?;

    if options.remove_unused_components {
        remove_unused_components(&root_element, document, cache, resolve_options, &mut result);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentLocation;
    use oastree_ast::minim_model::StringElement;

    fn string(s: &str) -> Element {
        Element::String(StringElement::new(s))
    }

    fn obj_with(pairs: Vec<(&str, Element)>) -> ObjectElement {
        let mut obj = ObjectElement::new();
        for (k, v) in pairs {
            obj.set(k, v);
        }
        obj
    }

    #[test]
    fn replaces_a_simple_reference_with_its_target() {
        let mut reference = ObjectElement::new();
        reference.set("$ref", string("#/components/schemas/User"));

        let schema = obj_with(vec![("type", string("object"))]);
        let schemas = obj_with(vec![("User", Element::Object(schema))]);
        let components = obj_with(vec![("schemas", Element::Object(schemas))]);
        let root_tree = Element::Object(obj_with(vec![("components", Element::Object(components)), ("target", Element::Object(reference))]));

        let root = Document::new(DocumentLocation::Root, root_tree);
        let cache = DocumentCache::new();
        let resolve_options = ResolveOptions::default();
        let inline_options = InlineOptions::default();
        let index = Index::default();

        let result = inline(&root, &cache, &resolve_options, &inline_options, &index).unwrap();
        let target = result.as_object().unwrap().get("target").unwrap();
        assert!(!target.is_ref());
        assert_eq!(target.as_object().unwrap().get("type").unwrap().as_string().unwrap().content, "object");
    }

    #[test]
    fn direct_self_reference_is_a_non_terminating_cycle_error() {
        let mut reference = ObjectElement::new();
        reference.set("$ref", string("#/components/schemas/Node"));
        let schemas = obj_with(vec![("Node", Element::Object(reference))]);
        let components = obj_with(vec![("schemas", Element::Object(schemas))]);
        let root_tree = Element::Object(obj_with(vec![("components", Element::Object(components))]));

        let root = Document::new(DocumentLocation::Root, root_tree);
        let cache = DocumentCache::new();
        let resolve_options = ResolveOptions::default();
        let inline_options = InlineOptions::default();
        let index = Index::default();

        let err = inline(&root, &cache, &resolve_options, &inline_options, &index).unwrap_err();
        assert!(matches!(err, TransformError::NonTerminatingCycle(_)));
    }
}
