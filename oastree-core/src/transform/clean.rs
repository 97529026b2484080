//! Clean (§4.6): after structural edits, remove components not reachable
//! from `paths`/`webhooks`.

use std::collections::HashSet;

use oastree_ast::minim_model::Element;

use super::{collect_reachable_references, component_name_from_reference};
use crate::config::{CleanOptions, ResolveOptions};
use crate::document::{Document, DocumentCache};
use crate::error::TransformError;

/// Deletes every `components/<kind>/<name>` entry not transitively
/// reachable from `paths` or `webhooks`, returning the rewritten tree.
/// `document`'s own tree is left untouched (the root document exclusively
/// owns its parsed nodes — §3 "Ownership rules" — a transformer produces a
/// new tree rather than mutating the one other `Rc` holders share).
#[tracing::instrument(level = "debug", skip_all)]
pub fn clean(document: &Document, cache: &DocumentCache, resolve_options: &ResolveOptions, options: &CleanOptions) -> Result<Element, TransformError> {
    if options.cancellation.is_cancelled() {
        return Err(TransformError::Cancelled);
    }
    let mut result = (*document.root).clone();
    let Some(root_obj) = result.as_object() else { return Ok(result) };

    let mut reachable = Vec::new();
    let mut visited = HashSet::new();
    for section in ["paths", "webhooks"] {
        if let Some(section_element) = root_obj.get(section) {
            collect_reachable_references(section_element, document, cache, resolve_options, document.location.as_str(), &mut visited, &mut reachable);
        }
    }
    let mut keep: std::collections::HashMap<String, HashSet<String>> = std::collections::HashMap::new();
    for reference in &reachable {
        if let Some((kind, name)) = component_name_from_reference(reference) {
            keep.entry(kind).or_default().insert(name);
        }
    }

    let Some(result_obj) = result.as_object_mut() else { return Ok(result) };
    let Some(Element::Object(components)) = result_obj.get_mut("components") else { return Ok(result) };
    let kind_keys: Vec<String> = components.content.iter().filter_map(|m| m.key_str().map(str::to_string)).collect();
    for kind in kind_keys {
        let kept_names = keep.get(&kind).cloned().unwrap_or_default();
        if let Some(Element::Object(bucket)) = components.get_mut(&kind) {
            bucket.content.retain(|member| member.key_str().is_some_and(|name| kept_names.contains(name)));
        }
    }
    Ok(result)
}
