//! Join (§4.6): merges several already-parsed documents into one, renaming
//! colliding component names via the configured `ConflictResolution` and
//! rewriting each document's own internal references to match, before
//! splicing its `paths` and `components` into the merged result.
//!
//! Join only ever sees references that are internal to the document being
//! merged (an external reference would have been resolved by an earlier
//! `Bundle`/`Inline` pass in any realistic pipeline), so unlike `bundle` it
//! never calls the resolver — it's a pure rename-and-splice pass. Path
//! collisions across documents are last-write-wins, a deliberate
//! simplification consistent with this default implementation not
//! claiming full multi-dialect validation (§1).

use std::collections::{HashMap, HashSet};

use oastree_ast::minim_model::{ArrayElement, Element, ObjectElement, StringElement};

use super::{component_name_from_reference, ref_string, resolve_conflict};
use crate::config::JoinOptions;
use crate::document::Document;
use crate::error::TransformError;

fn local_ref(kind: &str, name: &str) -> Element {
    let mut obj = ObjectElement::new();
    obj.set_element_type("reference");
    obj.set("$ref", Element::String(StringElement::new(format!("#/components/{kind}/{name}"))));
    Element::Object(obj)
}

fn apply_renames(element: &Element, renames: &HashMap<(String, String), String>) -> Element {
    if let Element::Array(arr) = element {
        let mut copy = ArrayElement::new_empty();
        for item in &arr.content {
            copy.push(apply_renames(item, renames));
        }
        return Element::Array(copy);
    }
    let Some(obj) = element.as_object() else { return element.clone() };

    if let Some(reference) = ref_string(obj) {
        if let Some((kind, name)) = component_name_from_reference(&reference) {
            if let Some(new_name) = renames.get(&(kind.clone(), name)) {
                return local_ref(&kind, new_name);
            }
        }
        return element.clone();
    }

    let mut copy = ObjectElement::new();
    copy.set_element_type(&obj.element);
    for member in &obj.content {
        let Some(key) = member.key_str() else { continue };
        copy.set(key, apply_renames(&member.value, renames));
    }
    Element::Object(copy)
}

fn bucket_names(components: &ObjectElement, bucket: &str) -> HashSet<String> {
    match components.get(bucket).and_then(Element::as_object) {
        Some(obj) => obj.content.iter().filter_map(|m| m.key_str().map(str::to_string)).collect(),
        None => HashSet::new(),
    }
}

/// `Join`: merges `documents` in order, first-seen wins on name but every
/// later collision is renamed via `options.conflict_resolution`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn join(documents: &[&Document], options: &JoinOptions) -> Result<Element, TransformError> {
    if options.cancellation.is_cancelled() {
        return Err(TransformError::Cancelled);
    }

    let mut merged_components = ObjectElement::new();
    let mut merged_paths = ObjectElement::new();
    let mut base_fields: Option<ObjectElement> = None;
    let mut counters: HashMap<String, HashMap<String, u32>> = HashMap::new();

    for document in documents {
        let root = (*document.root).clone();
        let Some(root_obj) = root.as_object() else { continue };

        if base_fields.is_none() {
            let mut base = ObjectElement::new();
            base.set_element_type(&root_obj.element);
            for member in &root_obj.content {
                let Some(key) = member.key_str() else { continue };
                if key == "paths" || key == "components" {
                    continue;
                }
                base.set(key, member.value.as_ref().clone());
            }
            base_fields = Some(base);
        }

        let mut renames: HashMap<(String, String), String> = HashMap::new();
        if let Some(components) = root_obj.get("components").and_then(Element::as_object) {
            for bucket_member in &components.content {
                let Some(bucket) = bucket_member.key_str() else { continue };
                let Some(bucket_obj) = bucket_member.value.as_object() else { continue };

                let existing = bucket_names(&merged_components, bucket);
                let bucket_counters = counters.entry(bucket.to_string()).or_default();
                for name in &existing {
                    bucket_counters.entry(name.clone()).or_insert(1);
                }
                for item_member in &bucket_obj.content {
                    let Some(name) = item_member.key_str() else { continue };
                    let assigned = resolve_conflict(&options.conflict_resolution, name, document.location.as_str(), bucket_counters);
                    if assigned != name {
                        renames.insert((bucket.to_string(), name.to_string()), assigned);
                    }
                }
            }

            for bucket_member in &components.content {
                let Some(bucket) = bucket_member.key_str() else { continue };
                let Some(bucket_obj) = bucket_member.value.as_object() else { continue };
                let mut dest_bucket = merged_components.get(bucket).and_then(Element::as_object).cloned().unwrap_or_else(ObjectElement::new);
                for item_member in &bucket_obj.content {
                    let Some(name) = item_member.key_str() else { continue };
                    let final_name = renames.get(&(bucket.to_string(), name.to_string())).cloned().unwrap_or_else(|| name.to_string());
                    dest_bucket.set(&final_name, apply_renames(&item_member.value, &renames));
                }
                merged_components.set(bucket, Element::Object(dest_bucket));
            }
        }

        if let Some(paths) = root_obj.get("paths").and_then(Element::as_object) {
            for path_member in &paths.content {
                let Some(path_key) = path_member.key_str() else { continue };
                merged_paths.set(path_key, apply_renames(&path_member.value, &renames));
            }
        }
    }

    let mut result = base_fields.unwrap_or_else(ObjectElement::new);
    result.set("paths", Element::Object(merged_paths));
    result.set("components", Element::Object(merged_components));
    Ok(Element::Object(result))
}
