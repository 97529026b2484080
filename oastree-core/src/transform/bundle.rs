//! Bundle (§4.6): rewrites every external reference to point at a copy of
//! its target placed under the main document's own `components`, so the
//! result is a single self-contained document. Internal references are
//! left untouched. Structurally-identical imports (same absolute
//! reference) are copied in only once, and name collisions against
//! existing local components go through the configured
//! [`ConflictResolution`].

use std::collections::HashMap;

use oastree_ast::minim_model::{ArrayElement, Element, ObjectElement};

use super::{components_bucket, ref_string, resolve_conflict};
use crate::config::{BundleOptions, ResolveOptions};
use crate::document::{Document, DocumentCache};
use crate::error::TransformError;
use crate::resolver::ReferenceResolver;
use crate::walker::classify;

/// Per-bucket name counters (seeded from the destination document's
/// existing components so a freshly-bundled `User` doesn't collide with
/// one already declared locally) plus a cache from absolute reference to
/// the local name already assigned to it (so a component referenced twice
/// is imported once, per §4.6 "Hash-based identity keeps structurally
/// identical schemas from being duplicated" — approximated here by
/// identity of the absolute reference rather than a content hash, since
/// two distinct external refs are far more likely to diverge than two
/// non-identical refs are to hash-collide).
struct BundleState<'a> {
    root: &'a Document,
    cache: &'a DocumentCache,
    resolve_options: &'a ResolveOptions,
    components: ObjectElement,
    counters: HashMap<String, HashMap<String, u32>>,
    imported: HashMap<String, String>,
    conflict_resolution: crate::config::ConflictResolution,
}

impl<'a> BundleState<'a> {
    fn bucket_names(&self, bucket: &str) -> std::collections::HashSet<String> {
        match self.components.get(bucket).and_then(Element::as_object) {
            Some(obj) => obj.content.iter().filter_map(|m| m.key_str().map(str::to_string)).collect(),
            None => Default::default(),
        }
    }

    fn rewrite(&mut self, element: &Element, document: &str) -> Result<Element, TransformError> {
        if self.resolve_options.cancellation.is_cancelled() {
            return Err(TransformError::Cancelled);
        }
        if let Element::Array(arr) = element {
            let mut copy = ArrayElement::new_empty();
            for item in &arr.content {
                copy.push(self.rewrite(item, document)?);
            }
            return Ok(Element::Array(copy));
        }
        let Some(obj) = element.as_object() else { return Ok(element.clone()) };

        if let Some(reference) = ref_string(obj) {
            let is_external = reference.split_once('#').map(|(doc, _)| !doc.is_empty()).unwrap_or(!reference.starts_with('#'));
            if !is_external {
                return Ok(element.clone());
            }
            let resolver = ReferenceResolver::new(self.root, self.cache, self.resolve_options);
            let outcome = resolver.resolve(&reference, document).map_err(TransformError::from)?;

            if let Some(local_name) = self.imported.get(&outcome.info.absolute_reference) {
                return Ok(local_ref_element(local_name));
            }

            let kind = outcome.node.as_object().map(classify).unwrap_or(crate::dispatcher::EntityKind::Other);
            let bucket = components_bucket(kind);
            let source_name = reference.rsplit('/').next().unwrap_or("Imported").to_string();
            let existing = self.bucket_names(bucket);
            let counters = self.counters.entry(bucket.to_string()).or_default();
            for name in &existing {
                counters.entry(name.clone()).or_insert(1);
            }
            let local_name = resolve_conflict(&self.conflict_resolution, &source_name, &outcome.info.absolute_document_path, counters);
            self.imported.insert(outcome.info.absolute_reference.clone(), format!("{bucket}/{local_name}"));

            let target_document = outcome.info.absolute_document_path.clone();
            let rewritten_target = self.rewrite(&outcome.node, &target_document)?;
            let bucket_entry = self.components.get(bucket).cloned().unwrap_or_else(|| Element::Object(ObjectElement::new()));
            let mut bucket_obj = bucket_entry.as_object().cloned().unwrap_or_else(ObjectElement::new);
            bucket_obj.set(&local_name, rewritten_target);
            self.components.set(bucket, Element::Object(bucket_obj));

            return Ok(local_ref_element(&format!("{bucket}/{local_name}")));
        }

        let mut copy = ObjectElement::new();
        copy.set_element_type(&obj.element);
        for member in &obj.content {
            let Some(key) = member.key_str() else { continue };
            copy.set(key, self.rewrite(&member.value, document)?);
        }
        Ok(Element::Object(copy))
    }
}

fn local_ref_element(pointer_suffix: &str) -> Element {
    let mut obj = ObjectElement::new();
    obj.set_element_type("reference");
    obj.set("$ref", Element::String(oastree_ast::minim_model::StringElement::new(format!("#/components/{pointer_suffix}"))));
    Element::Object(obj)
}

/// `Bundle`: produces a self-contained tree with every external reference
/// imported into local `components`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bundle(document: &Document, cache: &DocumentCache, resolve_options: &ResolveOptions, options: &BundleOptions) -> Result<Element, TransformError> {
    let root_element = (*document.root).clone();
    let components = root_element
        .as_object()
        .and_then(|o| o.get("components"))
        .and_then(Element::as_object)
        .cloned()
        .unwrap_or_else(ObjectElement::new);

    let mut state = BundleState {
        root: document,
        cache,
        resolve_options,
        components,
        counters: HashMap::new(),
        imported: HashMap::new(),
        conflict_resolution: options.conflict_resolution.clone(),
    };

    let mut result = state.rewrite(&root_element, document.location.as_str())?;
    if let Some(obj) = result.as_object_mut() {
        obj.set("components", Element::Object(state.components));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentLocation;
    use crate::vfs::InMemoryFilesystem;
    use oastree_ast::minim_model::StringElement;

    fn string(s: &str) -> Element {
        Element::String(StringElement::new(s))
    }

    #[test]
    fn internal_references_are_left_alone() {
        let mut internal_ref = ObjectElement::new();
        internal_ref.set("$ref", string("#/components/schemas/User"));
        let schemas = {
            let mut obj = ObjectElement::new();
            obj.set("User", Element::Object({
                let mut u = ObjectElement::new();
                u.set("type", string("object"));
                u
            }));
            obj
        };
        let components = {
            let mut obj = ObjectElement::new();
            obj.set("schemas", Element::Object(schemas));
            obj
        };
        let root_tree = {
            let mut obj = ObjectElement::new();
            obj.set("components", Element::Object(components));
            obj.set("target", Element::Object(internal_ref));
            Element::Object(obj)
        };

        let root = Document::new(DocumentLocation::Root, root_tree);
        let cache = DocumentCache::new();
        let resolve_options = ResolveOptions::default();
        let options = BundleOptions::default();

        let result = bundle(&root, &cache, &resolve_options, &options).unwrap();
        let target = result.as_object().unwrap().get("target").unwrap();
        assert_eq!(ref_string(target.as_object().unwrap()).unwrap(), "#/components/schemas/User");
    }

    #[test]
    fn external_reference_is_imported_into_local_components() {
        let vfs = std::sync::Arc::new(InMemoryFilesystem::new([(
            std::path::PathBuf::from("/shared.yaml"),
            r#"{"components":{"schemas":{"Pet":{"type":"object"}}}}"#.to_string(),
        )]));

        let mut external_ref = ObjectElement::new();
        external_ref.set("$ref", string("/shared.yaml#/components/schemas/Pet"));
        let root_tree = {
            let mut obj = ObjectElement::new();
            obj.set("target", Element::Object(external_ref));
            Element::Object(obj)
        };

        let root = Document::new(DocumentLocation::Root, root_tree);
        let cache = DocumentCache::new();
        let mut resolve_options = ResolveOptions::default();
        resolve_options.vfs = vfs;
        let options = BundleOptions::default();

        let result = bundle(&root, &cache, &resolve_options, &options).unwrap();
        let target = result.as_object().unwrap().get("target").unwrap();
        let reference = ref_string(target.as_object().unwrap()).unwrap();
        assert!(reference.starts_with("#/components/schemas/"));
        let components = result.as_object().unwrap().get("components").unwrap().as_object().unwrap();
        assert!(components.get("schemas").unwrap().as_object().unwrap().get("Pet").is_some());
    }
}
