//! Localize (§4.6): like `bundle`, but instead of copying every external
//! reference's target into the main document's own `components`, each
//! distinct external document gets its own output file, and the reference
//! is rewritten to point at it (`other.yaml#/components/<kind>/<name>`).
//! Purely internal references (already local to whichever document they're
//! declared in) are left untouched — only references that cross a
//! document boundary get relocated.
//!
//! Writing the resulting files to disk is the CLI's job (an external
//! collaborator, §1); this returns the rewritten entry document plus a map
//! of relative path to tree, and the caller marshals each one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use oastree_ast::minim_model::{ArrayElement, Element, ObjectElement, StringElement};

use super::{components_bucket, ref_string, resolve_conflict};
use crate::config::{LocalizeOptions, ResolveOptions};
use crate::document::{Document, DocumentCache};
use crate::error::TransformError;
use crate::resolver::ReferenceResolver;
use crate::walker::classify;

pub struct LocalizedOutput {
    pub entry: Element,
    pub files: HashMap<PathBuf, Element>,
}

struct LocalizeState<'a> {
    root: &'a Document,
    cache: &'a DocumentCache,
    resolve_options: &'a ResolveOptions,
    output_directory: Option<PathBuf>,
    conflict_resolution: crate::config::ConflictResolution,
    /// absolute document path -> the components tree accumulated for it.
    files: HashMap<String, ObjectElement>,
    /// absolute document path -> the relative file name chosen for it.
    file_names: HashMap<String, String>,
    file_name_counters: HashMap<String, u32>,
    /// per-bucket rename counters for imported components, keyed
    /// separately from `file_name_counters` (which dedups file names).
    bucket_counters: HashMap<String, HashMap<String, u32>>,
    /// absolute reference -> (file name, `components/<bucket>/<name>`).
    imported: HashMap<String, (String, String)>,
}

fn is_external(reference: &str) -> bool {
    reference.split_once('#').map(|(doc, _)| !doc.is_empty()).unwrap_or(!reference.starts_with('#'))
}

impl<'a> LocalizeState<'a> {
    fn file_name_for(&mut self, absolute_document_path: &str) -> String {
        if let Some(existing) = self.file_names.get(absolute_document_path) {
            return existing.clone();
        }
        let base = Path::new(absolute_document_path).file_stem().and_then(|s| s.to_str()).unwrap_or("external").to_string();
        let name = resolve_conflict(&self.conflict_resolution, &base, absolute_document_path, &mut self.file_name_counters);
        let file_name = format!("{name}.yaml");
        self.file_names.insert(absolute_document_path.to_string(), file_name.clone());
        file_name
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
            if !is_external(&reference) {
                return Ok(element.clone());
            }
            let resolver = ReferenceResolver::new(self.root, self.cache, self.resolve_options);
            let outcome = resolver.resolve(&reference, document).map_err(TransformError::from)?;

            if let Some((file_name, pointer)) = self.imported.get(&outcome.info.absolute_reference).cloned() {
                return Ok(cross_file_ref(&file_name, &pointer));
            }

            let target_document = outcome.info.absolute_document_path.clone();
            let file_name = self.file_name_for(&target_document);
            let kind = outcome.node.as_object().map(classify).unwrap_or(crate::dispatcher::EntityKind::Other);
            let bucket = components_bucket(kind);
            let source_name = reference.rsplit('/').next().unwrap_or("Imported").to_string();

            let existing = self.files.get(&target_document).map(|o| super_bucket_names(o, bucket)).unwrap_or_default();
            let counters = self.imported_counters_for(bucket, &existing);
            let local_name = resolve_conflict(&self.conflict_resolution, &source_name, &target_document, counters);
            let pointer = format!("components/{bucket}/{local_name}");
            self.imported.insert(outcome.info.absolute_reference.clone(), (file_name.clone(), pointer.clone()));

            let rewritten_target = self.rewrite(&outcome.node, &target_document)?;
            let mut file_tree = self.files.remove(&target_document).unwrap_or_else(ObjectElement::new);
            let mut bucket_obj = file_tree.get(bucket).and_then(Element::as_object).cloned().unwrap_or_else(ObjectElement::new);
            bucket_obj.set(&local_name, rewritten_target);
            file_tree.set(bucket, Element::Object(bucket_obj));
            self.files.insert(target_document, file_tree);

            return Ok(cross_file_ref(&file_name, &pointer));
        }

        let mut copy = ObjectElement::new();
        copy.set_element_type(&obj.element);
        for member in &obj.content {
            let Some(key) = member.key_str() else { continue };
            copy.set(key, self.rewrite(&member.value, document)?);
        }
        Ok(Element::Object(copy))
    }

    /// Per-bucket rename counters, reused across calls so repeated
    /// imports into the same file keep counting up rather than resetting.
    fn imported_counters_for(&mut self, bucket: &str, existing: &std::collections::HashSet<String>) -> &mut HashMap<String, u32> {
        let counters = self.file_name_counters_for_bucket(bucket);
        for name in existing {
            counters.entry(name.clone()).or_insert(1);
        }
        counters
    }

    fn file_name_counters_for_bucket(&mut self, bucket: &str) -> &mut HashMap<String, u32> {
        self.bucket_counters.entry(bucket.to_string()).or_default()
    }
}

fn super_bucket_names(obj: &ObjectElement, bucket: &str) -> std::collections::HashSet<String> {
    match obj.get(bucket).and_then(Element::as_object) {
        Some(b) => b.content.iter().filter_map(|m| m.key_str().map(str::to_string)).collect(),
        None => Default::default(),
    }
}

fn cross_file_ref(file_name: &str, pointer: &str) -> Element {
    let mut obj = ObjectElement::new();
    obj.set_element_type("reference");
    obj.set("$ref", Element::String(StringElement::new(format!("{file_name}#/{pointer}"))));
    Element::Object(obj)
}

/// `Localize`: splits every external reference's target out into its own
/// file, keyed by the absolute document it came from, and rewrites
/// `document`'s tree to reference those files.
#[tracing::instrument(level = "debug", skip_all)]
pub fn localize(document: &Document, cache: &DocumentCache, resolve_options: &ResolveOptions, options: &LocalizeOptions) -> Result<LocalizedOutput, TransformError> {
    let root_element = (*document.root).clone();
    let mut state = LocalizeState {
        root: document,
        cache,
        resolve_options,
        output_directory: options.output_directory.clone(),
        conflict_resolution: options.conflict_resolution.clone(),
        files: HashMap::new(),
        file_names: HashMap::new(),
        file_name_counters: HashMap::new(),
        bucket_counters: HashMap::new(),
        imported: HashMap::new(),
    };
    let entry = state.rewrite(&root_element, document.location.as_str())?;

    let mut files = HashMap::new();
    for (absolute_path, components) in state.files {
        let file_name = state.file_names.get(&absolute_path).cloned().unwrap_or_else(|| "external.yaml".to_string());
        let mut root = ObjectElement::new();
        root.set("components", Element::Object(components));
        let relative = match &state.output_directory {
            Some(dir) => dir.join(&file_name),
            None => PathBuf::from(&file_name),
        };
        files.insert(relative, Element::Object(root));
    }

    Ok(LocalizedOutput { entry, files })
}
