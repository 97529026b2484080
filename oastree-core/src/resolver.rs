//! Reference Resolver (§4.1). Grounded on the teacher's
//! `apidom-ns-openapi-3-0/src/reference_resolver.rs` (URL-vs-local-path
//! dispatch, the document/fragment split, the JSON-Pointer walker, the
//! cache-or-fetch shape) generalized from its ad hoc `Element`-returning
//! form to the resolution-session-scoped algorithm in §4.1: split,
//! fetch-or-cache the external document, walk the pointer, populate
//! `ResolutionInfo`, recursively chase chained references with cycle
//! detection, validate under the parent document's OpenAPI version.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use oastree_ast::minim_model::Element;

use crate::config::ResolveOptions;
use crate::document::{Document, DocumentCache, DocumentLocation};
use crate::error::{ResolveError, ValidationIssue};
use crate::referenceable::Referenceable;

/// `{ absolute reference, absolute document path, target document handle,
/// resolved target }` (§3). The "resolved target" itself isn't stored here
/// — it lives on the `Referenceable::Resolved::target` — this record is
/// purely the bookkeeping `Referenceable` caches alongside it.
///
/// `resolved_at` mirrors the teacher's `reference_resolver.rs`, which
/// stamps every resolution with `chrono::Utc::now()`; it isn't consulted
/// by anything in this crate, it's bookkeeping a caller can surface (e.g.
/// "this bundle was last resolved at ...").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionInfo {
    pub absolute_reference: String,
    pub absolute_document_path: String,
    pub target_document: DocumentLocation,
    pub resolved_at: chrono::DateTime<chrono::Utc>,
}

pub struct ResolveOutcome {
    pub warnings: Vec<ValidationIssue>,
    pub node: Element,
    pub info: ResolutionInfo,
}

/// Splits a reference string into its document part and JSON-Pointer
/// fragment (§3 "Reference string", §4.1 step 1). An empty document part
/// means "the caller's own target document".
fn split_reference(reference: &str) -> Result<(&str, &str), ResolveError> {
    match reference.split_once('#') {
        Some((doc, pointer)) => Ok((doc, pointer)),
        None => Ok((reference, "")),
    }
}

fn is_url(part: &str) -> bool {
    part.starts_with("http://") || part.starts_with("https://") || part.starts_with("file://")
}

/// Resolves `document_part` against `base`, the caller's target-location
/// base document path (§4.1 step 2a). Absolute URLs and absolute local
/// paths pass through unchanged; anything else is joined relative to
/// `base`'s parent.
fn resolve_document_path(document_part: &str, base: &str) -> Result<String, ResolveError> {
    if document_part.is_empty() {
        return Ok(base.to_string());
    }
    if is_url(document_part) {
        // Already absolute; no joining against `base` needed.
        return Ok(document_part.to_string());
    }
    // Try as an absolute-URL-relative join first (covers http(s)/file bases).
    if let Ok(base_url) = url::Url::parse(base) {
        if let Ok(joined) = base_url.join(document_part) {
            return Ok(joined.to_string());
        }
    }
    // Fall back to filesystem-path joining for plain local paths.
    let base_path = Path::new(base);
    let joined = if Path::new(document_part).is_absolute() {
        PathBuf::from(document_part)
    } else {
        base_path
            .parent()
            .map(|parent| parent.join(document_part))
            .unwrap_or_else(|| PathBuf::from(document_part))
    };
    Ok(joined.to_string_lossy().to_string())
}

fn unescape_pointer_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Walks a JSON Pointer (RFC 6901) against `root`. Empty pointer resolves
/// to the root itself (§4.1 step 3 "tie-break").
pub fn walk_json_pointer<'a>(root: &'a Element, pointer: &str) -> Result<&'a Element, ResolveError> {
    let pointer = pointer.strip_prefix('#').unwrap_or(pointer);
    if pointer.is_empty() {
        return Ok(root);
    }
    let pointer = pointer.strip_prefix('/').ok_or_else(|| ResolveError::InvalidReferenceSyntax(pointer.to_string()))?;
    let mut current = root;
    for raw_token in pointer.split('/') {
        let token = unescape_pointer_token(raw_token);
        current = match current {
            Element::Object(obj) => obj.get(&token).ok_or_else(|| ResolveError::PointerNotFound {
                document: String::new(),
                pointer: pointer.to_string(),
            })?,
            Element::Array(arr) => {
                let index: usize = token.parse().map_err(|_| ResolveError::PointerNotFound {
                    document: String::new(),
                    pointer: pointer.to_string(),
                })?;
                arr.content.get(index).ok_or_else(|| ResolveError::PointerNotFound {
                    document: String::new(),
                    pointer: pointer.to_string(),
                })?
            }
            _ => {
                return Err(ResolveError::PointerNotFound { document: String::new(), pointer: pointer.to_string() });
            }
        };
    }
    Ok(current)
}

fn parse_document(text: &str, path: &str) -> Result<Element, ResolveError> {
    let trimmed = text.trim_start();
    let looks_json = trimmed.starts_with('{') || trimmed.starts_with('[');
    let value: serde_json::Value = if looks_json {
        serde_json::from_str(text).map_err(|e| ResolveError::ExternalDocumentMalformed {
            document: path.to_string(),
            reason: e.to_string(),
        })?
    } else {
        serde_yaml::from_str(text).map_err(|e| ResolveError::ExternalDocumentMalformed {
            document: path.to_string(),
            reason: e.to_string(),
        })?
    };
    Ok(Element::from_json_value(value))
}

/// Per-call recursion stack: absolute reference strings currently being
/// chased within one top-level `resolve` call, used to detect a reference
/// that resolves through a chain back to itself (§4.1 step 5). Distinct
/// from the classifier's reference stack (§4.4), which tracks schema
/// cycles across the whole index build rather than one resolve call.
pub struct ReferenceResolver<'a> {
    pub root: &'a Document,
    pub cache: &'a DocumentCache,
    pub options: &'a ResolveOptions,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(root: &'a Document, cache: &'a DocumentCache, options: &'a ResolveOptions) -> Self {
        Self { root, cache, options }
    }

    /// `resolve(ref, options) -> (validation_warnings, result)` (§4.1).
    /// `target_location` is the absolute path of the document the
    /// reference was written in (the caller's target document).
    #[tracing::instrument(level = "debug", skip(self), fields(reference = %reference, target_location = %target_location))]
    pub fn resolve(&self, reference: &str, target_location: &str) -> Result<ResolveOutcome, ResolveError> {
        self.resolve_with_stack(reference, target_location, &mut Vec::new())
    }

    /// Resolves `reference` and wraps the outcome as a
    /// [`Referenceable::Resolved`], recording `parent`/`top_level_parent`
    /// as the enclosing reference chain the caller is already tracking —
    /// the resolver itself only ever sees the one reference it's chasing,
    /// not the wider walk that reached it.
    pub fn resolve_referenceable(
        &self,
        reference: &str,
        target_location: &str,
        parent: Option<String>,
        top_level_parent: Option<String>,
    ) -> Result<(Referenceable<Element>, Vec<ValidationIssue>), ResolveError> {
        let outcome = self.resolve(reference, target_location)?;
        let wrapped = Referenceable::unresolved(reference.to_string()).resolve(outcome.info, Rc::new(outcome.node), parent, top_level_parent);
        Ok((wrapped, outcome.warnings))
    }

    fn resolve_with_stack(
        &self,
        reference: &str,
        target_location: &str,
        stack: &mut Vec<String>,
    ) -> Result<ResolveOutcome, ResolveError> {
        if self.options.cancellation.is_cancelled() {
            return Err(ResolveError::Cancelled);
        }

        let (document_part, fragment) = split_reference(reference)?;
        let absolute_document_path = resolve_document_path(document_part, target_location)?;
        let absolute_reference = format!("{}#{}", absolute_document_path, fragment);

        if stack.iter().any(|seen| seen == &absolute_reference) {
            let mut chain = stack.clone();
            chain.push(absolute_reference.clone());
            return Err(ResolveError::CircularReferenceDetected(chain.join("->")));
        }

        if !document_part.is_empty() && self.options.disable_external_refs {
            return Err(ResolveError::ExternalReferencesDisabled(reference.to_string()));
        }

        let target_document = self.document_for(document_part, &absolute_document_path)?;

        let pointer_root: &Element = &target_document.root;
        let resolved_node = walk_json_pointer(pointer_root, fragment).map_err(|_| ResolveError::PointerNotFound {
            document: absolute_document_path.clone(),
            pointer: fragment.to_string(),
        })?;

        let info = ResolutionInfo {
            absolute_reference: absolute_reference.clone(),
            absolute_document_path: absolute_document_path.clone(),
            target_document: target_document.location.clone(),
            resolved_at: chrono::Utc::now(),
        };

        // Step 5: if the reached node is itself a reference, chase it.
        if let Some(inner_ref) = resolved_node.as_object().and_then(|o| o.get("$ref")).and_then(Element::as_string) {
            stack.push(absolute_reference.clone());
            let outcome = self.resolve_with_stack(&inner_ref.content, &absolute_document_path, stack);
            stack.pop();
            return outcome;
        }

        let warnings = Vec::new(); // version-validation pass is supplied by oastree-oas3-0/oastree-oas3-1 builders at a higher layer.

        Ok(ResolveOutcome { warnings, node: resolved_node.clone(), info })
    }

    fn document_for(&self, document_part: &str, absolute_path: &str) -> Result<Document, ResolveError> {
        if document_part.is_empty() {
            return Ok(self.root.clone());
        }
        if let Some(cached) = self.cache.get(absolute_path) {
            tracing::debug!(absolute_path, "document cache hit");
            return Ok(cached);
        }
        tracing::debug!(absolute_path, "document cache miss, fetching");

        let text = self.fetch(absolute_path)?;
        let tree = parse_document(&text, absolute_path)?;
        let document = Document::new(DocumentLocation::Url(absolute_path.to_string()), tree);
        Ok(self.cache.install(document))
    }

    fn fetch(&self, absolute_path: &str) -> Result<String, ResolveError> {
        if is_url(absolute_path) && !absolute_path.starts_with("file://") {
            let response = self
                .options
                .http
                .execute(crate::http::HttpRequest::get(absolute_path))
                .map_err(|e| ResolveError::ExternalDocumentUnreadable(e.to_string()))?;
            return Ok(response.body);
        }
        let path = absolute_path.strip_prefix("file://").unwrap_or(absolute_path);
        let file = self
            .options
            .vfs
            .open(Path::new(path))
            .map_err(|e| ResolveError::ExternalDocumentUnreadable(e.to_string()))?;
        file.read_to_string().map_err(|e| ResolveError::ExternalDocumentUnreadable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oastree_ast::minim_model::{Element, ObjectElement, StringElement};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn obj_with(pairs: &[(&str, Element)]) -> Element {
        let mut obj = ObjectElement::new();
        for (k, v) in pairs {
            obj.set(k, v.clone());
        }
        Element::Object(obj)
    }

    #[test]
    fn resolves_internal_pointer_in_root_document() {
        let schemas = obj_with(&[("User", obj_with(&[("type", Element::String(StringElement::new("object")))]))]);
        let components = obj_with(&[("schemas", schemas)]);
        let root_tree = obj_with(&[("components", components)]);
        let root = Document::new(DocumentLocation::Root, root_tree);
        let cache = DocumentCache::new();
        let options = ResolveOptions::default();
        let resolver = ReferenceResolver::new(&root, &cache, &options);

        let outcome = resolver.resolve("#/components/schemas/User", "<root>").unwrap();
        assert_eq!(outcome.node.as_object().unwrap().get("type").unwrap().as_string().unwrap().content, "object");
    }

    #[test]
    fn pointer_not_found_is_reported() {
        let root = Document::new(DocumentLocation::Root, obj_with(&[]));
        let cache = DocumentCache::new();
        let options = ResolveOptions::default();
        let resolver = ReferenceResolver::new(&root, &cache, &options);

        let err = resolver.resolve("#/components/schemas/Missing", "<root>").unwrap_err();
        assert!(matches!(err, ResolveError::PointerNotFound { .. }));
    }

    #[test]
    fn external_document_is_fetched_at_most_once() {
        let external_body = "components:\n  schemas:\n    User:\n      type: object\n".to_string();
        let vfs = Arc::new(crate::vfs::InMemoryFilesystem::new([(PathBuf::from("/external.yaml"), external_body)]));
        let root = Document::new(DocumentLocation::Root, obj_with(&[]));
        let cache = DocumentCache::new();
        let mut options = ResolveOptions::default();
        options.vfs = vfs.clone();
        let resolver = ReferenceResolver::new(&root, &cache, &options);

        for _ in 0..3 {
            let outcome = resolver.resolve("./external.yaml#/components/schemas/User", "/root.yaml").unwrap();
            assert_eq!(outcome.node.as_object().unwrap().get("type").unwrap().as_string().unwrap().content, "object");
        }
        assert_eq!(vfs.open_count(Path::new("/external.yaml")), 1);
    }

    #[test]
    fn external_refs_disabled_short_circuits() {
        let root = Document::new(DocumentLocation::Root, obj_with(&[]));
        let cache = DocumentCache::new();
        let mut options = ResolveOptions::default();
        options.disable_external_refs = true;
        let resolver = ReferenceResolver::new(&root, &cache, &options);

        let err = resolver.resolve("./external.yaml#/components/schemas/User", "/root.yaml").unwrap_err();
        assert!(matches!(err, ResolveError::ExternalReferencesDisabled(_)));
    }

    #[test]
    fn json_pointer_escape_sequences_decode() {
        let obj = obj_with(&[("a/b~c", Element::String(StringElement::new("value")))]);
        let root = Document::new(DocumentLocation::Root, obj);
        let cache = DocumentCache::new();
        let options = ResolveOptions::default();
        let resolver = ReferenceResolver::new(&root, &cache, &options);

        let outcome = resolver.resolve("#/a~1b~0c", "<root>").unwrap();
        assert_eq!(outcome.node.as_string().unwrap().content, "value");
    }

    #[test]
    fn direct_self_reference_is_circular() {
        let mut doc = ObjectElement::new();
        let mut ref_obj = ObjectElement::new();
        ref_obj.set("$ref", Element::String(StringElement::new("#/loop")));
        doc.set("loop", Element::Object(ref_obj));
        let root = Document::new(DocumentLocation::Root, Element::Object(doc));
        let cache = DocumentCache::new();
        let options = ResolveOptions::default();
        let resolver = ReferenceResolver::new(&root, &cache, &options);

        let err = resolver.resolve("#/loop", "<root>").unwrap_err();
        assert!(matches!(err, ResolveError::CircularReferenceDetected(_)));
    }
}
