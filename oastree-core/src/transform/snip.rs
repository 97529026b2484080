//! Snip (§4.6): remove operations by `(path, method)` or `operationId`,
//! then run component cleanup so snipped-away operations don't leave their
//! now-unreferenced schemas behind.

use oastree_ast::minim_model::Element;

use super::clean::clean;
use crate::config::{CleanOptions, ResolveOptions, SnipOptions};
use crate::document::{Document, DocumentCache};
use crate::error::TransformError;

/// What to snip: an explicit `(path, method)` pair, or every operation
/// carrying a matching `operationId` (a spec may repeat an operationId
/// across path items by mistake; snip removes all matches rather than
/// erroring, since "remove this operation" is the caller's intent either
/// way).
pub enum SnipTarget<'a> {
    PathMethod { path: &'a str, method: &'a str },
    OperationId(&'a str),
}

const HTTP_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch", "trace"];

fn matches_operation_id(op: &Element, operation_id: &str) -> bool {
    op.as_object().and_then(|o| o.get("operationId")).and_then(Element::as_string).is_some_and(|s| s.content == operation_id)
}

/// `Snip`: removes the matched operation(s), then runs [`clean`] over the
/// result. Returns [`TransformError::SnipTargetNotFound`] if nothing
/// matched — silently no-op-ing a typo'd path/operationId would be worse
/// than erroring.
#[tracing::instrument(level = "debug", skip_all)]
pub fn snip(document: &Document, cache: &DocumentCache, resolve_options: &ResolveOptions, options: &SnipOptions, target: SnipTarget<'_>) -> Result<Element, TransformError> {
    if options.cancellation.is_cancelled() {
        return Err(TransformError::Cancelled);
    }
    let mut result = (*document.root).clone();
    let mut removed_any = false;

    if let Some(Element::Object(paths)) = result.as_object_mut().and_then(|o| o.get_mut("paths")) {
        match target {
            SnipTarget::PathMethod { path, method } => {
                if let Some(Element::Object(path_item)) = paths.get_mut(path) {
                    if path_item.remove(method).is_some() {
                        removed_any = true;
                    }
                    if HTTP_METHODS.iter().all(|m| path_item.get(m).is_none()) {
                        paths.remove(path);
                    }
                }
            }
            SnipTarget::OperationId(operation_id) => {
                let path_keys: Vec<String> = paths.content.iter().filter_map(|m| m.key_str().map(str::to_string)).collect();
                for path_key in path_keys {
                    if let Some(Element::Object(path_item)) = paths.get_mut(&path_key) {
                        for method in HTTP_METHODS {
                            let matched = path_item.get(method).is_some_and(|op| matches_operation_id(op, operation_id));
                            if matched {
                                path_item.remove(method);
                                removed_any = true;
                            }
                        }
                        if HTTP_METHODS.iter().all(|m| path_item.get(m).is_none()) {
                            paths.remove(&path_key);
                        }
                    }
                }
            }
        }
    }

    if !removed_any {
        let description = match target {
            SnipTarget::PathMethod { path, method } => format!("{method} {path}"),
            SnipTarget::OperationId(id) => id.to_string(),
        };
        return Err(TransformError::SnipTargetNotFound(description));
    }

    let intermediate = Document::new(document.location.clone(), result);
    clean(&intermediate, cache, resolve_options, &CleanOptions { cancellation: options.cancellation.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentLocation;
    use oastree_ast::minim_model::{ObjectElement, StringElement};

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
    fn removes_the_matched_method_and_empty_path_item() {
        let get_op = Element::Object(obj_with(vec![("operationId", string("listPets"))]));
        let path_item = Element::Object(obj_with(vec![("get", get_op)]));
        let paths = Element::Object(obj_with(vec![("/pets", path_item)]));
        let root_tree = Element::Object(obj_with(vec![("paths", paths)]));

        let root = Document::new(DocumentLocation::Root, root_tree);
        let cache = DocumentCache::new();
        let resolve_options = ResolveOptions::default();
        let options = SnipOptions::default();

        let result = snip(&root, &cache, &resolve_options, &options, SnipTarget::PathMethod { path: "/pets", method: "get" }).unwrap();
        let paths = result.as_object().unwrap().get("paths").unwrap().as_object().unwrap();
        assert!(paths.get("/pets").is_none());
    }

    #[test]
    fn missing_target_is_an_error() {
        let root_tree = Element::Object(obj_with(vec![("paths", Element::Object(ObjectElement::new()))]));
        let root = Document::new(DocumentLocation::Root, root_tree);
        let cache = DocumentCache::new();
        let resolve_options = ResolveOptions::default();
        let options = SnipOptions::default();

        let err = snip(&root, &cache, &resolve_options, &options, SnipTarget::OperationId("missing")).unwrap_err();
        assert!(matches!(err, TransformError::SnipTargetNotFound(_)));
    }
}
