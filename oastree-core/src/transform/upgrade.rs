//! Upgrade (§4.6): rewrites OpenAPI 3.0.x schema-level fields to their
//! 3.2.0 equivalents so an older document reads naturally under the newer
//! typed builders:
//!
//! - `nullable: true` folds into `type`'s array form, adding `"null"`.
//! - `exclusiveMinimum: true` + `minimum: X` collapses to `exclusiveMinimum:
//!   X` (numeric form); same for `exclusiveMaximum`.
//! - a bare `example` becomes a one-element `examples` array.
//!
//! Only `openapi: "3.0.x"` sources are accepted; anything else is an
//! [`TransformError::UnsupportedSourceVersion`] since this rewrite's field
//! mapping isn't meaningful for other dialects.

use oastree_ast::minim_model::{ArrayElement, Element, ObjectElement, StringElement};

use crate::config::UpgradeOptions;
use crate::document::Document;
use crate::error::TransformError;

const DEFAULT_TARGET: &str = "3.2.0";

fn upgrade_schema_fields(obj: &ObjectElement) -> ObjectElement {
    let mut copy = ObjectElement::new();
    copy.set_element_type(&obj.element);

    let nullable = obj.get("nullable").and_then(Element::as_boolean).is_some_and(|b| b.content);
    let exclusive_min_is_flag = obj.get("exclusiveMinimum").and_then(Element::as_boolean).is_some();
    let exclusive_max_is_flag = obj.get("exclusiveMaximum").and_then(Element::as_boolean).is_some();
    let exclusive_min_flag = obj.get("exclusiveMinimum").and_then(Element::as_boolean).is_some_and(|b| b.content);
    let exclusive_max_flag = obj.get("exclusiveMaximum").and_then(Element::as_boolean).is_some_and(|b| b.content);

    for member in &obj.content {
        let Some(key) = member.key_str() else { continue };
        match key {
            "nullable" => continue,
            "exclusiveMinimum" if exclusive_min_is_flag => continue,
            "exclusiveMaximum" if exclusive_max_is_flag => continue,
            "type" if nullable => {
                copy.set("type", nullable_type(&member.value));
            }
            "minimum" if exclusive_min_flag => {
                copy.set("exclusiveMinimum", upgrade_element(&member.value));
            }
            "maximum" if exclusive_max_flag => {
                copy.set("exclusiveMaximum", upgrade_element(&member.value));
            }
            "example" => {
                let mut examples = ArrayElement::new_empty();
                examples.push(upgrade_element(&member.value));
                copy.set("examples", Element::Array(examples));
            }
            _ => {
                copy.set(key, upgrade_element(&member.value));
            }
        }
    }

    if nullable && !obj.has_key("type") {
        copy.set("type", Element::String(StringElement::new("null")));
    }
    copy
}

fn nullable_type(original: &Element) -> Element {
    match original {
        Element::String(s) => {
            let mut arr = ArrayElement::new_empty();
            arr.push(Element::String(s.clone()));
            arr.push(Element::String(StringElement::new("null")));
            Element::Array(arr)
        }
        Element::Array(arr) => {
            let mut copy = arr.clone();
            if !copy.content.iter().any(|e| e.as_string().is_some_and(|s| s.content == "null")) {
                copy.push(Element::String(StringElement::new("null")));
            }
            Element::Array(copy)
        }
        other => other.clone(),
    }
}

fn upgrade_element(element: &Element) -> Element {
    match element {
        Element::Array(arr) => {
            let mut copy = ArrayElement::new_empty();
            for item in &arr.content {
                copy.push(upgrade_element(item));
            }
            Element::Array(copy)
        }
        Element::Object(obj) => Element::Object(upgrade_schema_fields(obj)),
        other => other.clone(),
    }
}

/// `Upgrade`: rewrites a `3.0.x` document's schema-level fields to their
/// `3.2.0` shape. `options.target_version` is recorded on the result under
/// `openapi` but otherwise only `3.2.0` semantics are produced today.
#[tracing::instrument(level = "debug", skip_all)]
pub fn upgrade(document: &Document, options: &UpgradeOptions) -> Result<Element, TransformError> {
    if options.cancellation.is_cancelled() {
        return Err(TransformError::Cancelled);
    }
    let root = (*document.root).clone();
    let Some(root_obj) = root.as_object() else {
        return Err(TransformError::UnsupportedSourceVersion("document root is not an object".to_string()));
    };
    let target = options.target_version.clone().unwrap_or_else(|| DEFAULT_TARGET.to_string());
    let source_version = root_obj.get("openapi").and_then(Element::as_string).map(|s| s.content.clone());
    match &source_version {
        // Already-upgraded input is accepted as a no-op source so
        // `upgrade(upgrade(d))` stays idempotent rather than erroring on
        // its own output.
        Some(v) if v.starts_with("3.0.") || v == &target => {}
        Some(v) => return Err(TransformError::UnsupportedSourceVersion(v.clone())),
        None => return Err(TransformError::UnsupportedSourceVersion("missing `openapi` field".to_string())),
    }

    let mut upgraded = upgrade_schema_fields(root_obj);
    upgraded.set("openapi", Element::String(StringElement::new(target)));
    Ok(Element::Object(upgraded))
}
