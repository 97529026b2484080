//! Transformers (§4.6): Inline, Bundle, Localize, Join, Snip, Clean, and
//! Upgrade, each a consumer of the [`crate::index::Index`] and
//! [`crate::resolver::ReferenceResolver`] specified above. All operate on
//! the raw `Element` tree directly (the same version-agnostic layer
//! `index.rs` duck-types against), since a transformer has to rewrite
//! fields the typed `oastree-oas3-0`/`oastree-oas3-1` builders don't
//! expose a setter for.

pub mod bundle;
pub mod clean;
pub mod inline;
pub mod join;
pub mod localize;
pub mod snip;
pub mod upgrade;

use std::collections::HashMap;

use oastree_ast::minim_model::{Element, ObjectElement};

use crate::config::ConflictResolution;

/// Renames `name` under `resolution`, tracking counters across calls so a
/// `CounterSuffix` resolution produces `Name`, `Name_1`, `Name_2`, ... for
/// repeated collisions rather than colliding on `Name_1` itself (§4.6
/// "Conflict resolution for colliding names").
pub(crate) fn resolve_conflict(resolution: &ConflictResolution, name: &str, source_path: &str, counters: &mut HashMap<String, u32>) -> String {
    match resolution {
        ConflictResolution::CounterSuffix => {
            let counter = counters.entry(name.to_string()).or_insert(0);
            let renamed = if *counter == 0 { name.to_string() } else { format!("{name}_{counter}") };
            *counter += 1;
            renamed
        }
        ConflictResolution::PathPrefixed => {
            let sanitized = source_path.replace(['/', '.'], "_");
            format!("{sanitized}~{name}")
        }
        ConflictResolution::Custom(f) => f(name, source_path),
    }
}

/// Reads `$ref` off an object node, the same duck-typed check `index.rs`
/// uses rather than depending on the typed `Referenceable` wrapper.
pub(crate) fn ref_string(obj: &ObjectElement) -> Option<String> {
    obj.get("$ref").and_then(Element::as_string).map(|s| s.content.clone())
}

/// Collects every `$ref` string reachable from `element`, following
/// resolved targets transitively. Used by [`clean`] (reachability from
/// `paths`/`webhooks`) and by [`inline`]'s `RemoveUnusedComponents`
/// post-pass. `visited` guards against revisiting the same reference twice
/// (cheap — cyclic schemas are common) without needing the full
/// classifier machinery, since this pass only cares about reachability,
/// not termination.
pub(crate) fn collect_reachable_references(
    element: &Element,
    root: &crate::document::Document,
    cache: &crate::document::DocumentCache,
    resolve_options: &crate::config::ResolveOptions,
    document: &str,
    visited: &mut std::collections::HashSet<String>,
    out: &mut Vec<String>,
) {
    if let Element::Array(arr) = element {
        for item in &arr.content {
            collect_reachable_references(item, root, cache, resolve_options, document, visited, out);
        }
        return;
    }
    let Some(obj) = element.as_object() else { return };
    if let Some(reference) = ref_string(obj) {
        out.push(reference.clone());
        let resolver = crate::resolver::ReferenceResolver::new(root, cache, resolve_options);
        if let Ok(outcome) = resolver.resolve(&reference, document) {
            if visited.insert(outcome.info.absolute_reference.clone()) {
                let target_document = outcome.info.absolute_document_path.clone();
                collect_reachable_references(&outcome.node, root, cache, resolve_options, &target_document, visited, out);
            }
        }
        return;
    }
    for member in &obj.content {
        collect_reachable_references(&member.value, root, cache, resolve_options, document, visited, out);
    }
}

/// The `components` bucket name a resolved target of this kind lives
/// under, for transformers (`bundle`/`localize`/`join`) that need to place
/// a freshly-imported node somewhere. Kinds with no natural components
/// bucket (path items, tags, servers, ...) fall back to `"schemas"` —
/// rare in practice, since only `schema`/`response`/`parameter`/etc. nodes
/// are ordinarily reached through a reusable `$ref`.
pub(crate) fn components_bucket(kind: crate::dispatcher::EntityKind) -> &'static str {
    use crate::dispatcher::EntityKind;
    match kind {
        EntityKind::Schema => "schemas",
        EntityKind::Response => "responses",
        EntityKind::Parameter => "parameters",
        EntityKind::Example => "examples",
        EntityKind::RequestBody => "requestBodies",
        EntityKind::Header => "headers",
        EntityKind::SecurityScheme => "securitySchemes",
        EntityKind::Link => "links",
        EntityKind::Callback => "callbacks",
        EntityKind::PathItem => "pathItems",
        _ => "schemas",
    }
}

/// The trailing `#/components/<kind>/<name>` segment of a reference
/// string, if it has that shape. Used to map a reachable reference back to
/// the component name [`clean`]/[`snip`] decide to keep.
pub(crate) fn component_name_from_reference(reference: &str) -> Option<(String, String)> {
    let pointer = reference.split('#').nth(1)?;
    let mut parts = pointer.trim_start_matches('/').split('/');
    if parts.next()? != "components" {
        return None;
    }
    let kind = parts.next()?.to_string();
    let name = parts.next()?.to_string();
    Some((kind, name))
}
