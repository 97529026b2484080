//! Glue between `oastree_schema::Schema<V>` and this crate's
//! `Referenceable<T>`/resolver: the concrete type the classifier and index
//! builder actually walk is a schema position that may still be a `$ref`.
//!
//! `Schema<V>` itself (Boolean / Reference / Concrete, §3) lives in
//! `oastree-schema`; this module only adds the "resolved into a
//! `Referenceable`" composition the core needs.

use oastree_schema::{MayReference, MustBeConcrete, Schema};

/// A schema position as written: either a reference (unresolved until the
/// resolver runs) or an inline boolean/concrete body.
pub type SchemaPosition = Schema<MayReference>;

/// A schema position after resolution: concrete or boolean only — a
/// `Referenceable<Schema<MustBeConcrete>>::Resolved` can never itself
/// contain a nested `$ref` at this level (one more hop would have been
/// chased already, per §4.1 step 5's recursive resolution).
pub type ResolvedSchema = Schema<MustBeConcrete>;

/// Wraps a raw schema position into the `Referenceable` shape the walker
/// and classifier operate on: reference strings become `Unresolved`
/// wrappers, everything else is `Inline` (it's already concrete/boolean
/// data, not a pointer elsewhere).
pub fn as_referenceable(position: SchemaPosition) -> crate::referenceable::Referenceable<ResolvedSchema> {
    match position.as_reference() {
        Some(reference) => crate::referenceable::Referenceable::unresolved(reference.to_string()),
        None => {
            let concrete = position
                .into_concrete()
                .unwrap_or_else(|_| unreachable!("as_reference() returned None but into_concrete() failed"));
            crate::referenceable::Referenceable::inline(concrete)
        }
    }
}
