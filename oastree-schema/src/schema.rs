use std::marker::PhantomData;

use oastree_ast::ObjectElement;

use crate::elements::json_schema::ConcreteSchemaElement;

/// Marker for `Schema<V>`'s type parameter: "this position may still hold an
/// unresolved `$ref`" vs "this position has already been resolved and must be
/// concrete or boolean" (spec §3, `Schema<V>`).
pub trait SchemaVariant {}

/// The reference has not necessarily been chased yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MayReference;
impl SchemaVariant for MayReference {}

/// The core's resolver has already dereferenced this position; constructing
/// `Schema::Reference` against this marker is a programmer error, not a data
/// error, so it's rejected at the API boundary rather than modeled as a
/// fourth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MustBeConcrete;
impl SchemaVariant for MustBeConcrete {}

/// A JSON Schema fragment embedded in an OpenAPI document: `true`/`false`,
/// a `$ref` string, or a concrete schema body.
///
/// `V` is a zero-sized marker, not a different representation — both
/// `Schema<MayReference>` and `Schema<MustBeConcrete>` store the same three
/// variants. What differs is which constructors are offered: `Schema<MustBeConcrete>`
/// has no `reference()` constructor, so a caller that has already run the
/// resolver and holds a `Schema<MustBeConcrete>` cannot accidentally
/// construct a dangling reference into it. Callers that still need to
/// inspect a reference variant they received from elsewhere fall back to
/// `as_reference()`, which is defined for either marker.
#[derive(Debug, Clone)]
pub struct Schema<V: SchemaVariant = MayReference> {
    repr: SchemaRepr,
    _marker: PhantomData<V>,
}

#[derive(Debug, Clone)]
enum SchemaRepr {
    Boolean(bool),
    Reference(String),
    Concrete(ConcreteSchemaElement),
}

impl<V: SchemaVariant> Schema<V> {
    pub fn boolean(value: bool) -> Self {
        Self {
            repr: SchemaRepr::Boolean(value),
            _marker: PhantomData,
        }
    }

    pub fn concrete(body: ConcreteSchemaElement) -> Self {
        Self {
            repr: SchemaRepr::Concrete(body),
            _marker: PhantomData,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match &self.repr {
            SchemaRepr::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match &self.repr {
            SchemaRepr::Reference(r) => Some(r.as_str()),
            _ => None,
        }
    }

    pub fn as_concrete(&self) -> Option<&ConcreteSchemaElement> {
        match &self.repr {
            SchemaRepr::Concrete(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.repr, SchemaRepr::Reference(_))
    }

    /// Parses a raw object into the right variant: `$ref` wins if present
    /// (mixing `$ref` with sibling keywords is itself the caller's problem,
    /// not this constructor's), otherwise it's a concrete schema body.
    pub fn from_object(object: ObjectElement) -> Schema<MayReference> {
        if let Some(r) = object.get("$ref").and_then(oastree_ast::Element::as_string) {
            return Schema::reference(r.content.clone());
        }
        Schema {
            repr: SchemaRepr::Concrete(ConcreteSchemaElement::with_content(object)),
            _marker: PhantomData,
        }
    }
}

impl Schema<MayReference> {
    pub fn reference(value: impl Into<String>) -> Self {
        Self {
            repr: SchemaRepr::Reference(value.into()),
            _marker: PhantomData,
        }
    }

    /// Drops the `MayReference` marker once the caller has confirmed (e.g.
    /// via the resolver) that this isn't a `Reference` variant.
    pub fn into_concrete(self) -> Result<Schema<MustBeConcrete>, Schema<MayReference>> {
        match self.repr {
            SchemaRepr::Reference(_) => Err(self),
            repr => Ok(Schema {
                repr,
                _marker: PhantomData,
            }),
        }
    }
}
