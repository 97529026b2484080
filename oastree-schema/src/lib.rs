pub mod elements;
mod schema;

pub use elements::json_reference::JsonReferenceElement;
pub use elements::json_schema::ConcreteSchemaElement;
pub use schema::{MayReference, MustBeConcrete, Schema, SchemaVariant};
