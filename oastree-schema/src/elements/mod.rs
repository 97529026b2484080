pub mod json_reference;
pub mod json_schema;
