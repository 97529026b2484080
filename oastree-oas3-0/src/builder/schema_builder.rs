//! # Schema Builder Module
//!
//! This module provides enhanced schema building functionality that is functionally equivalent
//! to the TypeScript SchemaVisitor pattern. It implements specialized field processing for
//! JSON Schema fields with OpenAPI extensions, reference handling, and comprehensive metadata injection.
//!
//! ## Features
//!
//! ### 1. Schema Field Processing (FixedFieldsVisitor equivalent)
//! - Handles `allOf`, `anyOf`, `oneOf` arrays with reference metadata injection
//! - Processes `properties` object with schema reference detection
//! - Supports `items` field (object or array) with schema references
//! - Handles `type` field (string or array of strings)
//! - Processes OpenAPI extensions (nullable, discriminator, xml, etc.)
//!
//! ### 2. Reference Processing (SchemaOrReferenceVisitor equivalent)
//! - Automatically detects Reference vs Schema elements
//! - Injects `referenced-element=schema` metadata for all $ref elements
//! - Supports nested reference detection in arrays and objects
//!
//! ### 3. Specification Extensions & Fallback
//! - Processes x-* fields with appropriate metadata
//! - Preserves unknown fields for debugging
//! - Comprehensive validation and error handling
//!
//! ## TypeScript Equivalence
//!
//! This implementation provides feature parity with the TypeScript SchemaVisitor:
//! - ✅ AllOf/AnyOf/OneOf array processing with reference metadata
//! - ✅ Properties object processing with schema reference detection
//! - ✅ Items field processing (object/array) with schema references
//! - ✅ Type field processing (string/array)
//! - ✅ Reference element decoration with `referenced-element=schema`
//! - ✅ Specification extensions handling (x-* fields)
//! - ✅ Fallback processing for unknown fields
//! - ✅ Comprehensive metadata injection and validation

use oastree_ast::*;
use crate::elements::schema::OpenApiSchemaElement;

/// Basic schema builder - equivalent to simple constructor
pub fn build_openapi_schema(element: &Element) -> Option<OpenApiSchemaElement> {
    match element {
        // A bare `$ref` member is just another key on the object at this
        // layer; the resolver (not this builder) is what chases it.
        Element::Object(obj) => Some(OpenApiSchemaElement::with_content(obj.clone())),
        // OAS 3.0.x doesn't allow a bare `true`/`false` schema (unlike 3.1+'s
        // JSON-Schema-aligned dialect), treat as noop.
        Element::Boolean(_) => None,
        _ => None,
    }
}

/// Enhanced schema builder with visitor pattern features
/// Equivalent to TypeScript SchemaVisitor with comprehensive field processing
pub fn build_and_decorate_schema<F>(
    element: &Element,
    mut folder: Option<&mut F>
) -> Option<OpenApiSchemaElement>
where
    F: Fold,
{
    let object = element.as_object()?;
    
    // Start with new schema element
    let mut schema = OpenApiSchemaElement::new();
    
    // Process each field with visitor pattern
    for member in &object.content {
        let key_str = match &*member.key {
            Element::String(s) => s.content.clone(),
            _ => continue,
        };
        
        // Handle specification extensions (x-* fields) - these are always valid
        if key_str.starts_with("x-") {
            schema.base.object.set(&key_str, (*member.value).clone());
            add_specification_extension_metadata(&mut schema, &key_str);
            continue;
        }
        
        let processed_value = if let Some(ref mut f) = folder {
            f.fold_element((*member.value).clone())
        } else {
            (*member.value).clone()
        };
        
        match key_str.as_str() {
            // JSON Schema composition fields (AllOfVisitor, AnyOfVisitor, OneOfVisitor)
            "allOf" => {
                let processed_array = process_schema_array_field(&processed_value, "allOf", &mut schema);
                schema.base.object.set("allOf", processed_array);
                add_fixed_field_metadata(&mut schema, "allOf");
            },
            "anyOf" => {
                let processed_array = process_schema_array_field(&processed_value, "anyOf", &mut schema);
                schema.base.object.set("anyOf", processed_array);
                add_fixed_field_metadata(&mut schema, "anyOf");
            },
            "oneOf" => {
                let processed_array = process_schema_array_field(&processed_value, "oneOf", &mut schema);
                schema.base.object.set("oneOf", processed_array);
                add_fixed_field_metadata(&mut schema, "oneOf");
            },
            "not" => {
                let processed_schema = process_schema_field(&processed_value, &mut schema);
                schema.base.object.set("not", processed_schema);
                add_fixed_field_metadata(&mut schema, "not");
            },
            
            // Schema structure fields (PropertiesVisitor, ItemsVisitor)
            "properties" => {
                let processed_properties = process_properties_field(&processed_value, &mut schema);
                schema.base.object.set("properties", processed_properties);
                add_fixed_field_metadata(&mut schema, "properties");
            },
            "items" => {
                let processed_items = process_items_field(&processed_value, &mut schema);
                schema.base.object.set("items", processed_items);
                add_fixed_field_metadata(&mut schema, "items");
            },
            "additionalProperties" => {
                let processed_additional = process_schema_field(&processed_value, &mut schema);
                schema.base.object.set("additionalProperties", processed_additional);
                add_fixed_field_metadata(&mut schema, "additionalProperties");
            },
            
            // Type field (TypeVisitor)
            "type" => {
                let processed_type = process_type_field(&processed_value, &mut schema);
                schema.base.object.set("type", processed_type);
                add_fixed_field_metadata(&mut schema, "type");
            },
            
            // OpenAPI specific extensions
            "nullable" => {
                if let Some(bool_val) = convert_to_boolean_element(&processed_value) {
                    schema.set_nullable(bool_val);
                    add_fixed_field_metadata(&mut schema, "nullable");
                } else {
                    add_validation_error_metadata(&mut schema, "nullable", "Expected boolean value");
                }
            },
            "discriminator" => {
                if let Element::Object(obj) = processed_value {
                    schema.set_discriminator(obj);
                    add_fixed_field_metadata(&mut schema, "discriminator");
                } else {
                    add_validation_error_metadata(&mut schema, "discriminator", "Expected object value");
                }
            },
            "xml" => {
                if let Element::Object(obj) = processed_value {
                    schema.set_xml(obj);
                    add_fixed_field_metadata(&mut schema, "xml");
                } else {
                    add_validation_error_metadata(&mut schema, "xml", "Expected object value");
                }
            },
            "externalDocs" => {
                if let Element::Object(obj) = processed_value {
                    schema.set_external_docs(obj);
                    add_fixed_field_metadata(&mut schema, "externalDocs");
                } else {
                    add_validation_error_metadata(&mut schema, "externalDocs", "Expected object value");
                }
            },
            "example" => {
                schema.set_example(processed_value);
                add_fixed_field_metadata(&mut schema, "example");
            },
            "deprecated" => {
                if let Some(bool_val) = convert_to_boolean_element(&processed_value) {
                    schema.set_deprecated(bool_val);
                    add_fixed_field_metadata(&mut schema, "deprecated");
                } else {
                    add_validation_error_metadata(&mut schema, "deprecated", "Expected boolean value");
                }
            },
            "writeOnly" => {
                if let Some(bool_val) = convert_to_boolean_element(&processed_value) {
                    schema.set_write_only(bool_val);
                    add_fixed_field_metadata(&mut schema, "writeOnly");
                } else {
                    add_validation_error_metadata(&mut schema, "writeOnly", "Expected boolean value");
                }
            },
            
            // Standard JSON Schema fields
            "title" | "description" | "default" | "enum" | "const" | "format" | "pattern" |
            "minimum" | "maximum" | "exclusiveMinimum" | "exclusiveMaximum" | "multipleOf" |
            "minLength" | "maxLength" | "minItems" | "maxItems" | "uniqueItems" | "minProperties" |
            "maxProperties" | "required" | "patternProperties" | "additionalItems" | "contains" |
            "propertyNames" | "if" | "then" | "else" | "definitions" | "$schema" | "$id" | "$ref" => {
                schema.base.object.set(&key_str, processed_value);
                add_fixed_field_metadata(&mut schema, &key_str);
            },
            
            // Fallback for unknown fields
            _ => {
                schema.base.object.set(&key_str, processed_value);
                add_fallback_metadata(&mut schema, &key_str);
            }
        }
    }
    
    // Add comprehensive metadata
    add_processing_metadata(&mut schema);
    add_spec_path_metadata(&mut schema);
    validate_schema(&mut schema);
    
    Some(schema)
}

/// Process schema array fields (allOf, anyOf, oneOf)
/// Equivalent to TypeScript AllOfVisitor, AnyOfVisitor, OneOfVisitor
fn process_schema_array_field(element: &Element, field_name: &str, schema: &mut OpenApiSchemaElement) -> Element {
    if let Element::Array(arr) = element {
        let mut processed_array = arr.clone();
        
        // Process each schema in the array and inject reference metadata
        for item in &mut processed_array.content {
            if is_reference_like_element(item) {
                inject_schema_reference_metadata(item);
                add_schema_composition_metadata(schema, field_name, "reference");
            } else {
                add_schema_composition_metadata(schema, field_name, "schema");
            }
        }
        
        // Add array processing metadata
        processed_array.meta.properties.insert(
            format!("{}_processed", field_name),
            SimpleValue::Bool(true)
        );
        processed_array.meta.properties.insert(
            "schema_array_visitor".to_string(),
            SimpleValue::String(field_name.to_string())
        );
        
        Element::Array(processed_array)
    } else {
        add_validation_error_metadata(schema, field_name, "Expected array value");
        element.clone()
    }
}

/// Process properties field
/// Equivalent to TypeScript PropertiesVisitor
fn process_properties_field(element: &Element, schema: &mut OpenApiSchemaElement) -> Element {
    if let Element::Object(obj) = element {
        let mut processed_obj = obj.clone();
        
        // Process each property schema and inject reference metadata
        for member in &mut processed_obj.content {
            if is_reference_like_element(&member.value) {
                inject_schema_reference_metadata(&mut member.value);
                add_properties_metadata(schema, "reference");
            } else {
                add_properties_metadata(schema, "schema");
            }
        }
        
        // Add properties processing metadata
        processed_obj.meta.properties.insert(
            "properties_processed".to_string(),
            SimpleValue::Bool(true)
        );
        processed_obj.meta.properties.insert(
            "properties_visitor".to_string(),
            SimpleValue::Bool(true)
        );
        
        Element::Object(processed_obj)
    } else {
        add_validation_error_metadata(schema, "properties", "Expected object value");
        element.clone()
    }
}

/// Process items field (can be object or array)
/// Equivalent to TypeScript ItemsVisitor
fn process_items_field(element: &Element, schema: &mut OpenApiSchemaElement) -> Element {
    match element {
        Element::Object(_) => {
            // Single schema for items
            let mut processed_element = element.clone();
            if is_reference_like_element(&processed_element) {
                inject_schema_reference_metadata(&mut processed_element);
                add_items_metadata(schema, "reference");
            } else {
                add_items_metadata(schema, "schema");
            }
            processed_element
        },
        Element::Array(arr) => {
            // Array of schemas for items (positional)
            let mut processed_array = arr.clone();
            for item in &mut processed_array.content {
                if is_reference_like_element(item) {
                    inject_schema_reference_metadata(item);
                }
            }
            add_items_metadata(schema, "array");
            Element::Array(processed_array)
        },
        _ => {
            add_validation_error_metadata(schema, "items", "Expected object or array value");
            element.clone()
        }
    }
}

/// Process single schema field
fn process_schema_field(element: &Element, schema: &mut OpenApiSchemaElement) -> Element {
    let mut processed_element = element.clone();
    if is_reference_like_element(&processed_element) {
        inject_schema_reference_metadata(&mut processed_element);
        add_schema_reference_metadata(schema);
    }
    processed_element
}

/// Process type field (can be string or array of strings)
/// Equivalent to TypeScript TypeVisitor
fn process_type_field(element: &Element, schema: &mut OpenApiSchemaElement) -> Element {
    match element {
        Element::String(_) => {
            add_type_metadata(schema, "string");
            element.clone()
        },
        Element::Array(arr) => {
            // Validate all items are strings
            let all_strings = arr.content.iter().all(|item| matches!(item, Element::String(_)));
            if all_strings {
                add_type_metadata(schema, "array");
            } else {
                add_validation_error_metadata(schema, "type", "Type array must contain only strings");
            }
            element.clone()
        },
        _ => {
            add_validation_error_metadata(schema, "type", "Expected string or array of strings");
            element.clone()
        }
    }
}

/// Check if element is reference-like (has $ref)
fn is_reference_like_element(element: &Element) -> bool {
    if let Element::Object(obj) = element {
        obj.get("$ref").is_some()
    } else {
        false
    }
}

/// Inject schema reference metadata (equivalent to TypeScript referenced-element=schema)
fn inject_schema_reference_metadata(element: &mut Element) {
    if let Element::Object(obj) = element {
        obj.meta.properties.insert(
            "referenced-element".to_string(),
            SimpleValue::String("schema".to_string())
        );
        obj.add_class("schema-reference");
    }
}

/// Convert various element types to BooleanElement
fn convert_to_boolean_element(element: &Element) -> Option<BooleanElement> {
    match element {
        Element::Boolean(b) => Some(b.clone()),
        Element::String(s) => {
            match s.content.to_lowercase().as_str() {
                "true" => Some(BooleanElement::new(true)),
                "false" => Some(BooleanElement::new(false)),
                _ => None,
            }
        },
        _ => None,
    }
}

// Metadata injection functions

/// Add fixed field metadata
fn add_fixed_field_metadata(schema: &mut OpenApiSchemaElement, field_name: &str) {
    let key = format!("fixed-field_{}", field_name);
    schema.base.object.meta.properties.insert(key, SimpleValue::Bool(true));
}

/// Add validation error metadata
fn add_validation_error_metadata(schema: &mut OpenApiSchemaElement, field_name: &str, error_msg: &str) {
    let key = format!("validationError_{}", field_name);
    schema.base.object.meta.properties.insert(key, SimpleValue::String(error_msg.to_string()));
}

/// Add specification extension metadata
fn add_specification_extension_metadata(schema: &mut OpenApiSchemaElement, field_name: &str) {
    schema.base.object.meta.properties.insert(
        format!("specificationExtension_{}", field_name),
        SimpleValue::Bool(true)
    );
    schema.base.object.add_class("specification-extension");
}

/// Add fallback metadata
fn add_fallback_metadata(schema: &mut OpenApiSchemaElement, field_name: &str) {
    schema.base.object.meta.properties.insert(
        format!("fallback_{}", field_name),
        SimpleValue::Bool(true)
    );
}

/// Add schema composition metadata
fn add_schema_composition_metadata(schema: &mut OpenApiSchemaElement, field_name: &str, element_type: &str) {
    schema.base.object.meta.properties.insert(
        format!("{}_{}", field_name, element_type),
        SimpleValue::Bool(true)
    );
}

/// Add properties metadata
fn add_properties_metadata(schema: &mut OpenApiSchemaElement, element_type: &str) {
    schema.base.object.meta.properties.insert(
        format!("properties_{}", element_type),
        SimpleValue::Bool(true)
    );
}

/// Add items metadata
fn add_items_metadata(schema: &mut OpenApiSchemaElement, element_type: &str) {
    schema.base.object.meta.properties.insert(
        format!("items_{}", element_type),
        SimpleValue::Bool(true)
    );
}

/// Add schema reference metadata
fn add_schema_reference_metadata(schema: &mut OpenApiSchemaElement) {
    schema.base.object.meta.properties.insert("referenced-element".to_string(), SimpleValue::String("schema".to_string()));
    schema.base.object.meta.properties.insert("reference-path".to_string(), SimpleValue::String("#".to_string()));
}

/// Add type metadata
fn add_type_metadata(schema: &mut OpenApiSchemaElement, type_format: &str) {
    schema.base.object.meta.properties.insert(
        format!("type_{}", type_format),
        SimpleValue::Bool(true)
    );
}

/// Add overall processing metadata
fn add_processing_metadata(schema: &mut OpenApiSchemaElement) {
    schema.base.object.meta.properties.insert("processed".to_string(), SimpleValue::Bool(true));
    schema.base.object.meta.properties.insert("fixedFieldsVisitor".to_string(), SimpleValue::Bool(true));
    schema.base.object.meta.properties.insert("fallbackVisitor".to_string(), SimpleValue::Bool(true));
    schema.base.object.meta.properties.insert("canSupportSpecificationExtensions".to_string(), SimpleValue::Bool(true));
    
    // Add schema-specific visitor metadata
    schema.base.object.meta.properties.insert("schemaVisitor".to_string(), SimpleValue::Bool(true));
    schema.base.object.meta.properties.insert("schemaOrReferenceVisitor".to_string(), SimpleValue::Bool(true));
    
    // Add schema classes
    schema.base.object.add_class("schema");
    schema.base.object.add_class("openapi-schema");
}

/// Add spec path metadata
fn add_spec_path_metadata(schema: &mut OpenApiSchemaElement) {
    schema.base.object.meta.properties.insert(
        "spec-path".to_string(),
        SimpleValue::Array(vec![
            SimpleValue::String("document".to_string()),
            SimpleValue::String("objects".to_string()),
            SimpleValue::String("Schema".to_string())
        ])
    );
}

/// Validate schema constraints
fn validate_schema(schema: &mut OpenApiSchemaElement) {
    // Basic schema validation
    schema.base.object.meta.properties.insert("validSchema".to_string(), SimpleValue::Bool(true));
    
    // Check for common schema patterns
    if schema.base.object.get("allOf").is_some() {
        schema.base.object.meta.properties.insert("hasAllOf".to_string(), SimpleValue::Bool(true));
    }
    if schema.base.object.get("anyOf").is_some() {
        schema.base.object.meta.properties.insert("hasAnyOf".to_string(), SimpleValue::Bool(true));
    }
    if schema.base.object.get("oneOf").is_some() {
        schema.base.object.meta.properties.insert("hasOneOf".to_string(), SimpleValue::Bool(true));
    }
    if schema.base.object.get("properties").is_some() {
        schema.base.object.meta.properties.insert("hasProperties".to_string(), SimpleValue::Bool(true));
    }
    if schema.base.object.get("items").is_some() {
        schema.base.object.meta.properties.insert("hasItems".to_string(), SimpleValue::Bool(true));
    }
}
