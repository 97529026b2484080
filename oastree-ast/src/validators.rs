//! Field-level validation helpers shared by the namespace crates' builders.
//!
//! These operate directly on [`ObjectElement`]s rather than on a fully typed
//! struct, since by the time a builder runs it has already decided it's
//! looking at (say) a Parameter object but hasn't necessarily built every
//! field yet. Each function returns a `validation-unknown-properties`-style
//! rule identifier on failure, matching the stable rule-id scheme in the
//! error handling design (see `oastree-core::error`).

use std::sync::OnceLock;

use regex::Regex;

use crate::minim_model::{Element, ObjectElement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub rule_id: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(rule_id: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            message: message.into(),
        }
    }
}

pub fn validate_parameter_in(location: &str) -> Result<(), ValidationError> {
    match location {
        "query" | "header" | "path" | "cookie" => Ok(()),
        other => Err(ValidationError::new(
            "validation-invalid-parameter-location",
            format!("'{other}' is not one of query, header, path, cookie"),
        )),
    }
}

pub fn validate_parameter_style(style: &str) -> Result<(), ValidationError> {
    match style {
        "matrix" | "label" | "simple" | "form" | "spaceDelimited" | "pipeDelimited" | "deepObject" => Ok(()),
        other => Err(ValidationError::new(
            "validation-invalid-parameter-style",
            format!("'{other}' is not a recognized parameter style"),
        )),
    }
}

/// A Parameter Object must carry exactly one of `schema` or a non-empty
/// `content` map (OAS 3.0 §4.7.12 / 3.1 §4.8.12).
pub fn validate_parameter_schema_xor_content(parameter: &ObjectElement) -> Result<(), ValidationError> {
    let has_schema = parameter.has_key("schema");
    let has_content = parameter
        .get("content")
        .and_then(Element::as_object)
        .map(|c| !c.content.is_empty())
        .unwrap_or(false);

    if has_schema == has_content {
        return Err(ValidationError::new(
            "validation-parameter-schema-content-xor",
            "parameter must declare exactly one of `schema` or `content`",
        ));
    }
    Ok(())
}

/// `in: path` parameters must be `required: true` and, if `style` is set,
/// restricted to matrix/label/simple.
pub fn validate_path_parameter_shape(parameter: &ObjectElement) -> Result<(), ValidationError> {
    let location = parameter.get("in").and_then(Element::as_string).map(|s| s.content.as_str());
    if location != Some("path") {
        return Ok(());
    }

    let required = parameter
        .get("required")
        .and_then(Element::as_boolean)
        .map(|b| b.content)
        .unwrap_or(false);
    if !required {
        return Err(ValidationError::new(
            "validation-path-parameter-must-be-required",
            "path parameters must set required: true",
        ));
    }

    if let Some(style) = parameter.get("style").and_then(Element::as_string) {
        match style.content.as_str() {
            "matrix" | "label" | "simple" => {}
            other => {
                return Err(ValidationError::new(
                    "validation-invalid-style-for-path",
                    format!("style '{other}' is not valid for an `in: path` parameter"),
                ))
            }
        }
    }
    Ok(())
}

/// `Content-Type`-keyed maps (Media Type / Encoding / Header `content`) may
/// carry at most one entry per the OpenAPI object model used for `content`.
pub fn validate_single_content_entry(content: &ObjectElement) -> Result<(), ValidationError> {
    if content.content.len() > 1 {
        Err(ValidationError::new(
            "validation-content-size-exceeded",
            "a `content` map may declare at most one media type",
        ))
    } else {
        Ok(())
    }
}

/// One `validation-unknown-properties` warning per key on `object` that is
/// neither a declared fixed field nor an `x-` extension.
pub fn unknown_property_warnings(object: &ObjectElement, known_fields: &[&str]) -> Vec<ValidationError> {
    object
        .unknown_fields(known_fields)
        .into_iter()
        .map(|key| {
            ValidationError::new(
                "validation-unknown-properties",
                format!("unrecognized property '{key}'"),
            )
        })
        .collect()
}

fn path_parameter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^}]+)\}").unwrap())
}

/// Extracts `{name}` path template parameters from a Paths Object key, in
/// order of appearance (duplicates kept, e.g. `/a/{id}/b/{id}` yields
/// `["id", "id"]` — it's the caller's job to decide duplicates are an
/// error).
pub fn path_template_parameters(path: &str) -> Vec<String> {
    path_parameter_pattern().captures_iter(path).map(|c| c[1].to_string()).collect()
}

/// A Server Object's `url` must be non-empty and contain no whitespace; if
/// it has no `{variable}` templating it must also parse as a URL (OAS 3.0
/// §4.7.5 / 3.1 §4.8.5 — templated URLs aren't valid URLs on their own, so
/// they're only checked for the constraints a template still has to meet).
pub fn validate_server_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::new("validation-invalid-server-url", "server url must not be empty"));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("validation-invalid-server-url", format!("server url '{url}' contains whitespace")));
    }
    if !url.contains('{') {
        if let Err(err) = url::Url::parse(url) {
            return Err(ValidationError::new("validation-invalid-server-url", format!("'{url}' is not a valid URL: {err}")));
        }
    }
    Ok(())
}
