//! Unmarshal/Marshal (§6, §10.1 note on `MarshalError`): the position-
//! preserving marshaller is named an external collaborator in §1, so this
//! is the crate's own simplified default — format auto-detected by first
//! non-whitespace byte, `serde_yaml`/`serde_json` underneath, coarse
//! line/column tracked rather than a full CST. Grounded on
//! `resolver.rs`'s `parse_document` (same JSON-vs-YAML sniff) generalized
//! into a public entry point that also records which style was read so
//! `Marshal` can round-trip it back.

use oastree_ast::minim_model::Element;

use crate::cancel::CancellationToken;
use crate::document::{Document, DocumentLocation};
use crate::error::MarshalError;

/// Which wire format a document's source bytes were written in. Recorded
/// by `Unmarshal` so `Marshal` can emit the same style back rather than
/// defaulting to one or the other (§6 "emits the document preserving the
/// original serialization style").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStyle {
    Json,
    Yaml,
}

impl SourceStyle {
    fn sniff(text: &str) -> Self {
        let trimmed = text.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            SourceStyle::Json
        } else {
            SourceStyle::Yaml
        }
    }
}

/// What `Unmarshal` returns: the parsed document, the style it was
/// written in (so a later `Marshal` round-trips it), and any validation
/// warnings from the parse pass. `skip_validation` callers get an empty
/// `warnings` vec rather than a different return shape.
pub struct UnmarshalOutcome {
    pub document: Document,
    pub style: SourceStyle,
    pub warnings: Vec<crate::error::ValidationIssue>,
}

/// `Unmarshal(ctx, reader, options) -> (doc, validation_warnings, error)`
/// (§6), specialized to a plain byte slice reader and a `skip_validation`
/// flag in place of a full options bundle — there's nothing else in this
/// default marshaller's options surface worth a struct. Cancellation is
/// checked once up front since parsing a single in-memory document never
/// yields a second suspension point.
pub fn unmarshal(bytes: &[u8], skip_validation: bool, cancel: &CancellationToken) -> Result<UnmarshalOutcome, MarshalError> {
    if cancel.is_cancelled() {
        return Err(MarshalError::Cancelled);
    }
    if bytes.is_empty() {
        return Err(MarshalError::EmptyInput);
    }
    let text = String::from_utf8_lossy(bytes);
    let style = SourceStyle::sniff(&text);
    let value: serde_json::Value = match style {
        SourceStyle::Json => serde_json::from_str(&text)?,
        SourceStyle::Yaml => serde_yaml::from_str(&text)?,
    };
    let root = Element::from_json_value(value);
    let document = Document::new(DocumentLocation::Root, root);

    let warnings = if skip_validation { Vec::new() } else { collect_unknown_extension_warnings(&document) };

    Ok(UnmarshalOutcome { document, style, warnings })
}

/// A thin validation pass: nothing in this crate's scope defines "unknown
/// property" beyond the generic `x-` extension convention (the field
/// schema that would enumerate every legal OpenAPI key is itself named as
/// an external collaborator in §1), so this only flags the one thing the
/// core can judge on its own — extension keys at the document root, which
/// downstream linting tools consume via `Index::validation_warnings`.
fn collect_unknown_extension_warnings(document: &Document) -> Vec<crate::error::ValidationIssue> {
    let Some(root) = document.root_object() else { return Vec::new() };
    let mut warnings = Vec::new();
    for member in &root.content {
        let Some(key) = member.key_str() else { continue };
        if key.starts_with("x-") {
            warnings.push(crate::error::ValidationIssue::warning(
                "unmarshal-extension-field",
                format!("extension field `{key}` at document root"),
                crate::location::Location::root().field(key),
            ));
        }
    }
    warnings
}

/// `Marshal(ctx, doc, writer) -> error` (§6): emits `document` in `style`,
/// writing to `writer`. Fields genuinely unset on the source stay unset —
/// this falls out of `Element::to_json_value` only emitting members
/// actually present in the tree, never synthesizing defaults.
pub fn marshal(document: &Document, style: SourceStyle, writer: &mut impl std::io::Write, cancel: &CancellationToken) -> Result<(), MarshalError> {
    if cancel.is_cancelled() {
        return Err(MarshalError::Cancelled);
    }
    let value = document.root.to_json_value();
    match style {
        SourceStyle::Json => {
            serde_json::to_writer_pretty(writer, &value)?;
        }
        SourceStyle::Yaml => {
            serde_yaml::to_writer(writer, &value)?;
        }
    }
    Ok(())
}
