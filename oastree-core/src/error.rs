//! Error taxonomy (§7): parse errors are fatal, validation warnings are
//! collected alongside successful results, resolution/circular-reference
//! errors are routed onto the [`crate::index::Index`]'s three streams, and
//! cancellation propagates immediately rather than being collected.

use crate::location::Location;

/// Severity of a user-facing validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding: a stable rule id, a human message, a
/// source location, and a severity. Unknown-property warnings are one per
/// unknown key per node; missing-required-field and type-mismatch findings
/// are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub rule_id: String,
    pub message: String,
    pub location: Location,
}

impl ValidationIssue {
    pub fn warning(rule_id: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self { severity: Severity::Warning, rule_id: rule_id.into(), message: message.into(), location }
    }

    pub fn error(rule_id: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self { severity: Severity::Error, rule_id: rule_id.into(), message: message.into(), location }
    }
}

/// Failure modes from [`crate::resolver::ReferenceResolver::resolve`] (§4.1).
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("invalid reference syntax: {0}")]
    InvalidReferenceSyntax(String),

    #[error("JSON pointer not found: {pointer} (in {document})")]
    PointerNotFound { document: String, pointer: String },

    #[error("external document unreadable: {0}")]
    ExternalDocumentUnreadable(String),

    #[error("external document malformed: {document}: {reason}")]
    ExternalDocumentMalformed { document: String, reason: String },

    #[error("external references are disabled (reference: {0})")]
    ExternalReferencesDisabled(String),

    #[error("circular reference detected: {0}")]
    CircularReferenceDetected(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl ResolveError {
    /// The stable rule identifier surfaced on the user-facing issue (§7).
    pub fn rule_id(&self) -> &'static str {
        match self {
            ResolveError::InvalidReferenceSyntax(_) => "resolution-invalid-reference-syntax",
            ResolveError::PointerNotFound { .. } => "resolution-pointer-not-found",
            ResolveError::ExternalDocumentUnreadable(_) => "resolution-external-document-unreadable",
            ResolveError::ExternalDocumentMalformed { .. } => "resolution-external-document-malformed",
            ResolveError::ExternalReferencesDisabled(_) => "resolution-external-references-disabled",
            ResolveError::CircularReferenceDetected(_) => "resolution-circular-reference-detected",
            ResolveError::Cancelled => "resolution-cancelled",
        }
    }
}

/// Errors from driving a [`crate::walker::Walker`] (§4.3): either the
/// caller's match function returned a genuine error, or the walk was
/// cancelled mid-traversal. The termination sentinel is *not* an error —
/// it's a distinguished [`crate::walker::WalkControl`] variant consumers
/// check by identity.
#[derive(Debug, thiserror::Error)]
pub enum WalkError<E> {
    #[error(transparent)]
    Visitor(E),

    #[error("walk cancelled")]
    Cancelled,

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Failures converting source bytes to/from the typed tree (§6 `Unmarshal`/
/// `Marshal`). The position-preserving marshaller itself is an external
/// collaborator (§1); this crate's default implementation only tracks
/// coarse line/column positions, so malformed YAML/JSON here is always a
/// parse error, never a validation warning.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    #[error("malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty input")]
    EmptyInput,

    #[error("operation cancelled")]
    Cancelled,
}

/// One variant per transformer (§4.6); each treats a resolution error as
/// fatal to itself per §7's propagation policy.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("cannot inline a non-terminating cycle: {0}")]
    NonTerminatingCycle(String),

    #[error("snip target not found: {0}")]
    SnipTargetNotFound(String),

    #[error("upgrade: unsupported source version {0}")]
    UnsupportedSourceVersion(String),

    #[error("operation cancelled")]
    Cancelled,
}
