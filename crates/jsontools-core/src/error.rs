//! Error types for the transformation engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// These codes form a **stable API contract** — once published, variant names
/// and their serialized `snake_case` strings must never change across
/// versions, since callers may match on them directly rather than on the
/// formatted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// Input bytes are not well-formed JSON.
    ParseError,
    /// A regex pattern failed to compile.
    PatternError,
    /// A builder method was called in a state that does not permit it.
    BuilderStateError,
    /// A batch slot failed independently of the others.
    TaskError,
    /// An invariant was violated; indicates a bug in this crate.
    InternalError,
}

/// Malformed-input error, carrying the byte offset where parsing stopped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("JSON parse error at offset {offset}: {reason}")]
pub struct ParseError {
    /// Byte offset into the input at which the failure was detected.
    pub offset: usize,
    /// Human-readable description of what went wrong.
    pub reason: String,
}

impl ParseError {
    pub fn new(offset: usize, reason: impl Into<String>) -> Self {
        Self {
            offset,
            reason: reason.into(),
        }
    }
}

/// Error serializing a value; only expected on internal inconsistency — the
/// serializer accepts every value the parser or a builder can produce.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("JSON encode error: {0}")]
pub struct EncodeError(pub String);

/// Invalid or unsupported regex pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid pattern {pattern:?}: {reason}")]
pub struct PatternError {
    pub pattern: String,
    pub reason: String,
}

/// The builder was used out of sequence — see the state machine in
/// [`crate::pipeline::builder`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuilderStateError {
    #[error("build() called with no input; call add_json() first")]
    NoInput,
    #[error("invalid pattern at operation #{index}: {reason}")]
    BadPattern { index: usize, reason: String },
    #[error("add_json() is only valid in the Empty or Done state")]
    AddJsonNotReady,
    #[error("operation methods are only valid in the Empty or Ready state")]
    EnqueueNotReady,
    #[error("build() is only valid in the Ready state")]
    BuildNotReady,
}

/// Top-level error type returned by every fallible single-document operation
/// in this crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JsonToolsError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    BuilderState(#[from] BuilderStateError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl JsonToolsError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            JsonToolsError::Parse(_) => ErrorCode::ParseError,
            JsonToolsError::Encode(_) => ErrorCode::InternalError,
            JsonToolsError::Pattern(_) => ErrorCode::PatternError,
            JsonToolsError::BuilderState(_) => ErrorCode::BuilderStateError,
            JsonToolsError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Context string for the report below: parse offset or offending pattern.
    fn context(&self) -> Option<String> {
        match self {
            JsonToolsError::Parse(e) => Some(e.offset.to_string()),
            JsonToolsError::Pattern(e) => Some(e.pattern.clone()),
            _ => None,
        }
    }

    /// Produces a structured, serializable error report for FFI-style
    /// consumers (see [`ErrorReport`]).
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.error_code(),
            message: self.to_string(),
            context: self.context(),
        }
    }
}

/// Structured error report: `{"code": ..., "message": ..., "context": ... | null}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
    pub context: Option<String>,
}

/// Per-slot failure in a batch operation.
///
/// Carries the original index so callers can correlate a failure back to its
/// input slice position; other slots are unaffected (see
/// [`crate::batch`]).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("document at index {index} failed: {source}")]
pub struct TaskError {
    pub index: usize,
    #[source]
    pub source: JsonToolsError,
}
