//! # Error Module
//!
//! Errors raised while *building* specifications from external input.
//!
//! Evaluating a specification never fails: `is_satisfied` returns a plain
//! `bool`. Only parsing terms and expression documents can go wrong.

use thiserror::Error;

/// Errors from sieve-core.
#[derive(Debug, Error)]
pub enum SieveError {
    /// A term referenced a field that products do not have.
    #[error("unknown field '{0}' (expected one of: color, size, name)")]
    UnknownField(String),

    /// A term used a value the field cannot take.
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },

    /// A term was not of the form `field=value` or `field!=value`.
    #[error("malformed term '{0}' (expected field=value or field!=value)")]
    MalformedTerm(String),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across sieve-core.
pub type Result<T> = std::result::Result<T, SieveError>;
