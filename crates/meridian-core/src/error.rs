//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A coordinate was outside its legal range.
    #[error("invalid coordinate: {coordinate} {value} out of range [{min}, {max}]")]
    InvalidCoordinate {
        /// Which coordinate was out of range ("latitude" or "longitude").
        coordinate: &'static str,
        /// The offending value.
        value: f64,
        /// The minimum legal value (inclusive).
        min: f64,
        /// The maximum legal value (inclusive).
        max: f64,
    },

    /// A nested path was malformed.
    #[error("invalid nested path: {0}")]
    InvalidPath(String),

    /// A field name did not resolve against the catalog.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A value type mismatch occurred.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: String,
        /// The actual type.
        actual: String,
    },
}
