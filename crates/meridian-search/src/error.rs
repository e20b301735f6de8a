//! Error types for the sort and aggregation construction layer.
//!
//! Everything here is a deterministic configuration error: it is raised
//! synchronously at the offending builder call or at `build()`, never
//! deferred to scan time, never silently corrected, and never retried.
//! Correctness of result ordering and bucketing depends on exact
//! parameters, so falling back to a default is explicitly not an option.

use meridian_core::schema::FieldType;
use thiserror::Error;

use crate::sort::{SortKind, SortMode};

/// Errors raised while building a sort clause.
#[derive(Debug, Error)]
pub enum SortError {
    /// The requested reduction mode is not legal for the sort kind.
    #[error("sort mode {mode} is not legal for a {kind} sort on field '{field}'")]
    InvalidModeForSortKind {
        /// The rejected mode.
        mode: SortMode,
        /// The sort kind being built.
        kind: SortKind,
        /// The field the sort targets.
        field: String,
    },

    /// A parameter the sort kind requires was never set before `build()`.
    #[error("missing required parameter '{parameter}' for sort on field '{field}'")]
    MissingRequiredParameter {
        /// The name of the missing parameter.
        parameter: &'static str,
        /// The field the sort targets.
        field: String,
    },

    /// The field's declared type cannot support the requested sort kind.
    ///
    /// Raised at factory bind time, before any query executes.
    #[error("field '{field}' is declared as {actual}, but this sort requires {expected}")]
    FieldTypeMismatch {
        /// The field the sort targets.
        field: String,
        /// A description of the acceptable types.
        expected: String,
        /// The field's declared type.
        actual: FieldType,
    },

    /// A nested filter is scoped to a different path than the field.
    #[error("nested filter on path '{filter_path}' does not match the nesting scope of field '{field}'")]
    NestedScopeMismatch {
        /// The field the sort targets.
        field: String,
        /// The path the filter is scoped to.
        filter_path: String,
    },

    /// The field name did not resolve against the catalog.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Errors raised while building a range aggregation.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// A range's lower bound is not strictly below its upper bound.
    #[error("invalid range: lower bound {lower} must be strictly below upper bound {upper}")]
    InvalidRange {
        /// The offending lower bound.
        lower: String,
        /// The offending upper bound.
        upper: String,
    },

    /// The field's declared type cannot support the aggregation.
    ///
    /// Raised at factory bind time, before any query executes.
    #[error("field '{field}' is declared as {actual}, but this aggregation requires {expected}")]
    FieldTypeMismatch {
        /// The field the aggregation targets.
        field: String,
        /// A description of the acceptable types.
        expected: String,
        /// The field's declared type.
        actual: FieldType,
    },

    /// The field name did not resolve against the catalog.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Errors raised while resolving or executing a value bridge reference.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// More than one of a mutually-exclusive reference group was set.
    #[error("conflicting bridge reference: {0}")]
    ConflictingReference(&'static str),

    /// No bridge or bridge builder is registered under the given name.
    #[error("no value bridge registered under name '{0}'")]
    UnknownName(String),

    /// A by-type reference does not satisfy the required capability signature.
    #[error("incompatible bridge type for field '{field}': {reason}")]
    IncompatibleType {
        /// The field the bridge was requested for.
        field: String,
        /// Why the type does not fit.
        reason: String,
    },

    /// No default bridge applies to the field's declared value type.
    #[error("no default value bridge available for field type {0}")]
    NoDefaultAvailable(FieldType),

    /// A bridge could not convert a domain value to its indexable form.
    ///
    /// Surfaced by bridge implementations, not by the resolver.
    #[error("cannot convert {actual} value for a {expected} field")]
    Conversion {
        /// The declared index type.
        expected: FieldType,
        /// The type of the value that was passed in.
        actual: &'static str,
    },
}
