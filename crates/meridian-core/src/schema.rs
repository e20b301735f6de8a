//! Field model: declared types, nesting paths, and field references.
//!
//! A [`FieldReference`] is the handle query builders are bound to. It is
//! resolved once from a [`crate::catalog::FieldCatalog`] at query-build time
//! and is immutable from then on; every sort or aggregation descriptor
//! carries the reference it was built against.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The declared value type of an indexed field.
///
/// Factories consult this tag at bind time: requesting a sort or aggregation
/// kind that the declared type cannot support is a configuration error,
/// reported before any query executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Boolean field.
    Bool,
    /// 64-bit signed integer field.
    Integer,
    /// 64-bit floating point field.
    Float,
    /// Text field.
    Text,
    /// Raw bytes field.
    Bytes,
    /// Geographic point field.
    Geo,
}

impl FieldType {
    /// A short name for the type, for diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Geo => "geo_point",
        }
    }

    /// Returns true for types with numeric comparison semantics.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated dotted path addressing a nested-object scope.
///
/// Segments must be non-empty and contain only alphanumeric characters and
/// underscores, separated by dots.
///
/// # Example
///
/// ```
/// use meridian_core::schema::NestedPath;
///
/// let path = NestedPath::new("offers.shipping").unwrap();
/// assert_eq!(path.as_str(), "offers.shipping");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NestedPath(String);

impl NestedPath {
    /// Create a new nested path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, has an empty segment, or
    /// contains characters other than alphanumerics and underscores.
    pub fn new(path: impl Into<String>) -> Result<Self, CoreError> {
        let path = path.into();

        if path.is_empty() {
            return Err(CoreError::InvalidPath("nested path cannot be empty".to_string()));
        }

        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(CoreError::InvalidPath(format!(
                    "nested path '{}' contains an empty segment",
                    path
                )));
            }
            if !segment.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(CoreError::InvalidPath(format!(
                    "nested path segment '{}' contains invalid characters (allowed: alphanumeric, underscore)",
                    segment
                )));
            }
        }

        Ok(Self(path))
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NestedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NestedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An opaque handle to a named, typed field.
///
/// There is one reference per (name, declaring scope); nested fields carry
/// the path of the nested-object scope that declares them. References are
/// immutable once obtained and safe to share across threads.
///
/// # Example
///
/// ```
/// use meridian_core::schema::{FieldReference, FieldType};
///
/// let field = FieldReference::new("offers.location", FieldType::Geo)
///     .with_nested_path("offers")
///     .unwrap()
///     .multi_valued();
///
/// assert_eq!(field.name(), "offers.location");
/// assert!(field.is_multi_valued());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReference {
    name: String,
    field_type: FieldType,
    nested_path: Option<NestedPath>,
    multi_valued: bool,
}

impl FieldReference {
    /// Create a reference to a top-level, single-valued field.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self { name: name.into(), field_type, nested_path: None, multi_valued: false }
    }

    /// Scope the field inside a nested-object path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is malformed.
    pub fn with_nested_path(mut self, path: impl Into<String>) -> Result<Self, CoreError> {
        self.nested_path = Some(NestedPath::new(path)?);
        Ok(self)
    }

    /// Mark the field as holding multiple values per document.
    #[must_use]
    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// The full field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared value type.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The nested-object scope declaring the field, if any.
    #[must_use]
    pub const fn nested_path(&self) -> Option<&NestedPath> {
        self.nested_path.as_ref()
    }

    /// Whether the field may hold more than one value per document.
    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn nested_path_accepts_dotted_segments() {
        assert!(NestedPath::new("offers").is_ok());
        assert!(NestedPath::new("offers.shipping_info").is_ok());
    }

    #[test]
    fn nested_path_rejects_malformed_input() {
        assert!(NestedPath::new("").is_err());
        assert!(NestedPath::new("offers..shipping").is_err());
        assert!(NestedPath::new(".offers").is_err());
        assert!(NestedPath::new("offers/shipping").is_err());
    }

    #[test]
    fn field_reference_defaults() {
        let field = FieldReference::new("price", FieldType::Float);
        assert_eq!(field.name(), "price");
        assert_eq!(field.field_type(), FieldType::Float);
        assert!(field.nested_path().is_none());
        assert!(!field.is_multi_valued());
    }

    #[test]
    fn field_reference_nested_scope() {
        let field = FieldReference::new("offers.price", FieldType::Float)
            .with_nested_path("offers")
            .unwrap();
        assert_eq!(field.nested_path().map(NestedPath::as_str), Some("offers"));
    }

    #[test]
    fn field_type_numeric_classification() {
        assert!(FieldType::Integer.is_numeric());
        assert!(FieldType::Float.is_numeric());
        assert!(!FieldType::Text.is_numeric());
        assert!(!FieldType::Geo.is_numeric());
    }
}
