//! Field catalog: the schema lookup boundary.
//!
//! The catalog is populated once at schema load and never mutated
//! afterwards; query factories resolve field names against it at bind time.

use std::collections::HashMap;

use crate::schema::FieldReference;

/// Catalog interface for field lookups.
///
/// This trait allows query factories to resolve a field name to its declared
/// type and nesting scope from an external schema.
pub trait FieldCatalog: Send + Sync {
    /// Looks up a field by its full name.
    fn field(&self, name: &str) -> Option<FieldReference>;
}

/// An empty catalog that resolves no fields.
///
/// Useful for testing or when schema information is not available.
pub struct EmptyCatalog;

impl FieldCatalog for EmptyCatalog {
    fn field(&self, _name: &str) -> Option<FieldReference> {
        None
    }
}

/// A map-backed catalog holding a fixed set of field references.
///
/// # Example
///
/// ```
/// use meridian_core::catalog::{FieldCatalog, StaticCatalog};
/// use meridian_core::schema::{FieldReference, FieldType};
///
/// let catalog = StaticCatalog::new()
///     .with_field(FieldReference::new("price", FieldType::Float))
///     .with_field(FieldReference::new("location", FieldType::Geo));
///
/// assert!(catalog.field("price").is_some());
/// assert!(catalog.field("missing").is_none());
/// ```
#[derive(Debug, Default)]
pub struct StaticCatalog {
    fields: HashMap<String, FieldReference>,
}

impl StaticCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: HashMap::new() }
    }

    /// Add a field to the catalog.
    ///
    /// A later field with the same name replaces the earlier one: there is
    /// one reference per (name, declaring scope).
    #[must_use]
    pub fn with_field(mut self, field: FieldReference) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldCatalog for StaticCatalog {
    fn field(&self, name: &str) -> Option<FieldReference> {
        self.fields.get(name).cloned()
    }
}
