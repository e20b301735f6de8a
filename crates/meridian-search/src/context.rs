//! Search context: the factory boundary for query builders.
//!
//! A [`SearchContext`] bundles the read-only collaborators every builder
//! needs (the field catalog and the bridge registry) and hands out
//! builders bound to resolved fields. Both collaborators are initialized
//! once at schema/mapping load and shared immutably across threads; the
//! context itself is cheap to clone.

use std::sync::Arc;

use meridian_core::catalog::FieldCatalog;
use meridian_core::schema::FieldReference;

use crate::aggregation::RangeAggregationBuilder;
use crate::bridge::{resolve, BridgeRef, BridgeRegistry, ValueBridge};
use crate::error::{AggregationError, BridgeError, SortError};
use crate::sort::{DistanceSortBuilder, FieldSortBuilder};

/// Factory-time context for query construction.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use meridian_core::catalog::StaticCatalog;
/// use meridian_core::schema::{FieldReference, FieldType};
/// use meridian_core::types::GeoPoint;
/// use meridian_search::bridge::BridgeRegistry;
/// use meridian_search::context::SearchContext;
///
/// let catalog = StaticCatalog::new()
///     .with_field(FieldReference::new("location", FieldType::Geo).multi_valued());
/// let context = SearchContext::new(Arc::new(catalog), Arc::new(BridgeRegistry::with_defaults()));
///
/// let sort = context
///     .distance_sort("location")
///     .unwrap()
///     .center(GeoPoint::new(48.8566, 2.3522).unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct SearchContext {
    catalog: Arc<dyn FieldCatalog>,
    bridges: Arc<BridgeRegistry>,
}

impl SearchContext {
    /// Create a context over a catalog and a bridge registry.
    #[must_use]
    pub fn new(catalog: Arc<dyn FieldCatalog>, bridges: Arc<BridgeRegistry>) -> Self {
        Self { catalog, bridges }
    }

    /// The bridge registry the context resolves against.
    #[must_use]
    pub fn bridges(&self) -> &BridgeRegistry {
        &self.bridges
    }

    /// Resolve a field reference from the catalog.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldReference> {
        self.catalog.field(name)
    }

    /// Create a distance sort builder bound to a field.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::UnknownField`] if the name does not resolve and
    /// [`SortError::FieldTypeMismatch`] if the field is not a geo point.
    pub fn distance_sort(&self, field_name: &str) -> Result<DistanceSortBuilder, SortError> {
        let field = self
            .field(field_name)
            .ok_or_else(|| SortError::UnknownField(field_name.to_string()))?;
        DistanceSortBuilder::for_field(field)
    }

    /// Create a field sort builder bound to a field.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::UnknownField`] if the name does not resolve and
    /// [`SortError::FieldTypeMismatch`] if the field's type has no
    /// document-level comparison order.
    pub fn field_sort(&self, field_name: &str) -> Result<FieldSortBuilder, SortError> {
        let field = self
            .field(field_name)
            .ok_or_else(|| SortError::UnknownField(field_name.to_string()))?;
        FieldSortBuilder::for_field(field)
    }

    /// Create a range aggregation builder bound to a field.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::UnknownField`] if the name does not
    /// resolve and [`AggregationError::FieldTypeMismatch`] if the field is
    /// not numeric.
    pub fn range_aggregation<F>(
        &self,
        field_name: &str,
    ) -> Result<RangeAggregationBuilder<F>, AggregationError> {
        let field = self
            .field(field_name)
            .ok_or_else(|| AggregationError::UnknownField(field_name.to_string()))?;
        RangeAggregationBuilder::for_field(field)
    }

    /// Resolve a declarative bridge reference for a field.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve_bridge(
        &self,
        reference: &BridgeRef,
        field: &FieldReference,
    ) -> Result<Arc<dyn ValueBridge>, BridgeError> {
        resolve(reference, field, &self.bridges)
    }
}

impl std::fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchContext").field("bridges", &self.bridges).finish()
    }
}
