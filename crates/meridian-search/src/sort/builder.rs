//! Sort builders: one per sort kind.
//!
//! A builder is created per sort clause, bound to a field at construction
//! (where type compatibility is checked), mutated by fluent steps, and
//! consumed by `build()`. Steps that can fail consume the builder and
//! return `Result<Self, _>` so that a rejected call never leaves partially
//! mutated state behind; validation happens before any assignment.

use meridian_core::schema::{FieldReference, FieldType};
use meridian_core::types::GeoPoint;
use tracing::debug;

use super::comparator::{ComparatorParams, ComparatorSource, MissingValue, SortOrder};
use super::mode::{validate_mode, MultiValueMode, SortKind, SortMode};
use crate::error::SortError;
use crate::filter::NestedFilter;

fn check_nested_scope(
    field: &FieldReference,
    filter: &NestedFilter,
) -> Result<(), SortError> {
    match field.nested_path() {
        Some(path) if path == filter.path() => Ok(()),
        _ => Err(SortError::NestedScopeMismatch {
            field: field.name().to_string(),
            filter_path: filter.path().to_string(),
        }),
    }
}

/// Builder for a sort by great-circle distance from a center point.
///
/// # Example
///
/// ```
/// use meridian_core::schema::{FieldReference, FieldType};
/// use meridian_core::types::GeoPoint;
/// use meridian_search::sort::{DistanceSortBuilder, SortMode};
///
/// let field = FieldReference::new("location", FieldType::Geo).multi_valued();
/// let sort = DistanceSortBuilder::for_field(field)
///     .unwrap()
///     .center(GeoPoint::new(48.8566, 2.3522).unwrap())
///     .mode(SortMode::Median)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct DistanceSortBuilder {
    field: FieldReference,
    center: Option<GeoPoint>,
    mode: Option<SortMode>,
    order: SortOrder,
    nested_filter: Option<NestedFilter>,
}

impl DistanceSortBuilder {
    /// Bind a distance sort builder to a field.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::FieldTypeMismatch`] unless the field is declared
    /// as a geographic point; binding a distance sort to anything else is a
    /// configuration error, reported before any query executes.
    pub fn for_field(field: FieldReference) -> Result<Self, SortError> {
        if field.field_type() != FieldType::Geo {
            return Err(SortError::FieldTypeMismatch {
                field: field.name().to_string(),
                expected: FieldType::Geo.to_string(),
                actual: field.field_type(),
            });
        }
        Ok(Self { field, center: None, mode: None, order: SortOrder::Asc, nested_filter: None })
    }

    /// Request a multi-value reduction mode.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidModeForSortKind`] for modes a distance
    /// sort does not support (`Sum`); the requested mode is only retained on
    /// success.
    pub fn mode(mut self, mode: SortMode) -> Result<Self, SortError> {
        validate_mode(SortKind::Distance, mode, &self.field)?;
        self.mode = Some(mode);
        Ok(self)
    }

    /// Set the reference point distances are measured from.
    ///
    /// Required before [`build`](Self::build).
    #[must_use]
    pub const fn center(mut self, center: GeoPoint) -> Self {
        self.center = Some(center);
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Sort lowest distance first.
    #[must_use]
    pub const fn asc(self) -> Self {
        self.order(SortOrder::Asc)
    }

    /// Sort highest distance first.
    #[must_use]
    pub const fn desc(self) -> Self {
        self.order(SortOrder::Desc)
    }

    /// Restrict which nested documents contribute values.
    ///
    /// The filter's semantic correctness is not validated here, only that
    /// it is attached to the same nesting scope as the field.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::NestedScopeMismatch`] if the filter is scoped to
    /// a different path than the field.
    pub fn nested_filter(mut self, filter: NestedFilter) -> Result<Self, SortError> {
        check_nested_scope(&self.field, &filter)?;
        self.nested_filter = Some(filter);
        Ok(self)
    }

    /// Capture the accumulated state into an immutable descriptor.
    ///
    /// The builder is consumed; a fresh builder is created for each clause.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::MissingRequiredParameter`] if no center point
    /// was set.
    pub fn build(self) -> Result<ComparatorSource, SortError> {
        let center = self.center.ok_or(SortError::MissingRequiredParameter {
            parameter: "center",
            field: self.field.name().to_string(),
        })?;
        let mode = self.mode.map(MultiValueMode::from).unwrap_or_default();

        debug!(field = %self.field.name(), ?mode, "built distance sort comparator source");

        Ok(ComparatorSource {
            nested_path: self.field.nested_path().cloned(),
            field: self.field,
            mode,
            order: self.order,
            nested_filter: self.nested_filter,
            params: ComparatorParams::Distance { center },
        })
    }
}

/// Builder for a sort by a field's own values.
#[derive(Debug)]
pub struct FieldSortBuilder {
    field: FieldReference,
    mode: Option<SortMode>,
    order: SortOrder,
    missing: MissingValue,
    nested_filter: Option<NestedFilter>,
}

impl FieldSortBuilder {
    /// Bind a field sort builder to a field.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::FieldTypeMismatch`] for field types without a
    /// document-level comparison order (geo points sort by distance, bytes
    /// not at all).
    pub fn for_field(field: FieldReference) -> Result<Self, SortError> {
        if matches!(field.field_type(), FieldType::Geo | FieldType::Bytes) {
            return Err(SortError::FieldTypeMismatch {
                field: field.name().to_string(),
                expected: "a sortable scalar type".to_string(),
                actual: field.field_type(),
            });
        }
        Ok(Self {
            field,
            mode: None,
            order: SortOrder::Asc,
            missing: MissingValue::Last,
            nested_filter: None,
        })
    }

    /// Request a multi-value reduction mode.
    ///
    /// All modes are legal for a field sort, including `Sum`.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidModeForSortKind`] if the mode set is ever
    /// narrowed for this kind; today the table admits every mode.
    pub fn mode(mut self, mode: SortMode) -> Result<Self, SortError> {
        validate_mode(SortKind::Field, mode, &self.field)?;
        self.mode = Some(mode);
        Ok(self)
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Sort lowest value first.
    #[must_use]
    pub const fn asc(self) -> Self {
        self.order(SortOrder::Asc)
    }

    /// Sort highest value first.
    #[must_use]
    pub const fn desc(self) -> Self {
        self.order(SortOrder::Desc)
    }

    /// Set where documents without a value sort.
    #[must_use]
    pub const fn missing(mut self, missing: MissingValue) -> Self {
        self.missing = missing;
        self
    }

    /// Restrict which nested documents contribute values.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::NestedScopeMismatch`] if the filter is scoped to
    /// a different path than the field.
    pub fn nested_filter(mut self, filter: NestedFilter) -> Result<Self, SortError> {
        check_nested_scope(&self.field, &filter)?;
        self.nested_filter = Some(filter);
        Ok(self)
    }

    /// Capture the accumulated state into an immutable descriptor.
    pub fn build(self) -> Result<ComparatorSource, SortError> {
        let mode = self.mode.map(MultiValueMode::from).unwrap_or_default();

        debug!(field = %self.field.name(), ?mode, "built field sort comparator source");

        Ok(ComparatorSource {
            nested_path: self.field.nested_path().cloned(),
            field: self.field,
            mode,
            order: self.order,
            nested_filter: self.nested_filter,
            params: ComparatorParams::Field { missing: self.missing },
        })
    }
}
