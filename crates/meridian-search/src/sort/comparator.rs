//! Comparator source descriptors.
//!
//! A [`ComparatorSource`] is the immutable output of a sort builder: the
//! fully-parameterized description the execution engine binds to the index
//! representation when comparing documents. Construction is deterministic
//! and descriptors are safe to cache and share across concurrent query
//! executions; that is the expected usage for a compiled query clause.

use meridian_core::schema::{FieldReference, NestedPath};
use meridian_core::types::{GeoPoint, Value};
use serde::{Deserialize, Serialize};

use super::mode::{MultiValueMode, SortKind};
use crate::filter::NestedFilter;

/// The direction of a sort clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lowest comparison key first.
    #[default]
    Asc,
    /// Highest comparison key first.
    Desc,
}

/// Where documents without a comparison key sort.
///
/// Applies to field sorts; a distance sort treats value-less documents per
/// the engine-wide missing-value handling, outside this descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingValue {
    /// Sort documents without a value before all others.
    First,
    /// Sort documents without a value after all others.
    #[default]
    Last,
}

/// Parameters specific to one sort kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparatorParams {
    /// Order by the field's own values.
    Field {
        /// Where value-less documents sort.
        missing: MissingValue,
    },
    /// Order by great-circle distance from a center point.
    Distance {
        /// The reference point distances are measured from.
        center: GeoPoint,
    },
}

/// An immutable, fully-parameterized comparator description.
///
/// Emitted by the sort builders and consumed by the execution engine; the
/// descriptor is the entire contract between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparatorSource {
    pub(crate) field: FieldReference,
    pub(crate) nested_path: Option<NestedPath>,
    pub(crate) mode: MultiValueMode,
    pub(crate) order: SortOrder,
    pub(crate) nested_filter: Option<NestedFilter>,
    pub(crate) params: ComparatorParams,
}

impl ComparatorSource {
    /// The field the comparator is bound to.
    #[must_use]
    pub const fn field(&self) -> &FieldReference {
        &self.field
    }

    /// The nested-object scope the comparator operates in, if any.
    #[must_use]
    pub const fn nested_path(&self) -> Option<&NestedPath> {
        self.nested_path.as_ref()
    }

    /// The multi-value reduction recorded for the comparator.
    #[must_use]
    pub const fn mode(&self) -> MultiValueMode {
        self.mode
    }

    /// The sort direction.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// The filter restricting which nested documents contribute values.
    #[must_use]
    pub const fn nested_filter(&self) -> Option<&NestedFilter> {
        self.nested_filter.as_ref()
    }

    /// The kind-specific parameters.
    #[must_use]
    pub const fn params(&self) -> &ComparatorParams {
        &self.params
    }

    /// The sort kind this comparator implements.
    #[must_use]
    pub const fn kind(&self) -> SortKind {
        match self.params {
            ComparatorParams::Field { .. } => SortKind::Field,
            ComparatorParams::Distance { .. } => SortKind::Distance,
        }
    }

    /// Compute the comparison key for one document's field values.
    ///
    /// For a distance comparator the per-value key is the great-circle
    /// distance from the center, in meters; for a field comparator it is the
    /// numeric value itself. The per-value keys are then reduced by the
    /// recorded multi-value mode. Values of the wrong type contribute no
    /// key.
    ///
    /// Returns `None` for a document with no usable values; such documents
    /// sort per the missing-value handling, not by key.
    #[must_use]
    pub fn comparison_key(&self, values: &[Value]) -> Option<f64> {
        let keys: Vec<f64> = match &self.params {
            ComparatorParams::Distance { center } => values
                .iter()
                .filter_map(Value::as_geo)
                .map(|point| center.distance_to(&point))
                .collect(),
            ComparatorParams::Field { .. } => values.iter().filter_map(Value::as_f64).collect(),
        };

        self.mode.reduce(&keys)
    }
}
