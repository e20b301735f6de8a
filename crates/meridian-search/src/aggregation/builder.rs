//! Range aggregation builder and descriptor.
//!
//! The fluent chain mirrors the narrowing of the construction steps: the
//! initial builder only accepts ranges (or finalizes the legal-but-useless
//! empty bucket list), while the continuation step returned after the first
//! range accepts both further ranges and the cross-cutting options. The
//! narrowing is a compile-time usability contract, not a runtime check.

use meridian_core::schema::{FieldReference, FieldType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::range::Range;
use crate::error::AggregationError;
use crate::filter::Filter;

/// An immutable, fully-parameterized range aggregation description.
///
/// Conceptually maps each bucket to a count of matching documents; the
/// counting itself happens in the execution engine, which receives this
/// descriptor as its entire contract. Buckets keep caller-insertion order,
/// duplicates included, because bucket identity in results is positional, not
/// value-based, so no merging or sorting is ever applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeAggregation<F> {
    field: FieldReference,
    ranges: Vec<Range<F>>,
    filter: Option<Filter>,
}

impl<F> RangeAggregation<F> {
    /// Create a descriptor directly from a bucket list.
    ///
    /// An empty list is legal: "no buckets requested" is a valid (if
    /// useless) aggregation whose execution produces an empty result.
    #[must_use]
    pub const fn new(field: FieldReference, ranges: Vec<Range<F>>) -> Self {
        Self { field, ranges, filter: None }
    }

    /// The field the aggregation is bound to.
    #[must_use]
    pub const fn field(&self) -> &FieldReference {
        &self.field
    }

    /// The buckets, in caller-insertion order.
    #[must_use]
    pub fn ranges(&self) -> &[Range<F>] {
        &self.ranges
    }

    /// The cross-cutting result filter, if any.
    #[must_use]
    pub const fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Indices of every bucket containing the value.
    ///
    /// Buckets may overlap, so a value can land in several; a duplicated
    /// bucket reports each of its positions.
    #[must_use]
    pub fn matching_buckets(&self, value: &F) -> Vec<usize>
    where
        F: PartialOrd,
    {
        self.ranges
            .iter()
            .enumerate()
            .filter(|(_, range)| range.contains(value))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Initial step of a range aggregation definition: add the first bucket.
#[derive(Debug)]
pub struct RangeAggregationBuilder<F> {
    field: FieldReference,
    ranges: Vec<Range<F>>,
}

impl<F> RangeAggregationBuilder<F> {
    /// Bind a range aggregation builder to a field.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::FieldTypeMismatch`] unless the field is
    /// declared with a numeric type.
    pub fn for_field(field: FieldReference) -> Result<Self, AggregationError> {
        if !field.field_type().is_numeric() {
            return Err(AggregationError::FieldTypeMismatch {
                field: field.name().to_string(),
                expected: "a numeric type".to_string(),
                actual: field.field_type(),
            });
        }
        Ok(Self { field, ranges: Vec::new() })
    }

    /// Append the first bucket and continue with the range-or-options step.
    #[must_use]
    pub fn range(mut self, range: Range<F>) -> RangeAggregationOptionsBuilder<F> {
        self.ranges.push(range);
        RangeAggregationOptionsBuilder { field: self.field, ranges: self.ranges, filter: None }
    }

    /// Finalize with no buckets.
    #[must_use]
    pub fn build(self) -> RangeAggregation<F> {
        RangeAggregation::new(self.field, self.ranges)
    }
}

/// Continuation step: add more buckets or set options and finalize.
#[derive(Debug)]
pub struct RangeAggregationOptionsBuilder<F> {
    field: FieldReference,
    ranges: Vec<Range<F>>,
    filter: Option<Filter>,
}

impl<F> RangeAggregationOptionsBuilder<F> {
    /// Append one more bucket.
    ///
    /// Buckets are kept exactly in call order; nothing is sorted, merged,
    /// or deduplicated.
    #[must_use]
    pub fn range(mut self, range: Range<F>) -> Self {
        self.ranges.push(range);
        self
    }

    /// Set a cross-cutting result filter.
    ///
    /// The filter restricts which documents are counted; it does not
    /// constrain bucket membership.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Capture the accumulated state into an immutable descriptor.
    #[must_use]
    pub fn build(self) -> RangeAggregation<F> {
        debug!(field = %self.field.name(), buckets = self.ranges.len(), "built range aggregation");

        RangeAggregation { field: self.field, ranges: self.ranges, filter: self.filter }
    }
}
