//! Sort clause construction.
//!
//! A sort clause is built in three stages: a builder is bound to a field
//! (type compatibility checked at bind time), fluent steps accumulate
//! parameters (each validated at the point of the call), and `build()`
//! captures the state into an immutable [`ComparatorSource`] for the
//! execution engine.

mod builder;
mod comparator;
mod mode;

#[cfg(test)]
mod proptest_tests;

pub use builder::{DistanceSortBuilder, FieldSortBuilder};
pub use comparator::{ComparatorParams, ComparatorSource, MissingValue, SortOrder};
pub use mode::{allowed_modes, validate_mode, MultiValueMode, SortKind, SortMode};
