//! Sort modes, multi-value reduction, and the per-kind mode policy.
//!
//! Not every reduction mode is legal for every sort kind: summing distances
//! has no defined comparison semantics, so a distance sort rejects
//! [`SortMode::Sum`] while a plain field sort accepts it. The legal sets are
//! declared as data ([`allowed_modes`]) and consulted by a single
//! [`validate_mode`] function, so extending them is a table edit rather than
//! a control-flow change.

use std::fmt;

use meridian_core::schema::FieldReference;
use serde::{Deserialize, Serialize};

use crate::error::SortError;

/// The caller-requested reduction mode for a multi-valued field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Pick the lowest value.
    Min,
    /// Pick the highest value.
    Max,
    /// Compute the arithmetic mean of all values.
    Avg,
    /// Pick the middle value (lower median for even counts).
    Median,
    /// Compute the sum of all values.
    Sum,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Avg => "avg",
            Self::Median => "median",
            Self::Sum => "sum",
        };
        write!(f, "{name}")
    }
}

/// The category of ordering request, keying the mode policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKind {
    /// Order by a field's own values.
    Field,
    /// Order by great-circle distance from a center point.
    Distance,
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Field => "field",
            Self::Distance => "distance",
        };
        write!(f, "{name}")
    }
}

/// Modes legal for a distance sort. Sum is absent: distances are compared,
/// and a sum of distances orders documents by value count as much as by
/// proximity.
const DISTANCE_MODES: &[SortMode] =
    &[SortMode::Min, SortMode::Max, SortMode::Avg, SortMode::Median];

/// Modes legal for a plain field sort.
const FIELD_MODES: &[SortMode] =
    &[SortMode::Min, SortMode::Max, SortMode::Avg, SortMode::Median, SortMode::Sum];

/// The set of modes legal for a sort kind.
#[must_use]
pub const fn allowed_modes(kind: SortKind) -> &'static [SortMode] {
    match kind {
        SortKind::Field => FIELD_MODES,
        SortKind::Distance => DISTANCE_MODES,
    }
}

/// Validate a requested mode against a sort kind.
///
/// Pure: no state, no coercion. A rejected mode is an error carrying the
/// mode and the field context for diagnostics; it is never silently
/// replaced by a default, since that would change result ordering.
///
/// # Errors
///
/// Returns [`SortError::InvalidModeForSortKind`] if the mode is not in the
/// kind's legal set.
pub fn validate_mode(
    kind: SortKind,
    mode: SortMode,
    field: &FieldReference,
) -> Result<(), SortError> {
    if allowed_modes(kind).contains(&mode) {
        Ok(())
    } else {
        Err(SortError::InvalidModeForSortKind { mode, kind, field: field.name().to_string() })
    }
}

/// The reduction strategy recorded in a built descriptor.
///
/// Derived from the requested [`SortMode`]; when no mode was requested the
/// builder falls back to [`MultiValueMode::Min`], matching the ascending
/// sort convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultiValueMode {
    /// Pick the lowest value.
    #[default]
    Min,
    /// Pick the highest value.
    Max,
    /// Compute the arithmetic mean of all values.
    Avg,
    /// Pick the middle value (lower median for even counts).
    Median,
    /// Compute the sum of all values.
    Sum,
}

impl From<SortMode> for MultiValueMode {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::Min => Self::Min,
            SortMode::Max => Self::Max,
            SortMode::Avg => Self::Avg,
            SortMode::Median => Self::Median,
            SortMode::Sum => Self::Sum,
        }
    }
}

impl MultiValueMode {
    /// Reduce a document's per-value sort keys to a single comparison key.
    ///
    /// Returns `None` for a document with no values: such a document sorts
    /// as if the field were absent, which is governed by the missing-value
    /// policy, not by this reduction.
    ///
    /// Median picks the lower of the two middle values for even counts, so
    /// the key is always one of the inputs.
    #[must_use]
    pub fn reduce(&self, keys: &[f64]) -> Option<f64> {
        if keys.is_empty() {
            return None;
        }

        let reduced = match self {
            Self::Min => keys.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => keys.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Avg => keys.iter().sum::<f64>() / keys.len() as f64,
            Self::Median => {
                let mut sorted = keys.to_vec();
                sorted.sort_unstable_by(f64::total_cmp);
                sorted[(sorted.len() - 1) / 2]
            }
            Self::Sum => keys.iter().sum(),
        };

        Some(reduced)
    }
}
