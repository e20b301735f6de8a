//! Meridian Search
//!
//! The sort and aggregation construction layer of the Meridian search
//! engine: it turns declarative sort and aggregation requests into
//! fully-parameterized, immutable descriptors for the execution engine,
//! validating every combination at query-build time.
//!
//! # Overview
//!
//! - [`sort`] - per-kind sort builders, the mode policy, and the
//!   [`ComparatorSource`](sort::ComparatorSource) descriptor
//! - [`aggregation`] - half-open [`Range`](aggregation::Range) buckets and
//!   the range aggregation builder chain
//! - [`bridge`] - declarative value-bridge references, the injected
//!   registry, and reference resolution
//! - [`context`] - the [`SearchContext`](context::SearchContext) factory
//!   boundary binding builders to catalog fields
//! - [`filter`] - opaque predicate descriptors threaded into descriptors
//!
//! Everything here fails loudly and synchronously: an illegal mode, a
//! missing required parameter, a conflicting bridge reference, or an
//! inverted range is an error at the offending call, never a deferred scan
//! failure and never a silent fallback.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use meridian_core::catalog::StaticCatalog;
//! use meridian_core::schema::{FieldReference, FieldType};
//! use meridian_core::types::{GeoPoint, Value};
//! use meridian_search::bridge::BridgeRegistry;
//! use meridian_search::context::SearchContext;
//! use meridian_search::sort::SortMode;
//!
//! let catalog = StaticCatalog::new()
//!     .with_field(FieldReference::new("location", FieldType::Geo).multi_valued());
//! let context = SearchContext::new(Arc::new(catalog), Arc::new(BridgeRegistry::with_defaults()));
//!
//! let sort = context
//!     .distance_sort("location")
//!     .unwrap()
//!     .center(GeoPoint::new(48.8566, 2.3522).unwrap())
//!     .mode(SortMode::Median)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! // The descriptor computes per-document comparison keys for the engine.
//! let values = vec![Value::from(GeoPoint::new(48.86, 2.35).unwrap())];
//! assert!(sort.comparison_key(&values).is_some());
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod aggregation;
pub mod bridge;
pub mod context;
pub mod error;
pub mod filter;
pub mod sort;

// Re-export commonly used types
pub use aggregation::{Range, RangeAggregation, RangeAggregationBuilder};
pub use bridge::{BridgeRef, BridgeRegistry, ValueBridge};
pub use context::SearchContext;
pub use error::{AggregationError, BridgeError, SortError};
pub use filter::{Filter, NestedFilter};
pub use sort::{
    ComparatorSource, DistanceSortBuilder, FieldSortBuilder, MultiValueMode, SortKind, SortMode,
    SortOrder,
};
