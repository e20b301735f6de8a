//! Meridian Core
//!
//! This crate provides the fundamental types shared across the Meridian
//! search engine's query-construction layer.
//!
//! # Overview
//!
//! - **Values**: [`Value`] enum covering every type a document field may hold
//! - **Geo**: [`GeoPoint`] with validated WGS84 coordinates and great-circle
//!   distance
//! - **Field model**: [`FieldType`], [`NestedPath`], and [`FieldReference`],
//!   the typed handles query builders are bound to
//! - **Catalog**: [`FieldCatalog`] lookup boundary with a map-backed
//!   [`StaticCatalog`] implementation
//!
//! # Example
//!
//! ```
//! use meridian_core::catalog::{FieldCatalog, StaticCatalog};
//! use meridian_core::schema::{FieldReference, FieldType};
//! use meridian_core::types::{GeoPoint, Value};
//!
//! let catalog = StaticCatalog::new()
//!     .with_field(FieldReference::new("location", FieldType::Geo).multi_valued());
//!
//! let field = catalog.field("location").unwrap();
//! assert_eq!(field.field_type(), FieldType::Geo);
//!
//! let value = Value::from(GeoPoint::new(48.8566, 2.3522).unwrap());
//! assert!(value.as_geo().is_some());
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod error;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use catalog::{EmptyCatalog, FieldCatalog, StaticCatalog};
pub use error::CoreError;
pub use schema::{FieldReference, FieldType, NestedPath};
pub use types::{GeoPoint, Value};
