//! Core data types shared across the search subsystem.

mod geo;
mod value;

pub use geo::{GeoPoint, EARTH_MEAN_RADIUS_METERS};
pub use value::Value;
