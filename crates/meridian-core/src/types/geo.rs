//! Geographic point type and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Mean earth radius in meters (IUGG), used by the spherical distance model.
pub const EARTH_MEAN_RADIUS_METERS: f64 = 6_371_008.8;

/// A geographic point on the WGS84 spheroid.
///
/// Points are plain values with no identity: two points with the same
/// coordinates are interchangeable. Latitude is constrained to `[-90, 90]`
/// and longitude to `[-180, 180]`; the constructor rejects anything else.
///
/// # Example
///
/// ```
/// use meridian_core::types::GeoPoint;
///
/// let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
/// let london = GeoPoint::new(51.5074, -0.1278).unwrap();
///
/// // Great-circle distance in meters
/// let distance = paris.distance_to(&london);
/// assert!((distance - 343_550.0).abs() < 1_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    ///
    /// # Errors
    ///
    /// Returns an error if latitude is outside `[-90, 90]` or longitude is
    /// outside `[-180, 180]` (NaN is rejected by both checks).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::InvalidCoordinate {
                coordinate: "latitude",
                value: latitude,
                min: -90.0,
                max: 90.0,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::InvalidCoordinate {
                coordinate: "longitude",
                value: longitude,
                min: -180.0,
                max: 180.0,
            });
        }
        Ok(Self { latitude, longitude })
    }

    /// The latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point, in meters.
    ///
    /// Uses the haversine formula over the mean earth radius
    /// ([`EARTH_MEAN_RADIUS_METERS`]), matching the spherical model used by
    /// the index-side distance comparators.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat_a = self.latitude.to_radians();
        let lat_b = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_MEAN_RADIUS_METERS * h.sqrt().asin()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
