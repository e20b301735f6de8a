//! Property values that can be stored in document fields.
//!
//! This module provides the [`Value`] enum, which represents all possible
//! value types a document field may hold on its way into the index.
//!
//! # Example
//!
//! ```
//! use meridian_core::types::Value;
//!
//! // Create values via From trait
//! let title: Value = "north face".into();
//! let rating: Value = 4i64.into();
//! let price: Value = 12.5f64.into();
//!
//! // Access typed values
//! assert_eq!(title.as_str(), Some("north face"));
//! assert_eq!(rating.as_int(), Some(4));
//! assert_eq!(price.as_float(), Some(12.5));
//!
//! // Integers coerce to f64 for numeric sort keys
//! assert_eq!(rating.as_f64(), Some(4.0));
//! ```

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

/// A value held by a document field.
///
/// Multi-valued fields hold several `Value`s per document; the reduction
/// applied when sorting or aggregating over them is chosen at query-build
/// time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Geographic point (WGS84 latitude/longitude)
    Geo(GeoPoint),
    /// Array of values
    Array(Vec<Value>),
}

impl Value {
    /// Get the value as a boolean, if it is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, if it is one.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as an `f64`, coercing integers.
    ///
    /// This is the numeric view used for sort keys and range bucketing,
    /// where `Int` and `Float` fields share comparison semantics.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a string slice, if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a byte slice, if it is one.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get the value as a geographic point, if it is one.
    #[must_use]
    pub const fn as_geo(&self) -> Option<GeoPoint> {
        match self {
            Self::Geo(p) => Some(*p),
            _ => None,
        }
    }

    /// Get the value as an array, if it is one.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns true if the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short name for the value's type, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Geo(_) => "geo_point",
            Self::Array(_) => "array",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<GeoPoint> for Value {
    fn from(p: GeoPoint) -> Self {
        Self::Geo(p)
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Self::Array(a)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn typed_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(7i64).as_int(), Some(7));
        assert_eq!(Value::from(1.5f64).as_float(), Some(1.5));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::Null.is_null());
    }

    #[test]
    fn accessors_reject_other_types() {
        assert_eq!(Value::from("x").as_int(), None);
        assert_eq!(Value::from(1i64).as_str(), None);
        assert_eq!(Value::Null.as_f64(), None);
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(Value::from(3i64).as_f64(), Some(3.0));
        assert_eq!(Value::from(2.5f64).as_f64(), Some(2.5));
        assert_eq!(Value::from("3").as_f64(), None);
    }

    #[test]
    fn geo_accessor() {
        let p = GeoPoint::new(1.0, 2.0).unwrap();
        assert_eq!(Value::from(p).as_geo(), Some(p));
        assert_eq!(Value::from(1.0f64).as_geo(), None);
    }

    #[test]
    fn serde_round_trip() {
        let values = vec![
            Value::Null,
            Value::from(true),
            Value::from(-3i64),
            Value::from(2.25f64),
            Value::from("text"),
            Value::from(GeoPoint::new(48.8566, 2.3522).unwrap()),
            Value::Array(vec![Value::from(1i64), Value::from(2i64)]),
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }
}
