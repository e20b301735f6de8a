//! Sort construction tests for `meridian-search`.
//!
//! These tests verify:
//! - Mode policy enforcement per sort kind
//! - Bind-time field type checks
//! - Required-parameter checks at build time
//! - Nested filter scoping
//! - Multi-value comparison key computation
//! - Descriptor defaults and serialization

use std::sync::Arc;

use meridian_core::catalog::StaticCatalog;
use meridian_core::schema::{FieldReference, FieldType, NestedPath};
use meridian_core::types::{GeoPoint, Value, EARTH_MEAN_RADIUS_METERS};
use meridian_search::bridge::BridgeRegistry;
use meridian_search::context::SearchContext;
use meridian_search::error::SortError;
use meridian_search::filter::{Filter, NestedFilter};
use meridian_search::sort::{
    ComparatorParams, MissingValue, MultiValueMode, SortKind, SortMode, SortOrder,
};

fn context() -> SearchContext {
    let catalog = StaticCatalog::new()
        .with_field(FieldReference::new("location", FieldType::Geo).multi_valued())
        .with_field(FieldReference::new("price", FieldType::Float).multi_valued())
        .with_field(FieldReference::new("rating", FieldType::Integer))
        .with_field(FieldReference::new("title", FieldType::Text))
        .with_field(FieldReference::new("payload", FieldType::Bytes))
        .with_field(
            FieldReference::new("offers.location", FieldType::Geo)
                .with_nested_path("offers")
                .expect("valid path")
                .multi_valued(),
        );
    SearchContext::new(Arc::new(catalog), Arc::new(BridgeRegistry::with_defaults()))
}

fn paris() -> GeoPoint {
    GeoPoint::new(48.8566, 2.3522).expect("valid point")
}

/// A point at the given great-circle distance due north of `from`.
fn point_at_distance(from: GeoPoint, meters: f64) -> GeoPoint {
    let delta_degrees = (meters / EARTH_MEAN_RADIUS_METERS).to_degrees();
    GeoPoint::new(from.latitude() + delta_degrees, from.longitude()).expect("valid point")
}

// ============================================================================
// Mode Policy
// ============================================================================

mod mode_policy {
    use super::*;

    #[test]
    fn distance_sort_rejects_sum() {
        let result = context().distance_sort("location").unwrap().mode(SortMode::Sum);
        match result {
            Err(SortError::InvalidModeForSortKind { mode, kind, field }) => {
                assert_eq!(mode, SortMode::Sum);
                assert_eq!(kind, SortKind::Distance);
                assert_eq!(field, "location");
            }
            other => panic!("expected InvalidModeForSortKind, got {other:?}"),
        }
    }

    #[test]
    fn distance_sort_retains_median() {
        let sort = context()
            .distance_sort("location")
            .unwrap()
            .mode(SortMode::Median)
            .unwrap()
            .center(paris())
            .build()
            .unwrap();
        assert_eq!(sort.mode(), MultiValueMode::Median);
    }

    #[test]
    fn field_sort_accepts_sum() {
        let sort = context().field_sort("price").unwrap().mode(SortMode::Sum).unwrap().build().unwrap();
        assert_eq!(sort.mode(), MultiValueMode::Sum);
    }
}

// ============================================================================
// Bind-Time Field Type Checks
// ============================================================================

mod bind_time_checks {
    use super::*;

    #[test]
    fn distance_sort_requires_geo_field() {
        match context().distance_sort("title") {
            Err(SortError::FieldTypeMismatch { field, actual, .. }) => {
                assert_eq!(field, "title");
                assert_eq!(actual, FieldType::Text);
            }
            other => panic!("expected FieldTypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn field_sort_rejects_geo_and_bytes() {
        assert!(matches!(
            context().field_sort("location"),
            Err(SortError::FieldTypeMismatch { .. })
        ));
        assert!(matches!(
            context().field_sort("payload"),
            Err(SortError::FieldTypeMismatch { .. })
        ));
    }

    #[test]
    fn unknown_field_is_rejected_at_the_factory() {
        assert!(matches!(
            context().distance_sort("nope"),
            Err(SortError::UnknownField(name)) if name == "nope"
        ));
    }
}

// ============================================================================
// Required Parameters
// ============================================================================

mod required_parameters {
    use super::*;

    #[test]
    fn distance_sort_requires_a_center() {
        let result = context().distance_sort("location").unwrap().build();
        match result {
            Err(SortError::MissingRequiredParameter { parameter, field }) => {
                assert_eq!(parameter, "center");
                assert_eq!(field, "location");
            }
            other => panic!("expected MissingRequiredParameter, got {other:?}"),
        }
    }

    #[test]
    fn distance_sort_builds_once_center_is_set() {
        let sort = context().distance_sort("location").unwrap().center(paris()).build().unwrap();
        assert_eq!(sort.kind(), SortKind::Distance);
        assert!(matches!(sort.params(), ComparatorParams::Distance { .. }));
    }
}

// ============================================================================
// Nested Filter Scoping
// ============================================================================

mod nested_scoping {
    use super::*;

    #[test]
    fn filter_on_the_field_scope_is_accepted() {
        let path = NestedPath::new("offers").unwrap();
        let filter = NestedFilter::new(path.clone(), Filter::eq("offers.in_stock", true));

        let sort = context()
            .distance_sort("offers.location")
            .unwrap()
            .center(paris())
            .nested_filter(filter)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(sort.nested_path(), Some(&path));
        assert!(sort.nested_filter().is_some());
    }

    #[test]
    fn filter_on_another_scope_is_rejected() {
        let filter =
            NestedFilter::new(NestedPath::new("variants").unwrap(), Filter::True);

        let result =
            context().distance_sort("offers.location").unwrap().nested_filter(filter);
        match result {
            Err(SortError::NestedScopeMismatch { field, filter_path }) => {
                assert_eq!(field, "offers.location");
                assert_eq!(filter_path, "variants");
            }
            other => panic!("expected NestedScopeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn filter_on_an_unnested_field_is_rejected() {
        let filter = NestedFilter::new(NestedPath::new("offers").unwrap(), Filter::True);
        assert!(matches!(
            context().distance_sort("location").unwrap().nested_filter(filter),
            Err(SortError::NestedScopeMismatch { .. })
        ));
    }
}

// ============================================================================
// Comparison Keys
// ============================================================================

mod comparison_keys {
    use super::*;

    #[test]
    fn median_distance_selects_the_middle_value() {
        let center = paris();
        let sort = context()
            .distance_sort("location")
            .unwrap()
            .center(center)
            .mode(SortMode::Median)
            .unwrap()
            .build()
            .unwrap();

        // Three geo values at 1 km, 5 km, and 3 km from the center
        let values = vec![
            Value::from(point_at_distance(center, 1_000.0)),
            Value::from(point_at_distance(center, 5_000.0)),
            Value::from(point_at_distance(center, 3_000.0)),
        ];

        let key = sort.comparison_key(&values).expect("has values");
        assert!((key - 3_000.0).abs() < 1.0, "expected the median distance, got {key}");
    }

    #[test]
    fn min_and_max_distance_pick_the_extrema() {
        let center = paris();
        let values = vec![
            Value::from(point_at_distance(center, 1_000.0)),
            Value::from(point_at_distance(center, 5_000.0)),
            Value::from(point_at_distance(center, 3_000.0)),
        ];

        let min_sort =
            context().distance_sort("location").unwrap().center(center).build().unwrap();
        let key = min_sort.comparison_key(&values).expect("has values");
        assert!((key - 1_000.0).abs() < 1.0);

        let max_sort = context()
            .distance_sort("location")
            .unwrap()
            .center(center)
            .mode(SortMode::Max)
            .unwrap()
            .build()
            .unwrap();
        let key = max_sort.comparison_key(&values).expect("has values");
        assert!((key - 5_000.0).abs() < 1.0);
    }

    #[test]
    fn documents_without_values_have_no_key() {
        let sort = context().distance_sort("location").unwrap().center(paris()).build().unwrap();
        assert_eq!(sort.comparison_key(&[]), None);
        // Values of the wrong type contribute nothing
        assert_eq!(sort.comparison_key(&[Value::from("not a point")]), None);
    }

    #[test]
    fn field_sort_reduces_numeric_values() {
        let sort = context()
            .field_sort("price")
            .unwrap()
            .mode(SortMode::Avg)
            .unwrap()
            .build()
            .unwrap();

        let values = vec![Value::from(10.0f64), Value::from(20i64)];
        assert_eq!(sort.comparison_key(&values), Some(15.0));
    }
}

// ============================================================================
// Defaults and Serialization
// ============================================================================

mod descriptor_shape {
    use super::*;

    #[test]
    fn defaults_are_min_asc_missing_last() {
        let sort = context().field_sort("rating").unwrap().build().unwrap();
        assert_eq!(sort.mode(), MultiValueMode::Min);
        assert_eq!(sort.order(), SortOrder::Asc);
        assert!(matches!(
            sort.params(),
            ComparatorParams::Field { missing: MissingValue::Last }
        ));
    }

    #[test]
    fn explicit_order_and_missing_are_recorded() {
        let sort = context()
            .field_sort("rating")
            .unwrap()
            .desc()
            .missing(MissingValue::First)
            .build()
            .unwrap();
        assert_eq!(sort.order(), SortOrder::Desc);
        assert!(matches!(
            sort.params(),
            ComparatorParams::Field { missing: MissingValue::First }
        ));
    }

    #[test]
    fn descriptor_round_trips_through_serde() {
        let sort = context()
            .distance_sort("offers.location")
            .unwrap()
            .center(paris())
            .mode(SortMode::Avg)
            .unwrap()
            .desc()
            .build()
            .unwrap();

        let json = serde_json::to_string(&sort).expect("serializes");
        let back: meridian_search::sort::ComparatorSource =
            serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, sort);
    }
}
