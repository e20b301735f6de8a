//! Property-based tests for multi-value reduction.

#![allow(clippy::expect_used, clippy::float_cmp)]

use proptest::prelude::*;

use super::mode::MultiValueMode;

/// Strategy for non-empty key vectors of finite floats.
fn arb_keys() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e9f64..1.0e9, 1..32)
}

proptest! {
    #[test]
    fn median_is_an_element_of_the_input(keys in arb_keys()) {
        let median = MultiValueMode::Median.reduce(&keys).expect("non-empty input");
        prop_assert!(keys.contains(&median));
    }

    #[test]
    fn median_is_the_lower_middle(keys in arb_keys()) {
        let median = MultiValueMode::Median.reduce(&keys).expect("non-empty input");
        let below = keys.iter().filter(|k| **k < median).count();
        let above = keys.iter().filter(|k| **k > median).count();
        // Lower median: at most (n-1)/2 keys strictly below, at most n/2
        // strictly above.
        prop_assert!(below <= (keys.len() - 1) / 2);
        prop_assert!(above <= keys.len() / 2);
    }

    #[test]
    fn avg_lies_within_min_and_max(keys in arb_keys()) {
        let min = MultiValueMode::Min.reduce(&keys).expect("non-empty input");
        let max = MultiValueMode::Max.reduce(&keys).expect("non-empty input");
        let avg = MultiValueMode::Avg.reduce(&keys).expect("non-empty input");
        prop_assert!(min <= avg && avg <= max);
    }

    #[test]
    fn min_and_max_bound_every_key(keys in arb_keys()) {
        let min = MultiValueMode::Min.reduce(&keys).expect("non-empty input");
        let max = MultiValueMode::Max.reduce(&keys).expect("non-empty input");
        for key in &keys {
            prop_assert!(min <= *key && *key <= max);
        }
    }

    #[test]
    fn singleton_reduces_to_itself(key in -1.0e9f64..1.0e9) {
        for mode in [
            MultiValueMode::Min,
            MultiValueMode::Max,
            MultiValueMode::Avg,
            MultiValueMode::Median,
            MultiValueMode::Sum,
        ] {
            prop_assert_eq!(mode.reduce(&[key]), Some(key));
        }
    }
}
