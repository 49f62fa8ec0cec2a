//! Property tests for the quick estimator.

use estima::{estimate_quick, TriadDials};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Lower bounds hold for every dial combination.
    #[test]
    fn property_lower_bounds_never_violated(
        quality in 0i64..=100,
        urgency in 0i64..=100,
        scope in 0i64..=100,
    ) {
        let result = estimate_quick(&TriadDials::new(quality, urgency, scope));
        prop_assert!(result.effort_days >= 5);
        prop_assert!(result.team_size >= 1);
        prop_assert!(result.price >= 2500, "base price is the floor, got {}", result.price);
    }

    /// PROPERTY: Increasing scope never decreases the price.
    #[test]
    fn property_price_monotone_in_scope(
        quality in 0i64..=100,
        urgency in 0i64..=100,
        scope in 0i64..100,
        bump in 1i64..=20,
    ) {
        let lower = estimate_quick(&TriadDials::new(quality, urgency, scope));
        let higher = estimate_quick(&TriadDials::new(quality, urgency, (scope + bump).min(100)));
        prop_assert!(higher.price >= lower.price);
    }

    /// PROPERTY: Increasing urgency never decreases the price.
    #[test]
    fn property_price_monotone_in_urgency(
        quality in 0i64..=100,
        urgency in 0i64..100,
        scope in 0i64..=100,
        bump in 1i64..=20,
    ) {
        let lower = estimate_quick(&TriadDials::new(quality, urgency, scope));
        let higher = estimate_quick(&TriadDials::new(quality, (urgency + bump).min(100), scope));
        prop_assert!(higher.price >= lower.price);
    }

    /// PROPERTY: Identical inputs produce identical results.
    #[test]
    fn property_idempotent(
        quality in 0i64..=100,
        urgency in 0i64..=100,
        scope in 0i64..=100,
    ) {
        let dials = TriadDials::new(quality, urgency, scope);
        prop_assert_eq!(estimate_quick(&dials), estimate_quick(&dials));
    }

    /// PROPERTY: Out-of-range raw input behaves exactly like its clamp.
    #[test]
    fn property_out_of_range_input_is_clamped(
        quality in -500i64..=500,
        urgency in -500i64..=500,
        scope in -500i64..=500,
    ) {
        let raw = estimate_quick(&TriadDials::new(quality, urgency, scope));
        let clamped = estimate_quick(&TriadDials::new(
            quality.clamp(0, 100),
            urgency.clamp(0, 100),
            scope.clamp(0, 100),
        ));
        prop_assert_eq!(raw, clamped);
    }
}
