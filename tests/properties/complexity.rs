//! Property tests for complexity classification.

use estima::{classify, ComplexityLevel, ComplexitySelection, CriterionKey, Weight};
use proptest::prelude::*;

fn arb_weight() -> impl Strategy<Value = Weight> {
    prop_oneof![
        Just(Weight::Light),
        Just(Weight::Moderate),
        Just(Weight::Heavy),
    ]
}

fn arb_selection() -> impl Strategy<Value = ComplexitySelection> {
    (arb_weight(), arb_weight(), arb_weight(), arb_weight()).prop_map(|(s, d, db, i)| {
        ComplexitySelection::new()
            .with(CriterionKey::Screens, s)
            .with(CriterionKey::Design, d)
            .with(CriterionKey::Database, db)
            .with(CriterionKey::Integrations, i)
    })
}

proptest! {
    /// PROPERTY: Total points always land in [4, 12].
    #[test]
    fn property_total_points_in_range(selection in arb_selection()) {
        let score = classify(&selection);
        prop_assert!((4..=12).contains(&score.total_points));
    }

    /// PROPERTY: Classification is total over [4, 12] with no gaps
    /// or overlaps - each total maps to exactly one level.
    #[test]
    fn property_buckets_cover_without_overlap(selection in arb_selection()) {
        let score = classify(&selection);
        prop_assert!((4..=12).contains(&score.total_points));
        let expected = match score.total_points {
            0..=5 => ComplexityLevel::Low,
            6..=9 => ComplexityLevel::Medium,
            _ => ComplexityLevel::High,
        };
        prop_assert_eq!(score.level, expected);
    }

    /// PROPERTY: The score is a pure function of the selection.
    #[test]
    fn property_idempotent(selection in arb_selection()) {
        prop_assert_eq!(classify(&selection), classify(&selection));
    }

    /// PROPERTY: Raising one criterion's weight never lowers the level.
    #[test]
    fn property_level_monotone_in_weight(selection in arb_selection()) {
        for key in CriterionKey::all() {
            let mut heavier = selection;
            heavier.select(key, Weight::Heavy);
            prop_assert!(classify(&heavier).level >= classify(&selection).level);
        }
    }
}
