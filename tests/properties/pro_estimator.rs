//! Property tests for the pro estimator and raw-form coercion.

use estima::{
    estimate_pro, classify, CommercialParameters, ComplexitySelection, CriterionKey, QualityTier,
    RawCommercialForm, Weight,
};
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

fn arb_commercial() -> impl Strategy<Value = CommercialParameters> {
    (
        0.0f64..=1000.0,
        1u32..=20,
        1i64..=3,
        proptest::option::of(0.0f64..=500_000.0),
    )
        .prop_map(|(rate, devs, tier, offer)| {
            CommercialParameters::new(rate, devs, QualityTier::from_number(tier), offer)
        })
}

proptest! {
    /// PROPERTY: Every numeric output is finite and schedule/hours
    /// respect their lower bounds - no NaN escapes the boundary.
    #[test]
    fn property_outputs_finite_and_bounded(
        selection in arb_selection(),
        commercial in arb_commercial(),
    ) {
        let result = estimate_pro(&selection, &commercial);
        prop_assert!(result.suggested_price.is_finite());
        prop_assert!(result.estimated_hours >= 48, "4 points * 12h is the minimum");
        prop_assert!(result.estimated_weeks >= 1);
        if let Some(margin) = result.profit_margin {
            prop_assert!(margin.is_finite());
        }
    }

    /// PROPERTY: Margin exists exactly when an offer exists, and equals
    /// offer minus suggested price (sign preserved).
    #[test]
    fn property_margin_mirrors_offer(
        selection in arb_selection(),
        commercial in arb_commercial(),
    ) {
        let result = estimate_pro(&selection, &commercial);
        match commercial.client_offer {
            Some(offer) => {
                prop_assert_eq!(result.profit_margin, Some(offer - result.suggested_price));
            }
            None => prop_assert_eq!(result.profit_margin, None),
        }
    }

    /// PROPERTY: The estimate is consistent with its own classification.
    #[test]
    fn property_score_matches_classifier(
        selection in arb_selection(),
        commercial in arb_commercial(),
    ) {
        let result = estimate_pro(&selection, &commercial);
        prop_assert_eq!(result.score, classify(&selection));
    }

    /// PROPERTY: Identical inputs produce identical results.
    #[test]
    fn property_idempotent(
        selection in arb_selection(),
        commercial in arb_commercial(),
    ) {
        prop_assert_eq!(
            estimate_pro(&selection, &commercial),
            estimate_pro(&selection, &commercial)
        );
    }

    /// PROPERTY: Coercing arbitrary form garbage never panics and always
    /// yields sanitized parameters.
    #[test]
    fn property_raw_form_coercion_total(
        rate in "\\PC*",
        devs in "\\PC*",
        tier in "\\PC*",
        offer in "\\PC*",
    ) {
        let params = RawCommercialForm {
            hourly_rate: rate,
            developer_count: devs,
            quality_tier: tier,
            client_offer: offer,
        }
        .resolve();
        prop_assert!(params.hourly_rate >= 0.0 && params.hourly_rate.is_finite());
        prop_assert!(params.developer_count >= 1);
        if let Some(offer) = params.client_offer {
            prop_assert!(offer >= 0.0 && offer.is_finite());
        }
    }
}
