//! Pro estimator
//!
//! Converts a complexity score plus commercial parameters into hours, price,
//! schedule and margin. Pure and total: degenerate commercial inputs are
//! sanitized at the boundary (see `CommercialParameters`), so every path
//! here produces finite numbers.

use crate::domain::entities::{CommercialParameters, ComplexitySelection};
use crate::domain::services::complexity::{classify, ComplexityScore};

/// Hours of work one complexity point represents
const HOURS_PER_POINT: u32 = 12;
/// Billable hours per developer per week
const WEEKLY_HOURS_PER_DEV: u32 = 30;

/// Result of a pro estimation - derived, never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProEstimate {
    pub score: ComplexityScore,
    /// Base hours times the quality-tier multiplier, rounded up
    pub estimated_hours: u32,
    /// `estimated_hours * hourly_rate`
    pub suggested_price: f64,
    /// Schedule at 30 billable hours per developer per week, at least 1
    pub estimated_weeks: u32,
    /// `client_offer - suggested_price`; `None` while there is no offer,
    /// negative when the offer is below cost (never clamped to zero)
    pub profit_margin: Option<f64>,
}

/// Compute the pro estimate for a matrix selection and commercial terms
pub fn estimate_pro(
    selection: &ComplexitySelection,
    commercial: &CommercialParameters,
) -> ProEstimate {
    let score = classify(selection);

    let base_hours = u32::from(score.total_points) * HOURS_PER_POINT;
    let estimated_hours =
        (f64::from(base_hours) * commercial.quality_tier.hour_multiplier()).ceil() as u32;

    let suggested_price = f64::from(estimated_hours) * commercial.hourly_rate;

    let weekly_capacity = WEEKLY_HOURS_PER_DEV * commercial.developer_count.max(1);
    let estimated_weeks = estimated_hours.div_ceil(weekly_capacity).max(1);

    let profit_margin = commercial
        .client_offer
        .map(|offer| offer - suggested_price);

    ProEstimate {
        score,
        estimated_hours,
        suggested_price,
        estimated_weeks,
        profit_margin,
    }
}
