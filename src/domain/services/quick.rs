//! Quick estimator
//!
//! Pure closed-form pricing over the three iron-triad dials. No I/O, no
//! state - the result is always a function of the current dial positions,
//! so callers recompute on every change instead of caching.

use crate::domain::value_objects::TriadDials;

/// Base price in currency units before any multiplier
const BASE_PRICE: f64 = 2500.0;
/// Price added per scope point
const SCOPE_UNIT: f64 = 300.0;
/// Floor for the delivery estimate, in days
const MIN_EFFORT_DAYS: u32 = 5;

/// Result of a quick estimation - derived, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickEstimate {
    /// Whole currency units (fractional part floored)
    pub price: i64,
    /// Calendar days of effort, at least 5
    pub effort_days: u32,
    /// Recommended developers, at least 1
    pub team_size: u32,
}

/// Compute price, effort and team size from the three dials
///
/// Total for any in-range input; dials clamp on construction so there is
/// no failure path.
pub fn estimate_quick(dials: &TriadDials) -> QuickEstimate {
    let quality = dials.quality.percent();
    let urgency = dials.urgency.percent();
    let scope = dials.scope.percent();

    let quality_multiplier = 1.0 + quality / 100.0;
    let urgency_multiplier = 1.0 + (urgency * 1.5) / 100.0;
    let raw_price = (BASE_PRICE + scope * SCOPE_UNIT) * quality_multiplier * urgency_multiplier;

    let raw_days = (scope * 2.0) * (1.0 + quality / 200.0);
    let speed_factor = 1.0 - urgency / 150.0;
    let effort_days = (raw_days * speed_factor).ceil() as u32;

    let mut team_size = 1;
    if dials.scope.value() > 50 {
        team_size += 2;
    }
    if dials.urgency.value() > 70 {
        team_size += 2;
    }
    if dials.quality.value() > 80 {
        team_size += 1;
    }

    QuickEstimate {
        price: raw_price.floor() as i64,
        effort_days: effort_days.max(MIN_EFFORT_DAYS),
        team_size,
    }
}
