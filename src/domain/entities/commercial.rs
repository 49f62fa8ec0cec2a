//! Commercial parameters for the pro estimator
//!
//! The UI hands these over as raw form strings. Coercion happens here, at the
//! boundary, with documented fallbacks - the pricing formulas downstream never
//! see a NaN or a zero developer count.

use crate::domain::value_objects::QualityTier;
use serde::{Deserialize, Serialize};

/// Sanitized commercial inputs for a pro estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialParameters {
    /// Billable rate in currency units per hour, never negative
    pub hourly_rate: f64,
    /// Developers on the project, at least 1
    pub developer_count: u32,
    /// Deliverable quality tier
    pub quality_tier: QualityTier,
    /// What the client has offered so far; `None` means no offer yet,
    /// which is distinct from an explicit offer of zero
    pub client_offer: Option<f64>,
}

impl CommercialParameters {
    /// Create parameters, clamping degenerate values to their fallbacks
    pub fn new(
        hourly_rate: f64,
        developer_count: u32,
        quality_tier: QualityTier,
        client_offer: Option<f64>,
    ) -> Self {
        Self {
            hourly_rate: sanitize_rate(hourly_rate),
            developer_count: developer_count.max(1),
            quality_tier,
            client_offer: client_offer.filter(|offer| offer.is_finite() && *offer >= 0.0),
        }
    }
}

impl Default for CommercialParameters {
    fn default() -> Self {
        // The pro form's initial values.
        Self {
            hourly_rate: 150.0,
            developer_count: 1,
            quality_tier: QualityTier::Mvp,
            client_offer: None,
        }
    }
}

fn sanitize_rate(rate: f64) -> f64 {
    if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        0.0
    }
}

/// Commercial form fields exactly as the UI submits them
///
/// Every field is a free-text string; [`resolve`](Self::resolve) coerces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommercialForm {
    #[serde(default)]
    pub hourly_rate: String,
    #[serde(default)]
    pub developer_count: String,
    #[serde(default)]
    pub quality_tier: String,
    #[serde(default)]
    pub client_offer: String,
}

impl RawCommercialForm {
    /// Coerce the raw fields into usable parameters
    ///
    /// Fallbacks: unparsable/negative rate -> 0, unparsable/zero developer
    /// count -> 1, unparsable tier -> 1, blank or unparsable offer -> no
    /// offer. An explicit "0" offer is kept as an offer of zero.
    pub fn resolve(&self) -> CommercialParameters {
        let hourly_rate = self
            .hourly_rate
            .trim()
            .parse::<f64>()
            .ok()
            .map(sanitize_rate)
            .unwrap_or(0.0);

        let developer_count = self
            .developer_count
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|count| *count >= 1)
            .unwrap_or(1);

        let quality_tier = self
            .quality_tier
            .trim()
            .parse::<i64>()
            .map(QualityTier::from_number)
            .unwrap_or_default();

        let offer_field = self.client_offer.trim();
        let client_offer = if offer_field.is_empty() {
            None
        } else {
            offer_field
                .parse::<f64>()
                .ok()
                .filter(|offer| offer.is_finite() && *offer >= 0.0)
        };

        CommercialParameters {
            hourly_rate,
            developer_count,
            quality_tier,
            client_offer,
        }
    }
}
