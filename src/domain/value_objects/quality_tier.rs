//! QualityTier value object - the pro estimator's deliverable-quality level
//!
//! Tier 2 adds 25% to the hour estimate, tier 3 adds 50%.

use serde::{Deserialize, Serialize};

/// Quality tier selected in the pro estimator (1, 2 or 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualityTier {
    /// Tier 1 - functional MVP, no surcharge
    #[default]
    Mvp,
    /// Tier 2 - professional finish, +25% hours
    Professional,
    /// Tier 3 - enterprise hardening, +50% hours
    Enterprise,
}

impl QualityTier {
    /// Tier number as shown in the UI (1, 2 or 3)
    pub fn number(&self) -> u8 {
        match self {
            QualityTier::Mvp => 1,
            QualityTier::Professional => 2,
            QualityTier::Enterprise => 3,
        }
    }

    /// Multiplier applied to the base hour estimate
    pub fn hour_multiplier(&self) -> f64 {
        match self {
            QualityTier::Mvp => 1.0,
            QualityTier::Professional => 1.25,
            QualityTier::Enterprise => 1.5,
        }
    }

    /// Coerce an arbitrary numeric value, defaulting to tier 1
    pub fn from_number(number: i64) -> Self {
        match number {
            2 => QualityTier::Professional,
            3 => QualityTier::Enterprise,
            _ => QualityTier::Mvp,
        }
    }

    /// Option label as shown in the pro form
    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Mvp => "MVP (Funcional)",
            QualityTier::Professional => "Profissional (+25%)",
            QualityTier::Enterprise => "Enterprise (+50%)",
        }
    }
}

impl Serialize for QualityTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for QualityTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(QualityTier::from_number(raw))
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
