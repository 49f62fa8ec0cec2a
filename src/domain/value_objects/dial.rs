//! Dial value object - a normalized 0-100 trade-off input
//!
//! The quick estimator works on three dials (quality, urgency, scope) that
//! instantiate the iron triad. Dials clamp on construction; out-of-range
//! input is never rejected.

use serde::{Deserialize, Serialize};

/// A 0-100 normalized slider value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Dial(u8);

impl Dial {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Create a dial, clamping to [0, 100]
    pub fn new(value: i64) -> Self {
        Dial(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Raw value in [0, 100]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Value as a fraction of 100, for the pricing formulas
    pub fn percent(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Dial {
    fn default() -> Self {
        Dial(0)
    }
}

impl From<u8> for Dial {
    fn from(value: u8) -> Self {
        Dial::new(i64::from(value))
    }
}

impl<'de> Deserialize<'de> for Dial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Clamp rather than reject, same as construction.
        let raw = i64::deserialize(deserializer)?;
        Ok(Dial::new(raw))
    }
}

impl std::fmt::Display for Dial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The three dials of one quick-estimation session
///
/// Defaults match the planning page's initial slider positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriadDials {
    pub quality: Dial,
    pub urgency: Dial,
    pub scope: Dial,
}

impl TriadDials {
    pub fn new(quality: i64, urgency: i64, scope: i64) -> Self {
        Self {
            quality: Dial::new(quality),
            urgency: Dial::new(urgency),
            scope: Dial::new(scope),
        }
    }

    /// Band label for the quality dial
    pub fn quality_band(&self) -> &'static str {
        match self.quality.value() {
            0..=29 => "MVP",
            30..=69 => "Padrão",
            _ => "Alta Performance",
        }
    }

    /// Band label for the urgency dial
    pub fn urgency_band(&self) -> &'static str {
        match self.urgency.value() {
            0..=29 => "Confortável",
            30..=69 => "Normal",
            _ => "Urgente",
        }
    }

    /// Band label for the scope dial
    pub fn scope_band(&self) -> &'static str {
        match self.scope.value() {
            0..=29 => "Feature",
            30..=69 => "Módulo",
            _ => "Sistema",
        }
    }
}

impl Default for TriadDials {
    fn default() -> Self {
        TriadDials::new(50, 30, 20)
    }
}
