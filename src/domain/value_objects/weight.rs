//! Weight value object - complexity points contributed by one criterion choice
//!
//! On the wire a weight is the plain number of points (1, 2 or 3), matching
//! the matrix form the UI submits. Anything else coerces to 1 point.

use serde::{Deserialize, Serialize};

/// Weight of a single complexity-matrix choice (1, 2 or 3 points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Weight {
    /// 1 point
    #[default]
    Light,
    /// 2 points
    Moderate,
    /// 3 points
    Heavy,
}

impl Weight {
    /// Complexity points this weight contributes to the total score
    pub fn points(&self) -> u8 {
        match self {
            Weight::Light => 1,
            Weight::Moderate => 2,
            Weight::Heavy => 3,
        }
    }

    /// Coerce an arbitrary numeric value to a weight, defaulting to `Light`
    ///
    /// Anything outside {1, 2, 3} falls back to 1 point, the same treatment
    /// an incomplete matrix selection gets.
    pub fn from_points(points: i64) -> Self {
        match points {
            2 => Weight::Moderate,
            3 => Weight::Heavy,
            _ => Weight::Light,
        }
    }

    /// All weights in ascending order
    pub fn all() -> [Weight; 3] {
        [Weight::Light, Weight::Moderate, Weight::Heavy]
    }
}

impl Serialize for Weight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.points())
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Weight::from_points(raw))
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Peso {}", self.points())
    }
}
