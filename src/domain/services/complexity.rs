//! Complexity classification
//!
//! Sums the four chosen weights and buckets the total into one of three
//! levels. The buckets cover [4, 12] with no gaps or overlaps.

use crate::domain::entities::ComplexitySelection;
use serde::{Deserialize, Serialize};

/// Classification level derived from the total points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    /// 4-5 points
    Low,
    /// 6-9 points
    Medium,
    /// 10-12 points
    High,
}

impl ComplexityLevel {
    /// Level number as surfaced to the user (1, 2 or 3)
    pub fn number(&self) -> u8 {
        match self {
            ComplexityLevel::Low => 1,
            ComplexityLevel::Medium => 2,
            ComplexityLevel::High => 3,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "Baixa Complexidade",
            ComplexityLevel::Medium => "Média Complexidade (SaaS)",
            ComplexityLevel::High => "Alta Complexidade / Crítico",
        }
    }

    /// Bucket a point total; inputs outside [4, 12] still classify
    /// (the thresholds are total over the whole integer range)
    pub fn from_points(total_points: u8) -> Self {
        match total_points {
            0..=5 => ComplexityLevel::Low,
            6..=9 => ComplexityLevel::Medium,
            _ => ComplexityLevel::High,
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nível {}: {}", self.number(), self.label())
    }
}

/// Total points plus the level they fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityScore {
    pub total_points: u8,
    pub level: ComplexityLevel,
}

/// Score a matrix selection
pub fn classify(selection: &ComplexitySelection) -> ComplexityScore {
    let total_points = selection.total_points();
    ComplexityScore {
        total_points,
        level: ComplexityLevel::from_points(total_points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CriterionKey;
    use crate::domain::value_objects::Weight;

    #[test]
    fn default_selection_is_low() {
        let score = classify(&ComplexitySelection::new());
        assert_eq!(score.total_points, 4);
        assert_eq!(score.level, ComplexityLevel::Low);
    }

    #[test]
    fn uniform_heavy_is_high() {
        let score = classify(&ComplexitySelection::uniform(Weight::Heavy));
        assert_eq!(score.total_points, 12);
        assert_eq!(score.level, ComplexityLevel::High);
    }

    #[test]
    fn bucket_boundaries_are_inclusive() {
        assert_eq!(ComplexityLevel::from_points(4), ComplexityLevel::Low);
        assert_eq!(ComplexityLevel::from_points(5), ComplexityLevel::Low);
        assert_eq!(ComplexityLevel::from_points(6), ComplexityLevel::Medium);
        assert_eq!(ComplexityLevel::from_points(9), ComplexityLevel::Medium);
        assert_eq!(ComplexityLevel::from_points(10), ComplexityLevel::High);
        assert_eq!(ComplexityLevel::from_points(12), ComplexityLevel::High);
    }

    #[test]
    fn six_points_crosses_into_medium() {
        let selection = ComplexitySelection::new()
            .with(CriterionKey::Screens, Weight::Moderate)
            .with(CriterionKey::Database, Weight::Moderate);
        let score = classify(&selection);
        assert_eq!(score.total_points, 6);
        assert_eq!(score.level, ComplexityLevel::Medium);
    }

    #[test]
    fn level_display_includes_number_and_label() {
        assert_eq!(
            ComplexityLevel::Medium.to_string(),
            "Nível 2: Média Complexidade (SaaS)"
        );
        assert_eq!(
            ComplexityLevel::High.to_string(),
            "Nível 3: Alta Complexidade / Crítico"
        );
    }
}
