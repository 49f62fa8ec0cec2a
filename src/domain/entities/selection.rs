//! Complexity selection - one chosen weight per criterion
//!
//! The UI fills the matrix progressively; any criterion the user has not
//! touched yet counts as weight 1. Deserialization follows the same rule
//! via per-field defaults, so a partial form never errors.

use crate::domain::entities::CriterionKey;
use crate::domain::value_objects::Weight;
use serde::{Deserialize, Serialize};

/// The user's current choice for each of the four criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplexitySelection {
    #[serde(default)]
    pub screens: Weight,
    #[serde(default)]
    pub design: Weight,
    #[serde(default)]
    pub database: Weight,
    #[serde(default)]
    pub integrations: Weight,
}

impl ComplexitySelection {
    /// Selection with every criterion at weight 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with the same weight on all four criteria
    pub fn uniform(weight: Weight) -> Self {
        Self {
            screens: weight,
            design: weight,
            database: weight,
            integrations: weight,
        }
    }

    /// Chosen weight for a criterion
    pub fn weight_for(&self, key: CriterionKey) -> Weight {
        match key {
            CriterionKey::Screens => self.screens,
            CriterionKey::Design => self.design,
            CriterionKey::Database => self.database,
            CriterionKey::Integrations => self.integrations,
        }
    }

    /// Replace the choice for one criterion (single-choice per row)
    pub fn select(&mut self, key: CriterionKey, weight: Weight) {
        match key {
            CriterionKey::Screens => self.screens = weight,
            CriterionKey::Design => self.design = weight,
            CriterionKey::Database => self.database = weight,
            CriterionKey::Integrations => self.integrations = weight,
        }
    }

    /// Builder-style variant of [`select`](Self::select)
    pub fn with(mut self, key: CriterionKey, weight: Weight) -> Self {
        self.select(key, weight);
        self
    }

    /// Sum of the four chosen weights, always in [4, 12]
    pub fn total_points(&self) -> u8 {
        CriterionKey::all()
            .iter()
            .map(|key| self.weight_for(*key).points())
            .sum()
    }
}
