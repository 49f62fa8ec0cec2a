//! Commit options - the inputs a commit is computed from
//!
//! Each option set carries the raw session inputs, not a precomputed result:
//! the use case re-runs the estimator itself, so the committed numbers are
//! always in sync with the inputs (no stale cache).

use crate::domain::entities::{CommercialParameters, ComplexitySelection, ProjectMeta};
use crate::domain::value_objects::TriadDials;

/// Inputs for committing a quick estimate
#[derive(Debug, Clone, Default)]
pub struct QuickCommitOptions {
    pub meta: ProjectMeta,
    pub dials: TriadDials,
}

impl QuickCommitOptions {
    pub fn new(meta: ProjectMeta, dials: TriadDials) -> Self {
        Self { meta, dials }
    }
}

/// Inputs for committing a pro estimate
#[derive(Debug, Clone, Default)]
pub struct ProCommitOptions {
    pub meta: ProjectMeta,
    pub selection: ComplexitySelection,
    pub commercial: CommercialParameters,
}

impl ProCommitOptions {
    pub fn new(
        meta: ProjectMeta,
        selection: ComplexitySelection,
        commercial: CommercialParameters,
    ) -> Self {
        Self {
            meta,
            selection,
            commercial,
        }
    }
}
