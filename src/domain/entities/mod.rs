//! Domain Entities
//!
//! The estimation session's working data: the static criterion catalog, the
//! user's matrix selection, sanitized commercial parameters, and the payload
//! handed to the project repository on commit.

mod commercial;
mod criterion;
mod payload;
mod selection;

pub use commercial::{CommercialParameters, RawCommercialForm};
pub use criterion::{
    criterion, ComplexityCriterion, CriterionKey, CriterionOption, COMPLEXITY_CRITERIA,
};
pub use payload::{ProjectMeta, ProjectPayload};
pub use selection::ComplexitySelection;
