//! Estima - project cost and effort estimation engine
//!
//! Estima converts qualitative trade-off decisions into concrete estimates,
//! in two independent, stateless pipelines:
//!
//! - **Quick**: three 0-100 dials (quality, urgency, scope) run through
//!   closed-form formulas to a price, an effort in days and a team size.
//! - **Pro**: a four-criterion weighted complexity matrix plus commercial
//!   parameters (hourly rate, headcount, quality tier, client offer) to
//!   hours, price, schedule and profit margin.
//!
//! Either result can be committed as a project through the
//! [`ProjectRepository`] port; the commit use case validates input, builds
//! the payload (deadline, rationale, scores) and performs exactly one
//! repository call.

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{
    build_pro_payload, build_quick_payload, CommitReceipt, CommitUseCase, ProCommitOptions,
    QuickCommitOptions,
};
pub use domain::entities::{
    criterion, CommercialParameters, ComplexityCriterion, ComplexitySelection, CriterionKey,
    CriterionOption, ProjectMeta, ProjectPayload, RawCommercialForm, COMPLEXITY_CRITERIA,
};
pub use domain::ports::{ProjectId, ProjectRepository};
pub use domain::services::{
    classify, estimate_pro, estimate_quick, ComplexityLevel, ComplexityScore, ProEstimate,
    QuickEstimate,
};
pub use domain::value_objects::{Dial, QualityTier, TriadDials, Weight};
pub use error::{EstimaError, EstimaResult};
