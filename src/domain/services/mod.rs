//! Domain Services
//!
//! The three estimation pipelines as pure functions. No I/O, no shared
//! state - callers re-run them on every input change and results are
//! guaranteed identical for identical inputs.

mod complexity;
mod pro;
mod quick;

pub use complexity::{classify, ComplexityLevel, ComplexityScore};
pub use pro::{estimate_pro, ProEstimate};
pub use quick::{estimate_quick, QuickEstimate};
