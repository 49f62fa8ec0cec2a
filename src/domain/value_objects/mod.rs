//! Domain Value Objects
//!
//! Immutable value types that represent estimation inputs.
//! All of them clamp or coerce on construction - malformed input degrades
//! to a documented default instead of failing.

mod dial;
mod quality_tier;
mod weight;

pub use dial::{Dial, TriadDials};
pub use quality_tier::QualityTier;
pub use weight::Weight;
