//! Commit result - what a successful commit reports back
//!
//! An explicit result object instead of fire-and-forget: the caller decides
//! how to present success, and failures arrive as `EstimaError` values.

use crate::domain::ports::ProjectId;
use chrono::{DateTime, Utc};

/// Receipt for one successfully committed estimate
#[derive(Debug, Clone, PartialEq)]
pub struct CommitReceipt {
    /// Identifier assigned by the project repository
    pub project_id: ProjectId,
    /// The budget actually written, after offer/suggestion resolution
    pub budget_committed: f64,
    /// The deadline actually written
    pub deadline: DateTime<Utc>,
}
