//! ProjectRepository port - abstraction for persisting committed estimates
//!
//! The engine never talks to the data store directly; the surrounding
//! application implements this trait (and scopes writes to the current
//! tenant - the engine neither reads nor stores that identity).

use crate::domain::entities::ProjectPayload;
use anyhow::Result;

/// Identifier of a stored project, as returned by the repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        ProjectId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Abstract repository for project creation
///
/// One call per successful commit; retry policy and idempotency of repeated
/// submits belong to the implementor, not to the engine.
pub trait ProjectRepository {
    /// Persist the payload and return the stored project's identifier
    fn create_project(&self, payload: &ProjectPayload) -> Result<ProjectId>;
}
