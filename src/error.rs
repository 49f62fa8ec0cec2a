//! Error types for Estima
//!
//! Uses `thiserror` for library errors. Validation failures name the offending
//! field so the UI can point the user at it; repository failures keep a generic
//! "could not save" display so the user knows to retry rather than fix input.

use thiserror::Error;

/// Result type alias for Estima operations
pub type EstimaResult<T> = Result<T, EstimaError>;

/// Main error type for Estima operations
///
/// The estimation formulas themselves never fail - out-of-range dials are
/// clamped and degenerate commercial inputs fall back to documented defaults.
/// Errors only arise when committing an estimate as a project.
#[derive(Error, Debug)]
pub enum EstimaError {
    /// Project title was empty or blank
    #[error("project title must not be empty")]
    MissingTitle,

    /// Resolved budget was zero or negative
    #[error("project budget must be greater than zero (resolved to {resolved})")]
    InvalidBudget { resolved: f64 },

    /// A commit is already outstanding for this session
    #[error("a commit is already in progress")]
    CommitInFlight,

    /// The project repository rejected or failed the create call
    #[error("could not save project")]
    Repository(#[source] anyhow::Error),
}

impl EstimaError {
    /// Returns true if this is a local validation failure the user can fix
    /// by correcting input (as opposed to an external failure worth retrying)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EstimaError::MissingTitle | EstimaError::InvalidBudget { .. }
        )
    }
}
