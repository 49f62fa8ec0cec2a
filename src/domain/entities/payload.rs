//! Project payload - the boundary object handed to the project repository
//!
//! Field names match the repository's column names. The payload is built once
//! per commit, submitted, and discarded; the engine keeps no reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text metadata attached to a commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub title: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            client: None,
            description: None,
        }
    }

    /// Builder: set the client/company name
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Builder: set the scope description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the title is empty or whitespace-only
    pub fn title_is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// The project-creation contract shared by both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub budget_estimated: f64,
    /// ISO-8601 instant; `today + effort` for quick, `today + weeks*7` for pro
    pub deadline: DateTime<Utc>,
    pub quality_score: u8,
    pub time_score: u8,
    pub scope_score: u8,
}
