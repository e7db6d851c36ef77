//! Error types for timeline lookups and dataset loading.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimelineError {
    /// No event carries the requested id
    #[error("Event not found: {id}")]
    NotFound { id: String },

    /// Dataset violates an event invariant (duplicate id, bad coordinates, ...)
    #[error("Invalid dataset: {reason}")]
    InvalidDataset { reason: String },

    /// Dataset JSON could not be decoded
    #[error("Dataset parse error: {0}")]
    Parse(String),
}

impl TimelineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDataset {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
