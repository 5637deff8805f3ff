use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::item::MatchResult;
use crate::repository::errors::RepositoryError;

pub mod matching;

/// Match request received by the worker.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub enum MatchMessage {
    /// Match the stored lost-item report with this id.
    LostItem(i32),
    /// Match free text.
    Description(String),
}

impl MatchMessage {
    /// Decode a JSON request. A missing, null or non-text query is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MatchError> {
        serde_json::from_slice(bytes).map_err(|e| MatchError::InvalidInput(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid match request: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("match task failed: {0}")]
    Task(String),
}

/// Reply sent back for every request.
#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MatchReply {
    Matched { matches: Vec<MatchResult> },
    Failed { error: String },
}

impl From<Result<Vec<MatchResult>, MatchError>> for MatchReply {
    fn from(outcome: Result<Vec<MatchResult>, MatchError>) -> Self {
        match outcome {
            Ok(matches) => MatchReply::Matched { matches },
            Err(error) => MatchReply::Failed {
                error: error.to_string(),
            },
        }
    }
}
