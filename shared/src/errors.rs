//! Error types for the Fitness Coach domain

use thiserror::Error;

/// Errors raised around the coaching domain
///
/// The recommendation engine itself is total; these cover record validation
/// and (de)serialization at the crate's edges.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<crate::validation::ValidationError> for CoachError {
    fn from(err: crate::validation::ValidationError) -> Self {
        CoachError::Validation(err.user_message())
    }
}

pub type CoachResult<T> = Result<T, CoachError>;
