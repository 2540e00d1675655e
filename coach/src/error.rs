//! Application error handling
//!
//! This module provides unified error handling for the app, mapping
//! internal errors to process exit codes for the command line.

use fitness_coach_shared::{validation::ValidationError, CoachError};
use thiserror::Error;

/// App error type that can be converted to an exit code
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Exit code reported by the command-line front end
    ///
    /// User input problems exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) | AppError::Serialization(_) => 2,
            AppError::Io(_) | AppError::Config(_) => 1,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.user_message())
    }
}

impl From<CoachError> for AppError {
    fn from(err: CoachError) -> Self {
        match err {
            CoachError::Validation(msg) => AppError::Validation(msg),
            CoachError::Serialization(err) => AppError::Serialization(err),
        }
    }
}

/// Result type alias for app operations
pub type AppResult<T> = Result<T, AppError>;
