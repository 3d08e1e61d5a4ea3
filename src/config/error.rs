//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Acknowledgment timeout must be between 1 and 3 seconds")]
    InvalidAckTimeout,

    #[error("Interview bounds must be positive")]
    InvalidInterviewBounds,

    #[error("Follow-up budget cannot exceed the total question budget")]
    FollowUpBudgetTooLarge,
}
