//! Error types for pulse-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid user role: {0}")]
    InvalidRole(String),

    #[error("Invalid user status: {0}")]
    InvalidStatus(String),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
