//! Feed error types.

use crate::source::SourceError;
use thiserror::Error;

/// Feed error types.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid feed config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Initial load failure, surfaced on the handle's error channel.
///
/// Distinct from the snapshot channel: a consumer can observe the failure
/// without it ever appearing inside the data sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Initial load failed: {message}")]
pub struct InitialLoadError {
    /// Source-reported failure description.
    pub message: String,
}

impl From<SourceError> for InitialLoadError {
    fn from(err: SourceError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
