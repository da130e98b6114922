//! Dashboard error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Bind error: {0}")]
    Bind(std::io::Error),

    #[error("Serve error: {0}")]
    Serve(std::io::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
