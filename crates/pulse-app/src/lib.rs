//! pulseboard application.
//!
//! Wires the mock data source into the live feeds and serves the
//! dashboard: activity log feed, stats refresher, one-shot user fetch,
//! HTTP/WebSocket surface.

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
