//! HTTP/WebSocket server for the pulseboard dashboard.
//!
//! REST endpoints serve point-in-time snapshots (stats, users, logs,
//! settings); `/ws` streams feed updates to connected clients through a
//! broadcast channel fed by the broadcaster task.

pub mod broadcast;
pub mod config;
pub mod error;
pub mod server;
pub mod state;
pub mod types;

pub use config::ServerConfig;
pub use error::{DashboardError, DashboardResult};
pub use server::{create_router, run_server, AppState};
pub use state::DashboardState;
pub use types::{DashboardMessage, DashboardSnapshot, LogRecordView};
