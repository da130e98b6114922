//! Core domain types for the pulseboard admin dashboard.
//!
//! This crate provides the data shapes shared by every other crate:
//! - `User`, `UserRole`, `UserStatus`: user management records
//! - `StatsOverview`, `TrendPoint`: the stats overview panel
//! - `LogEntry`, `LogLevel`: activity log payloads
//! - `Settings`: the settings form state

pub mod activity;
pub mod error;
pub mod settings;
pub mod stats;
pub mod user;

pub use activity::{LogEntry, LogLevel};
pub use error::{CoreError, Result};
pub use settings::Settings;
pub use stats::{StatsOverview, TrendPoint};
pub use user::{User, UserRole, UserStatus};
