//! Telemetry for pulseboard.
//!
//! Currently just tracing initialization; metrics would live here too.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
