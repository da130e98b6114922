//! In-memory random data source for the pulseboard dashboard.
//!
//! Stands in for a real backend: every fetch returns freshly generated
//! records, with optional simulated latency and a failure toggle for
//! exercising the error paths. The shapes match `pulse-core`; the
//! randomization rules themselves are an implementation detail.

pub mod api;
pub mod generator;
pub mod source;

pub use api::{MockApi, MockConfig};
pub use source::ActivityLogSource;
