//! Live data feed for the pulseboard dashboard.
//!
//! A `LiveFeed` combines an initial bulk load with incremental trickle
//! updates into a size-bounded, newest-first sequence of records. The feed
//! owns its state and its timer; consumers hold a `FeedHandle` to stop the
//! feed, read snapshots, and subscribe to changes.

pub mod config;
pub mod error;
pub mod feed;
pub mod record;
pub mod source;
pub mod state;

pub use config::FeedConfig;
pub use error::{FeedError, FeedResult, InitialLoadError};
pub use feed::{FeedHandle, FeedPhase, FeedSnapshot, LiveFeed};
pub use record::FeedRecord;
pub use source::{FeedSource, SourceError};
pub use state::FeedState;
