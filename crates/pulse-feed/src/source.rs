//! Data source contracts for live feeds.
//!
//! The feed core has no knowledge of where records come from; it talks to an
//! injected `FeedSource`. The dashboard wires in the mock generator, a real
//! deployment would wire in a backend client.

use crate::record::FeedRecord;
use futures_util::future::BoxFuture;
use thiserror::Error;

/// Errors reported by a feed source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("source unavailable")]
    Unavailable,

    #[error("source error: {0}")]
    Other(String),
}

/// An external producer of feed records.
///
/// `fetch_initial` is called exactly once per `start` and must resolve or
/// fail in bounded time. `maybe_next` is called at most once per tick and may
/// decline to produce a record.
pub trait FeedSource: Send + 'static {
    /// Payload type carried by this source's records.
    type Payload: Clone + Send + Sync + 'static;

    /// Fetch the initial batch, newest first.
    fn fetch_initial(
        &mut self,
    ) -> BoxFuture<'_, Result<Vec<FeedRecord<Self::Payload>>, SourceError>>;

    /// Produce zero or one incremental record.
    fn maybe_next(
        &mut self,
    ) -> BoxFuture<'_, Result<Option<FeedRecord<Self::Payload>>, SourceError>>;
}
