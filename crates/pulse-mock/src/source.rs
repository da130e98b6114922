//! Feed source implementations backed by the mock API.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use pulse_core::LogEntry;
use pulse_feed::{FeedRecord, FeedSource, SourceError};

use crate::api::MockApi;
use crate::generator;

/// Activity log source: initial batch from the mock API, incremental
/// synthetic entries on demand.
///
/// The feed core owns the emit-probability draw, so `maybe_next` always
/// produces a record when asked.
pub struct ActivityLogSource {
    api: MockApi,
}

impl ActivityLogSource {
    pub fn new(api: MockApi) -> Self {
        Self { api }
    }
}

impl FeedSource for ActivityLogSource {
    type Payload = LogEntry;

    fn fetch_initial(&mut self) -> BoxFuture<'_, Result<Vec<FeedRecord<LogEntry>>, SourceError>> {
        async move { self.api.get_activity_logs().await }.boxed()
    }

    fn maybe_next(&mut self) -> BoxFuture<'_, Result<Option<FeedRecord<LogEntry>>, SourceError>> {
        async move { Ok(Some(FeedRecord::new(generator::synthetic_log()))) }.boxed()
    }
}
