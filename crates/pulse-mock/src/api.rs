//! Mock backend API.
//!
//! Mirrors what a real data service would expose: async fetches for stats,
//! users, and the initial activity log batch. Latency is simulated with
//! plain sleeps; the `unavailable` toggle makes every fetch fail with
//! `SourceError::Unavailable`.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use pulse_core::{LogEntry, StatsOverview, User};
use pulse_feed::{FeedRecord, SourceError};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::generator;

/// Number of users returned per fetch.
const USER_BATCH: usize = 20;

/// Number of log entries in the initial activity batch.
const INITIAL_LOG_BATCH: usize = 5;

/// Mock backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Sleep before responding, as a real backend would.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
    /// Fail every fetch with "source unavailable".
    #[serde(default)]
    pub unavailable: bool,
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            simulate_latency: default_simulate_latency(),
            unavailable: false,
        }
    }
}

/// Mock data service.
#[derive(Debug, Clone)]
pub struct MockApi {
    config: MockConfig,
}

impl MockApi {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    async fn respond(&self, latency_ms: u64) -> Result<(), SourceError> {
        if self.config.simulate_latency {
            tokio::time::sleep(Duration::from_millis(latency_ms)).await;
        }
        if self.config.unavailable {
            return Err(SourceError::Unavailable);
        }
        Ok(())
    }

    /// Fetch the stats overview (600ms simulated latency).
    pub async fn get_stats(&self) -> Result<StatsOverview, SourceError> {
        self.respond(600).await?;
        trace!("Serving mock stats overview");
        Ok(generator::stats_overview())
    }

    /// Fetch the user table (800ms simulated latency).
    pub async fn get_users(&self) -> Result<Vec<User>, SourceError> {
        self.respond(800).await?;
        trace!(count = USER_BATCH, "Serving mock users");
        Ok(generator::random_users(USER_BATCH))
    }

    /// Fetch the initial activity log batch (400ms simulated latency).
    ///
    /// Records come back newest first, with timestamps spread over the
    /// preceding minutes so the log view starts with history.
    pub async fn get_activity_logs(&self) -> Result<Vec<FeedRecord<LogEntry>>, SourceError> {
        self.respond(400).await?;
        trace!(count = INITIAL_LOG_BATCH, "Serving mock activity logs");

        let now = Utc::now();
        let logs = (0..INITIAL_LOG_BATCH)
            .map(|i| {
                FeedRecord::with_timestamp(
                    generator::random_log(),
                    now - ChronoDuration::minutes(i as i64 + 1),
                )
            })
            .collect();
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_api(unavailable: bool) -> MockApi {
        MockApi::new(MockConfig {
            simulate_latency: false,
            unavailable,
        })
    }

    #[tokio::test]
    async fn test_users_batch_size() {
        let users = instant_api(false).get_users().await.unwrap();
        assert_eq!(users.len(), USER_BATCH);
    }

    #[tokio::test]
    async fn test_initial_logs_newest_first() {
        let logs = instant_api(false).get_activity_logs().await.unwrap();
        assert_eq!(logs.len(), INITIAL_LOG_BATCH);
        for pair in logs.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_fetch() {
        let api = instant_api(true);
        assert_eq!(api.get_stats().await.unwrap_err(), SourceError::Unavailable);
        assert_eq!(api.get_users().await.unwrap_err(), SourceError::Unavailable);
        assert_eq!(
            api.get_activity_logs().await.unwrap_err(),
            SourceError::Unavailable
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let api = MockApi::new(MockConfig::default());
        let before = tokio::time::Instant::now();
        let _ = api.get_stats().await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(600));
    }
}
