//! Dashboard state management.
//!
//! `DashboardState` aggregates the live data behind the HTTP surface: the
//! activity log feed handle, the latest stats overview, the cached user
//! table, and the in-memory settings. It owns nothing it mutates on its
//! own; the feed and the stats refresher are the writers.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::watch;

use pulse_core::{LogEntry, Settings, StatsOverview, User};
use pulse_feed::FeedHandle;

use crate::types::{DashboardSnapshot, LogRecordView};

/// Aggregated state behind the dashboard endpoints.
#[derive(Clone)]
pub struct DashboardState {
    /// Activity log feed.
    log_feed: FeedHandle<LogEntry>,
    /// Latest stats overview; `None` until the first refresh completes.
    stats_rx: watch::Receiver<Option<StatsOverview>>,
    /// Cached user table, filled by the one-shot fetch at startup.
    users: Arc<RwLock<Vec<User>>>,
    /// In-memory settings.
    settings: Arc<RwLock<Settings>>,
}

impl DashboardState {
    pub fn new(
        log_feed: FeedHandle<LogEntry>,
        stats_rx: watch::Receiver<Option<StatsOverview>>,
        users: Arc<RwLock<Vec<User>>>,
    ) -> Self {
        Self {
            log_feed,
            stats_rx,
            users,
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }

    /// The activity log feed handle.
    pub fn log_feed(&self) -> &FeedHandle<LogEntry> {
        &self.log_feed
    }

    /// Fresh receiver for stats refreshes.
    pub fn stats_updates(&self) -> watch::Receiver<Option<StatsOverview>> {
        self.stats_rx.clone()
    }

    /// Latest stats overview, if any refresh has completed.
    pub fn latest_stats(&self) -> Option<StatsOverview> {
        self.stats_rx.borrow().clone()
    }

    /// Users matching a search needle, case-insensitive over name and email.
    pub fn users_matching(&self, needle: &str) -> Vec<User> {
        self.users
            .read()
            .iter()
            .filter(|u| u.matches(needle))
            .cloned()
            .collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    /// Current settings.
    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Replace the settings wholesale.
    pub fn update_settings(&self, settings: Settings) {
        *self.settings.write() = settings;
    }

    /// Collect a full snapshot of the current state.
    pub fn collect_snapshot(&self) -> DashboardSnapshot {
        let mut snapshot = DashboardSnapshot::at(Utc::now());
        snapshot.stats = self.latest_stats();
        snapshot.logs = self
            .log_feed
            .snapshot()
            .iter()
            .map(LogRecordView::from)
            .collect();
        snapshot.user_count = self.user_count();
        snapshot
    }
}
