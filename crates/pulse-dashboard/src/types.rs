//! Dashboard API types.
//!
//! These types are used for JSON serialization in REST and WebSocket APIs.

use chrono::{DateTime, Utc};
use pulse_core::{LogEntry, LogLevel, StatsOverview};
use pulse_feed::FeedRecord;
use serde::Serialize;
use uuid::Uuid;

/// One activity log line as shown to clients.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecordView {
    /// Record id.
    pub id: Uuid,
    /// Creation time (Unix milliseconds).
    pub timestamp_ms: i64,
    /// Severity.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
}

impl From<&FeedRecord<LogEntry>> for LogRecordView {
    fn from(record: &FeedRecord<LogEntry>) -> Self {
        Self {
            id: record.id,
            timestamp_ms: record.timestamp.timestamp_millis(),
            level: record.payload.level,
            message: record.payload.message.clone(),
        }
    }
}

/// Full dashboard snapshot (sent on initial WebSocket connect and via REST).
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Timestamp when the snapshot was taken (Unix milliseconds).
    pub timestamp_ms: i64,
    /// Latest stats overview, if one has been fetched yet.
    pub stats: Option<StatsOverview>,
    /// Activity log, newest first.
    pub logs: Vec<LogRecordView>,
    /// Number of known users.
    pub user_count: usize,
}

impl DashboardSnapshot {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            timestamp_ms: now.timestamp_millis(),
            stats: None,
            logs: Vec::new(),
            user_count: 0,
        }
    }
}

/// WebSocket message types (tagged enum).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardMessage {
    /// Full snapshot (sent on connect).
    Snapshot(DashboardSnapshot),
    /// Activity log changed.
    Logs {
        /// Update timestamp.
        timestamp_ms: i64,
        /// Current log sequence, newest first.
        logs: Vec<LogRecordView>,
    },
    /// Stats overview refreshed.
    Stats {
        /// Update timestamp.
        timestamp_ms: i64,
        /// Fresh overview.
        stats: StatsOverview,
    },
    /// The log feed's initial load failed; the log panel is degraded.
    FeedDegraded {
        /// Update timestamp.
        timestamp_ms: i64,
        /// Failure description.
        message: String,
    },
}
