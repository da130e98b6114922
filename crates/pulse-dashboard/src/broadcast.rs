//! WebSocket broadcast functionality.
//!
//! The broadcaster watches the feed channels and forwards every change to
//! the broadcast channel that connected WebSocket clients subscribe to.

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::state::DashboardState;
use crate::types::{DashboardMessage, LogRecordView};

/// Run the broadcaster task.
///
/// Exits when the log feed stops (its watch sender is dropped) or when the
/// broadcast channel has no more use. Serialization failures are logged
/// and skipped; a client-less channel is not an error.
pub async fn run_broadcaster(state: DashboardState, tx: broadcast::Sender<String>) {
    let mut logs_rx = state.log_feed().subscribe();
    let mut errors_rx = state.log_feed().load_errors();
    let mut stats_rx = state.stats_updates();

    loop {
        let message = tokio::select! {
            changed = logs_rx.changed() => {
                if changed.is_err() {
                    debug!("Log feed channel closed, broadcaster exiting");
                    break;
                }
                let logs: Vec<LogRecordView> =
                    logs_rx.borrow_and_update().iter().map(LogRecordView::from).collect();
                DashboardMessage::Logs {
                    timestamp_ms: Utc::now().timestamp_millis(),
                    logs,
                }
            }
            changed = stats_rx.changed() => {
                if changed.is_err() {
                    debug!("Stats channel closed, broadcaster exiting");
                    break;
                }
                let stats = stats_rx.borrow_and_update().clone();
                match stats {
                    Some(stats) => DashboardMessage::Stats {
                        timestamp_ms: Utc::now().timestamp_millis(),
                        stats,
                    },
                    None => continue,
                }
            }
            changed = errors_rx.changed() => {
                if changed.is_err() {
                    debug!("Feed error channel closed, broadcaster exiting");
                    break;
                }
                let error = errors_rx.borrow_and_update().clone();
                match error {
                    Some(err) => DashboardMessage::FeedDegraded {
                        timestamp_ms: Utc::now().timestamp_millis(),
                        message: err.message,
                    },
                    None => continue,
                }
            }
        };

        match serde_json::to_string(&message) {
            Ok(json) => match tx.send(json) {
                Ok(n) => trace!(receivers = n, "Broadcast update sent"),
                // No receivers connected; normal.
                Err(_) => trace!("No WebSocket receivers connected"),
            },
            Err(e) => debug!(error = %e, "Failed to serialize dashboard update"),
        }
    }
}
