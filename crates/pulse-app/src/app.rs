//! Main application orchestration.
//!
//! Owns the long-lived pieces and their shutdown order:
//! - one-shot user fetch into the shared user table
//! - stats refresher (full refetch on a fixed interval)
//! - activity log feed (LiveFeed over the mock source)
//! - dashboard HTTP/WebSocket server
//!
//! On shutdown the activity feed is stopped before the process exits, so
//! no timer outlives the application.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use pulse_core::{StatsOverview, User};
use pulse_dashboard::DashboardState;
use pulse_feed::LiveFeed;
use pulse_mock::{ActivityLogSource, MockApi};

use crate::config::AppConfig;
use crate::error::AppResult;

/// Main application.
pub struct Application {
    config: AppConfig,
    api: MockApi,
    shutdown: CancellationToken,
}

impl Application {
    /// Create a new application.
    pub fn new(config: AppConfig) -> Self {
        let api = MockApi::new(config.mock.clone());
        Self {
            config,
            api,
            shutdown: CancellationToken::new(),
        }
    }

    /// Token used to request shutdown from outside (tests, signal handler).
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Run until ctrl-c or an external shutdown request.
    pub async fn run(&self) -> AppResult<()> {
        // One-shot user fetch; the table stays empty if the source fails.
        let users = Arc::new(RwLock::new(Vec::new()));
        self.spawn_user_fetch(users.clone());

        // Stats refresher: fixed-interval full refetch.
        let stats_rx = self.spawn_stats_refresher();

        // Activity log feed.
        let log_feed = LiveFeed::start(
            ActivityLogSource::new(self.api.clone()),
            self.config.feeds.activity.clone(),
        )?;

        let dashboard_state = DashboardState::new(log_feed.clone(), stats_rx, users);

        if self.config.server.enabled {
            let server_config = self.config.server.clone();
            let server_state = dashboard_state.clone();
            tokio::spawn(async move {
                if let Err(e) = pulse_dashboard::run_server(server_state, server_config).await {
                    error!(error = %e, "Dashboard server exited");
                }
            });
        } else {
            info!("Dashboard server disabled by config");
        }

        info!("pulseboard running");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-c received, shutting down");
            }
            _ = self.shutdown.cancelled() => {
                info!("Shutdown requested");
            }
        }

        // Release the feed's timer before exiting.
        log_feed.stop();
        self.shutdown.cancel();
        info!("pulseboard stopped");
        Ok(())
    }

    /// Fetch the user table once, in the background.
    fn spawn_user_fetch(&self, users: Arc<RwLock<Vec<User>>>) {
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.get_users().await {
                Ok(batch) => {
                    info!(count = batch.len(), "User table loaded");
                    *users.write() = batch;
                }
                Err(e) => warn!(error = %e, "User fetch failed, table stays empty"),
            }
        });
    }

    /// Spawn the stats refresher and return its output channel.
    ///
    /// Holds `None` until the first refetch completes. Refresh failures
    /// keep the previous value.
    fn spawn_stats_refresher(&self) -> watch::Receiver<Option<StatsOverview>> {
        let (tx, rx) = watch::channel(None);
        let api = self.api.clone();
        let refresh_ms = self.config.feeds.stats_refresh_ms;
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(refresh_ms));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = interval.tick() => {
                        match api.get_stats().await {
                            Ok(stats) => {
                                if tx.send(Some(stats)).is_err() {
                                    break;
                                }
                            }
                            Err(e) => warn!(error = %e, "Stats refresh failed, keeping last value"),
                        }
                    }
                }
            }
        });

        rx
    }
}
