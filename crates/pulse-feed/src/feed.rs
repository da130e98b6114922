//! Feed lifecycle: start, tick loop, stop.
//!
//! `LiveFeed::start` spawns one task that owns the source and is the only
//! writer of the feed's state. Consumers interact through `FeedHandle`,
//! which reads snapshots and cancels the task. Results of source calls that
//! are in flight when `stop` is called are discarded, never applied.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::error::{FeedResult, InitialLoadError};
use crate::record::FeedRecord;
use crate::source::FeedSource;
use crate::state::FeedState;

/// Read-only copy of a feed's record sequence, newest first.
pub type FeedSnapshot<P> = Vec<FeedRecord<P>>;

/// Feed lifecycle phase.
///
/// `Stopped` is terminal: a stopped feed cannot be restarted, a fresh
/// `start` call creates a new handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// Before `start` has scheduled anything.
    Idle,
    /// Initial batch requested, tick loop not yet running. A feed whose
    /// initial load failed parks here, ticks suppressed, until stopped.
    Loading,
    /// Tick loop running, incremental emissions possible.
    Streaming,
    /// Terminal.
    Stopped,
}

struct FeedShared<P> {
    state: RwLock<FeedState<P>>,
    phase: RwLock<FeedPhase>,
    snapshot_tx: watch::Sender<FeedSnapshot<P>>,
    error_tx: watch::Sender<Option<InitialLoadError>>,
    cancel: CancellationToken,
}

impl<P: Clone> FeedShared<P> {
    /// Advance the phase. `Stopped` is never left once entered.
    fn transition(&self, next: FeedPhase) {
        let mut phase = self.phase.write();
        if *phase != FeedPhase::Stopped {
            *phase = next;
        }
    }

    fn apply_initial(&self, batch: Vec<FeedRecord<P>>) {
        let snapshot = {
            let mut state = self.state.write();
            state.load(batch);
            state.snapshot()
        };
        // send_replace stores the value even with zero receivers, so a
        // late subscriber still starts from the latest snapshot.
        self.snapshot_tx.send_replace(snapshot);
    }

    fn apply_record(&self, record: FeedRecord<P>) {
        let snapshot = {
            let mut state = self.state.write();
            state.push(record);
            state.snapshot()
        };
        self.snapshot_tx.send_replace(snapshot);
    }
}

/// Handle to a running feed.
///
/// Cloneable; all clones refer to the same feed instance.
pub struct FeedHandle<P> {
    shared: Arc<FeedShared<P>>,
}

impl<P> Clone for FeedHandle<P> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<P: Clone + Send + Sync + 'static> FeedHandle<P> {
    /// Current record sequence, newest first. Never blocks on feed work.
    pub fn snapshot(&self) -> FeedSnapshot<P> {
        self.shared.state.read().snapshot()
    }

    /// Subscribe to snapshot changes.
    ///
    /// The receiver always holds the latest snapshot; consumers re-render
    /// when `changed()` resolves.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot<P>> {
        self.shared.snapshot_tx.subscribe()
    }

    /// Subscribe to the initial-load error channel.
    ///
    /// Holds `None` until the initial load fails; tick failures never
    /// appear here.
    pub fn load_errors(&self) -> watch::Receiver<Option<InitialLoadError>> {
        self.shared.error_tx.subscribe()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FeedPhase {
        *self.shared.phase.read()
    }

    /// Stop the feed. Idempotent; safe to call any number of times.
    ///
    /// After this returns no further snapshot change occurs, even if a
    /// source call was in flight when the feed was stopped.
    pub fn stop(&self) {
        self.shared.cancel.cancel();
        self.shared.transition(FeedPhase::Stopped);
    }

    pub fn is_stopped(&self) -> bool {
        self.phase() == FeedPhase::Stopped
    }
}

/// Entry point for starting feeds.
pub struct LiveFeed;

impl LiveFeed {
    /// Start a feed: schedule the initial load and the recurring tick loop.
    ///
    /// Incremental ticks are suppressed until the initial load completes,
    /// so consumers never observe a state inconsistent with the eventual
    /// baseline. A failed initial load leaves the feed in a degraded mode
    /// where the state stays empty but the handle remains stoppable.
    pub fn start<S>(source: S, config: FeedConfig) -> FeedResult<FeedHandle<S::Payload>>
    where
        S: FeedSource,
    {
        config.validate()?;

        let (snapshot_tx, _) = watch::channel(Vec::new());
        let (error_tx, _) = watch::channel(None);
        let shared = Arc::new(FeedShared {
            state: RwLock::new(FeedState::new(config.cap)),
            phase: RwLock::new(FeedPhase::Idle),
            snapshot_tx,
            error_tx,
            cancel: CancellationToken::new(),
        });

        tokio::spawn(run_feed(source, config, shared.clone()));

        Ok(FeedHandle { shared })
    }
}

/// Feed task: single writer of the feed state.
async fn run_feed<S>(mut source: S, config: FeedConfig, shared: Arc<FeedShared<S::Payload>>)
where
    S: FeedSource,
{
    shared.transition(FeedPhase::Loading);

    let loaded = tokio::select! {
        _ = shared.cancel.cancelled() => {
            shared.transition(FeedPhase::Stopped);
            return;
        }
        result = source.fetch_initial() => result,
    };

    // stop() may have raced the load completion; discard the result.
    if shared.cancel.is_cancelled() {
        shared.transition(FeedPhase::Stopped);
        return;
    }

    let degraded = match loaded {
        Ok(batch) => {
            debug!(count = batch.len(), "Initial batch loaded");
            shared.apply_initial(batch);
            false
        }
        Err(e) => {
            warn!(error = %e, "Initial load failed, feed degraded");
            shared.error_tx.send_replace(Some(InitialLoadError::from(e)));
            true
        }
    };

    if degraded {
        // Ticks stay suppressed and the timer never starts, so the phase
        // stays Loading while parked.
        shared.cancel.cancelled().await;
        shared.transition(FeedPhase::Stopped);
        return;
    }

    shared.transition(FeedPhase::Streaming);

    let mut interval = tokio::time::interval(Duration::from_millis(config.interval_ms));
    // The first interval tick completes immediately; consume it so that
    // tick 1 lands one full interval after the initial load.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = shared.cancel.cancelled() => break,
            _ = interval.tick() => {
                // Uniform draw in [0, 1): always emits at probability 1,
                // never at probability 0.
                if fastrand::f64() >= config.emit_probability {
                    continue;
                }

                let produced = tokio::select! {
                    _ = shared.cancel.cancelled() => break,
                    result = source.maybe_next() => result,
                };

                if shared.cancel.is_cancelled() {
                    break;
                }

                match produced {
                    Ok(Some(record)) => shared.apply_record(record),
                    Ok(None) => {}
                    Err(e) => {
                        // One bad tick must not kill the stream.
                        debug!(error = %e, "Tick producer failed, skipping tick");
                    }
                }
            }
        }
    }

    shared.transition(FeedPhase::Stopped);
}
