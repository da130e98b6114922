//! Feed lifecycle integration tests.
//!
//! Exercises the start/stop contract end to end:
//! - phase transitions across load and streaming
//! - in-flight source results discarded after stop
//! - stop during a slow initial load

use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use pulse_feed::{FeedConfig, FeedPhase, FeedRecord, FeedSource, LiveFeed, SourceError};

/// Source whose calls take a configurable amount of (tokio) time.
struct SlowSource {
    initial_delay: Duration,
    tick_delay: Duration,
}

impl FeedSource for SlowSource {
    type Payload = u32;

    fn fetch_initial(&mut self) -> BoxFuture<'_, Result<Vec<FeedRecord<u32>>, SourceError>> {
        let delay = self.initial_delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(vec![FeedRecord::new(0)])
        }
        .boxed()
    }

    fn maybe_next(&mut self) -> BoxFuture<'_, Result<Option<FeedRecord<u32>>, SourceError>> {
        let delay = self.tick_delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(Some(FeedRecord::new(1)))
        }
        .boxed()
    }
}

fn fast_config() -> FeedConfig {
    FeedConfig {
        interval_ms: 10,
        cap: 10,
        emit_probability: 1.0,
    }
}

#[tokio::test(start_paused = true)]
async fn phase_walks_loading_to_streaming_to_stopped() {
    let source = SlowSource {
        initial_delay: Duration::from_millis(50),
        tick_delay: Duration::ZERO,
    };
    let handle = LiveFeed::start(source, fast_config()).unwrap();

    // Let the task enter the load.
    tokio::task::yield_now().await;
    assert_eq!(handle.phase(), FeedPhase::Loading);

    let mut rx = handle.subscribe();
    rx.changed().await.unwrap();
    assert_eq!(handle.phase(), FeedPhase::Streaming);

    handle.stop();
    assert_eq!(handle.phase(), FeedPhase::Stopped);
}

#[tokio::test(start_paused = true)]
async fn stop_during_initial_load_leaves_state_empty() {
    let source = SlowSource {
        initial_delay: Duration::from_millis(500),
        tick_delay: Duration::ZERO,
    };
    let handle = LiveFeed::start(source, fast_config()).unwrap();

    tokio::task::yield_now().await;
    handle.stop();

    // Even after the load would have resolved, nothing is applied.
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(handle.snapshot().is_empty());
    assert_eq!(handle.phase(), FeedPhase::Stopped);
}

#[tokio::test(start_paused = true)]
async fn in_flight_tick_result_discarded_after_stop() {
    let source = SlowSource {
        initial_delay: Duration::ZERO,
        tick_delay: Duration::from_millis(50),
    };
    let handle = LiveFeed::start(source, fast_config()).unwrap();

    let mut rx = handle.subscribe();
    rx.changed().await.unwrap(); // initial batch applied

    // Let one tick start its (slow) producer call, then stop mid-flight.
    tokio::time::sleep(Duration::from_millis(15)).await;
    handle.stop();
    let at_stop = handle.snapshot();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let later = handle.snapshot();

    let ids_at_stop: Vec<_> = at_stop.iter().map(|r| r.id).collect();
    let ids_later: Vec<_> = later.iter().map(|r| r.id).collect();
    assert_eq!(ids_at_stop, ids_later, "snapshot changed after stop");
}

#[tokio::test(start_paused = true)]
async fn fresh_start_creates_independent_feed() {
    let first = LiveFeed::start(
        SlowSource {
            initial_delay: Duration::ZERO,
            tick_delay: Duration::ZERO,
        },
        fast_config(),
    )
    .unwrap();
    first.stop();

    let second = LiveFeed::start(
        SlowSource {
            initial_delay: Duration::ZERO,
            tick_delay: Duration::ZERO,
        },
        fast_config(),
    )
    .unwrap();

    let mut rx = second.subscribe();
    rx.changed().await.unwrap();
    assert!(!second.is_stopped());
    assert_eq!(second.snapshot().len(), 1);

    second.stop();
}
