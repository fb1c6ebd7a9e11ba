use std::{sync::Arc, time::Duration};

use log::{debug, info};
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
    time::{self, Instant},
};

use super::{StopwatchSnapshot, StopwatchState, StopwatchStatus};

const DEFAULT_TICK_MS: u64 = 10;

/// Async shell around [`StopwatchState`]: runs the periodic sampler while the
/// stopwatch is running and publishes snapshots over a watch channel.
///
/// Commands never fail; out-of-context commands are silently ignored, matching
/// the state machine's guards. The sampler handle is the only background
/// resource — it is aborted on every exit from the running state and on
/// [`shutdown`](Self::shutdown), and the sampler loop itself bails out as soon
/// as it observes a non-running state.
#[derive(Clone)]
pub struct StopwatchController {
    state: Arc<Mutex<StopwatchState>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    tick_interval: Duration,
    snapshot_tx: watch::Sender<StopwatchSnapshot>,
}

impl StopwatchController {
    /// Sampler cadence defaults to 10 ms; `CHRONOS_TICK_MS` overrides it.
    pub fn new() -> Self {
        let tick_ms = std::env::var("CHRONOS_TICK_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TICK_MS);

        Self::with_tick_interval(Duration::from_millis(tick_ms))
    }

    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        let (snapshot_tx, _) = watch::channel(StopwatchSnapshot::default());
        Self {
            state: Arc::new(Mutex::new(StopwatchState::new())),
            ticker: Arc::new(Mutex::new(None)),
            tick_interval,
            snapshot_tx,
        }
    }

    /// Latest-value channel for the presentation layer. A fresh receiver sees
    /// the current snapshot immediately.
    pub fn subscribe(&self) -> watch::Receiver<StopwatchSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub async fn snapshot(&self) -> StopwatchSnapshot {
        let state = self.state.lock().await;
        state.snapshot(Instant::now())
    }

    pub async fn start(&self) {
        let started = { self.state.lock().await.start(Instant::now()) };
        if !started {
            return;
        }
        info!("stopwatch running");
        self.spawn_ticker().await;
        self.publish().await;
    }

    pub async fn pause(&self) {
        let paused = { self.state.lock().await.pause(Instant::now()) };
        if !paused {
            return;
        }
        self.cancel_ticker().await;
        info!("stopwatch paused");
        self.publish().await;
    }

    pub async fn resume(&self) {
        let resumed = { self.state.lock().await.resume(Instant::now()) };
        if !resumed {
            return;
        }
        info!("stopwatch resumed");
        self.spawn_ticker().await;
        self.publish().await;
    }

    pub async fn reset(&self) {
        {
            self.state.lock().await.reset();
        }
        self.cancel_ticker().await;
        info!("stopwatch reset");
        self.publish().await;
    }

    pub async fn lap(&self) {
        let lap = { self.state.lock().await.record_lap(Instant::now()) };
        if let Some(lap) = lap {
            debug!("lap {} recorded at {} ms", lap.lap_number, lap.total_time);
            self.publish().await;
        }
    }

    /// Teardown path for the hosting view; releases the sampler.
    pub async fn shutdown(&self) {
        self.cancel_ticker().await;
    }

    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(handle) = ticker_guard.take() {
            handle.abort();
        }

        let state = self.state.clone();
        let snapshot_tx = self.snapshot_tx.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            loop {
                interval.tick().await;

                // Each tick recomputes from the anchor; the sampler is a
                // refresh mechanism, not the source of truth.
                let snapshot = {
                    let guard = state.lock().await;
                    if guard.status() != StopwatchStatus::Running {
                        break;
                    }
                    guard.snapshot(Instant::now())
                };

                snapshot_tx.send_replace(snapshot);
            }
        });

        *ticker_guard = Some(handle);
    }

    async fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }

    async fn publish(&self) {
        let snapshot = { self.state.lock().await.snapshot(Instant::now()) };
        self.snapshot_tx.send_replace(snapshot);
    }
}

impl Default for StopwatchController {
    fn default() -> Self {
        Self::new()
    }
}
