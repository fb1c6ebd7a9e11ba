use serde::Serialize;
use tokio::time::Instant;
use uuid::Uuid;

use super::laps::{Lap, LapLedger};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StopwatchStatus {
    Idle,
    Running,
    Paused,
}

impl Default for StopwatchStatus {
    fn default() -> Self {
        StopwatchStatus::Idle
    }
}

impl StopwatchStatus {
    /// Wire spelling used on the snapshot boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            StopwatchStatus::Idle => "idle",
            StopwatchStatus::Running => "running",
            StopwatchStatus::Paused => "paused",
        }
    }
}

/// Read-only view published to the presentation layer on every change and on
/// every sampler tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopwatchSnapshot {
    pub time: u64,
    pub state: StopwatchStatus,
    pub laps: Vec<Lap>,
    pub best_lap_id: Option<Uuid>,
    pub worst_lap_id: Option<Uuid>,
}

impl Default for StopwatchSnapshot {
    fn default() -> Self {
        Self {
            time: 0,
            state: StopwatchStatus::Idle,
            laps: Vec::new(),
            best_lap_id: None,
            worst_lap_id: None,
        }
    }
}

/// The stopwatch state machine. Elapsed time combines `running_anchor` (set
/// on each start/resume) with `elapsed_ms_baseline` (time banked at the last
/// pause), so it is always recomputed from the monotonic clock rather than
/// incremented by the sampler.
///
/// Every command takes `now` explicitly; the async shell passes
/// `Instant::now()` and tests pass synthetic instants.
#[derive(Debug, Clone, Default)]
pub struct StopwatchState {
    status: StopwatchStatus,
    laps: LapLedger,
    elapsed_ms_baseline: u64,
    running_anchor: Option<Instant>,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StopwatchStatus {
        self.status
    }

    /// Authoritative elapsed time in milliseconds.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        match (self.status, self.running_anchor) {
            (StopwatchStatus::Running, Some(anchor)) => self
                .elapsed_ms_baseline
                .saturating_add(now.saturating_duration_since(anchor).as_millis() as u64),
            _ => self.elapsed_ms_baseline,
        }
    }

    /// Starts from idle, or resumes from paused. Returns `false` without
    /// touching the anchor when already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.status == StopwatchStatus::Running {
            return false;
        }
        self.running_anchor = Some(now);
        self.status = StopwatchStatus::Running;
        true
    }

    /// Banks the current elapsed time and freezes. No-op unless running.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.status != StopwatchStatus::Running {
            return false;
        }
        self.elapsed_ms_baseline = self.elapsed_ms(now);
        self.running_anchor = None;
        self.status = StopwatchStatus::Paused;
        true
    }

    /// No-op unless paused.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.status != StopwatchStatus::Paused {
            return false;
        }
        self.running_anchor = Some(now);
        self.status = StopwatchStatus::Running;
        true
    }

    /// Back to idle from any state: zero elapsed, empty ledger.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records a lap at the current elapsed time. No-op unless running.
    pub fn record_lap(&mut self, now: Instant) -> Option<Lap> {
        if self.status != StopwatchStatus::Running {
            return None;
        }
        let elapsed = self.elapsed_ms(now);
        Some(self.laps.record(elapsed).clone())
    }

    pub fn snapshot(&self, now: Instant) -> StopwatchSnapshot {
        let (best_lap_id, worst_lap_id) = self.laps.best_and_worst();
        StopwatchSnapshot {
            time: self.elapsed_ms(now),
            state: self.status,
            laps: self.laps.laps().to_vec(),
            best_lap_id,
            worst_lap_id,
        }
    }
}
