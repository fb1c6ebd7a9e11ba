use serde::Serialize;
use uuid::Uuid;

/// A single recorded checkpoint: the time since the previous checkpoint and
/// the cumulative elapsed time at the moment it was taken.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lap {
    pub id: Uuid,
    pub lap_number: u32,
    pub lap_time: u64,
    pub total_time: u64,
}

/// Ordered lap sequence, kept most-recent-first for display. Lap numbers
/// follow recording order, so the head of the sequence carries the highest
/// number.
#[derive(Debug, Clone, Default)]
pub struct LapLedger {
    laps: Vec<Lap>,
}

impl LapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lap at the given cumulative elapsed time and returns it.
    /// The lap's own time is the delta against the previously recorded lap.
    pub fn record(&mut self, elapsed_ms: u64) -> &Lap {
        let previous_total = self.laps.first().map(|lap| lap.total_time).unwrap_or(0);
        let lap = Lap {
            id: Uuid::new_v4(),
            lap_number: self.laps.len() as u32 + 1,
            lap_time: elapsed_ms.saturating_sub(previous_total),
            total_time: elapsed_ms,
        };
        self.laps.insert(0, lap);
        &self.laps[0]
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    /// Pure projection of the ledger: ids of the fastest and slowest laps.
    /// A single lap has nothing to compare against, so both are `None` until
    /// at least two laps exist. Ties keep the earliest recorded lap.
    pub fn best_and_worst(&self) -> (Option<Uuid>, Option<Uuid>) {
        if self.laps.len() < 2 {
            return (None, None);
        }

        // Scan oldest to newest so first-seen wins on equal lap times.
        let mut recorded = self.laps.iter().rev();
        let seed = match recorded.next() {
            Some(lap) => lap,
            None => return (None, None),
        };

        let mut best = seed;
        let mut worst = seed;
        for lap in recorded {
            if lap.lap_time < best.lap_time {
                best = lap;
            }
            if lap.lap_time > worst.lap_time {
                worst = lap;
            }
        }

        (Some(best.id), Some(worst.id))
    }
}
