use crate::history::HistoryBuffer;
use crate::reading::Reading;
use crate::snapshot::Snapshot;
use chrono::{DateTime, Local};

/// Central application state — all display widgets read from this.
///
/// Single writer: only the application's update loop mutates it. The buffer
/// and the derived snapshot are always replaced in the same turn, so readers
/// never observe one without the other.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Rolling buffer of the most recent readings.
    pub history: HistoryBuffer,
    /// Derived views, recomputed after every appended reading.
    snapshot: Snapshot,
    /// Current local time (updated every second for the header clock).
    pub time: DateTime<Local>,
}

impl AppState {
    pub fn new(capacity: usize) -> Self {
        let history = HistoryBuffer::new(capacity);
        let snapshot = Snapshot::compute(&history);
        Self {
            history,
            snapshot,
            time: Local::now(),
        }
    }

    /// Append one reading and recompute the derived views.
    pub fn record(&mut self, reading: Reading) {
        self.history.push(reading);
        self.snapshot = Snapshot::compute(&self.history);
    }

    /// Apply a new buffer capacity (live config reload).
    pub fn resize_history(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
        self.snapshot = Snapshot::compute(&self.history);
    }

    /// The most recently computed snapshot (empty before the first tick).
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::history::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_snapshot_in_step_with_history() {
        let mut state = AppState::new(3);
        state.record(Reading::new(-17.1, "2026-03-01 12:00:00"));
        state.record(Reading::new(-16.6, "2026-03-01 12:00:03"));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.readings.len(), state.history.len());
        assert_eq!(
            snapshot.latest.as_ref().map(|r| r.temperature),
            state.history.latest().map(|r| r.temperature),
        );
    }

    #[test]
    fn resize_recomputes_the_snapshot() {
        let mut state = AppState::new(5);
        for t in 1..=5 {
            state.record(Reading::new(t as f64, "2026-03-01 12:00:00"));
        }

        state.resize_history(2);
        assert_eq!(state.snapshot().readings.len(), 2);
        assert_eq!(state.snapshot().latest.as_ref().unwrap().temperature, 5.0);
    }
}
