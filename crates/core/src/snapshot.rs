use crate::history::HistoryBuffer;
use crate::reading::Reading;

/// Row/column projection of the history buffer, consumed by the table card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

/// One table row. Column order: temperature, timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub temperature: String,
    pub timestamp: String,
}

/// Immutable bundle of the buffer and its derived views, recomputed once per
/// tick. Before the first reading it is the empty snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Buffered readings in chronological order.
    pub readings: Vec<Reading>,
    /// Tabular projection of `readings`, row order mirroring buffer order.
    pub table: TableView,
    /// Most recently appended reading, `None` before the first tick.
    pub latest: Option<Reading>,
}

impl Snapshot {
    /// Project the current buffer into all derived views.
    ///
    /// Pure: computing twice against the same buffer yields equal snapshots.
    pub fn compute(history: &HistoryBuffer) -> Self {
        let rows = history
            .iter()
            .map(|r| TableRow {
                temperature: format!("{:.1}", r.temperature),
                timestamp: r.timestamp.clone(),
            })
            .collect();

        Self {
            readings: history.to_vec(),
            table: TableView { rows },
            latest: history.latest().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_yields_empty_snapshot() {
        let snapshot = Snapshot::compute(&HistoryBuffer::new(5));

        assert!(snapshot.readings.is_empty());
        assert!(snapshot.table.rows.is_empty());
        assert!(snapshot.latest.is_none());
    }

    #[test]
    fn latest_is_most_recently_appended() {
        let mut buf = HistoryBuffer::new(3);
        buf.push(Reading::new(-17.5, "2026-03-01 12:00:00"));
        buf.push(Reading::new(-16.9, "2026-03-01 12:00:03"));

        let snapshot = Snapshot::compute(&buf);
        assert_eq!(snapshot.latest.unwrap().temperature, -16.9);
    }

    #[test]
    fn recompute_without_push_is_idempotent() {
        let mut buf = HistoryBuffer::new(3);
        buf.push(Reading::new(-17.5, "2026-03-01 12:00:00"));

        assert_eq!(Snapshot::compute(&buf), Snapshot::compute(&buf));
    }

    #[test]
    fn table_rows_mirror_buffer_order() {
        let mut buf = HistoryBuffer::new(3);
        buf.push(Reading::new(-18.0, "2026-03-01 12:00:00"));
        buf.push(Reading::new(-17.26, "2026-03-01 12:00:03"));
        buf.push(Reading::new(-16.4, "2026-03-01 12:00:06"));

        let rows = Snapshot::compute(&buf).table.rows;
        let temps: Vec<&str> = rows.iter().map(|r| r.temperature.as_str()).collect();
        let stamps: Vec<&str> = rows.iter().map(|r| r.timestamp.as_str()).collect();

        assert_eq!(temps, vec!["-18.0", "-17.3", "-16.4"]);
        assert_eq!(
            stamps,
            vec![
                "2026-03-01 12:00:00",
                "2026-03-01 12:00:03",
                "2026-03-01 12:00:06",
            ]
        );
    }
}
