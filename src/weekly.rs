use crate::models::History;
use chrono::{Datelike, NaiveDate, Weekday};

pub const DEFAULT_ANCHOR: Weekday = Weekday::Sat;

/// Bounds of the "this week" window inside a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyWindow {
    pub start_index: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Day of week with Sunday = 0 through Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Scans back from the latest snapshot to the nearest one falling on `anchor`.
/// Stops at index 0 when no snapshot matches.
pub fn window_start(history: &History, anchor: Weekday) -> usize {
    let snapshots = history.snapshots();
    let anchor_index = anchor.num_days_from_sunday();
    let mut start = snapshots.len() - 1;
    while start > 0 {
        if weekday_index(snapshots[start].date) == anchor_index {
            break;
        }
        start -= 1;
    }
    start
}

pub fn weekly_window(history: &History, anchor: Weekday) -> WeeklyWindow {
    let start_index = window_start(history, anchor);
    WeeklyWindow {
        start_index,
        start_date: history.snapshots()[start_index].date,
        end_date: history.latest().date,
    }
}

/// Sum of `series_id` deltas from the window start through the latest snapshot.
/// Saturates at the `i64` bounds.
pub fn aggregate(history: &History, series_id: &str, anchor: Weekday) -> i64 {
    let start = window_start(history, anchor);
    history.snapshots()[start..]
        .iter()
        .fold(0i64, |total, snapshot| total.saturating_add(snapshot.delta_for(series_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailySnapshot, SeriesEntry};
    use chrono::Duration;

    fn entry(series_id: &str, delta: i64) -> SeriesEntry {
        SeriesEntry {
            series_id: series_id.to_string(),
            title: series_id.to_string(),
            delta,
            cumulative_total: delta.saturating_mul(10),
        }
    }

    fn history_from(first: NaiveDate, deltas: &[i64]) -> History {
        let snapshots = deltas
            .iter()
            .enumerate()
            .map(|(offset, delta)| DailySnapshot {
                date: first + Duration::days(offset as i64),
                entries: vec![entry("A", *delta)],
            })
            .collect();
        History::new(snapshots).unwrap()
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()
    }

    #[test]
    fn weekday_index_counts_from_sunday() {
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()), 0);
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()), 5);
        assert_eq!(weekday_index(saturday()), 6);
    }

    #[test]
    fn single_snapshot_is_its_own_window() {
        let history = history_from(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(), &[100]);
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), 100);
        assert_eq!(aggregate(&history, "B", DEFAULT_ANCHOR), 0);
    }

    #[test]
    fn full_week_from_anchor_sums_every_day() {
        let history = history_from(saturday(), &[10, 20, 30, 40, 50, 60, 70]);
        assert_eq!(window_start(&history, DEFAULT_ANCHOR), 0);
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), 280);
    }

    #[test]
    fn only_days_since_latest_anchor_count() {
        // Thu, Fri, Sat, Sun, Mon
        let history = history_from(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), &[1, 2, 4, 8, 16]);
        assert_eq!(window_start(&history, Weekday::Sat), 2);
        assert_eq!(aggregate(&history, "A", Weekday::Sat), 28);
        assert_eq!(aggregate(&history, "A", Weekday::Fri), 30);
    }

    #[test]
    fn missing_series_contributes_zero() {
        let mut history = history_from(saturday(), &[10, 20, 30]);
        let mut snapshots = history.snapshots().to_vec();
        snapshots[1].entries = vec![entry("B", 500)];
        history = History::new(snapshots).unwrap();
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), 40);
        assert_eq!(aggregate(&history, "B", DEFAULT_ANCHOR), 500);
    }

    #[test]
    fn latest_on_anchor_restarts_window() {
        // Sat through the following Sat.
        let history = history_from(saturday(), &[10, 20, 30, 40, 50, 60, 70, 5]);
        let window = weekly_window(&history, DEFAULT_ANCHOR);
        assert_eq!(window.start_index, 7);
        assert_eq!(window.start_date, window.end_date);
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), 5);
    }

    #[test]
    fn scan_without_anchor_extends_to_first_snapshot() {
        // Sun through Thu.
        let history = history_from(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(), &[1, 1, 1, 1, 1]);
        let window = weekly_window(&history, DEFAULT_ANCHOR);
        assert_eq!(window.start_index, 0);
        assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), 5);
    }

    #[test]
    fn out_of_order_dates_do_not_panic() {
        let snapshots = vec![
            DailySnapshot { date: saturday() + Duration::days(3), entries: vec![entry("A", 1)] },
            DailySnapshot { date: saturday(), entries: vec![entry("A", 2)] },
            DailySnapshot { date: saturday(), entries: vec![entry("A", 4)] },
        ];
        let history = History::new(snapshots).unwrap();
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), 4);
    }

    #[test]
    fn huge_deltas_saturate() {
        let history = history_from(saturday(), &[i64::MAX, 1]);
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), i64::MAX);

        let history = history_from(saturday(), &[i64::MIN, -1]);
        assert_eq!(aggregate(&history, "A", DEFAULT_ANCHOR), i64::MIN);
    }

    #[test]
    fn aggregate_is_repeatable() {
        let history = history_from(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), &[3, 6, 9, 12]);
        let first = aggregate(&history, "A", DEFAULT_ANCHOR);
        let second = aggregate(&history, "A", DEFAULT_ANCHOR);
        assert_eq!(first, second);
    }
}
