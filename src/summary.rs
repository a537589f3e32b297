use crate::models::{History, SeriesSummary, SummaryResponse, WeeklyTotalResponse};
use crate::weekly::{aggregate, weekly_window};
use chrono::Weekday;

pub fn build_summary(history: &History, anchor: Weekday) -> SummaryResponse {
    let window = weekly_window(history, anchor);
    let latest = history.latest();

    let series = latest
        .entries
        .iter()
        .map(|entry| SeriesSummary {
            series_id: entry.series_id.clone(),
            title: entry.title.clone(),
            views_this_week: aggregate(history, &entry.series_id, anchor),
            views_total: entry.cumulative_total,
        })
        .collect();

    SummaryResponse {
        last_updated: latest.date.to_string(),
        anchor: anchor.to_string(),
        window_start: window.start_date.to_string(),
        window_end: window.end_date.to_string(),
        series,
    }
}

pub fn build_weekly_total(history: &History, series_id: &str, anchor: Weekday) -> WeeklyTotalResponse {
    let window = weekly_window(history, anchor);
    WeeklyTotalResponse {
        series_id: series_id.to_string(),
        anchor: anchor.to_string(),
        start_date: window.start_date.to_string(),
        end_date: window.end_date.to_string(),
        total: aggregate(history, series_id, anchor),
    }
}
