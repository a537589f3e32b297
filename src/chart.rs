use crate::models::{ChartDataset, ChartResponse, History};
use chrono::{Datelike, NaiveDate};

/// Snapshots are taken the morning after the views they record, so each point
/// is labelled with the previous calendar day.
pub fn chart_label(date: NaiveDate) -> String {
    let day = date.pred_opt().unwrap_or(date);
    format!("{}/{}", day.month(), day.day())
}

pub fn build_chart(history: &History) -> ChartResponse {
    let labels = history
        .snapshots()
        .iter()
        .map(|snapshot| chart_label(snapshot.date))
        .collect();

    let datasets = history
        .latest()
        .entries
        .iter()
        .map(|series| ChartDataset {
            series_id: series.series_id.clone(),
            label: series.title.clone(),
            data: history
                .snapshots()
                .iter()
                .map(|snapshot| snapshot.delta_for(&series.series_id))
                .collect(),
        })
        .collect();

    ChartResponse { labels, datasets }
}
