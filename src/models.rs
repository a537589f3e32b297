use crate::errors::DataError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    date: String,
    #[serde(default)]
    videos: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    #[serde(rename = "videoId")]
    video_id: String,
    #[serde(default)]
    title: Option<String>,
    views_diff: i64,
    views_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEntry {
    pub series_id: String,
    pub title: String,
    pub delta: i64,
    pub cumulative_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub entries: Vec<SeriesEntry>,
}

impl DailySnapshot {
    pub fn entry(&self, series_id: &str) -> Option<&SeriesEntry> {
        self.entries.iter().find(|entry| entry.series_id == series_id)
    }

    pub fn delta_for(&self, series_id: &str) -> i64 {
        self.entry(series_id).map_or(0, |entry| entry.delta)
    }
}

/// Date-ordered snapshots, oldest first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<DailySnapshot>,
}

impl History {
    pub fn new(snapshots: Vec<DailySnapshot>) -> Result<Self, DataError> {
        if snapshots.is_empty() {
            return Err(DataError::EmptyHistory);
        }
        Ok(Self { snapshots })
    }

    pub fn snapshots(&self) -> &[DailySnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> &DailySnapshot {
        // `new` rejects empty histories.
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Strict `YYYY-MM-DD`: four-digit year, zero-padded month and day, no padding or sign.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn parse_history(bytes: &[u8]) -> Result<History, DataError> {
    let raw: Vec<RawSnapshot> = serde_json::from_slice(bytes)?;
    let mut snapshots = Vec::with_capacity(raw.len());
    for (index, snapshot) in raw.into_iter().enumerate() {
        let date = parse_date(&snapshot.date).ok_or_else(|| DataError::InvalidDate {
            index,
            value: snapshot.date.clone(),
        })?;
        let entries = snapshot
            .videos
            .into_iter()
            .map(|video| SeriesEntry {
                title: video.title.unwrap_or_else(|| video.video_id.clone()),
                series_id: video.video_id,
                delta: video.views_diff,
                cumulative_total: video.views_total,
            })
            .collect();
        snapshots.push(DailySnapshot { date, entries });
    }
    History::new(snapshots)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPopularity {
    pub title: String,
    #[serde(default)]
    pub spotify_popularity: Option<i64>,
    #[serde(default)]
    pub spotify_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PopularityDocument {
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub tracks: Vec<TrackPopularity>,
}

pub fn parse_popularity(bytes: &[u8]) -> Result<PopularityDocument, DataError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub name: String,
    pub titles: Vec<String>,
}

pub fn parse_albums(bytes: &[u8]) -> Result<Vec<Album>, DataError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub series_id: String,
    pub title: String,
    pub views_this_week: i64,
    pub views_total: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub last_updated: String,
    pub anchor: String,
    pub window_start: String,
    pub window_end: String,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyTotalResponse {
    pub series_id: String,
    pub anchor: String,
    pub start_date: String,
    pub end_date: String,
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartDataset {
    pub series_id: String,
    pub label: String,
    pub data: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrackRow {
    pub title: String,
    pub url: Option<String>,
    pub popularity: Option<i64>,
    pub delta: Option<i64>,
    pub trend: Trend,
    pub delta_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AlbumGroup {
    pub name: String,
    pub tracks: Vec<TrackRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AlbumsResponse {
    pub updated_at: String,
    pub albums: Vec<AlbumGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_parses_source_shape() {
        let json = br#"[
            {"date": "2025-01-03", "videos": [
                {"videoId": "a", "title": "First", "views_diff": 5, "views_total": 105}
            ]},
            {"date": "2025-01-04", "videos": [
                {"videoId": "a", "views_diff": 7, "views_total": 112}
            ]}
        ]"#;

        let history = parse_history(json).expect("history");
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().date, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
        let entry = history.latest().entry("a").expect("entry");
        assert_eq!(entry.title, "a");
        assert_eq!(entry.delta, 7);
        assert_eq!(entry.cumulative_total, 112);
        assert_eq!(history.snapshots()[0].entry("a").unwrap().title, "First");
    }

    #[test]
    fn empty_history_is_rejected() {
        assert!(matches!(parse_history(b"[]"), Err(DataError::EmptyHistory)));
    }

    #[test]
    fn malformed_date_names_the_snapshot() {
        let json = br#"[
            {"date": "2025-01-03", "videos": []},
            {"date": "2025/01/04", "videos": []}
        ]"#;
        match parse_history(json) {
            Err(DataError::InvalidDate { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "2025/01/04");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn dates_must_be_zero_padded_four_digit_years() {
        assert_eq!(parse_date("2025-01-04"), NaiveDate::from_ymd_opt(2025, 1, 4));
        assert_eq!(parse_date("2025-1-4"), None);
        assert_eq!(parse_date(" 2025-01-04 "), None);
        assert_eq!(parse_date("+2025-01-04"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }

    #[test]
    fn out_of_range_years_are_rejected() {
        let json = br#"[{"date": "-262143-01-01", "videos": []}]"#;
        assert!(matches!(
            parse_history(json),
            Err(DataError::InvalidDate { index: 0, .. })
        ));
    }

    #[test]
    fn non_array_history_is_a_json_error() {
        assert!(matches!(
            parse_history(br#"{"date": "2025-01-03"}"#),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn popularity_allows_null_scores() {
        let json = br#"{"updated_at": "2025-01-04 09:00", "tracks": [
            {"title": "Song", "spotify_popularity": null}
        ]}"#;
        let doc = parse_popularity(json).expect("popularity");
        assert_eq!(doc.tracks[0].spotify_popularity, None);
        assert_eq!(doc.tracks[0].spotify_url, None);
    }
}
