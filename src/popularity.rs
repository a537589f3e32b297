use crate::models::{Album, AlbumGroup, AlbumsResponse, PopularityDocument, TrackRow, Trend};
use std::collections::HashMap;

/// Saturates at the `i64` bounds.
pub fn popularity_delta(today: Option<i64>, previous: Option<i64>) -> Option<i64> {
    Some(today?.saturating_sub(previous?))
}

pub fn trend_of(delta: Option<i64>) -> Trend {
    match delta {
        Some(d) if d > 0 => Trend::Up,
        Some(d) if d < 0 => Trend::Down,
        _ => Trend::Same,
    }
}

/// Arrow notation shown next to a track. Empty when there is nothing to compare against.
pub fn delta_text(delta: Option<i64>) -> String {
    match delta {
        Some(d) if d > 0 => format!("↑{d}"),
        Some(d) if d < 0 => format!("↓{}", d.unsigned_abs()),
        Some(_) => "→0".to_string(),
        None => String::new(),
    }
}

pub fn build_albums(
    catalog: &[Album],
    today: &PopularityDocument,
    previous: &PopularityDocument,
) -> AlbumsResponse {
    let previous_by_title: HashMap<&str, Option<i64>> = previous
        .tracks
        .iter()
        .map(|track| (track.title.as_str(), track.spotify_popularity))
        .collect();

    let albums = catalog
        .iter()
        .map(|album| {
            let tracks = album
                .titles
                .iter()
                .filter_map(|title| today.tracks.iter().find(|track| &track.title == title))
                .map(|track| {
                    let previous = previous_by_title
                        .get(track.title.as_str())
                        .copied()
                        .flatten();
                    let delta = popularity_delta(track.spotify_popularity, previous);
                    TrackRow {
                        title: track.title.clone(),
                        url: track.spotify_url.clone(),
                        popularity: track.spotify_popularity,
                        delta,
                        trend: trend_of(delta),
                        delta_text: delta_text(delta),
                    }
                })
                .collect();
            AlbumGroup {
                name: album.name.clone(),
                tracks,
            }
        })
        .collect();

    AlbumsResponse {
        updated_at: today.updated_at.clone(),
        albums,
    }
}
