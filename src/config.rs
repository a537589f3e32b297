use crate::errors::ConfigError;
use crate::models::{parse_albums, Album};
use crate::weekly::DEFAULT_ANCHOR;
use chrono::Weekday;
use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub history_path: PathBuf,
    pub popularity_path: PathBuf,
    pub popularity_prev_path: PathBuf,
    pub albums_path: Option<PathBuf>,
    pub anchor: Weekday,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let anchor = match env::var("WEEK_ANCHOR") {
            Ok(value) => parse_anchor(&value)?,
            Err(_) => DEFAULT_ANCHOR,
        };

        Ok(Self {
            port,
            history_path: path_var("APP_HISTORY_PATH", "data/data.json"),
            popularity_path: path_var("APP_POPULARITY_PATH", "data/spotify_data.json"),
            popularity_prev_path: path_var("APP_POPULARITY_PREV_PATH", "data/spotify_data_prev.json"),
            albums_path: env::var("APP_ALBUMS_PATH").ok().map(PathBuf::from),
            anchor,
        })
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Accepts any chrono spelling: `Sat`, `saturday`, `SATURDAY`.
pub fn parse_anchor(value: &str) -> Result<Weekday, ConfigError> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| ConfigError::InvalidAnchor(value.to_string()))
}

pub fn load_albums(bytes: Option<&[u8]>) -> Result<Vec<Album>, ConfigError> {
    match bytes {
        Some(bytes) => parse_albums(bytes).map_err(ConfigError::Albums),
        None => Ok(default_albums()),
    }
}

/// Titles must match the popularity document exactly.
pub fn default_albums() -> Vec<Album> {
    let catalog: [(&str, &[&str]); 5] = [
        ("D-DAY", &["D‐Day", "해금", "HUH?!", "Snooze", "AMYGDALA"]),
        ("D-2", &["Moonlight", "Daechwita", "Burn It", "People", "Strange", "28"]),
        ("Agust D", &["Agust D", "give it to me", "The Last", "724148", "140503 at dawn"]),
        ("BE", &["Life Goes On", "Fly To My Room", "Blue & Grey", "Telepathy", "Dis-ease", "Stay"]),
        (
            "LOVE YOURSELF 轉 'Tear'",
            &["Fake Love", "134340", "Paradise", "Magic Shop", "So What", "Outro : Tear"],
        ),
    ];
    catalog
        .iter()
        .map(|(name, titles)| Album {
            name: name.to_string(),
            titles: titles.iter().map(|title| title.to_string()).collect(),
        })
        .collect()
}
