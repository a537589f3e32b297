use crate::errors::DataError;
use crate::models::{parse_history, parse_popularity, History, PopularityDocument};
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

async fn read(path: &Path) -> Result<Vec<u8>, DataError> {
    fs::read(path).await.map_err(|source| DataError::Read {
        path: path.display().to_string(),
        source,
    })
}

pub async fn load_history(path: &Path) -> Result<History, DataError> {
    let bytes = read(path).await.inspect_err(|err| error!("failed to load history: {err}"))?;
    parse_history(&bytes).inspect_err(|err| error!("failed to parse history: {err}"))
}

pub async fn load_popularity(path: &Path) -> Result<PopularityDocument, DataError> {
    let bytes = read(path).await.inspect_err(|err| error!("failed to load popularity: {err}"))?;
    parse_popularity(&bytes).inspect_err(|err| error!("failed to parse popularity: {err}"))
}

/// The previous day's document is absent on the first run; that is not an error.
pub async fn load_previous_popularity(path: &Path) -> PopularityDocument {
    match fs::read(path).await {
        Ok(bytes) => match parse_popularity(&bytes) {
            Ok(doc) => doc,
            Err(err) => {
                error!("failed to parse previous popularity: {err}");
                PopularityDocument::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no previous popularity document at {}", path.display());
            PopularityDocument::default()
        }
        Err(err) => {
            error!("failed to read previous popularity: {err}");
            PopularityDocument::default()
        }
    }
}
