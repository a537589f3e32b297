use axum::http::StatusCode;
use thiserror::Error;

/// Problems with the externally produced documents.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("history contains no snapshots")]
    EmptyHistory,
    #[error("snapshot {index} has invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { index: usize, value: String },
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid WEEK_ANCHOR {0:?}")]
    InvalidAnchor(String),
    #[error("invalid album catalog: {0}")]
    Albums(#[source] DataError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        Self::unavailable(format!("data unavailable: {err}"))
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
