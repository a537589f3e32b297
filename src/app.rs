use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/albums", get(handlers::albums_page))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/weekly/:series_id", get(handlers::get_weekly))
        .route("/api/albums", get(handlers::get_albums))
        .with_state(state)
}
