use crate::chart::build_chart;
use crate::errors::AppError;
use crate::models::{AlbumsResponse, ChartResponse, SummaryResponse, WeeklyTotalResponse};
use crate::popularity::build_albums;
use crate::state::AppState;
use crate::storage::{load_history, load_popularity, load_previous_popularity};
use crate::summary::{build_summary, build_weekly_total};
use crate::ui::{render_albums, render_index};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn albums_page() -> Html<String> {
    Html(render_albums())
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let history = load_history(&state.config.history_path).await?;
    Ok(Json(build_summary(&history, state.config.anchor)))
}

pub async fn get_chart(State(state): State<AppState>) -> Result<Json<ChartResponse>, AppError> {
    let history = load_history(&state.config.history_path).await?;
    Ok(Json(build_chart(&history)))
}

pub async fn get_weekly(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
) -> Result<Json<WeeklyTotalResponse>, AppError> {
    let history = load_history(&state.config.history_path).await?;
    Ok(Json(build_weekly_total(&history, &series_id, state.config.anchor)))
}

pub async fn get_albums(State(state): State<AppState>) -> Result<Json<AlbumsResponse>, AppError> {
    let today = load_popularity(&state.config.popularity_path).await?;
    let previous = load_previous_popularity(&state.config.popularity_prev_path).await;
    Ok(Json(build_albums(&state.albums, &today, &previous)))
}
