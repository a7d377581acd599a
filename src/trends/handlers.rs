use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::aggregate::aggregate;
use super::dto::{TrendQuery, TrendResponse};
use crate::{
    auth::AuthUser,
    dates,
    error::{AppError, Result},
    exercise, meals,
    state::AppState,
    tasks,
};

pub const SUPPORTED_WINDOWS: [u32; 2] = [7, 30];

pub fn routes() -> Router<AppState> {
    Router::new().route("/trends", get(trends))
}

/// GET /trends?days=7|30 (defaults to 7)
#[instrument(skip(state))]
pub async fn trends(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<TrendQuery>,
) -> Result<Json<TrendResponse>> {
    let days = q.days.unwrap_or(7);
    if !SUPPORTED_WINDOWS.contains(&days) {
        return Err(AppError::BadRequest("days must be 7 or 30".into()));
    }

    let end = dates::today(state.config.utc_offset);
    let start = dates::window_start(end, days);

    let (exercises, meals, tasks) = tokio::try_join!(
        exercise::list_in_range(&state.db, user_id, start, end),
        meals::list_in_range(&state.db, user_id, start, end),
        tasks::list_in_range(&state.db, user_id, start, end),
    )?;

    let trend = aggregate(exercises, meals, tasks, end, days);
    Ok(Json(TrendResponse::from_days(days, &trend)))
}
