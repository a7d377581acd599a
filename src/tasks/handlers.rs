use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{CompleteTaskRequest, CompleteTaskResponse, TaskView, TasksTodayResponse};
use super::model::TaskDaySummary;
use super::repo::{self, MarkDone};
use crate::{
    auth::AuthUser,
    dates,
    error::{AppError, Result},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks/today", get(today))
        .route("/tasks/done", post(complete))
}

#[instrument(skip(state))]
pub async fn today(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<TasksTodayResponse>> {
    let today = dates::today(state.config.utc_offset);
    let tasks = repo::generate_or_fetch(&state.db, user_id, today).await?;
    let summary = TaskDaySummary::of(&tasks);

    Ok(Json(TasksTodayResponse {
        date: today,
        tasks: tasks.into_iter().map(TaskView::from).collect(),
        total: summary.total,
        completed: summary.completed,
        points: summary.points,
    }))
}

/// POST /tasks/done { task_id }
#[instrument(skip(state, body))]
pub async fn complete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CompleteTaskRequest>,
) -> Result<Json<CompleteTaskResponse>> {
    let reward_points = match repo::mark_done(&state.db, user_id, body.task_id).await? {
        MarkDone::NotFound => return Err(AppError::NotFound(format!("task {}", body.task_id))),
        MarkDone::Forbidden => {
            return Err(AppError::Forbidden("task belongs to another user".into()))
        }
        MarkDone::Done { reward_points } => reward_points,
    };

    let today = dates::today(state.config.utc_offset);
    let points_today = repo::points_earned(&state.db, user_id, today).await?;
    info!(%user_id, task_id = %body.task_id, points_today, "task completed");

    Ok(Json(CompleteTaskResponse {
        task_id: body.task_id,
        done: true,
        reward_points,
        points_today,
    }))
}
