use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::{info, instrument};

use super::dto::{ExerciseTodayResponse, ExerciseView, ScoredObservation};
use super::model::day_score;
use super::repo;
use super::scoring::score_exercise;
use super::services::{recognize_exercise, IMAGE_CONTENT_TYPES};
use crate::{
    auth::AuthUser,
    dates,
    error::{AppError, Result},
    recognition::validate_exercise,
    state::AppState,
};

/// Headroom for multipart framing on top of the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/exercise/today", get(list_today))
        .route("/exercise/score", post(score_raw))
}

pub fn write_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/exercise/parse_report", post(parse_report))
        .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD))
}

struct Upload {
    body: Bytes,
    content_type: String,
}

async fn read_image(mp: &mut Multipart, max_bytes: usize) -> Result<Upload> {
    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !IMAGE_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(
                "unsupported file type; only jpg/png are accepted".into(),
            ));
        }
        let body = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if body.len() > max_bytes {
            return Err(AppError::BadRequest(format!(
                "file exceeds {max_bytes} bytes"
            )));
        }
        return Ok(Upload { body, content_type });
    }
    Err(AppError::BadRequest("file is required".into()))
}

/// POST /exercise/parse_report (multipart, field `file`)
#[instrument(skip(state, mp))]
pub async fn parse_report(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut mp: Multipart,
) -> Result<(StatusCode, Json<ExerciseView>)> {
    let upload = read_image(&mut mp, state.config.max_upload_bytes).await?;
    let today = dates::today(state.config.utc_offset);

    let observation = recognize_exercise(
        state.recognizer.as_ref(),
        upload.body,
        &upload.content_type,
        today,
    )
    .await?;
    let score = score_exercise(&observation);

    let record = repo::insert(&state.db, user_id, &observation, score).await?;
    info!(%user_id, record_id = %record.id, score, kind = %record.observation.exercise_kind, "exercise recorded");
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// POST /exercise/score: validate a recognition payload and score it without saving.
#[instrument(skip(state, raw))]
pub async fn score_raw(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(raw): Json<Value>,
) -> Result<Json<ScoredObservation>> {
    let today = dates::today(state.config.utc_offset);
    let observation = validate_exercise(&raw, today)?;
    let score = score_exercise(&observation);
    Ok(Json(ScoredObservation { observation, score }))
}

#[instrument(skip(state))]
pub async fn list_today(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ExerciseTodayResponse>> {
    let today = dates::today(state.config.utc_offset);
    let records = repo::list_in_range(&state.db, user_id, today, today).await?;
    let day_score = day_score(&records);
    Ok(Json(ExerciseTodayResponse {
        date: today,
        records: records.into_iter().map(ExerciseView::from).collect(),
        day_score,
    }))
}
