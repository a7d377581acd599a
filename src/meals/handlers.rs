use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{AddMealRequest, MealView, MealsTodayResponse};
use super::model::{average_health_score, total_calories, MealObservation, MealSlot};
use super::repo;
use super::services::analyze_meal;
use crate::{
    auth::AuthUser,
    dates,
    error::{AppError, Result},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/meals/today", get(list_today))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/meals", post(add_meal))
}

/// POST /meals { meal_type, food_items: [{name, amount}], date }
#[instrument(skip(state, body))]
pub async fn add_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<AddMealRequest>,
) -> Result<(StatusCode, Json<MealView>)> {
    let meal_slot = MealSlot::parse(&body.meal_type)
        .ok_or_else(|| AppError::BadRequest(format!("invalid meal_type {:?}", body.meal_type)))?;
    let occurred_on = dates::parse_date(&body.date)
        .ok_or_else(|| AppError::BadRequest("date must be YYYY-MM-DD".into()))?;
    let meal = MealObservation::new(meal_slot, body.food_items, occurred_on)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let analysis = analyze_meal(state.recognizer.as_ref(), &meal.items).await;
    let record = repo::insert(&state.db, user_id, &meal, &analysis).await?;

    info!(%user_id, meal_id = %record.id, health_score = record.health_score, "meal recorded");
    Ok((StatusCode::CREATED, Json(record.into())))
}

#[instrument(skip(state))]
pub async fn list_today(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MealsTodayResponse>> {
    let today = dates::today(state.config.utc_offset);
    let meals = repo::list_in_range(&state.db, user_id, today, today).await?;

    Ok(Json(MealsTodayResponse {
        date: today,
        total_calories: total_calories(&meals),
        avg_health_score: average_health_score(&meals),
        meal_count: meals.len(),
        meals: meals.into_iter().map(MealView::from).collect(),
    }))
}
