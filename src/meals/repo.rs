use anyhow::Context;
use sqlx::{types::Json, PgPool};
use time::Date;
use uuid::Uuid;

use super::model::{MealAnalysis, MealObservation, MealRecord};
use super::repo_types::MealRow;

const COLUMNS: &str = "id, user_id, meal_type, food_items, total_calories, health_score, \
    analysis, nutrition_balance, date, created_at";

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    meal: &MealObservation,
    analysis: &MealAnalysis,
) -> anyhow::Result<MealRecord> {
    let row = sqlx::query_as::<_, MealRow>(&format!(
        r#"
        INSERT INTO meal_records
            (id, user_id, meal_type, food_items, total_calories, health_score,
             analysis, nutrition_balance, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(meal.meal_slot.as_str())
    .bind(Json(&meal.items))
    .bind(analysis.total_calories)
    .bind(analysis.health_score)
    .bind(&analysis.analysis)
    .bind(Json(&analysis.nutrition_balance))
    .bind(meal.occurred_on)
    .fetch_one(db)
    .await
    .context("insert meal record")?;
    row.try_into()
}

pub async fn list_in_range(
    db: &PgPool,
    user_id: Uuid,
    start: Date,
    end: Date,
) -> anyhow::Result<Vec<MealRecord>> {
    let rows = sqlx::query_as::<_, MealRow>(&format!(
        r#"
        SELECT {COLUMNS}
          FROM meal_records
         WHERE user_id = $1 AND date >= $2 AND date <= $3
         ORDER BY date ASC, created_at ASC
        "#
    ))
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .context("list meal records")?;
    rows.into_iter().map(MealRecord::try_from).collect()
}
