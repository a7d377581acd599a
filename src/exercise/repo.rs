use anyhow::Context;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::model::{ExerciseObservation, ExerciseRecord};
use super::repo_types::ExerciseRow;

const COLUMNS: &str = "id, user_id, exercise_type, duration_min, calories, steps, \
    avg_heart_rate, max_heart_rate, source_device, date, score, created_at";

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    obs: &ExerciseObservation,
    score: i32,
) -> anyhow::Result<ExerciseRecord> {
    let row = sqlx::query_as::<_, ExerciseRow>(&format!(
        r#"
        INSERT INTO exercise_records
            (id, user_id, exercise_type, duration_min, calories, steps,
             avg_heart_rate, max_heart_rate, source_device, date, score)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&obs.exercise_kind)
    .bind(obs.duration_minutes)
    .bind(obs.calories)
    .bind(obs.steps)
    .bind(obs.avg_heart_rate)
    .bind(obs.max_heart_rate)
    .bind(obs.source_device.as_str())
    .bind(obs.occurred_on)
    .bind(score)
    .fetch_one(db)
    .await
    .context("insert exercise record")?;
    Ok(row.into())
}

/// Records with `start <= date <= end`, oldest first.
pub async fn list_in_range(
    db: &PgPool,
    user_id: Uuid,
    start: Date,
    end: Date,
) -> anyhow::Result<Vec<ExerciseRecord>> {
    let rows = sqlx::query_as::<_, ExerciseRow>(&format!(
        r#"
        SELECT {COLUMNS}
          FROM exercise_records
         WHERE user_id = $1 AND date >= $2 AND date <= $3
         ORDER BY date ASC, created_at ASC
        "#
    ))
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .context("list exercise records")?;
    Ok(rows.into_iter().map(ExerciseRecord::from).collect())
}
