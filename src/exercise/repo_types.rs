use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::model::{ExerciseObservation, ExerciseRecord, SourceDevice};

#[derive(Debug, FromRow)]
pub struct ExerciseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_type: String,
    pub duration_min: i32,
    pub calories: i32,
    pub steps: Option<i32>,
    pub avg_heart_rate: Option<i32>,
    pub max_heart_rate: Option<i32>,
    pub source_device: String,
    pub date: Date,
    pub score: i32,
    pub created_at: OffsetDateTime,
}

impl From<ExerciseRow> for ExerciseRecord {
    fn from(r: ExerciseRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            observation: ExerciseObservation {
                exercise_kind: r.exercise_type,
                duration_minutes: r.duration_min,
                calories: r.calories,
                steps: r.steps,
                avg_heart_rate: r.avg_heart_rate,
                max_heart_rate: r.max_heart_rate,
                occurred_on: r.date,
                source_device: SourceDevice::parse(&r.source_device),
            },
            score: r.score,
            created_at: r.created_at,
        }
    }
}
