use serde::Serialize;
use time::Date;
use uuid::Uuid;

use super::model::{ExerciseObservation, ExerciseRecord};

#[derive(Debug, Serialize)]
pub struct ScoredObservation {
    #[serde(flatten)]
    pub observation: ExerciseObservation,
    pub score: i32,
}

#[derive(Debug, Serialize)]
pub struct ExerciseView {
    pub id: Uuid,
    #[serde(flatten)]
    pub observation: ExerciseObservation,
    pub score: i32,
}

impl From<ExerciseRecord> for ExerciseView {
    fn from(r: ExerciseRecord) -> Self {
        Self {
            id: r.id,
            observation: r.observation,
            score: r.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseTodayResponse {
    pub date: Date,
    pub records: Vec<ExerciseView>,
    pub day_score: i32,
}
