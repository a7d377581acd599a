use serde::{Deserialize, Serialize};
use time::Date;

use super::aggregate::DayTrend;

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DatedScore {
    pub date: Date,
    pub score: i32,
}

#[derive(Debug, Serialize)]
pub struct DatedRate {
    pub date: Date,
    pub rate: i32,
}

/// Per-source series are bare arrays aligned index by index with `daily_scores`.
#[derive(Debug, Serialize)]
pub struct ExerciseTrends {
    pub calories: Vec<i64>,
    pub duration: Vec<i64>,
    pub steps: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct DietTrends {
    pub avg_health_scores: Vec<i32>,
    pub daily_calories: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub days: u32,
    pub daily_scores: Vec<DatedScore>,
    pub exercise_trends: ExerciseTrends,
    pub task_completion_rate: Vec<DatedRate>,
    pub diet_trends: DietTrends,
}

impl TrendResponse {
    pub fn from_days(days: u32, trend: &[DayTrend]) -> Self {
        Self {
            days,
            daily_scores: trend
                .iter()
                .map(|d| DatedScore {
                    date: d.date,
                    score: d.composite_score,
                })
                .collect(),
            exercise_trends: ExerciseTrends {
                calories: trend.iter().map(|d| d.exercise_calories).collect(),
                duration: trend.iter().map(|d| d.exercise_duration).collect(),
                steps: trend.iter().map(|d| d.exercise_steps).collect(),
            },
            task_completion_rate: trend
                .iter()
                .map(|d| DatedRate {
                    date: d.date,
                    rate: d.task_completion_rate,
                })
                .collect(),
            diet_trends: DietTrends {
                avg_health_scores: trend.iter().map(|d| d.diet_score).collect(),
                daily_calories: trend.iter().map(|d| d.diet_calories).collect(),
            },
        }
    }
}
