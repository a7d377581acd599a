use std::collections::HashMap;

use time::{Date, Duration};

use crate::dates::window_start;
use crate::exercise::model::{day_score, ExerciseRecord};
use crate::meals::model::{average_health_score, total_calories, MealRecord};
use crate::tasks::model::{DailyTask, TaskDaySummary};

/// Relative weights of exercise, diet and tasks (0.4 / 0.4 / 0.2).
const EXERCISE_WEIGHT: i32 = 2;
const DIET_WEIGHT: i32 = 2;
const TASK_WEIGHT: i32 = 1;

/// Everything the trend view shows for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTrend {
    pub date: Date,
    pub composite_score: i32,
    pub exercise_calories: i64,
    pub exercise_duration: i64,
    pub exercise_steps: i64,
    pub exercise_score: i32,
    pub diet_score: i32,
    pub diet_calories: i64,
    pub task_completion_rate: i32,
    pub task_points: i32,
}

/// Weighted mean over the sources that scored above zero that day.
///
/// A source that logged something worth 0 looks the same as one that logged
/// nothing.
pub fn composite_score(exercise: i32, diet: i32, task_points: i32) -> i32 {
    let parts = [
        (exercise, EXERCISE_WEIGHT),
        (diet, DIET_WEIGHT),
        (task_points.min(100), TASK_WEIGHT),
    ];

    let (weighted, weights) = parts
        .iter()
        .filter(|(score, _)| *score > 0)
        .fold((0, 0), |(sum, w), &(score, weight)| (sum + score * weight, w + weight));

    if weights == 0 {
        0
    } else {
        weighted / weights
    }
}

fn by_date<T>(records: Vec<T>, date_of: impl Fn(&T) -> Date) -> HashMap<Date, Vec<T>> {
    let mut grouped: HashMap<Date, Vec<T>> = HashMap::new();
    for record in records {
        grouped.entry(date_of(&record)).or_default().push(record);
    }
    grouped
}

/// One [`DayTrend`] per day of the `days`-day window ending at `end`, oldest first.
/// Records dated outside the window are ignored.
pub fn aggregate(
    exercises: Vec<ExerciseRecord>,
    meals: Vec<MealRecord>,
    tasks: Vec<DailyTask>,
    end: Date,
    days: u32,
) -> Vec<DayTrend> {
    let exercises = by_date(exercises, |r| r.observation.occurred_on);
    let meals = by_date(meals, |m| m.observation.occurred_on);
    let tasks = by_date(tasks, |t| t.date);

    let start = window_start(end, days);
    (0..days)
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            let day_exercises = exercises.get(&date).map(Vec::as_slice).unwrap_or_default();
            let day_meals = meals.get(&date).map(Vec::as_slice).unwrap_or_default();
            let day_tasks = TaskDaySummary::of(tasks.get(&date).map(Vec::as_slice).unwrap_or_default());

            let exercise_score = day_score(day_exercises);
            let diet_score = average_health_score(day_meals);

            DayTrend {
                date,
                composite_score: composite_score(exercise_score, diet_score, day_tasks.points),
                exercise_calories: day_exercises
                    .iter()
                    .map(|r| i64::from(r.observation.calories))
                    .sum(),
                exercise_duration: day_exercises
                    .iter()
                    .map(|r| i64::from(r.observation.duration_minutes))
                    .sum(),
                exercise_steps: day_exercises
                    .iter()
                    .map(|r| i64::from(r.observation.steps.unwrap_or(0)))
                    .sum(),
                exercise_score,
                diet_score,
                diet_calories: total_calories(day_meals),
                task_completion_rate: day_tasks.completion_rate,
                task_points: day_tasks.points,
            }
        })
        .collect()
}
