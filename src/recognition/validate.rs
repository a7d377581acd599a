use serde_json::{Map, Value};
use time::{macros::date, Date};

use super::RecognitionError;
use crate::dates::parse_date;
use crate::exercise::model::{ExerciseObservation, SourceDevice};
use crate::meals::model::{MealAnalysis, NutritionBalance, DEGRADED_HEALTH_SCORE};

/// Screenshots dated before this are treated as misreads.
const EARLIEST_DATE: Date = date!(2020 - 01 - 01);
const MAX_KIND_CHARS: usize = 50;

pub fn validate_exercise(raw: &Value, today: Date) -> Result<ExerciseObservation, RecognitionError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| invalid("recognition payload is not a JSON object"))?;

    let exercise_kind = match obj.get("exercise_type").and_then(Value::as_str) {
        Some(kind) if !kind.trim().is_empty() && kind.chars().count() <= MAX_KIND_CHARS => {
            kind.to_string()
        }
        _ => return Err(invalid("exercise_type missing or malformed")),
    };
    let duration_minutes = required_int(obj, "duration_min", 1, 600)?;
    let calories = required_int(obj, "calories", 0, 10_000)?;

    Ok(ExerciseObservation {
        exercise_kind,
        duration_minutes,
        calories,
        steps: optional_int(obj, "steps", 0, i32::MAX),
        avg_heart_rate: optional_int(obj, "avg_heart_rate", 40, 220),
        max_heart_rate: optional_int(obj, "max_heart_rate", 50, 250),
        occurred_on: resolve_date(obj.get("date"), today),
        source_device: obj
            .get("source_device")
            .and_then(Value::as_str)
            .map(SourceDevice::parse)
            .unwrap_or_default(),
    })
}

/// Never fails: every field that is absent, mistyped or out of range is
/// replaced by its neutral default.
pub fn validate_meal_analysis(raw: &Value) -> MealAnalysis {
    let Some(obj) = raw.as_object() else {
        return MealAnalysis::degraded();
    };

    MealAnalysis {
        health_score: optional_int(obj, "health_score", 0, 100).unwrap_or(DEGRADED_HEALTH_SCORE),
        total_calories: optional_int(obj, "total_calories", 0, i32::MAX).unwrap_or(0),
        analysis: obj
            .get("analysis")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        nutrition_balance: obj
            .get("nutrition_balance")
            .and_then(Value::as_object)
            .map(NutritionBalance::from_ratings)
            .unwrap_or_default(),
    }
}

/// Models like to wrap JSON in prose or code fences; take the outermost object.
pub fn extract_json_object(content: &str) -> Option<Value> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str::<Value>(&content[start..=end])
        .ok()
        .filter(Value::is_object)
}

fn invalid(reason: &str) -> RecognitionError {
    RecognitionError::InvalidRecognition(reason.to_string())
}

fn required_int(
    obj: &Map<String, Value>,
    key: &str,
    min: i32,
    max: i32,
) -> Result<i32, RecognitionError> {
    optional_int(obj, key, min, max)
        .ok_or_else(|| RecognitionError::InvalidRecognition(format!("{key} missing or out of range")))
}

/// JSON integers only: `30.0` and `"30"` are rejected like any other mistype.
fn optional_int(obj: &Map<String, Value>, key: &str, min: i32, max: i32) -> Option<i32> {
    obj.get(key)
        .and_then(Value::as_i64)
        .filter(|v| (i64::from(min)..=i64::from(max)).contains(v))
        .map(|v| v as i32)
}

fn resolve_date(raw: Option<&Value>, today: Date) -> Date {
    raw.and_then(Value::as_str)
        .and_then(parse_date)
        .filter(|d| (EARLIEST_DATE..=today).contains(d))
        .unwrap_or(today)
}
