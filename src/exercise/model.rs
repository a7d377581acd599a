use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceDevice {
    Apple,
    Huawei,
    #[default]
    Unknown,
}

impl SourceDevice {
    /// Anything other than the three exact literals is `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "apple" => SourceDevice::Apple,
            "huawei" => SourceDevice::Huawei,
            _ => SourceDevice::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceDevice::Apple => "apple",
            SourceDevice::Huawei => "huawei",
            SourceDevice::Unknown => "unknown",
        }
    }
}

/// A range-checked exercise reading. Serializes with the recognizer's field
/// names, so a serialized observation is also a valid recognition payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseObservation {
    #[serde(rename = "exercise_type")]
    pub exercise_kind: String,
    #[serde(rename = "duration_min")]
    pub duration_minutes: i32,
    pub calories: i32,
    pub steps: Option<i32>,
    pub avg_heart_rate: Option<i32>,
    pub max_heart_rate: Option<i32>,
    #[serde(rename = "date")]
    pub occurred_on: Date,
    pub source_device: SourceDevice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub observation: ExerciseObservation,
    pub score: i32,
    pub created_at: OffsetDateTime,
}

/// Sum of record scores for one day, capped at 100.
pub fn day_score(records: &[ExerciseRecord]) -> i32 {
    records.iter().map(|r| r.score).sum::<i32>().min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_literals_are_exact() {
        assert_eq!(SourceDevice::parse("apple"), SourceDevice::Apple);
        assert_eq!(SourceDevice::parse("huawei"), SourceDevice::Huawei);
        assert_eq!(SourceDevice::parse("Huawei"), SourceDevice::Unknown);
        assert_eq!(SourceDevice::parse(""), SourceDevice::Unknown);
        assert_eq!(SourceDevice::Huawei.as_str(), "huawei");
    }
}
