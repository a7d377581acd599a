use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Water,
    Stretch,
    Walk,
    Diet,
    NoSugar,
    Sleep,
    Exercise,
}

impl TaskType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "water" => Some(TaskType::Water),
            "stretch" => Some(TaskType::Stretch),
            "walk" => Some(TaskType::Walk),
            "diet" => Some(TaskType::Diet),
            "no_sugar" => Some(TaskType::NoSugar),
            "sleep" => Some(TaskType::Sleep),
            "exercise" => Some(TaskType::Exercise),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Water => "water",
            TaskType::Stretch => "stretch",
            TaskType::Walk => "walk",
            TaskType::Diet => "diet",
            TaskType::NoSugar => "no_sugar",
            TaskType::Sleep => "sleep",
            TaskType::Exercise => "exercise",
        }
    }
}

/// Catalog entry a daily task is instantiated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub task_name: &'static str,
    pub task_type: TaskType,
    pub reward_points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTask {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_name: String,
    pub task_type: TaskType,
    pub done: bool,
    pub reward_points: i32,
    pub date: Date,
    pub created_at: OffsetDateTime,
}

impl DailyTask {
    pub fn from_template(template: &TaskTemplate, user_id: Uuid, date: Date) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            task_name: template.task_name.to_string(),
            task_type: template.task_type,
            done: false,
            reward_points: template.reward_points,
            date,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskDaySummary {
    pub total: usize,
    pub completed: usize,
    /// Reward points of completed tasks.
    pub points: i32,
    /// `completed * 100 / total`, truncated; 0 with no tasks.
    pub completion_rate: i32,
}

impl TaskDaySummary {
    pub fn of(tasks: &[DailyTask]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.done).count();
        let points = tasks.iter().filter(|t| t.done).map(|t| t.reward_points).sum();
        let completion_rate = if total == 0 {
            0
        } else {
            (completed * 100 / total) as i32
        };
        Self {
            total,
            completed,
            points,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn task(task_type: TaskType, points: i32, done: bool) -> DailyTask {
        let template = TaskTemplate {
            task_name: "t",
            task_type,
            reward_points: points,
        };
        DailyTask {
            done,
            ..DailyTask::from_template(&template, Uuid::nil(), date!(2024 - 05 - 01))
        }
    }

    #[test]
    fn task_type_names_round_trip_through_storage_form() {
        for ty in [
            TaskType::Water,
            TaskType::Stretch,
            TaskType::Walk,
            TaskType::Diet,
            TaskType::NoSugar,
            TaskType::Sleep,
            TaskType::Exercise,
        ] {
            assert_eq!(TaskType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(TaskType::parse("nosugar"), None);
    }

    #[test]
    fn summary_counts_only_completed_points() {
        let tasks = [
            task(TaskType::Water, 10, true),
            task(TaskType::Walk, 15, false),
            task(TaskType::Sleep, 15, true),
        ];
        let summary = TaskDaySummary::of(&tasks);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.points, 25);
        // 200 / 3 truncates
        assert_eq!(summary.completion_rate, 66);
    }

    #[test]
    fn empty_day_summary_is_zero() {
        assert_eq!(TaskDaySummary::of(&[]), TaskDaySummary::default());
    }
}
