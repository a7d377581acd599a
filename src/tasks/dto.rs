use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::model::{DailyTask, TaskType};

#[derive(Debug, Serialize)]
pub struct TaskView {
    pub id: Uuid,
    pub task_name: String,
    pub task_type: TaskType,
    pub done: bool,
    pub reward_points: i32,
    pub date: Date,
}

impl From<DailyTask> for TaskView {
    fn from(t: DailyTask) -> Self {
        Self {
            id: t.id,
            task_name: t.task_name,
            task_type: t.task_type,
            done: t.done,
            reward_points: t.reward_points,
            date: t.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TasksTodayResponse {
    pub date: Date,
    pub tasks: Vec<TaskView>,
    pub total: usize,
    pub completed: usize,
    pub points: i32,
}

#[derive(Debug, Deserialize)]
pub struct CompleteTaskRequest {
    pub task_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CompleteTaskResponse {
    pub task_id: Uuid,
    pub done: bool,
    pub reward_points: i32,
    pub points_today: i64,
}
