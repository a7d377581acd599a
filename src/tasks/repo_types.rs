use anyhow::anyhow;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::model::{DailyTask, TaskType};

#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_name: String,
    pub task_type: String,
    pub done: bool,
    pub reward_points: i32,
    pub date: Date,
    pub created_at: OffsetDateTime,
}

impl TryFrom<TaskRow> for DailyTask {
    type Error = anyhow::Error;

    fn try_from(r: TaskRow) -> anyhow::Result<Self> {
        let task_type = TaskType::parse(&r.task_type)
            .ok_or_else(|| anyhow!("task {} has unknown task_type {:?}", r.id, r.task_type))?;
        Ok(Self {
            id: r.id,
            user_id: r.user_id,
            task_name: r.task_name,
            task_type,
            done: r.done,
            reward_points: r.reward_points,
            date: r.date,
            created_at: r.created_at,
        })
    }
}

/// Owner lookup used before flipping `done`.
#[derive(Debug, FromRow)]
pub struct TaskOwnerRow {
    pub user_id: Uuid,
    pub reward_points: i32,
}
