use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};
use time::Date;
use tracing::info;
use uuid::Uuid;

use super::model::DailyTask;
use super::pool::TASK_POOL;
use super::repo_types::{TaskOwnerRow, TaskRow};
use super::selector::select_daily_tasks;

const COLUMNS: &str = "id, user_id, task_name, task_type, done, reward_points, date, created_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkDone {
    Done { reward_points: i32 },
    NotFound,
    Forbidden,
}

impl MarkDone {
    fn for_owner(owner: Option<&TaskOwnerRow>, user_id: Uuid) -> Self {
        match owner {
            None => MarkDone::NotFound,
            Some(row) if row.user_id != user_id => MarkDone::Forbidden,
            Some(row) => MarkDone::Done {
                reward_points: row.reward_points,
            },
        }
    }
}

async fn list_for_day(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    date: Date,
) -> anyhow::Result<Vec<DailyTask>> {
    let rows = sqlx::query_as::<_, TaskRow>(&format!(
        r#"
        SELECT {COLUMNS}
          FROM daily_tasks
         WHERE user_id = $1 AND date = $2
         ORDER BY created_at ASC, id ASC
        "#
    ))
    .bind(user_id)
    .bind(date)
    .fetch_all(&mut **tx)
    .await
    .context("list daily tasks")?;
    rows.into_iter().map(DailyTask::try_from).collect()
}

/// The day's tasks for `user_id`, drawing and storing a batch on first access.
///
/// Generation runs under a transaction-scoped advisory lock on (user, date), so
/// concurrent first requests see one batch. The unique
/// `(user_id, date, task_type)` index backs this up.
pub async fn generate_or_fetch(
    db: &PgPool,
    user_id: Uuid,
    date: Date,
) -> anyhow::Result<Vec<DailyTask>> {
    let mut tx = db.begin().await.context("begin task generation")?;

    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
        .bind(format!("daily_tasks:{user_id}:{date}"))
        .execute(&mut *tx)
        .await
        .context("lock task generation")?;

    let existing = list_for_day(&mut tx, user_id, date).await?;
    let batch = {
        let mut rng = rand::thread_rng();
        select_daily_tasks(TASK_POOL, existing, user_id, date, &mut rng)
    };

    if !batch.fresh {
        tx.commit().await.context("commit task fetch")?;
        return Ok(batch.tasks);
    }

    for task in &batch.tasks {
        sqlx::query(
            r#"
            INSERT INTO daily_tasks
                (id, user_id, task_name, task_type, done, reward_points, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, date, task_type) DO NOTHING
            "#,
        )
        .bind(task.id)
        .bind(task.user_id)
        .bind(&task.task_name)
        .bind(task.task_type.as_str())
        .bind(task.done)
        .bind(task.reward_points)
        .bind(task.date)
        .execute(&mut *tx)
        .await
        .context("insert daily task")?;
    }

    let stored = list_for_day(&mut tx, user_id, date).await?;
    tx.commit().await.context("commit task generation")?;

    info!(%user_id, %date, count = stored.len(), "daily tasks generated");
    Ok(stored)
}

pub async fn list_in_range(
    db: &PgPool,
    user_id: Uuid,
    start: Date,
    end: Date,
) -> anyhow::Result<Vec<DailyTask>> {
    let rows = sqlx::query_as::<_, TaskRow>(&format!(
        r#"
        SELECT {COLUMNS}
          FROM daily_tasks
         WHERE user_id = $1 AND date >= $2 AND date <= $3
         ORDER BY date ASC, created_at ASC
        "#
    ))
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .context("list daily tasks in range")?;
    rows.into_iter().map(DailyTask::try_from).collect()
}

/// Flips `done` to true. Completing an already-done task is a no-op.
pub async fn mark_done(db: &PgPool, user_id: Uuid, task_id: Uuid) -> anyhow::Result<MarkDone> {
    let owner = sqlx::query_as::<_, TaskOwnerRow>(
        "SELECT user_id, reward_points FROM daily_tasks WHERE id = $1",
    )
    .bind(task_id)
    .fetch_optional(db)
    .await
    .context("look up task owner")?;

    let outcome = MarkDone::for_owner(owner.as_ref(), user_id);
    if let MarkDone::Done { .. } = outcome {
        sqlx::query("UPDATE daily_tasks SET done = TRUE WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user_id)
            .execute(db)
            .await
            .context("mark task done")?;
    }
    Ok(outcome)
}

/// Reward points of the user's completed tasks on `date`.
pub async fn points_earned(db: &PgPool, user_id: Uuid, date: Date) -> anyhow::Result<i64> {
    let (points,): (i64,) = sqlx::query_as(
        r#"
        SELECT COALESCE(SUM(reward_points), 0)::BIGINT
          FROM daily_tasks
         WHERE user_id = $1 AND date = $2 AND done
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_one(db)
    .await
    .context("sum task points")?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(user_id: Uuid, reward_points: i32) -> TaskOwnerRow {
        TaskOwnerRow {
            user_id,
            reward_points,
        }
    }

    #[test]
    fn owner_completes_and_learns_the_reward() {
        let me = Uuid::new_v4();
        assert_eq!(
            MarkDone::for_owner(Some(&owner(me, 15)), me),
            MarkDone::Done { reward_points: 15 }
        );
    }

    #[test]
    fn unknown_and_foreign_tasks_are_refused() {
        let me = Uuid::new_v4();
        assert_eq!(MarkDone::for_owner(None, me), MarkDone::NotFound);
        assert_eq!(
            MarkDone::for_owner(Some(&owner(Uuid::new_v4(), 15)), me),
            MarkDone::Forbidden
        );
    }
}
