use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};
use time::Date;
use uuid::Uuid;

use super::model::{DailyTask, TaskTemplate};

pub const TASKS_PER_DAY: usize = 5;

#[derive(Debug)]
pub struct TaskBatch {
    pub tasks: Vec<DailyTask>,
    /// `true` when `tasks` were just drawn and still need persisting.
    pub fresh: bool,
}

/// Returns `existing` untouched when the day already has tasks. Otherwise
/// walks a shuffled copy of `pool`, keeping the first task of each unseen type
/// until [`TASKS_PER_DAY`] are picked or the pool runs out.
pub fn select_daily_tasks<R: Rng + ?Sized>(
    pool: &[TaskTemplate],
    existing: Vec<DailyTask>,
    user_id: Uuid,
    date: Date,
    rng: &mut R,
) -> TaskBatch {
    if !existing.is_empty() {
        return TaskBatch {
            tasks: existing,
            fresh: false,
        };
    }

    let mut shuffled: Vec<&TaskTemplate> = pool.iter().collect();
    shuffled.shuffle(rng);

    let mut seen = HashSet::new();
    let tasks = shuffled
        .into_iter()
        .filter(|t| seen.insert(t.task_type))
        .take(TASKS_PER_DAY)
        .map(|t| DailyTask::from_template(t, user_id, date))
        .collect();

    TaskBatch { tasks, fresh: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::model::TaskType;
    use crate::tasks::pool::TASK_POOL;
    use rand::{rngs::StdRng, SeedableRng};
    use time::{macros::date, Duration};

    fn names(tasks: &[DailyTask]) -> Vec<String> {
        tasks.iter().map(|t| t.task_name.clone()).collect()
    }

    #[test]
    fn existing_day_is_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        let user = Uuid::new_v4();
        let day = date!(2024 - 04 - 10);

        let first = select_daily_tasks(TASK_POOL, vec![], user, day, &mut rng);
        assert!(first.fresh);

        let again = select_daily_tasks(TASK_POOL, first.tasks.clone(), user, day, &mut rng);
        assert!(!again.fresh);
        assert_eq!(again.tasks, first.tasks);
    }

    #[test]
    fn every_fresh_day_gets_five_distinct_types() {
        let mut rng = StdRng::seed_from_u64(42);
        let user = Uuid::new_v4();
        let start = date!(2024 - 01 - 01);

        for offset in 0..200 {
            let day = start + Duration::days(offset);
            let batch = select_daily_tasks(TASK_POOL, vec![], user, day, &mut rng);
            assert_eq!(batch.tasks.len(), TASKS_PER_DAY);

            let types: HashSet<TaskType> = batch.tasks.iter().map(|t| t.task_type).collect();
            assert_eq!(types.len(), TASKS_PER_DAY);

            for t in &batch.tasks {
                assert_eq!(t.user_id, user);
                assert_eq!(t.date, day);
                assert!(!t.done);
                assert!(TASK_POOL.iter().any(|p| p.task_name == t.task_name
                    && p.task_type == t.task_type
                    && p.reward_points == t.reward_points));
            }
        }
    }

    #[test]
    fn selection_varies_between_draws() {
        let user = Uuid::new_v4();
        let day = date!(2024 - 04 - 10);
        let draws: HashSet<Vec<String>> = (0..20)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                names(&select_daily_tasks(TASK_POOL, vec![], user, day, &mut rng).tasks)
            })
            .collect();
        assert!(draws.len() > 1);
    }

    #[test]
    fn small_pool_is_exhausted_without_repeats() {
        let pool = [
            TaskTemplate {
                task_name: "a",
                task_type: TaskType::Water,
                reward_points: 1,
            },
            TaskTemplate {
                task_name: "b",
                task_type: TaskType::Water,
                reward_points: 2,
            },
            TaskTemplate {
                task_name: "c",
                task_type: TaskType::Sleep,
                reward_points: 3,
            },
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let batch = select_daily_tasks(&pool, vec![], Uuid::nil(), date!(2024 - 04 - 10), &mut rng);
        assert_eq!(batch.tasks.len(), 2);
        assert_ne!(batch.tasks[0].task_type, batch.tasks[1].task_type);
    }
}
