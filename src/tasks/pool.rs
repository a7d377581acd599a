use super::model::{TaskTemplate, TaskType};

const fn entry(task_name: &'static str, task_type: TaskType, reward_points: i32) -> TaskTemplate {
    TaskTemplate {
        task_name,
        task_type,
        reward_points,
    }
}

/// Fixed catalog daily tasks are drawn from. Covers all seven task types.
pub const TASK_POOL: &[TaskTemplate] = &[
    entry("Drink 8 glasses of water", TaskType::Water, 10),
    entry("Warm water right after waking up", TaskType::Water, 5),
    entry("Stretch for 10 minutes", TaskType::Stretch, 10),
    entry("Relax your neck for 5 minutes", TaskType::Stretch, 5),
    entry("Walk for 30 minutes", TaskType::Walk, 15),
    entry("Take 100 steps after a meal", TaskType::Walk, 5),
    entry("Eat low-oil meals", TaskType::Diet, 10),
    entry("Eat more vegetables", TaskType::Diet, 10),
    entry("No sugary drinks today", TaskType::NoSugar, 15),
    entry("Cut back on sweets", TaskType::NoSugar, 10),
    entry("Go to bed before 23:00", TaskType::Sleep, 15),
    entry("Finish one workout", TaskType::Exercise, 20),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pool_spans_every_task_type() {
        let types: HashSet<_> = TASK_POOL.iter().map(|t| t.task_type).collect();
        assert_eq!(TASK_POOL.len(), 12);
        assert_eq!(types.len(), 7);
        assert!(TASK_POOL.iter().all(|t| t.reward_points >= 0));
    }
}
