//! Exercise scores on a 0-100 scale.
//!
//! A single workout earns points for duration, calories, heart rate, sport
//! and steps. A daily step summary is scored on step and calorie tiers
//! instead. Both round half to even before clamping.

use super::model::ExerciseObservation;

/// Exercise kinds the recognizer reports for a whole-day step summary.
pub const DAILY_STEP_SUMMARY_KINDS: [&str; 2] = ["每日步数", "daily step summary"];

/// Scanned in order; only the first matching keyword pays out.
const TYPE_BONUSES: &[(&str, f64)] = &[
    ("羽毛球", 5.0),
    ("badminton", 5.0),
    ("篮球", 5.0),
    ("basketball", 5.0),
    ("游泳", 8.0),
    ("swimming", 8.0),
    ("跑步", 3.0),
    ("running", 3.0),
    ("骑行", 3.0),
    ("cycling", 3.0),
];

pub fn is_daily_step_summary(exercise_kind: &str) -> bool {
    DAILY_STEP_SUMMARY_KINDS.contains(&exercise_kind)
}

pub fn score_exercise(obs: &ExerciseObservation) -> i32 {
    if is_daily_step_summary(&obs.exercise_kind) {
        daily_summary_score(obs.steps.unwrap_or(0), obs.calories)
    } else {
        session_score(obs)
    }
}

fn session_score(obs: &ExerciseObservation) -> i32 {
    let mut score = f64::from(obs.duration_minutes) / 3.0;
    score += f64::from(obs.calories) / 25.0;
    if let Some(hr) = obs.avg_heart_rate {
        score += f64::from(hr) / 20.0;
    }
    score += type_bonus(&obs.exercise_kind);
    score += match obs.steps {
        Some(steps) if steps > 10_000 => 5.0,
        Some(steps) if steps > 5_000 => 3.0,
        _ => 0.0,
    };
    finalize(score)
}

fn type_bonus(exercise_kind: &str) -> f64 {
    let kind = exercise_kind.to_lowercase();
    TYPE_BONUSES
        .iter()
        .find(|(keyword, _)| kind.contains(*keyword))
        .map(|&(_, bonus)| bonus)
        .unwrap_or(0.0)
}

fn daily_summary_score(steps: i32, calories: i32) -> i32 {
    let step_points = match steps {
        s if s >= 20_000 => 50.0,
        s if s >= 15_000 => 40.0,
        s if s >= 10_000 => 30.0,
        s if s >= 5_000 => 20.0,
        s => f64::from(s) / 250.0,
    };
    let calorie_points = match calories {
        c if c >= 1_000 => 30.0,
        c if c >= 600 => 20.0,
        c if c >= 300 => 10.0,
        c => f64::from(c) / 30.0,
    };
    let double_high = if steps >= 15_000 && calories >= 600 {
        20.0
    } else {
        0.0
    };
    finalize(step_points + calorie_points + double_high)
}

fn finalize(score: f64) -> i32 {
    score.round_ties_even().clamp(0.0, 100.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::model::SourceDevice;
    use time::macros::date;

    fn session(kind: &str, duration: i32, calories: i32) -> ExerciseObservation {
        ExerciseObservation {
            exercise_kind: kind.to_string(),
            duration_minutes: duration,
            calories,
            steps: None,
            avg_heart_rate: None,
            max_heart_rate: None,
            occurred_on: date!(2024 - 06 - 01),
            source_device: SourceDevice::Unknown,
        }
    }

    fn summary(steps: i32, calories: i32) -> ExerciseObservation {
        ExerciseObservation {
            steps: Some(steps),
            ..session("每日步数", 1, calories)
        }
    }

    #[test]
    fn maximal_swim_clamps_to_100() {
        let obs = ExerciseObservation {
            steps: Some(50_000),
            avg_heart_rate: Some(220),
            ..session("游泳", 600, 10_000)
        };
        assert_eq!(score_exercise(&obs), 100);
    }

    #[test]
    fn one_minute_walk_rounds_to_zero() {
        assert_eq!(score_exercise(&session("散步", 1, 0)), 0);
    }

    #[test]
    fn fifteen_minutes_is_exactly_five_points() {
        assert_eq!(score_exercise(&session("散步", 15, 0)), 5);
    }

    #[test]
    fn halves_round_to_even() {
        let mut obs = session("散步", 3, 0);
        obs.avg_heart_rate = Some(70); // 1 + 3.5
        assert_eq!(score_exercise(&obs), 4);
        obs.avg_heart_rate = Some(50); // 1 + 2.5
        assert_eq!(score_exercise(&obs), 4);
        obs.avg_heart_rate = Some(90); // 1 + 4.5
        assert_eq!(score_exercise(&obs), 6);
    }

    #[test]
    fn reference_session() {
        let obs = ExerciseObservation {
            avg_heart_rate: Some(120),
            ..session("跑步", 30, 250)
        };
        // 10 + 10 + 6 + 3
        assert_eq!(score_exercise(&obs), 29);
    }

    #[test]
    fn only_first_matching_type_bonus_applies() {
        // "游泳" comes before "跑步" in the table.
        assert_eq!(score_exercise(&session("跑步游泳", 30, 0)), 18);
        assert_eq!(score_exercise(&session("Swimming", 30, 0)), 18);
        assert_eq!(score_exercise(&session("Badminton doubles", 30, 0)), 15);
        assert_eq!(score_exercise(&session("网球", 30, 0)), 10);
    }

    #[test]
    fn step_bonus_tiers_are_strict() {
        let with_steps = |steps| ExerciseObservation {
            steps: Some(steps),
            ..session("散步", 30, 0)
        };
        assert_eq!(score_exercise(&with_steps(5_000)), 10);
        assert_eq!(score_exercise(&with_steps(5_001)), 13);
        assert_eq!(score_exercise(&with_steps(10_000)), 13);
        assert_eq!(score_exercise(&with_steps(10_001)), 15);
    }

    #[test]
    fn daily_summary_full_marks() {
        assert_eq!(score_exercise(&summary(20_000, 1_000)), 100);
    }

    #[test]
    fn daily_summary_proportional_tail() {
        // 12 + 6.67
        assert_eq!(score_exercise(&summary(3_000, 200)), 19);
    }

    #[test]
    fn daily_summary_tiers() {
        assert_eq!(score_exercise(&summary(15_000, 600)), 80);
        assert_eq!(score_exercise(&summary(14_999, 600)), 50);
        assert_eq!(score_exercise(&summary(15_000, 599)), 50);
        assert_eq!(score_exercise(&summary(10_000, 300)), 40);
        assert_eq!(score_exercise(&summary(5_000, 0)), 20);
        assert_eq!(score_exercise(&summary(0, 0)), 0);
    }

    #[test]
    fn daily_summary_ignores_duration_and_heart_rate() {
        let mut obs = summary(5_000, 300);
        obs.duration_minutes = 600;
        obs.avg_heart_rate = Some(200);
        assert_eq!(score_exercise(&obs), 30);
    }

    #[test]
    fn daily_summary_without_steps_scores_calories_only() {
        let mut obs = summary(0, 1_000);
        obs.steps = None;
        assert_eq!(score_exercise(&obs), 30);
    }

    #[test]
    fn english_sentinel_selects_summary_regime() {
        let obs = ExerciseObservation {
            steps: Some(20_000),
            ..session("daily step summary", 1, 1_000)
        };
        assert_eq!(score_exercise(&obs), 100);
        // Not an exact match: scored as a session.
        let obs = ExerciseObservation {
            steps: Some(20_000),
            ..session("每日步数 ", 1, 1_000)
        };
        assert_ne!(score_exercise(&obs), 100);
    }

    #[test]
    fn session_scores_stay_in_bounds() {
        for duration in [1, 17, 60, 240, 600] {
            for calories in [0, 99, 1_234, 10_000] {
                for hr in [None, Some(40), Some(220)] {
                    let obs = ExerciseObservation {
                        avg_heart_rate: hr,
                        steps: Some(calories * 3),
                        ..session("骑行", duration, calories)
                    };
                    let first = score_exercise(&obs);
                    assert!((0..=100).contains(&first));
                    assert_eq!(first, score_exercise(&obs));
                }
            }
        }
    }
}
