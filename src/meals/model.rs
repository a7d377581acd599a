use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

pub const DEGRADED_HEALTH_SCORE: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "dinner" => Some(MealSlot::Dinner),
            "snack" => Some(MealSlot::Snack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MealInputError {
    #[error("food_items must not be empty")]
    NoItems,
    #[error("food item #{0} has no name")]
    UnnamedItem(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealObservation {
    pub meal_slot: MealSlot,
    pub items: Vec<FoodItem>,
    pub occurred_on: Date,
}

impl MealObservation {
    pub fn new(
        meal_slot: MealSlot,
        items: Vec<FoodItem>,
        occurred_on: Date,
    ) -> Result<Self, MealInputError> {
        if items.is_empty() {
            return Err(MealInputError::NoItems);
        }
        if let Some(pos) = items.iter().position(|i| i.name.trim().is_empty()) {
            return Err(MealInputError::UnnamedItem(pos + 1));
        }
        Ok(Self {
            meal_slot,
            items,
            occurred_on,
        })
    }
}

/// Coarse three-step rating the analysis model gives each nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    #[default]
    Moderate,
    High,
}

impl Rating {
    /// Accepts the English words from the prompt and their Chinese equivalents.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "insufficient" | "不足" | "较少" => Some(Rating::Low),
            "moderate" | "适中" => Some(Rating::Moderate),
            "high" | "sufficient" | "excessive" | "充足" | "过多" => Some(Rating::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionBalance {
    pub protein: Rating,
    pub carbs: Rating,
    pub vegetables: Rating,
    pub oil: Rating,
    pub sugar: Rating,
}

impl NutritionBalance {
    /// Each rating is read on its own; unreadable ones stay `Moderate`.
    pub fn from_ratings(obj: &Map<String, Value>) -> Self {
        let rating = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .and_then(Rating::parse)
                .unwrap_or_default()
        };
        Self {
            protein: rating("protein"),
            carbs: rating("carbs"),
            vegetables: rating("vegetables"),
            oil: rating("oil"),
            sugar: rating("sugar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealAnalysis {
    pub health_score: i32,
    pub total_calories: i32,
    pub analysis: String,
    pub nutrition_balance: NutritionBalance,
}

impl MealAnalysis {
    /// Stand-in used whenever the analysis cannot be obtained or read.
    pub fn degraded() -> Self {
        Self {
            health_score: DEGRADED_HEALTH_SCORE,
            total_calories: 0,
            analysis: String::new(),
            nutrition_balance: NutritionBalance::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub observation: MealObservation,
    pub health_score: i32,
    pub total_calories: Option<i32>,
    pub analysis: Option<String>,
    pub nutrition_balance: NutritionBalance,
    pub created_at: OffsetDateTime,
}

/// Truncated mean health score, 0 when no meals were logged.
pub fn average_health_score(meals: &[MealRecord]) -> i32 {
    if meals.is_empty() {
        return 0;
    }
    let total: i64 = meals.iter().map(|m| i64::from(m.health_score)).sum();
    (total / meals.len() as i64) as i32
}

/// Summed as `i64`: each record may carry up to `i32::MAX`.
pub fn total_calories(meals: &[MealRecord]) -> i64 {
    meals
        .iter()
        .map(|m| i64::from(m.total_calories.unwrap_or(0)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn item(name: &str) -> FoodItem {
        FoodItem {
            name: name.into(),
            amount: "1 serving".into(),
        }
    }

    #[test]
    fn observation_requires_named_items() {
        let day = date!(2024 - 06 - 01);
        assert_eq!(
            MealObservation::new(MealSlot::Lunch, vec![], day),
            Err(MealInputError::NoItems)
        );
        assert_eq!(
            MealObservation::new(MealSlot::Lunch, vec![item("rice"), item("  ")], day),
            Err(MealInputError::UnnamedItem(2))
        );
        assert!(MealObservation::new(MealSlot::Lunch, vec![item("rice")], day).is_ok());
    }

    #[test]
    fn meal_slots_are_closed() {
        assert_eq!(MealSlot::parse("dinner"), Some(MealSlot::Dinner));
        assert_eq!(MealSlot::parse("brunch"), None);
        assert_eq!(MealSlot::parse("Dinner"), None);
        assert_eq!(MealSlot::Snack.as_str(), "snack");
    }

    #[test]
    fn degraded_analysis_is_neutral() {
        let degraded = MealAnalysis::degraded();
        assert_eq!(degraded.health_score, 50);
        assert_eq!(degraded.total_calories, 0);
        assert_eq!(degraded.analysis, "");
        assert_eq!(
            serde_json::to_value(degraded.nutrition_balance).unwrap(),
            serde_json::json!({
                "protein": "moderate",
                "carbs": "moderate",
                "vegetables": "moderate",
                "oil": "moderate",
                "sugar": "moderate"
            })
        );
    }

    fn record(health_score: i32, total_calories: Option<i32>) -> MealRecord {
        MealRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            observation: MealObservation::new(
                MealSlot::Dinner,
                vec![item("noodles")],
                date!(2024 - 06 - 01),
            )
            .unwrap(),
            health_score,
            total_calories,
            analysis: None,
            nutrition_balance: NutritionBalance::default(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn day_totals_do_not_overflow_on_huge_calories() {
        let meals = [
            record(90, Some(2_000_000_000)),
            record(61, Some(2_000_000_000)),
            record(40, None),
        ];
        assert_eq!(total_calories(&meals), 4_000_000_000);
        assert_eq!(average_health_score(&meals), 63);
    }

    #[test]
    fn stored_balance_tolerates_missing_keys() {
        let balance: NutritionBalance = serde_json::from_str(r#"{"oil":"high"}"#).unwrap();
        assert_eq!(balance.oil, Rating::High);
        assert_eq!(balance.protein, Rating::Moderate);
    }
}
