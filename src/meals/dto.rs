use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::model::{FoodItem, MealRecord, MealSlot, NutritionBalance};

#[derive(Debug, Deserialize)]
pub struct AddMealRequest {
    pub meal_type: String,
    pub food_items: Vec<FoodItem>,
    pub date: String, // YYYY-MM-DD
}

#[derive(Debug, Serialize)]
pub struct MealView {
    pub id: Uuid,
    pub meal_type: MealSlot,
    pub food_items: Vec<FoodItem>,
    pub date: Date,
    pub health_score: i32,
    pub total_calories: Option<i32>,
    pub analysis: Option<String>,
    pub nutrition_balance: NutritionBalance,
}

impl From<MealRecord> for MealView {
    fn from(m: MealRecord) -> Self {
        Self {
            id: m.id,
            meal_type: m.observation.meal_slot,
            food_items: m.observation.items,
            date: m.observation.occurred_on,
            health_score: m.health_score,
            total_calories: m.total_calories,
            analysis: m.analysis,
            nutrition_balance: m.nutrition_balance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MealsTodayResponse {
    pub date: Date,
    pub meals: Vec<MealView>,
    pub total_calories: i64,
    pub avg_health_score: i32,
    pub meal_count: usize,
}
