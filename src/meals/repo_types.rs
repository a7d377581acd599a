use anyhow::anyhow;
use sqlx::{types::Json, FromRow};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::model::{FoodItem, MealObservation, MealRecord, MealSlot, NutritionBalance};

#[derive(Debug, FromRow)]
pub struct MealRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_type: String,
    pub food_items: Json<Vec<FoodItem>>,
    pub total_calories: Option<i32>,
    pub health_score: i32,
    pub analysis: Option<String>,
    pub nutrition_balance: Json<NutritionBalance>,
    pub date: Date,
    pub created_at: OffsetDateTime,
}

impl TryFrom<MealRow> for MealRecord {
    type Error = anyhow::Error;

    fn try_from(r: MealRow) -> anyhow::Result<Self> {
        let meal_slot = MealSlot::parse(&r.meal_type)
            .ok_or_else(|| anyhow!("meal {} has unknown meal_type {:?}", r.id, r.meal_type))?;
        Ok(Self {
            id: r.id,
            user_id: r.user_id,
            // Rows were validated on the way in; rebuild without re-checking.
            observation: MealObservation {
                meal_slot,
                items: r.food_items.0,
                occurred_on: r.date,
            },
            health_score: r.health_score,
            total_calories: r.total_calories,
            analysis: r.analysis,
            nutrition_balance: r.nutrition_balance.0,
            created_at: r.created_at,
        })
    }
}
