use crate::meals::model::FoodItem;

pub const EXERCISE_PROMPT: &str = r#"You read screenshots of workout summaries from phones and smart watches.
Read every field exactly as it is printed; never guess.

1. Exercise type: the large title at the top or centre of the screen. Copy the
   on-screen text verbatim, in its original language (for example "跑步",
   "骑行", "网球", or "每日步数" for a daily step summary).
2. Duration: look for time / duration labels (MM:SS or HH:MM:SS) and convert
   to whole minutes.
3. Calories: look for calories / kcal; drop thousands separators.
4. Optional: steps, average heart rate (avg / bpm), maximum heart rate (max).
5. Device: Huawei Health (green theme, Huawei logo) => "huawei",
   Apple Watch / Apple Fitness => "apple", anything else => "unknown".

Reply with this JSON object only, no other text:

{
  "exercise_type": "on-screen exercise name",
  "duration_min": integer minutes,
  "calories": integer,
  "steps": integer or null,
  "avg_heart_rate": integer or null,
  "max_heart_rate": integer or null,
  "date": "YYYY-MM-DD" or null,
  "source_device": "huawei" | "apple" | "unknown"
}"#;

const MEAL_PROMPT_HEADER: &str = "You are a nutritionist. Rate how healthy this meal is.\n\nThe user ate:\n";

const MEAL_PROMPT_FOOTER: &str = r#"
Reply with this JSON object only:

{
  "health_score": integer 0-100,
  "total_calories": estimated integer kcal,
  "analysis": "short assessment and advice, at most 50 words",
  "nutrition_balance": {
    "protein": "sufficient" | "moderate" | "insufficient",
    "carbs": "sufficient" | "moderate" | "insufficient",
    "vegetables": "sufficient" | "moderate" | "insufficient",
    "oil": "excessive" | "moderate" | "low",
    "sugar": "excessive" | "moderate" | "low"
  }
}

Scoring guide:
- balanced protein, carbs and vegetables: base 60
- plenty of vegetables: +10
- high protein: +5
- little oil and salt: +10
- no sugary drinks or desserts: +10
- whole-grain staple: +5
- fried food: -15
- sugary drinks or desserts: -10
- lots of processed meat: -10"#;

pub fn meal_prompt(items: &[FoodItem]) -> String {
    let mut prompt = String::from(MEAL_PROMPT_HEADER);
    for item in items {
        prompt.push_str(&format!("- {} {}\n", item.name, item.amount));
    }
    prompt.push_str(MEAL_PROMPT_FOOTER);
    prompt
}
