use tracing::warn;

use super::model::{FoodItem, MealAnalysis};
use crate::recognition::{extract_json_object, validate_meal_analysis, Recognizer};

/// Rates a meal. Never fails: the meal gets saved either way, so any problem
/// with the analysis falls back to [`MealAnalysis::degraded`].
pub async fn analyze_meal(recognizer: &dyn Recognizer, items: &[FoodItem]) -> MealAnalysis {
    let reply = match recognizer.analyze_meal(items).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "meal analysis unavailable; using degraded analysis");
            return MealAnalysis::degraded();
        }
    };

    match extract_json_object(&reply) {
        Some(raw) => validate_meal_analysis(&raw),
        None => {
            warn!(reply_len = reply.len(), "meal analysis reply had no JSON; using degraded analysis");
            MealAnalysis::degraded()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::client::CannedRecognizer;

    fn items() -> Vec<FoodItem> {
        vec![FoodItem {
            name: "fried chicken".into(),
            amount: "3 pieces".into(),
        }]
    }

    #[tokio::test]
    async fn parses_model_reply() {
        let recognizer = CannedRecognizer::meal(
            r#"Here you go: {"health_score": 35, "total_calories": 780, "analysis": "Too much oil."}"#,
        );
        let analysis = analyze_meal(&recognizer, &items()).await;
        assert_eq!(analysis.health_score, 35);
        assert_eq!(analysis.total_calories, 780);
        assert_eq!(analysis.analysis, "Too much oil.");
    }

    #[tokio::test]
    async fn malformed_reply_degrades() {
        let recognizer = CannedRecognizer::meal(r#"{"health_score": 35, "total_calories": }"#);
        assert_eq!(analyze_meal(&recognizer, &items()).await, MealAnalysis::degraded());
    }

    #[tokio::test]
    async fn upstream_outage_degrades() {
        let recognizer = CannedRecognizer::failing();
        assert_eq!(analyze_meal(&recognizer, &items()).await, MealAnalysis::degraded());
    }
}
