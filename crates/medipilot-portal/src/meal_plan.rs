//! Canned meal-plan generation.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use medipilot_contracts::care::{MealDay, MealPreferences, NewMealPlan};
use medipilot_core::traits::{Delay, LatencyPhase};

/// Produces the stock seven-day plan after a simulated generation latency.
///
/// The plan content does not depend on the preferences; they are recorded on
/// the plan so the patient can see what was asked for.
pub struct MealPlanGenerator {
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl MealPlanGenerator {
    pub fn new(delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self { delay, latency }
    }

    pub async fn generate(&self, user_id: &str, preferences: MealPreferences) -> NewMealPlan {
        self.delay
            .wait(LatencyPhase::MealPlanGeneration, self.latency)
            .await;
        debug!(user_id = %user_id, goal = %preferences.goal, "meal plan generated");

        NewMealPlan {
            user_id: user_id.to_string(),
            name: "Personalized Health Plan".to_string(),
            duration: "7 days".to_string(),
            calories: 2000,
            meals: vec![
                MealDay {
                    day: "Monday".to_string(),
                    breakfast: "Oatmeal with berries and nuts".to_string(),
                    lunch: "Grilled chicken salad".to_string(),
                    dinner: "Baked salmon with vegetables".to_string(),
                    snacks: vec!["Apple".to_string(), "Greek yogurt".to_string()],
                },
                MealDay {
                    day: "Tuesday".to_string(),
                    breakfast: "Whole grain toast with avocado".to_string(),
                    lunch: "Quinoa bowl with vegetables".to_string(),
                    dinner: "Lean beef stir-fry".to_string(),
                    snacks: vec!["Almonds".to_string(), "Carrot sticks".to_string()],
                },
            ],
            preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use medipilot_core::InstantDelay;

    use super::*;

    #[tokio::test]
    async fn plan_carries_preferences() {
        let generator = MealPlanGenerator::new(Arc::new(InstantDelay), Duration::from_secs(2));
        let prefs = MealPreferences {
            goal: "Lose weight".to_string(),
            diet_type: "Mediterranean".to_string(),
            calories: Some(1800),
        };

        let plan = generator.generate("1", prefs.clone()).await;

        assert_eq!(plan.user_id, "1");
        assert_eq!(plan.calories, 2000);
        assert_eq!(plan.meals.len(), 2);
        assert_eq!(plan.meals[0].day, "Monday");
        assert_eq!(plan.preferences, prefs);
    }

    #[tokio::test(start_paused = true)]
    async fn generation_waits_for_latency() {
        let generator =
            MealPlanGenerator::new(Arc::new(medipilot_core::TokioDelay), Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        generator
            .generate("1", MealPreferences {
                goal: "Maintain".to_string(),
                diet_type: "Vegetarian".to_string(),
                calories: None,
            })
            .await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
