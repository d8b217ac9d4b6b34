use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    feeding_plan::{
        entities::FeedingPlan,
        value_objects::{GenerateFeedingPlanInput, GeneratedFeedingPlan},
    },
};

pub trait FeedingPlanService: Send + Sync {
    /// Deterministic split of a daily total into meals.
    fn plan_meals(&self, age_in_months: f64, daily_grams: f64) -> Result<FeedingPlan, CoreError>;

    /// Asks the language model for a plan and reconciles it with the exact-sum rule.
    fn generate_feeding_plan(
        &self,
        input: GenerateFeedingPlanInput,
    ) -> impl Future<Output = Result<GeneratedFeedingPlan, CoreError>> + Send;
}
