use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{feeding_plan::entities::FeedingPlan, pet::value_objects::PetReference};

#[derive(Debug, Clone)]
pub struct GenerateFeedingPlanInput {
    pub dog_name: String,
    pub breed: String,
    pub age_in_months: f64,
    pub weight_kg: f64,
    pub daily_grams: f64,
    /// When set, the generated plan replaces the pet's stored plan.
    pub pet: Option<PetReference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// The model's plan, used as returned.
    Ai,
    /// The model's meals and times with portions re-split to match the daily total.
    AiRebalanced,
    /// The model answered with an unusable plan; the built-in split was used.
    Deterministic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedFeedingPlan {
    pub plan: FeedingPlan,
    pub source: PlanSource,
}

/// Shape of the model response.
#[derive(Debug, Clone, Deserialize)]
pub struct AiFeedingPlanResponse {
    pub plan: AiFeedingPlan,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiFeedingPlan {
    pub meals: Vec<AiMeal>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiMeal {
    pub meal_name: String,
    pub time: String,
    pub portion_grams: f64,
}
