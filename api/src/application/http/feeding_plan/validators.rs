use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BuildFeedingPlanValidator {
    #[validate(range(
        exclusive_min = 0.0,
        max = 240.0,
        message = "age_in_months must be greater than 0 and at most 240"
    ))]
    pub age_in_months: f64,

    #[validate(range(exclusive_min = 0.0, message = "daily_grams must be greater than 0"))]
    pub daily_grams: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateFeedingPlanValidator {
    #[validate(length(min = 1, max = 100, message = "dog_name must have 1 to 100 characters"))]
    pub dog_name: String,

    #[validate(length(min = 1, message = "breed is required"))]
    pub breed: String,

    #[validate(range(
        exclusive_min = 0.0,
        max = 240.0,
        message = "age_in_months must be greater than 0 and at most 240"
    ))]
    pub age_in_months: f64,

    #[validate(range(exclusive_min = 0.0, message = "weight_kg must be greater than 0"))]
    pub weight_kg: f64,

    #[validate(range(exclusive_min = 0.0, message = "daily_grams must be greater than 0"))]
    pub daily_grams: f64,

    /// Stores the resulting plan on this pet.
    #[serde(default)]
    pub pet_id: Option<Uuid>,
}
