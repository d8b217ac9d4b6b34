use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CalculateRationValidator {
    #[validate(length(min = 1, message = "breed is required"))]
    pub breed: String,

    #[validate(range(
        exclusive_min = 0.0,
        max = 240.0,
        message = "age_in_months must be greater than 0 and at most 240"
    ))]
    pub age_in_months: f64,

    /// Measured weight; the breed average is used when absent.
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "weight_kg must be greater than 0"))]
    pub weight_kg: Option<f64>,

    /// Uses the latest recorded weight of this pet when `weight_kg` is absent.
    #[serde(default)]
    pub pet_id: Option<Uuid>,
}
