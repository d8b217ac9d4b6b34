use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePetValidator {
    #[validate(length(min = 2, max = 50, message = "name must have 2 to 50 characters"))]
    pub name: String,

    #[serde(default)]
    pub breed: Option<String>,

    #[serde(default)]
    #[validate(range(
        exclusive_min = 0.0,
        max = 240.0,
        message = "age_in_months must be greater than 0 and at most 240"
    ))]
    pub age_in_months: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePetValidator {
    #[serde(default)]
    #[validate(length(min = 2, max = 50, message = "name must have 2 to 50 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    pub breed: Option<String>,

    #[serde(default)]
    #[validate(range(
        exclusive_min = 0.0,
        max = 240.0,
        message = "age_in_months must be greater than 0 and at most 240"
    ))]
    pub age_in_months: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordWeightValidator {
    #[validate(range(
        exclusive_min = 0.0,
        max = 200.0,
        message = "weight_kg must be greater than 0 and at most 200"
    ))]
    pub weight_kg: f64,

    /// Defaults to now.
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}
