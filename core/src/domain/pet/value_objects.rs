use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    feeding_plan::entities::FeedingPlan, pet::entities::PetProfile, ration::entities::RationResult,
};

/// Identifies a stored pet by owner and id.
#[derive(Debug, Clone)]
pub struct PetReference {
    pub owner: String,
    pub pet_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CreatePetInput {
    pub name: String,
    pub breed: Option<String>,
    pub age_in_months: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePetInput {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age_in_months: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct RecordWeightInput {
    pub weight_kg: f64,
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PetFeedingPlan {
    pub pet: PetProfile,
    pub ration: RationResult,
    pub plan: FeedingPlan,
}
