use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Puppy,
    Adult,
    Senior,
}

impl LifeStage {
    /// Puppy up to 12 months, adult up to 84 months (7 years), senior after that.
    pub fn from_age(age_in_months: f64) -> Self {
        if age_in_months <= 12.0 {
            LifeStage::Puppy
        } else if age_in_months <= 84.0 {
            LifeStage::Adult
        } else {
            LifeStage::Senior
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LifeStage::Puppy => "puppy",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            LifeStage::Puppy => {
                "Intense growth phase. Nutrition is crucial for developing strong bones and muscles."
            }
            LifeStage::Adult => {
                "Maintenance phase. The diet should balance energy and weight and avoid obesity."
            }
            LifeStage::Senior => {
                "Special needs. The diet may need fewer calories and more fiber, with a focus on joint health."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    BreedAverage,
    Measured,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RationResult {
    /// Recommended daily food amount in grams. Not rounded.
    pub daily_grams: f64,
    pub breed_id: String,
    pub age_in_months: f64,
    pub weight_kg: f64,
    pub weight_source: WeightSource,
    pub grams_per_kg: f64,
    pub life_stage: LifeStage,
    pub life_stage_tip: String,
}
