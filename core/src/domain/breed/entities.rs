use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BreedRecord {
    pub id: String,
    pub display_name: String,
    pub average_weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coat: Option<CoatType>,
}

impl BreedRecord {
    pub fn new(id: &str, display_name: &str, average_weight_kg: f64) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            average_weight_kg,
            size: None,
            energy: None,
            coat: None,
        }
    }

    pub fn with_traits(mut self, size: SizeCategory, energy: EnergyLevel, coat: CoatType) -> Self {
        self.size = Some(size);
        self.energy = Some(energy);
        self.coat = Some(coat);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    Giant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CoatType {
    Short,
    Medium,
    Long,
}
