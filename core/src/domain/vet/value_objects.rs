use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_VET_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum VetSearchQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VetSearchStrategy {
    #[default]
    Geocoding,
    Ai,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VetSearchInput {
    pub query: VetSearchQuery,
    pub strategy: VetSearchStrategy,
}

#[derive(Debug, Deserialize)]
pub struct AiVetResponse {
    #[serde(default)]
    pub vets: Vec<AiVet>,
}

#[derive(Debug, Deserialize)]
pub struct AiVet {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
}
