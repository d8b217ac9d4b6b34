use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VetClinic {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Set when the search was made from coordinates.
    pub distance_km: Option<f64>,
    pub open_24_hours: bool,
}
