use fidofeed_core::domain::vet::value_objects::{VetSearchQuery, VetSearchStrategy};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindVetsParams {
    /// City to search in.
    #[validate(length(min = 1, max = 200, message = "city must have 1 to 200 characters"))]
    pub city: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "lon must be between -180 and 180"))]
    pub lon: Option<f64>,

    /// `geocoding` (default) or `ai`.
    pub strategy: Option<VetSearchStrategy>,
}

impl FindVetsParams {
    /// Coordinates win over a city when both are given.
    pub fn query(&self) -> Result<VetSearchQuery, ApiError> {
        match (self.lat, self.lon, &self.city) {
            (Some(latitude), Some(longitude), _) => Ok(VetSearchQuery::Coordinates {
                latitude,
                longitude,
            }),
            (Some(_), None, _) | (None, Some(_), _) => Err(ApiError::BadRequest(
                "lat and lon must be given together".to_string(),
            )),
            (None, None, Some(city)) if !city.trim().is_empty() => {
                Ok(VetSearchQuery::City(city.trim().to_string()))
            }
            (None, None, _) => Err(ApiError::BadRequest(
                "Provide a city or lat and lon".to_string(),
            )),
        }
    }
}
