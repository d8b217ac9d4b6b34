use std::cmp::Ordering;

use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    pet::ports::KeyValueStore,
    vet::{
        distance::haversine_km,
        entities::VetClinic,
        ports::{PlacesClient, VetService},
        prompts::render_vet_search_prompt,
        schema::get_vet_search_schema,
        value_objects::{
            AiVetResponse, MAX_VET_RESULTS, VetSearchInput, VetSearchQuery, VetSearchStrategy,
        },
    },
};

fn validate_query(query: &VetSearchQuery) -> Result<(), CoreError> {
    match query {
        VetSearchQuery::City(city) if city.trim().is_empty() => Err(CoreError::InvalidInput(
            "City must not be empty".to_string(),
        )),
        VetSearchQuery::Coordinates {
            latitude,
            longitude,
        } if !(-90.0..=90.0).contains(latitude) || !(-180.0..=180.0).contains(longitude) => {
            Err(CoreError::InvalidInput(format!(
                "Invalid coordinates: {latitude}, {longitude}"
            )))
        }
        _ => Ok(()),
    }
}

/// Nearest first when searching from coordinates, 24-hour clinics first otherwise.
pub fn rank_clinics(query: &VetSearchQuery, mut clinics: Vec<VetClinic>) -> Vec<VetClinic> {
    match query {
        VetSearchQuery::Coordinates {
            latitude,
            longitude,
        } => {
            for clinic in clinics.iter_mut() {
                clinic.distance_km = match (clinic.latitude, clinic.longitude) {
                    (Some(lat), Some(lon)) => Some(haversine_km(*latitude, *longitude, lat, lon)),
                    _ => None,
                };
            }
            clinics.sort_by(|a, b| match (a.distance_km, b.distance_km) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        VetSearchQuery::City(_) => {
            clinics.sort_by_key(|c| !c.open_24_hours);
        }
    }

    clinics.truncate(MAX_VET_RESULTS);
    clinics
}

impl<KV, LLM, PL, HC> Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    async fn find_vets_with_ai(&self, city: &str) -> Result<Vec<VetClinic>, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_text(render_vet_search_prompt(city), get_vet_search_schema())
            .await?;

        let parsed: AiVetResponse = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Invalid vet search format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid vet search format: {}", e))
        })?;

        Ok(parsed
            .vets
            .into_iter()
            .filter(|v| !v.name.trim().is_empty())
            .take(MAX_VET_RESULTS)
            .map(|v| VetClinic {
                name: v.name,
                address: v.address,
                phone: v.phone.filter(|p| !p.trim().is_empty()),
                latitude: None,
                longitude: None,
                distance_km: None,
                open_24_hours: false,
            })
            .collect())
    }
}

impl<KV, LLM, PL, HC> VetService for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn find_vets(&self, input: VetSearchInput) -> Result<Vec<VetClinic>, CoreError> {
        validate_query(&input.query)?;
        let query = match input.query {
            VetSearchQuery::City(city) => VetSearchQuery::City(city.trim().to_string()),
            coordinates => coordinates,
        };

        let clinics = match (input.strategy, &query) {
            (VetSearchStrategy::Ai, VetSearchQuery::City(city)) => {
                self.find_vets_with_ai(city).await?
            }
            (VetSearchStrategy::Ai, VetSearchQuery::Coordinates { .. }) => {
                return Err(CoreError::InvalidInput(
                    "AI vet search needs a city name".to_string(),
                ));
            }
            (VetSearchStrategy::Geocoding, query) => {
                let clinics = self.places_client.search_veterinarians(query).await?;
                rank_clinics(query, clinics)
            }
        };

        info!("Found {} vet clinics", clinics.len());
        Ok(clinics)
    }
}
