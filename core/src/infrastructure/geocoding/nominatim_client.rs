use std::{collections::HashMap, time::Duration};

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{GeocodingConfig, entities::app_errors::CoreError},
    vet::{
        entities::VetClinic,
        ports::PlacesClient,
        value_objects::{MAX_VET_RESULTS, VetSearchQuery},
    },
};

/// Half-width of the search box around a coordinate, roughly 11 km.
const VIEWBOX_DELTA_DEGREES: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct NominatimPlacesClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    display_name: String,
    #[serde(default)]
    extratags: Option<HashMap<String, String>>,
}

impl NominatimPlace {
    fn into_clinic(self) -> VetClinic {
        let tags = self.extratags.unwrap_or_default();
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.display_name.split(',').next().map(|s| s.trim().to_string()))
            .unwrap_or_default();
        let phone = tags
            .get("phone")
            .or_else(|| tags.get("contact:phone"))
            .cloned();
        let open_24_hours = tags
            .get("opening_hours")
            .is_some_and(|h| h.trim() == "24/7");

        VetClinic {
            name,
            address: self.display_name,
            phone,
            latitude: self.lat.parse().ok(),
            longitude: self.lon.parse().ok(),
            distance_km: None,
            open_24_hours,
        }
    }
}

impl NominatimPlacesClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Nominatim HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: config.nominatim_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn query_params(query: &VetSearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "jsonv2".to_string()),
            ("extratags", "1".to_string()),
            ("limit", MAX_VET_RESULTS.to_string()),
        ];

        match query {
            VetSearchQuery::City(city) => {
                params.push(("q", format!("veterinary in {}", city.trim())));
            }
            VetSearchQuery::Coordinates {
                latitude,
                longitude,
            } => {
                params.push(("q", "veterinary".to_string()));
                params.push((
                    "viewbox",
                    format!(
                        "{},{},{},{}",
                        longitude - VIEWBOX_DELTA_DEGREES,
                        latitude + VIEWBOX_DELTA_DEGREES,
                        longitude + VIEWBOX_DELTA_DEGREES,
                        latitude - VIEWBOX_DELTA_DEGREES
                    ),
                ));
                params.push(("bounded", "1".to_string()));
            }
        }

        params
    }
}

impl PlacesClient for NominatimPlacesClient {
    async fn search_veterinarians(
        &self,
        query: &VetSearchQuery,
    ) -> Result<Vec<VetClinic>, CoreError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(query))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Nominatim request failed: {}", e);
                CoreError::ExternalServiceError(format!("Geocoding API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Nominatim error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Geocoding API returned error: {}",
                status
            )));
        }

        let places: Vec<NominatimPlace> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse geocoding response: {}", e))
        })?;

        Ok(places
            .into_iter()
            .map(NominatimPlace::into_clinic)
            .filter(|c| !c.name.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> NominatimPlacesClient {
        NominatimPlacesClient::new(&GeocodingConfig {
            nominatim_base_url: server.base_url(),
            user_agent: "fidofeed-test".to_string(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_by_city() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search")
                    .query_param("q", "veterinary in Recife")
                    .query_param("format", "jsonv2")
                    .query_param("extratags", "1")
                    .query_param("limit", "10");
                then.status(200).json_body(json!([
                    {
                        "lat": "-8.05",
                        "lon": "-34.90",
                        "name": "Pet Care",
                        "display_name": "Pet Care, Rua A, Recife, Brazil",
                        "extratags": { "opening_hours": "24/7", "phone": "+55 81 1111-1111" }
                    },
                    {
                        "lat": "-8.06",
                        "lon": "-34.91",
                        "name": "",
                        "display_name": "Clinica Sul, Rua B, Recife, Brazil",
                        "extratags": null
                    }
                ]));
            })
            .await;

        let clinics = client_for(&server)
            .search_veterinarians(&VetSearchQuery::City("Recife".to_string()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(clinics.len(), 2);
        assert_eq!(clinics[0].name, "Pet Care");
        assert!(clinics[0].open_24_hours);
        assert_eq!(clinics[0].phone.as_deref(), Some("+55 81 1111-1111"));
        assert_eq!(clinics[0].latitude, Some(-8.05));
        assert_eq!(clinics[1].name, "Clinica Sul");
        assert!(!clinics[1].open_24_hours);
    }

    #[tokio::test]
    async fn test_search_by_coordinates_uses_viewbox() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search")
                    .query_param("q", "veterinary")
                    .query_param("bounded", "1")
                    .query_param_exists("viewbox");
                then.status(200).json_body(json!([]));
            })
            .await;

        let clinics = client_for(&server)
            .search_veterinarians(&VetSearchQuery::Coordinates {
                latitude: -8.05,
                longitude: -34.9,
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(clinics.is_empty());
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(503);
            })
            .await;

        let result = client_for(&server)
            .search_veterinarians(&VetSearchQuery::City("Recife".to_string()))
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
