use anyhow::Context;
use tracing::info;

use crate::{
    domain::{
        breed::BreedCatalog,
        common::{FidoFeedConfig, services::Service},
    },
    infrastructure::{
        geocoding::nominatim_client::NominatimPlacesClient, llm::gemini_client::GeminiLLMClient,
        storage::KeyValueBackend,
    },
};

pub type FidoFeedService =
    Service<KeyValueBackend, GeminiLLMClient, NominatimPlacesClient, KeyValueBackend>;

pub async fn create_service(config: FidoFeedConfig) -> Result<FidoFeedService, anyhow::Error> {
    let breed_catalog = match &config.breed_catalog_path {
        Some(path) => BreedCatalog::from_json_file(path)
            .with_context(|| format!("failed to load breed catalog from {path}"))?,
        None => BreedCatalog::canonical().context("built-in breed catalog is invalid")?,
    };

    let storage = KeyValueBackend::from_config(&config.storage)
        .await
        .context("failed to initialize storage")?;
    let llm_client =
        GeminiLLMClient::new(&config.llm).context("failed to create Gemini client")?;
    let places_client = NominatimPlacesClient::new(&config.geocoding)
        .context("failed to create Nominatim client")?;

    info!("Service ready with {} breeds", breed_catalog.len());

    Ok(Service::new(
        breed_catalog,
        storage.clone(),
        llm_client,
        places_client,
        storage,
    ))
}
