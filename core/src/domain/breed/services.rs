use crate::domain::{
    breed::{entities::BreedRecord, ports::BreedService},
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    pet::ports::KeyValueStore,
    vet::ports::PlacesClient,
};

impl<KV, LLM, PL, HC> BreedService for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    fn list_breeds(&self) -> Vec<BreedRecord> {
        self.breed_catalog.list().into_iter().cloned().collect()
    }

    fn get_breed(&self, breed: &str) -> Result<BreedRecord, CoreError> {
        self.breed_catalog
            .resolve(breed)
            .cloned()
            .ok_or_else(|| CoreError::UnknownBreed(breed.to_string()))
    }
}
