use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    breed::BreedCatalog, health::ports::HealthCheckRepository, llm::ports::LLMClient,
    pet::{ports::KeyValueStore, store::PetStore}, vet::ports::PlacesClient,
};

/// Application service. Every domain service trait is implemented on this type,
/// parameterized by the adapters it talks to.
pub struct Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    pub(crate) breed_catalog: Arc<BreedCatalog>,
    pub(crate) pet_store: PetStore<KV>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) places_client: Arc<PL>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) pet_write_lock: Arc<Mutex<()>>,
}

impl<KV, LLM, PL, HC> Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    pub fn new(
        breed_catalog: BreedCatalog,
        key_value_store: KV,
        llm_client: LLM,
        places_client: PL,
        health_check_repository: HC,
    ) -> Self {
        Self {
            breed_catalog: Arc::new(breed_catalog),
            pet_store: PetStore::new(Arc::new(key_value_store)),
            llm_client: Arc::new(llm_client),
            places_client: Arc::new(places_client),
            health_check_repository: Arc::new(health_check_repository),
            pet_write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn breed_catalog(&self) -> &BreedCatalog {
        &self.breed_catalog
    }
}

impl<KV, LLM, PL, HC> Clone for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    fn clone(&self) -> Self {
        Self {
            breed_catalog: Arc::clone(&self.breed_catalog),
            pet_store: self.pet_store.clone(),
            llm_client: Arc::clone(&self.llm_client),
            places_client: Arc::clone(&self.places_client),
            health_check_repository: Arc::clone(&self.health_check_repository),
            pet_write_lock: Arc::clone(&self.pet_write_lock),
        }
    }
}
