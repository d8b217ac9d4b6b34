//! Mock-backed services shared by service tests.

use crate::{
    domain::{
        breed::BreedCatalog,
        common::{entities::app_errors::CoreError, services::Service},
        health::ports::MockHealthCheckRepository,
        llm::ports::MockLLMClient,
        pet::ports::KeyValueStore,
        vet::{entities::VetClinic, ports::MockPlacesClient},
    },
    infrastructure::storage::memory::InMemoryKeyValueStore,
};

pub type TestService =
    Service<InMemoryKeyValueStore, MockLLMClient, MockPlacesClient, MockHealthCheckRepository>;

/// Model that answers every prompt with `response`.
pub fn llm_answering(response: &str) -> MockLLMClient {
    let response = response.to_string();
    let mut llm = MockLLMClient::new();
    llm.expect_generate_with_text().returning(move |_, _| {
        let response = response.clone();
        Box::pin(async move { Ok(response) })
    });
    llm
}

/// Model that is unreachable.
pub fn llm_failing() -> MockLLMClient {
    let mut llm = MockLLMClient::new();
    llm.expect_generate_with_text().returning(|_, _| {
        Box::pin(async { Err(CoreError::ExternalServiceError("model unavailable".to_string())) })
    });
    llm
}

/// Model that must not be called.
pub fn llm_unused() -> MockLLMClient {
    let mut llm = MockLLMClient::new();
    llm.expect_generate_with_text().never();
    llm
}

pub fn places_returning(clinics: Vec<VetClinic>) -> MockPlacesClient {
    let mut places = MockPlacesClient::new();
    places.expect_search_veterinarians().returning(move |_| {
        let clinics = clinics.clone();
        Box::pin(async move { Ok(clinics) })
    });
    places
}

pub fn places_unused() -> MockPlacesClient {
    let mut places = MockPlacesClient::new();
    places.expect_search_veterinarians().never();
    places
}

/// Service over the canonical catalog with the given key-value store. The
/// places directory and the health repository must not be called.
pub fn service_with_store<KV: KeyValueStore>(
    store: KV,
    llm: MockLLMClient,
) -> Service<KV, MockLLMClient, MockPlacesClient, MockHealthCheckRepository> {
    let catalog = BreedCatalog::canonical().expect("canonical catalog is valid");
    Service::new(
        catalog,
        store,
        llm,
        places_unused(),
        MockHealthCheckRepository::new(),
    )
}

pub fn test_service_with_places(llm: MockLLMClient, places: MockPlacesClient) -> TestService {
    let catalog = BreedCatalog::canonical().expect("canonical catalog is valid");
    Service::new(
        catalog,
        InMemoryKeyValueStore::new(),
        llm,
        places,
        MockHealthCheckRepository::new(),
    )
}

/// Service over the canonical catalog and an empty in-memory store.
pub fn test_service(llm: MockLLMClient) -> TestService {
    service_with_store(InMemoryKeyValueStore::new(), llm)
}
