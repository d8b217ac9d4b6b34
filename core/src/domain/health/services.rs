use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::StorageHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    llm::ports::LLMClient,
    pet::ports::KeyValueStore,
    vet::ports::PlacesClient,
};

impl<KV, LLM, PL, HC> HealthCheckService for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<StorageHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            breed::BreedCatalog,
            common::testing::{llm_unused, places_unused},
            health::ports::MockHealthCheckRepository,
            llm::ports::MockLLMClient,
            vet::ports::MockPlacesClient,
        },
        infrastructure::storage::memory::InMemoryKeyValueStore,
    };

    fn service_with_repository(
        repository: MockHealthCheckRepository,
    ) -> Service<InMemoryKeyValueStore, MockLLMClient, MockPlacesClient, MockHealthCheckRepository>
    {
        Service::new(
            BreedCatalog::canonical().unwrap(),
            InMemoryKeyValueStore::new(),
            llm_unused(),
            places_unused(),
            repository,
        )
    }

    #[tokio::test]
    async fn test_readiness_reports_repository_status() {
        let mut repository = MockHealthCheckRepository::new();
        repository.expect_readiness().times(1).returning(|| {
            Box::pin(async {
                Ok(StorageHealthStatus {
                    status: "unhealthy".to_string(),
                    backend: "postgres".to_string(),
                    response_time_ms: 12,
                    error: Some("connection refused".to_string()),
                })
            })
        });
        let service = service_with_repository(repository);

        let status = service.readiness().await.unwrap();
        assert_eq!(status.status, "unhealthy");
        assert_eq!(status.error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_health_propagates_storage_error() {
        let mut repository = MockHealthCheckRepository::new();
        repository.expect_health().times(1).returning(|| {
            Box::pin(async { Err(CoreError::StorageError("timeout".to_string())) })
        });
        let service = service_with_repository(repository);

        assert!(matches!(service.health().await, Err(CoreError::StorageError(_))));
    }
}
