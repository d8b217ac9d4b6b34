use thiserror::Error;

use crate::domain::{
    breed::CatalogError, feeding_plan::FeedingPlanError, ration::RationError,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Breed \"{0}\" was not found in the breed table")]
    UnknownBreed(String),

    #[error("{0}")]
    InvalidAge(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid breed catalog: {0}")]
    InvalidCatalog(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl From<RationError> for CoreError {
    fn from(error: RationError) -> Self {
        match error {
            RationError::UnknownBreed(breed_id) => CoreError::UnknownBreed(breed_id),
            RationError::InvalidAge(_) => CoreError::InvalidAge(error.to_string()),
            RationError::InvalidWeight(_) => CoreError::InvalidInput(error.to_string()),
        }
    }
}

impl From<FeedingPlanError> for CoreError {
    fn from(error: FeedingPlanError) -> Self {
        CoreError::InvalidInput(error.to_string())
    }
}

impl From<CatalogError> for CoreError {
    fn from(error: CatalogError) -> Self {
        CoreError::InvalidCatalog(error.to_string())
    }
}
