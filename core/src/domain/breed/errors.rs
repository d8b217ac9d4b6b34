use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate breed id \"{0}\"")]
    DuplicateId(String),

    #[error("breed id must not be empty")]
    EmptyId,

    #[error("breed \"{id}\" has a non-positive average weight ({weight_kg} kg)")]
    InvalidWeight { id: String, weight_kg: f64 },

    #[error("failed to read breed catalog: {0}")]
    Io(String),

    #[error("failed to parse breed catalog: {0}")]
    Parse(String),
}
