use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RationError {
    #[error("Breed \"{0}\" was not found in the breed table")]
    UnknownBreed(String),

    #[error("Age must be a positive number of months, got {0}")]
    InvalidAge(f64),

    #[error("Weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),
}
