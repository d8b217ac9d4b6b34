use crate::domain::{breed::entities::BreedRecord, common::entities::app_errors::CoreError};

pub trait BreedService: Send + Sync {
    /// Every breed of the reference table, ordered by id.
    fn list_breeds(&self) -> Vec<BreedRecord>;

    /// Accepts a canonical id or a display name in any letter case.
    fn get_breed(&self, breed: &str) -> Result<BreedRecord, CoreError>;
}
