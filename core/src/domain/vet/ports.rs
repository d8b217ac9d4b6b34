use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    vet::{
        entities::VetClinic,
        value_objects::{VetSearchInput, VetSearchQuery},
    },
};

/// Directory of places that can be searched for veterinary clinics.
#[cfg_attr(test, mockall::automock)]
pub trait PlacesClient: Send + Sync {
    fn search_veterinarians(
        &self,
        query: &VetSearchQuery,
    ) -> impl Future<Output = Result<Vec<VetClinic>, CoreError>> + Send;
}

pub trait VetService: Send + Sync {
    /// An empty list means the search worked and found nothing.
    fn find_vets(
        &self,
        input: VetSearchInput,
    ) -> impl Future<Output = Result<Vec<VetClinic>, CoreError>> + Send;
}
