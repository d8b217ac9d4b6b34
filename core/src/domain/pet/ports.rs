use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    feeding_plan::entities::FeedingPlan,
    pet::{
        entities::{PetProfile, WeightEntry},
        value_objects::{CreatePetInput, PetFeedingPlan, RecordWeightInput, UpdatePetInput},
    },
};

/// String key-value persistence, the server-side stand-in for browser local storage.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(&self, key: &str, value: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Pet profiles, scoped by owner.
pub trait PetService: Send + Sync {
    fn list_pets(
        &self,
        owner: &str,
    ) -> impl Future<Output = Result<Vec<PetProfile>, CoreError>> + Send;

    fn get_pet(
        &self,
        owner: &str,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<PetProfile, CoreError>> + Send;

    fn create_pet(
        &self,
        owner: &str,
        input: CreatePetInput,
    ) -> impl Future<Output = Result<PetProfile, CoreError>> + Send;

    fn update_pet(
        &self,
        owner: &str,
        pet_id: Uuid,
        input: UpdatePetInput,
    ) -> impl Future<Output = Result<PetProfile, CoreError>> + Send;

    fn delete_pet(
        &self,
        owner: &str,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_all_pets(&self, owner: &str) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn record_weight(
        &self,
        owner: &str,
        pet_id: Uuid,
        input: RecordWeightInput,
    ) -> impl Future<Output = Result<PetProfile, CoreError>> + Send;

    /// Oldest entry first.
    fn get_weight_history(
        &self,
        owner: &str,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WeightEntry>, CoreError>> + Send;

    fn attach_feeding_plan(
        &self,
        owner: &str,
        pet_id: Uuid,
        plan: FeedingPlan,
    ) -> impl Future<Output = Result<PetProfile, CoreError>> + Send;

    /// Computes the ration from the pet's breed, age and latest weight, splits it
    /// into meals and stores the plan on the pet.
    fn build_pet_feeding_plan(
        &self,
        owner: &str,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<PetFeedingPlan, CoreError>> + Send;
}
