use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feeding_plan::{entities::FeedingPlan, splitter::build_feeding_plan},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    pet::{
        entities::{PetProfile, WeightEntry},
        ports::{KeyValueStore, PetService},
        value_objects::{
            CreatePetInput, PetFeedingPlan, PetReference, RecordWeightInput, UpdatePetInput,
        },
    },
    ration::{
        calculator::validate_age, ports::RationService, value_objects::CalculateRationInput,
    },
    vet::ports::PlacesClient,
};

const MIN_PET_NAME_CHARS: usize = 2;

impl<KV, LLM, PL, HC> Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    /// Loads the owner's pets, applies `change` and writes the list back.
    /// Writers are serialized so concurrent requests do not lose updates.
    async fn modify_pets<T, F>(&self, owner: &str, change: F) -> Result<T, CoreError>
    where
        T: Send,
        F: FnOnce(&mut Vec<PetProfile>) -> Result<T, CoreError> + Send,
    {
        let _guard = self.pet_write_lock.lock().await;

        let mut pets = self.pet_store.load(owner).await?;
        let value = change(&mut pets)?;
        self.pet_store.save(owner, &pets).await?;

        Ok(value)
    }

    async fn modify_pet<F>(&self, owner: &str, pet_id: Uuid, change: F) -> Result<PetProfile, CoreError>
    where
        F: FnOnce(&mut PetProfile) + Send,
    {
        self.modify_pets(owner, |pets| {
            let pet = pets
                .iter_mut()
                .find(|p| p.id == pet_id)
                .ok_or(CoreError::NotFound)?;
            change(pet);
            Ok(pet.clone())
        })
        .await
    }

    fn canonical_breed(&self, breed: &str) -> Result<String, CoreError> {
        self.breed_catalog
            .resolve(breed)
            .map(|b| b.id.clone())
            .ok_or_else(|| CoreError::UnknownBreed(breed.to_string()))
    }
}

fn validate_pet_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.chars().count() < MIN_PET_NAME_CHARS {
        return Err(CoreError::InvalidInput(format!(
            "Pet name must have at least {MIN_PET_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

impl<KV, LLM, PL, HC> PetService for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    async fn list_pets(&self, owner: &str) -> Result<Vec<PetProfile>, CoreError> {
        self.pet_store.load(owner).await
    }

    async fn get_pet(&self, owner: &str, pet_id: Uuid) -> Result<PetProfile, CoreError> {
        self.pet_store
            .find(owner, pet_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input))]
    async fn create_pet(&self, owner: &str, input: CreatePetInput) -> Result<PetProfile, CoreError> {
        let name = validate_pet_name(&input.name)?;
        let breed = input
            .breed
            .as_deref()
            .map(|b| self.canonical_breed(b))
            .transpose()?;
        if let Some(age) = input.age_in_months {
            validate_age(age)?;
        }

        let pet = PetProfile::new(name, breed, input.age_in_months);
        let created = pet.clone();
        self.modify_pets(owner, move |pets| {
            pets.push(pet);
            Ok(())
        })
        .await?;

        info!("Created pet {} for {}", created.id, owner);
        Ok(created)
    }

    async fn update_pet(
        &self,
        owner: &str,
        pet_id: Uuid,
        input: UpdatePetInput,
    ) -> Result<PetProfile, CoreError> {
        let name = input.name.as_deref().map(validate_pet_name).transpose()?;
        let breed = input
            .breed
            .as_deref()
            .map(|b| self.canonical_breed(b))
            .transpose()?;
        if let Some(age) = input.age_in_months {
            validate_age(age)?;
        }

        self.modify_pet(owner, pet_id, move |pet| {
            if let Some(name) = name {
                pet.name = name;
            }
            if breed.is_some() {
                pet.breed = breed;
            }
            if input.age_in_months.is_some() {
                pet.age_in_months = input.age_in_months;
            }
        })
        .await
    }

    async fn delete_pet(&self, owner: &str, pet_id: Uuid) -> Result<(), CoreError> {
        self.modify_pets(owner, |pets| {
            let before = pets.len();
            pets.retain(|p| p.id != pet_id);
            if pets.len() == before {
                return Err(CoreError::NotFound);
            }
            Ok(())
        })
        .await?;

        info!("Deleted pet {} for {}", pet_id, owner);
        Ok(())
    }

    async fn delete_all_pets(&self, owner: &str) -> Result<(), CoreError> {
        self.modify_pets(owner, |pets| {
            pets.clear();
            Ok(())
        })
        .await
    }

    async fn record_weight(
        &self,
        owner: &str,
        pet_id: Uuid,
        input: RecordWeightInput,
    ) -> Result<PetProfile, CoreError> {
        if !input.weight_kg.is_finite() || input.weight_kg <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Weight must be a positive number of kilograms, got {}",
                input.weight_kg
            )));
        }

        let recorded_at = input.recorded_at.unwrap_or_else(Utc::now);
        self.modify_pet(owner, pet_id, move |pet| {
            pet.record_weight(input.weight_kg, recorded_at)
        })
        .await
    }

    async fn get_weight_history(
        &self,
        owner: &str,
        pet_id: Uuid,
    ) -> Result<Vec<WeightEntry>, CoreError> {
        let pet = self.get_pet(owner, pet_id).await?;
        Ok(pet.chronological_weights())
    }

    async fn attach_feeding_plan(
        &self,
        owner: &str,
        pet_id: Uuid,
        plan: FeedingPlan,
    ) -> Result<PetProfile, CoreError> {
        self.modify_pet(owner, pet_id, move |pet| pet.feeding_plan = Some(plan))
            .await
    }

    #[instrument(skip(self))]
    async fn build_pet_feeding_plan(
        &self,
        owner: &str,
        pet_id: Uuid,
    ) -> Result<PetFeedingPlan, CoreError> {
        let pet = self.get_pet(owner, pet_id).await?;

        let breed = pet.breed.clone().ok_or_else(|| {
            CoreError::InvalidInput(format!("Pet {} has no breed set", pet.name))
        })?;
        let age_in_months = pet.age_in_months.ok_or_else(|| {
            CoreError::InvalidInput(format!("Pet {} has no age set", pet.name))
        })?;

        let ration = self
            .calculate_ration(CalculateRationInput {
                breed,
                age_in_months,
                weight_kg: None,
                pet: Some(PetReference {
                    owner: owner.to_string(),
                    pet_id,
                }),
            })
            .await?;

        let plan = build_feeding_plan(age_in_months, ration.daily_grams)?;
        let pet = self.attach_feeding_plan(owner, pet_id, plan.clone()).await?;

        Ok(PetFeedingPlan { pet, ration, plan })
    }
}
