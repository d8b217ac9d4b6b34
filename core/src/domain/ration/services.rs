use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    pet::ports::KeyValueStore,
    ration::{
        calculator::{calculate_daily_ration, calculate_daily_ration_for_weight, grams_per_kg},
        entities::{LifeStage, RationResult, WeightSource},
        ports::RationService,
        value_objects::CalculateRationInput,
    },
    vet::ports::PlacesClient,
};

impl<KV, LLM, PL, HC> RationService for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self), fields(breed = %input.breed))]
    async fn calculate_ration(
        &self,
        input: CalculateRationInput,
    ) -> Result<RationResult, CoreError> {
        let multiplier = grams_per_kg(input.age_in_months)?;

        let breed = self
            .breed_catalog
            .resolve(&input.breed)
            .ok_or_else(|| CoreError::UnknownBreed(input.breed.clone()))?;

        // An explicit weight wins over the pet's latest recorded weight.
        let measured_weight = match (input.weight_kg, input.pet) {
            (Some(weight_kg), _) => Some(weight_kg),
            (None, Some(pet)) => self
                .pet_store
                .find(&pet.owner, pet.pet_id)
                .await?
                .ok_or(CoreError::NotFound)?
                .latest_weight(),
            (None, None) => None,
        };

        let (daily_grams, weight_kg, weight_source) = match measured_weight {
            Some(weight_kg) => (
                calculate_daily_ration_for_weight(weight_kg, input.age_in_months)?,
                weight_kg,
                WeightSource::Measured,
            ),
            None => (
                calculate_daily_ration(&self.breed_catalog, &breed.id, input.age_in_months)?,
                breed.average_weight_kg,
                WeightSource::BreedAverage,
            ),
        };

        debug!(
            "Ration for {} at {} months: {} g/day ({:?})",
            breed.id, input.age_in_months, daily_grams, weight_source
        );

        let life_stage = LifeStage::from_age(input.age_in_months);

        Ok(RationResult {
            daily_grams,
            breed_id: breed.id.clone(),
            age_in_months: input.age_in_months,
            weight_kg,
            weight_source,
            grams_per_kg: multiplier,
            life_stage,
            life_stage_tip: life_stage.tip().to_string(),
        })
    }
}
