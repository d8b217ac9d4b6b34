use chrono::NaiveTime;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feeding_plan::{
        entities::{FeedingPlan, Meal},
        errors::FeedingPlanError,
        ports::FeedingPlanService,
        prompts::render_feeding_plan_prompt,
        schema::get_feeding_plan_schema,
        splitter::{
            build_feeding_plan, meal_count, recommendations_for, split_portions,
            validate_plan_input,
        },
        value_objects::{
            AiFeedingPlan, AiFeedingPlanResponse, GenerateFeedingPlanInput, GeneratedFeedingPlan,
            PlanSource,
        },
    },
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    pet::ports::{KeyValueStore, PetService},
    vet::ports::PlacesClient,
};

impl<KV, LLM, PL, HC> FeedingPlanService for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    fn plan_meals(&self, age_in_months: f64, daily_grams: f64) -> Result<FeedingPlan, CoreError> {
        Ok(build_feeding_plan(age_in_months, daily_grams)?)
    }

    #[instrument(skip(self, input), fields(dog_name = %input.dog_name))]
    async fn generate_feeding_plan(
        &self,
        input: GenerateFeedingPlanInput,
    ) -> Result<GeneratedFeedingPlan, CoreError> {
        validate_plan_input(input.age_in_months, input.daily_grams)?;

        let prompt = render_feeding_plan_prompt(&input);
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_feeding_plan_schema())
            .await?;

        let parsed: AiFeedingPlanResponse = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Invalid feeding plan format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid feeding plan format: {}", e))
        })?;

        let generated = reconcile_ai_plan(parsed.plan, input.age_in_months, input.daily_grams)?;
        info!("Generated feeding plan ({:?})", generated.source);

        if let Some(pet) = input.pet {
            self.attach_feeding_plan(&pet.owner, pet.pet_id, generated.plan.clone())
                .await?;
        }

        Ok(generated)
    }
}

/// Turns a model-proposed plan into one that honors the exact-sum rule.
///
/// Unusable plans are replaced by the built-in split. A plan is unusable when its
/// meal count differs from the age schedule, a meal name is blank, a time is not
/// zero-padded `HH:MM`, or a portion is negative or non-finite.
/// Usable plans whose portions do not add up to `daily_grams` keep their meal
/// names and times and get their portions re-split.
pub fn reconcile_ai_plan(
    ai_plan: AiFeedingPlan,
    age_in_months: f64,
    daily_grams: f64,
) -> Result<GeneratedFeedingPlan, FeedingPlanError> {
    validate_plan_input(age_in_months, daily_grams)?;

    if let Err(reason) = check_ai_meals(&ai_plan, age_in_months) {
        warn!("Discarding model feeding plan: {}", reason);
        return Ok(GeneratedFeedingPlan {
            plan: build_feeding_plan(age_in_months, daily_grams)?,
            source: PlanSource::Deterministic,
        });
    }

    let recommendations = if ai_plan.recommendations.is_empty() {
        recommendations_for(age_in_months)
            .iter()
            .map(|r| r.text().to_string())
            .collect()
    } else {
        ai_plan.recommendations
    };

    let ai_total: f64 = ai_plan.meals.iter().map(|m| m.portion_grams).sum();
    let (portions, source) = if ai_total == daily_grams {
        (
            ai_plan.meals.iter().map(|m| m.portion_grams).collect(),
            PlanSource::Ai,
        )
    } else {
        warn!(
            "Model portions add up to {} g instead of {} g, re-splitting",
            ai_total, daily_grams
        );
        (
            split_portions(daily_grams, ai_plan.meals.len()),
            PlanSource::AiRebalanced,
        )
    };

    let meals = ai_plan
        .meals
        .into_iter()
        .zip(portions)
        .map(|(meal, portion_grams)| Meal {
            name: meal.meal_name.trim().to_string(),
            time: meal.time.trim().to_string(),
            portion_grams,
        })
        .collect();

    Ok(GeneratedFeedingPlan {
        plan: FeedingPlan {
            meals,
            recommendations,
        },
        source,
    })
}

fn is_hh_mm(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit)
        && NaiveTime::parse_from_str(time, "%H:%M").is_ok()
}

fn check_ai_meals(ai_plan: &AiFeedingPlan, age_in_months: f64) -> Result<(), String> {
    let expected = meal_count(age_in_months);
    if ai_plan.meals.len() != expected {
        return Err(format!(
            "{} meals instead of {}",
            ai_plan.meals.len(),
            expected
        ));
    }

    for meal in &ai_plan.meals {
        if meal.meal_name.trim().is_empty() {
            return Err("blank meal name".to_string());
        }

        if !is_hh_mm(meal.time.trim()) {
            return Err(format!("invalid meal time \"{}\"", meal.time));
        }

        if !meal.portion_grams.is_finite() || meal.portion_grams < 0.0 {
            return Err(format!("invalid portion {}", meal.portion_grams));
        }
    }

    Ok(())
}
