use crate::domain::{
    feeding_plan::{
        entities::{FeedingPlan, Meal, Recommendation},
        errors::FeedingPlanError,
    },
    ration::entities::LifeStage,
};

/// Largest daily total accepted by the splitter. Keeps every whole-gram
/// quantity exactly representable as `f64`.
pub const MAX_DAILY_GRAMS: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealSlot {
    pub name: &'static str,
    pub time: &'static str,
}

const BREAKFAST: MealSlot = MealSlot {
    name: "Breakfast",
    time: "08:00",
};
const LUNCH: MealSlot = MealSlot {
    name: "Lunch",
    time: "13:00",
};
const DINNER: MealSlot = MealSlot {
    name: "Dinner",
    time: "19:00",
};

const GROWING_SCHEDULE: [MealSlot; 3] = [BREAKFAST, LUNCH, DINNER];
const ADULT_SCHEDULE: [MealSlot; 2] = [BREAKFAST, DINNER];

/// Three meals up to and including 12 months, two meals after.
pub fn meal_schedule(age_in_months: f64) -> &'static [MealSlot] {
    if age_in_months <= 12.0 {
        &GROWING_SCHEDULE
    } else {
        &ADULT_SCHEDULE
    }
}

pub fn meal_count(age_in_months: f64) -> usize {
    meal_schedule(age_in_months).len()
}

/// Splits `daily_grams` into `meal_count` portions. Whole grams are divided evenly
/// and the remainder, fractional part included, goes to the first portion, so the
/// portions always add back up to `daily_grams` exactly.
pub fn split_portions(daily_grams: f64, meal_count: usize) -> Vec<f64> {
    if meal_count == 0 {
        return Vec::new();
    }

    let whole_grams = daily_grams.trunc() as u64;
    let base = whole_grams / meal_count as u64;
    let others = base * (meal_count as u64 - 1);
    let first = daily_grams - others as f64;

    let mut portions = Vec::with_capacity(meal_count);
    portions.push(first);
    portions.extend(std::iter::repeat_n(base as f64, meal_count - 1));
    portions
}

pub fn recommendations_for(age_in_months: f64) -> Vec<Recommendation> {
    let weighing = if age_in_months <= 12.0 {
        Recommendation::WeighWeekly
    } else {
        Recommendation::WeighMonthly
    };

    let food_type = match LifeStage::from_age(age_in_months) {
        LifeStage::Puppy => Recommendation::PuppyFood,
        LifeStage::Adult => Recommendation::AdultFood,
        LifeStage::Senior => Recommendation::SeniorFood,
    };

    vec![
        weighing,
        Recommendation::Hydration,
        food_type,
        Recommendation::ConsultVeterinarian,
    ]
}

pub fn validate_plan_input(age_in_months: f64, daily_grams: f64) -> Result<(), FeedingPlanError> {
    if !age_in_months.is_finite() || age_in_months <= 0.0 {
        return Err(FeedingPlanError::InvalidInput(format!(
            "age must be a positive number of months, got {age_in_months}"
        )));
    }

    if !daily_grams.is_finite() || daily_grams <= 0.0 {
        return Err(FeedingPlanError::InvalidInput(format!(
            "daily grams must be a positive number, got {daily_grams}"
        )));
    }

    if daily_grams > MAX_DAILY_GRAMS {
        return Err(FeedingPlanError::InvalidInput(format!(
            "daily grams must not exceed {MAX_DAILY_GRAMS}, got {daily_grams}"
        )));
    }

    Ok(())
}

/// Builds the deterministic feeding plan for a dog of the given age.
pub fn build_feeding_plan(
    age_in_months: f64,
    daily_grams: f64,
) -> Result<FeedingPlan, FeedingPlanError> {
    validate_plan_input(age_in_months, daily_grams)?;

    let schedule = meal_schedule(age_in_months);
    let portions = split_portions(daily_grams, schedule.len());

    let meals = schedule
        .iter()
        .zip(portions)
        .map(|(slot, portion_grams)| Meal {
            name: slot.name.to_string(),
            time: slot.time.to_string(),
            portion_grams,
        })
        .collect();

    let recommendations = recommendations_for(age_in_months)
        .iter()
        .map(|r| r.text().to_string())
        .collect();

    Ok(FeedingPlan {
        meals,
        recommendations,
    })
}
