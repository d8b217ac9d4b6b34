use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub name: String,
    /// Suggested time of day, `HH:MM`.
    #[schema(example = "08:00")]
    pub time: String,
    pub portion_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedingPlan {
    pub meals: Vec<Meal>,
    pub recommendations: Vec<String>,
}

impl FeedingPlan {
    pub fn total_grams(&self) -> f64 {
        self.meals.iter().map(|m| m.portion_grams).sum()
    }
}

/// Advisory tip categories, in the order they appear in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    WeighWeekly,
    WeighMonthly,
    Hydration,
    PuppyFood,
    AdultFood,
    SeniorFood,
    ConsultVeterinarian,
}

impl Recommendation {
    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::WeighWeekly => "Track growth by weighing your dog every week.",
            Recommendation::WeighMonthly => "Weigh your dog once a month to keep their weight on track.",
            Recommendation::Hydration => "Keep fresh, clean water available at all times.",
            Recommendation::PuppyFood => "Use a puppy formula food that supports growth.",
            Recommendation::AdultFood => "Use an adult maintenance formula food.",
            Recommendation::SeniorFood => {
                "Use a senior formula food with fewer calories and joint support."
            }
            Recommendation::ConsultVeterinarian => {
                "These amounts are estimates. Consult a veterinarian for advice specific to your dog."
            }
        }
    }
}
