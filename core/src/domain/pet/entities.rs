use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, feeding_plan::entities::FeedingPlan};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PetProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age_in_months: Option<f64>,
    /// Newest entry first.
    #[serde(default)]
    pub weight_history: Vec<WeightEntry>,
    #[serde(default)]
    pub feeding_plan: Option<FeedingPlan>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeightEntry {
    pub weight_kg: f64,
    pub recorded_at: DateTime<Utc>,
}

impl PetProfile {
    pub fn new(name: String, breed: Option<String>, age_in_months: Option<f64>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            breed,
            age_in_months,
            weight_history: Vec::new(),
            feeding_plan: None,
            created_at: now,
        }
    }

    pub fn latest_weight(&self) -> Option<f64> {
        self.weight_history.first().map(|entry| entry.weight_kg)
    }

    pub fn record_weight(&mut self, weight_kg: f64, recorded_at: DateTime<Utc>) {
        self.weight_history.push(WeightEntry {
            weight_kg,
            recorded_at,
        });
        self.weight_history
            .sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    }

    /// Oldest entry first, the order a chart plots them in.
    pub fn chronological_weights(&self) -> Vec<WeightEntry> {
        self.weight_history.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_weights_are_kept_newest_first() {
        let mut pet = PetProfile::new("Rex".to_string(), None, None);
        let now = Utc::now();

        pet.record_weight(10.0, now - Duration::days(14));
        pet.record_weight(12.0, now);
        pet.record_weight(11.0, now - Duration::days(7));

        let weights: Vec<f64> = pet.weight_history.iter().map(|w| w.weight_kg).collect();
        assert_eq!(weights, vec![12.0, 11.0, 10.0]);
        assert_eq!(pet.latest_weight(), Some(12.0));

        let chart: Vec<f64> = pet.chronological_weights().iter().map(|w| w.weight_kg).collect();
        assert_eq!(chart, vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_no_weight_recorded() {
        let pet = PetProfile::new("Rex".to_string(), None, None);
        assert_eq!(pet.latest_weight(), None);
        assert!(pet.chronological_weights().is_empty());
    }
}
