use crate::domain::{breed::BreedCatalog, ration::errors::RationError};

/// Upper age bound (inclusive, in months) and grams of food per kilogram of body
/// weight for each growth bracket. Ages above the last bound use `ADULT_GRAMS_PER_KG`.
const GROWTH_BRACKETS: [(f64, f64); 3] = [(2.0, 20.0), (6.0, 25.0), (12.0, 22.0)];
const ADULT_GRAMS_PER_KG: f64 = 15.0;

/// Practical upper bound enforced by request validation, not by the calculator.
pub const MAX_AGE_IN_MONTHS: f64 = 240.0;

pub fn validate_age(age_in_months: f64) -> Result<(), RationError> {
    if !age_in_months.is_finite() || age_in_months <= 0.0 {
        return Err(RationError::InvalidAge(age_in_months));
    }
    Ok(())
}

pub fn grams_per_kg(age_in_months: f64) -> Result<f64, RationError> {
    validate_age(age_in_months)?;

    let multiplier = GROWTH_BRACKETS
        .iter()
        .find(|(upper, _)| age_in_months <= *upper)
        .map(|(_, grams)| *grams)
        .unwrap_or(ADULT_GRAMS_PER_KG);

    Ok(multiplier)
}

/// Daily ration in grams for a breed's average adult weight.
pub fn calculate_daily_ration(
    catalog: &BreedCatalog,
    breed_id: &str,
    age_in_months: f64,
) -> Result<f64, RationError> {
    let multiplier = grams_per_kg(age_in_months)?;
    let weight_kg = catalog
        .lookup_weight(breed_id)
        .ok_or_else(|| RationError::UnknownBreed(breed_id.to_string()))?;

    Ok(weight_kg * multiplier)
}

/// Daily ration in grams for a measured body weight.
pub fn calculate_daily_ration_for_weight(
    weight_kg: f64,
    age_in_months: f64,
) -> Result<f64, RationError> {
    let multiplier = grams_per_kg(age_in_months)?;
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(RationError::InvalidWeight(weight_kg));
    }

    Ok(weight_kg * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breed::BreedRecord;

    fn catalog() -> BreedCatalog {
        BreedCatalog::new(vec![
            BreedRecord::new("labrador", "Labrador Retriever", 30.0),
            BreedRecord::new("chihuahua", "Chihuahua", 2.0),
            BreedRecord::new("poodle", "Poodle", 10.0),
            BreedRecord::new("golden", "Golden Retriever", 32.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_labrador_four_months() {
        assert_eq!(calculate_daily_ration(&catalog(), "labrador", 4.0), Ok(750.0));
    }

    #[test]
    fn test_labrador_adult() {
        assert_eq!(calculate_daily_ration(&catalog(), "labrador", 14.0), Ok(450.0));
    }

    #[test]
    fn test_chihuahua_one_month() {
        assert_eq!(calculate_daily_ration(&catalog(), "chihuahua", 1.0), Ok(40.0));
    }

    #[test]
    fn test_poodle_twelve_months_uses_junior_bracket() {
        assert_eq!(calculate_daily_ration(&catalog(), "poodle", 12.0), Ok(220.0));
    }

    #[test]
    fn test_unknown_breed() {
        assert_eq!(
            calculate_daily_ration(&catalog(), "unknown_breed_xyz", 5.0),
            Err(RationError::UnknownBreed("unknown_breed_xyz".to_string()))
        );
    }

    #[test]
    fn test_zero_age_is_rejected() {
        assert_eq!(
            calculate_daily_ration(&catalog(), "golden", 0.0),
            Err(RationError::InvalidAge(0.0))
        );
    }

    #[test]
    fn test_invalid_ages() {
        for age in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                calculate_daily_ration(&catalog(), "golden", age),
                Err(RationError::InvalidAge(_))
            ));
        }
    }

    #[test]
    fn test_bracket_edges_are_inclusive_upper() {
        assert_eq!(grams_per_kg(2.0), Ok(20.0));
        assert_eq!(grams_per_kg(6.0), Ok(25.0));
        assert_eq!(grams_per_kg(12.0), Ok(22.0));
        assert_eq!(grams_per_kg(2.01), Ok(25.0));
        assert_eq!(grams_per_kg(6.5), Ok(22.0));
        assert_eq!(grams_per_kg(12.5), Ok(15.0));
        assert_eq!(grams_per_kg(0.1), Ok(20.0));
        assert_eq!(grams_per_kg(MAX_AGE_IN_MONTHS), Ok(15.0));
    }

    #[test]
    fn test_every_positive_age_maps_to_a_multiplier() {
        let mut age = 0.25;
        while age <= MAX_AGE_IN_MONTHS {
            let multiplier = grams_per_kg(age).unwrap();
            assert!([20.0, 25.0, 22.0, 15.0].contains(&multiplier));
            age += 0.25;
        }
    }

    #[test]
    fn test_growth_to_adult_decreases_per_kg() {
        let catalog = catalog();
        for breed in ["labrador", "chihuahua", "poodle", "golden"] {
            let growth = calculate_daily_ration(&catalog, breed, 4.0).unwrap();
            let adult = calculate_daily_ration(&catalog, breed, 24.0).unwrap();
            assert!(growth > adult);
        }
    }

    #[test]
    fn test_measured_weight() {
        assert_eq!(calculate_daily_ration_for_weight(12.5, 3.0), Ok(312.5));
        assert_eq!(
            calculate_daily_ration_for_weight(0.0, 3.0),
            Err(RationError::InvalidWeight(0.0))
        );
        assert_eq!(
            calculate_daily_ration_for_weight(10.0, -2.0),
            Err(RationError::InvalidAge(-2.0))
        );
    }
}
