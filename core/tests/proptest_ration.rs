use fidofeed_core::domain::{
    breed::BreedCatalog,
    ration::{
        MAX_AGE_IN_MONTHS, RationError, calculate_daily_ration, calculate_daily_ration_for_weight,
        grams_per_kg,
    },
};
use proptest::prelude::*;
use proptest::sample::Index;
use proptest::test_runner::Config;

fn age_in_months() -> impl Strategy<Value = f64> {
    prop_oneof![
        1e-6_f64..=MAX_AGE_IN_MONTHS,
        (1_u32..=240).prop_map(f64::from),
    ]
}

fn expected_multiplier(age: f64) -> f64 {
    if age <= 2.0 {
        20.0
    } else if age <= 6.0 {
        25.0
    } else if age <= 12.0 {
        22.0
    } else {
        15.0
    }
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn multiplier_is_one_of_four_brackets(age in age_in_months()) {
        let multiplier = grams_per_kg(age).expect("positive age");

        prop_assert!([20.0, 25.0, 22.0, 15.0].contains(&multiplier));
        prop_assert_eq!(multiplier, expected_multiplier(age));
    }

    #[test]
    fn daily_ration_is_deterministic(index in any::<Index>(), age in age_in_months()) {
        let catalog = BreedCatalog::canonical().expect("canonical catalog is valid");
        let breeds = catalog.list();
        let breed = breeds[index.index(breeds.len())];

        let first = calculate_daily_ration(&catalog, &breed.id, age).expect("known breed");
        let second = calculate_daily_ration(&catalog, &breed.id, age).expect("known breed");

        prop_assert_eq!(first, second);
        prop_assert_eq!(first, breed.average_weight_kg * expected_multiplier(age));
        prop_assert!(first > 0.0);
    }

    #[test]
    fn measured_weight_scales_linearly(weight in 0.1_f64..=120.0, age in age_in_months()) {
        let ration = calculate_daily_ration_for_weight(weight, age).expect("valid input");
        prop_assert_eq!(ration, weight * expected_multiplier(age));
    }

    #[test]
    fn non_positive_age_is_rejected(age in -1_000.0_f64..=0.0) {
        prop_assert_eq!(grams_per_kg(age), Err(RationError::InvalidAge(age)));
    }
}
