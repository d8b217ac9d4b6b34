use fidofeed_core::domain::feeding_plan::splitter::{
    MAX_DAILY_GRAMS, build_feeding_plan, meal_count, split_portions,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

/// Ages in `(0, 240]`, mixing arbitrary fractions with whole months so the
/// bracket boundaries are hit.
fn age_in_months() -> impl Strategy<Value = f64> {
    prop_oneof![
        1e-6_f64..=240.0,
        (1_u32..=240).prop_map(f64::from),
    ]
}

fn daily_grams() -> impl Strategy<Value = f64> {
    prop_oneof![
        f64::MIN_POSITIVE..=MAX_DAILY_GRAMS,
        (1_u32..=1_000_000).prop_map(f64::from),
        0.001_f64..=10.0,
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn portions_add_up_to_daily_total(age in age_in_months(), daily in daily_grams()) {
        let plan = build_feeding_plan(age, daily).expect("valid plan input");

        prop_assert_eq!(plan.total_grams(), daily);
        prop_assert!(plan.meals.iter().all(|m| m.portion_grams >= 0.0));
    }

    #[test]
    fn only_first_portion_carries_remainder(age in age_in_months(), daily in daily_grams()) {
        let plan = build_feeding_plan(age, daily).expect("valid plan input");
        let (first, rest) = plan.meals.split_first().expect("at least one meal");

        for meal in rest {
            prop_assert_eq!(meal.portion_grams, meal.portion_grams.trunc());
            prop_assert_eq!(meal.portion_grams, rest[0].portion_grams);
            prop_assert!(first.portion_grams >= meal.portion_grams);
        }
    }

    #[test]
    fn meal_count_follows_age(age in age_in_months(), daily in daily_grams()) {
        let plan = build_feeding_plan(age, daily).expect("valid plan input");
        let expected = if age <= 12.0 { 3 } else { 2 };

        prop_assert_eq!(plan.meals.len(), expected);
        prop_assert_eq!(meal_count(age), expected);
        prop_assert_eq!(plan.recommendations.len(), 4);
    }

    #[test]
    fn split_is_lossless_for_any_count(daily in daily_grams(), count in 1_usize..=6) {
        let portions = split_portions(daily, count);

        prop_assert_eq!(portions.len(), count);
        prop_assert_eq!(portions.iter().sum::<f64>(), daily);
    }

    #[test]
    fn rejects_totals_out_of_range(age in age_in_months(), excess in 1e-3_f64..1e6) {
        prop_assert!(build_feeding_plan(age, MAX_DAILY_GRAMS + excess).is_err());
        prop_assert!(build_feeding_plan(age, -excess).is_err());
    }
}
