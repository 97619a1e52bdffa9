use mealplanner_mealplan::MealAssigner;
use mealplanner_recipe::Recipe;
use mealplanner_shared::{Error, MealType, PlanShape};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::{HashMap, HashSet};

fn pool(names: &[&str], meal_type: MealType) -> Vec<Recipe> {
    names.iter().map(|n| Recipe::new(*n).meal(meal_type)).collect()
}

fn numbered_pool(size: usize) -> Vec<Recipe> {
    (0..size)
        .map(|i| Recipe::new(format!("recipe {i}")).meal(MealType::Lunch))
        .collect()
}

#[test]
fn test_large_pool_never_repeats_within_week() -> anyhow::Result<()> {
    let names = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let pool = pool(&names, MealType::Breakfast);
    let mut rng = StdRng::seed_from_u64(7);

    let weeks = MealAssigner::default().generate(MealType::Breakfast, &pool, &mut rng)?;

    assert_eq!(weeks.len(), 4);
    for (index, week) in weeks.iter().enumerate() {
        assert_eq!(week.week, index);
        assert_eq!(week.meal_type, MealType::Breakfast);
        assert_eq!(week.days.len(), 7);

        let distinct = week.days.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 7);
        assert!(week.days.iter().all(|d| names.contains(&d.as_str())));
    }

    Ok(())
}

#[test]
fn test_small_pool_round_robin() -> anyhow::Result<()> {
    let pool = pool(&["X", "Y", "Z"], MealType::Breakfast);
    let mut rng = StdRng::seed_from_u64(3);

    for week in MealAssigner::default().generate(MealType::Breakfast, &pool, &mut rng)? {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for day in week.days.iter() {
            *counts.entry(day.as_str()).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|c| *c == 2 || *c == 3));
        assert_eq!(counts.values().filter(|c| **c == 3).count(), 1);

        // first pass covers the whole pool, then it repeats in the same order
        assert_eq!(week.days[0..3], week.days[3..6]);
        assert_eq!(week.days[6], week.days[0]);
    }

    Ok(())
}

#[test]
fn test_single_recipe_pool() -> anyhow::Result<()> {
    let pool = pool(&["Eat Out"], MealType::Dinner);
    let mut rng = StdRng::seed_from_u64(1);

    let weeks = MealAssigner::default().generate(MealType::Dinner, &pool, &mut rng)?;
    assert!(
        weeks
            .iter()
            .all(|w| w.days.iter().all(|d| d == "Eat Out") && w.days.len() == 7)
    );

    Ok(())
}

#[test]
fn test_empty_pool() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = MealAssigner::default().generate(MealType::Dinner, &[], &mut rng);

    match result {
        Err(Error::NoEligibleRecipes(meal_type)) => {
            assert_eq!(meal_type, MealType::Dinner);
            assert_eq!(
                Error::NoEligibleRecipes(meal_type).to_string(),
                "No recipes are marked for Dinner"
            );
        }
        _ => panic!("expected NoEligibleRecipes"),
    }
}

#[test]
fn test_same_seed_same_plan() -> anyhow::Result<()> {
    let pool = numbered_pool(12);
    let assigner = MealAssigner::default();

    let first = assigner.generate(MealType::Lunch, &pool, &mut StdRng::seed_from_u64(42))?;
    let second = assigner.generate(MealType::Lunch, &pool, &mut StdRng::seed_from_u64(42))?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_custom_shape() -> anyhow::Result<()> {
    let pool = numbered_pool(10);
    let mut rng = StdRng::seed_from_u64(9);

    let weeks = MealAssigner::new(PlanShape::new(2, 5)).generate(MealType::Lunch, &pool, &mut rng)?;

    assert_eq!(weeks.len(), 2);
    assert!(weeks.iter().all(|w| w.days.len() == 5));

    Ok(())
}

proptest! {
    #[test]
    fn prop_no_repeat_when_pool_is_large(size in 7usize..40, seed in any::<u64>()) {
        let pool = numbered_pool(size);
        let mut rng = StdRng::seed_from_u64(seed);
        let weeks = MealAssigner::default()
            .generate(MealType::Lunch, &pool, &mut rng)
            .expect("non-empty pool");

        for week in weeks {
            let distinct = week.days.iter().collect::<HashSet<_>>();
            prop_assert_eq!(distinct.len(), 7);
            prop_assert!(week.days.iter().all(|d| pool.iter().any(|r| &r.name == d)));
        }
    }

    #[test]
    fn prop_small_pool_is_fair(size in 1usize..7, seed in any::<u64>()) {
        let pool = numbered_pool(size);
        let mut rng = StdRng::seed_from_u64(seed);
        let weeks = MealAssigner::default()
            .generate(MealType::Lunch, &pool, &mut rng)
            .expect("non-empty pool");

        for week in weeks {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for (day, name) in week.days.iter().enumerate() {
                let count = counts.entry(name.as_str()).or_default();
                *count += 1;

                // no one reaches pass k + 1 before everyone finished pass k
                let pass = day / size;
                prop_assert_eq!(*count, pass + 1);
            }

            prop_assert_eq!(counts.len(), size);
        }
    }

    #[test]
    fn prop_deterministic(size in 1usize..20, seed in any::<u64>()) {
        let pool = numbered_pool(size);
        let assigner = MealAssigner::default();

        let first = assigner.generate(MealType::Lunch, &pool, &mut StdRng::seed_from_u64(seed));
        let second = assigner.generate(MealType::Lunch, &pool, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(first.ok(), second.ok());
    }
}
