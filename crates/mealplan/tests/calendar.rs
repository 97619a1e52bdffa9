use mealplanner_mealplan::{
    Assignments, Calendar, MealAssigner, SideSelections, WeekAssignment, project,
};
use mealplanner_recipe::Recipe;
use mealplanner_shared::{MealType, PlanShape, Slot};
use rand::{SeedableRng, rngs::StdRng};
use strum::VariantArray;

fn assignments(meal_types: &[MealType]) -> anyhow::Result<Assignments> {
    let mut rng = StdRng::seed_from_u64(11);
    let assigner = MealAssigner::default();
    let mut assignments = Assignments::new();

    for meal_type in meal_types {
        let pool = (0..9)
            .map(|i| Recipe::new(format!("{meal_type} {i}")).meal(*meal_type))
            .collect::<Vec<_>>();
        assignments.insert(*meal_type, assigner.generate(*meal_type, &pool, &mut rng)?);
    }

    Ok(assignments)
}

#[test]
fn test_project_is_rectangular() -> anyhow::Result<()> {
    let shape = PlanShape::default();
    let entries = project(
        &assignments(MealType::VARIANTS)?,
        &SideSelections::new(),
        &shape,
    );

    assert_eq!(entries.len(), 112);
    assert!(entries.iter().all(|e| e.meal_name.is_some()));
    assert!(entries.iter().all(|e| e.side_name.is_none()));

    assert_eq!(
        (entries[0].week, entries[0].meal_type, entries[0].day),
        (0, MealType::Breakfast, 0)
    );
    assert_eq!(
        (entries[7].week, entries[7].meal_type, entries[7].day),
        (0, MealType::Lunch, 0)
    );
    assert_eq!(
        (entries[28].week, entries[28].meal_type, entries[28].day),
        (1, MealType::Breakfast, 0)
    );

    Ok(())
}

#[test]
fn test_project_missing_meal_type() -> anyhow::Result<()> {
    let shape = PlanShape::default();
    let entries = project(
        &assignments(&[MealType::Breakfast, MealType::Lunch, MealType::Snacks])?,
        &SideSelections::new(),
        &shape,
    );

    assert_eq!(entries.len(), 112);

    let dinners = entries
        .iter()
        .filter(|e| e.meal_type == MealType::Dinner)
        .collect::<Vec<_>>();
    assert_eq!(dinners.len(), 28);
    assert!(dinners.iter().all(|e| e.meal_name.is_none()));

    Ok(())
}

#[test]
fn test_project_blank_cells() {
    let shape = PlanShape::new(1, 3);
    let mut assignments = Assignments::new();
    assignments.insert(
        MealType::Lunch,
        vec![WeekAssignment {
            meal_type: MealType::Lunch,
            week: 0,
            days: vec!["Soup".to_owned(), " ".to_owned()],
        }],
    );

    let mut sides = SideSelections::new();
    sides.insert(Slot::new(MealType::Lunch, 0, 0), "Salad".to_owned());
    sides.insert(Slot::new(MealType::Lunch, 0, 1), "  ".to_owned());

    let lunch = project(&assignments, &sides, &shape)
        .into_iter()
        .filter(|e| e.meal_type == MealType::Lunch)
        .collect::<Vec<_>>();

    assert_eq!(lunch.len(), 3);
    assert_eq!(lunch[0].meal_name.as_deref(), Some("Soup"));
    assert_eq!(lunch[0].side_name.as_deref(), Some("Salad"));
    assert_eq!(lunch[1].meal_name, None);
    assert_eq!(lunch[1].side_name, None);
    assert_eq!(lunch[2].meal_name, None);
}

#[test]
fn test_calendar_groups_entries() -> anyhow::Result<()> {
    let shape = PlanShape::default();
    let assignments = assignments(MealType::VARIANTS)?;

    let mut sides = SideSelections::new();
    sides.insert(Slot::new(MealType::Dinner, 2, 4), "Fries".to_owned());

    let calendar = Calendar::build(&assignments, &sides, &shape);

    assert_eq!(calendar.day_labels.len(), 7);
    assert_eq!(calendar.day_labels[0], "Mon");
    assert_eq!(calendar.weeks.len(), 4);
    assert_eq!(calendar.weeks[2].label, "Week 3");
    assert_eq!(calendar.weeks[0].palette.primary.to_string(), "#5A8CB8");

    let dinner = &calendar.weeks[2].rows[3];
    assert_eq!(dinner.meal_type, MealType::Dinner);
    assert_eq!(dinner.sides[4].as_deref(), Some("Fries"));
    assert_eq!(
        dinner.meals[4].as_deref(),
        assignments[&MealType::Dinner][2].meal(4)
    );

    assert_eq!(calendar.entries(), project(&assignments, &sides, &shape));

    Ok(())
}
