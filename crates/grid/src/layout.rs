//! Where things live on the grid.
//!
//! Recipes: header on row 0, one recipe per row after it.
//!
//! Meal sheets (one per [`MealType`]): title on row 0, day headers on row 1,
//! then for each week a meal row followed by a sides row. Column 0 holds the
//! row label and days start at column 1.
//!
//! Calendar: one block per week made of a week header, the day headers, a
//! meal row and a sides row per meal type, and a spacer row.

use mealplanner_shared::{MealType, PlanShape, Result};
use strum::VariantArray;

use crate::{GridStore, Range};

pub const RECIPES_SHEET: &str = "Recipes";
pub const CALENDAR_SHEET: &str = "Calendar";
pub const SIDES_LABEL: &str = "Sides";

pub const RECIPE_HEADER: [&str; 7] = [
    "Recipe Name",
    "Category",
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snacks",
    "Side",
];
pub const RECIPE_COLUMNS: usize = RECIPE_HEADER.len();
pub const FIRST_RECIPE_ROW: usize = 1;

pub const FIRST_DAY_COL: usize = 1;
const FIRST_WEEK_ROW: usize = 2;

/// Entries every new recipe sheet starts with.
pub const SPECIALS: [(&str, &str, [bool; 5]); 3] = [
    ("MYO", "MYO", [true, false, true, false, false]),
    ("Eat Out", "Eat Out", [false, false, true, false, false]),
    ("Leftovers", "Leftovers", [false, false, false, false, false]),
];

pub fn meal_sheet(meal_type: MealType) -> String {
    meal_type.to_string()
}

pub fn week_label(week: usize) -> String {
    format!("Week {}", week + 1)
}

pub fn meal_row(week: usize) -> usize {
    FIRST_WEEK_ROW + week * 2
}

pub fn side_row(week: usize) -> usize {
    meal_row(week) + 1
}

pub fn calendar_block_rows() -> usize {
    2 + MealType::VARIANTS.len() * 2 + 1
}

pub fn calendar_block_start(week: usize) -> usize {
    week * calendar_block_rows()
}

pub fn bool_cell(value: bool) -> String {
    if value { "TRUE" } else { "FALSE" }.to_owned()
}

/// [`SPECIALS`] as recipe rows, header excluded.
pub fn specials_rows() -> Vec<Vec<String>> {
    SPECIALS
        .iter()
        .map(|(name, category, flags)| {
            let mut row = vec![name.to_string(), category.to_string()];
            row.extend(flags.iter().map(|f| bool_cell(*f)));
            row
        })
        .collect()
}

fn labelled(label: impl Into<String>, cells: &[String]) -> Vec<String> {
    std::iter::once(label.into())
        .chain(cells.iter().cloned())
        .collect()
}

/// Creates whichever sheets are missing. Returns `true` when the recipe sheet
/// had to be created, in which case it is seeded with the header and
/// [`SPECIALS`].
pub fn ensure_sheets<S: GridStore>(store: &mut S, shape: &PlanShape) -> Result<bool> {
    let created = !store.has_sheet(RECIPES_SHEET);
    if created {
        store.add_sheet(RECIPES_SHEET)?;

        let mut rows = vec![RECIPE_HEADER.iter().map(|h| h.to_string()).collect()];
        rows.extend(specials_rows());

        store.write(&Range::new(RECIPES_SHEET, 0, 0, rows.len(), RECIPE_COLUMNS), &rows)?;
        tracing::info!("recipe sheet created with {} specials", SPECIALS.len());
    }

    for meal_type in MealType::VARIANTS {
        let name = meal_sheet(*meal_type);
        if !store.has_sheet(&name) {
            store.add_sheet(&name)?;
            reset_meal_sheet(store, *meal_type, shape)?;
        }
    }

    store.add_sheet(CALENDAR_SHEET)?;

    Ok(created)
}

/// Clears a meal sheet down to its title, day headers and row labels.
pub fn reset_meal_sheet<S: GridStore>(
    store: &mut S,
    meal_type: MealType,
    shape: &PlanShape,
) -> Result<()> {
    let name = meal_sheet(meal_type);
    store.add_sheet(&name)?;
    store.clear_sheet(&name)?;

    let cols = shape.days_per_week + FIRST_DAY_COL;
    let blank = vec![String::new(); shape.days_per_week];

    let mut rows = Vec::with_capacity(FIRST_WEEK_ROW + shape.weeks * 2);
    rows.push(labelled(name.clone(), &blank));
    rows.push(labelled("", &shape.day_labels()));
    for week in 0..shape.weeks {
        rows.push(labelled(week_label(week), &blank));
        rows.push(labelled(SIDES_LABEL, &blank));
    }

    store.write(&Range::new(&name, 0, 0, rows.len(), cols), &rows)
}

/// The block of meal cells for one week.
pub fn meal_range(meal_type: MealType, week: usize, shape: &PlanShape) -> Range {
    Range::row(
        meal_sheet(meal_type),
        meal_row(week),
        FIRST_DAY_COL,
        shape.days_per_week,
    )
}

/// The block of side cells for one week.
pub fn side_range(meal_type: MealType, week: usize, shape: &PlanShape) -> Range {
    Range::row(
        meal_sheet(meal_type),
        side_row(week),
        FIRST_DAY_COL,
        shape.days_per_week,
    )
}

pub fn calendar_label_row(label: impl Into<String>, cells: &[String]) -> Vec<String> {
    labelled(label, cells)
}
