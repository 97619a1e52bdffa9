use mealplanner_grid::{
    GridStore, Range,
    layout::{self, FIRST_RECIPE_ROW, RECIPE_COLUMNS, RECIPES_SHEET},
};
use mealplanner_shared::Result;
use validator::Validate;

use crate::{Catalog, Recipe};

/// Data rows of the recipe sheet. A missing sheet reads as no rows.
pub fn read_recipe_rows<S: GridStore>(store: &S) -> Result<Vec<Vec<String>>> {
    if !store.has_sheet(RECIPES_SHEET) {
        return Ok(vec![]);
    }

    let last_row = store.last_row(RECIPES_SHEET)?;
    if last_row <= FIRST_RECIPE_ROW {
        return Ok(vec![]);
    }

    store.read(&Range::new(
        RECIPES_SHEET,
        FIRST_RECIPE_ROW,
        0,
        last_row - FIRST_RECIPE_ROW,
        RECIPE_COLUMNS,
    ))
}

impl Catalog {
    /// Loads the catalog off the grid without writing to it. A grid with no
    /// recipe sheet yet reads as the rows that sheet would be seeded with.
    pub fn read<S: GridStore>(store: &S) -> Result<Self> {
        if !store.has_sheet(RECIPES_SHEET) {
            return Self::load(&layout::specials_rows());
        }

        Self::load(&read_recipe_rows(store)?)
    }
}

#[derive(Validate)]
pub struct AddRecipeInput {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: String,
    pub is_breakfast: bool,
    pub is_lunch: bool,
    pub is_dinner: bool,
    pub is_snack: bool,
    pub is_side: bool,
}

/// Appends a recipe below the last used row of the recipe sheet and returns
/// the 1-based row it landed on.
pub fn append_recipe<S: GridStore>(store: &mut S, input: AddRecipeInput) -> Result<usize> {
    let input = AddRecipeInput {
        name: input.name.trim().to_owned(),
        category: input.category.trim().to_owned(),
        ..input
    };
    input.validate()?;

    let existing = read_recipe_rows(store)?;
    if existing
        .iter()
        .any(|row| row.first().is_some_and(|n| n.trim() == input.name))
    {
        mealplanner_shared::bail!("A recipe named '{}' already exists", input.name);
    }

    store.add_sheet(RECIPES_SHEET)?;
    let row = store.last_row(RECIPES_SHEET)?.max(FIRST_RECIPE_ROW);

    let recipe = Recipe {
        name: input.name,
        category: input.category,
        is_breakfast: input.is_breakfast,
        is_lunch: input.is_lunch,
        is_dinner: input.is_dinner,
        is_snack: input.is_snack,
        is_side: input.is_side,
    };

    store.write(
        &Range::row(RECIPES_SHEET, row, 0, RECIPE_COLUMNS),
        &[recipe.to_row()],
    )?;

    tracing::info!(name = %recipe.name, row = row + 1, "recipe added");

    Ok(row + 1)
}
