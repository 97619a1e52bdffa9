use mealplanner_grid::layout::FIRST_RECIPE_ROW;
use mealplanner_shared::{Error, MealType, Result};
use std::collections::{HashMap, HashSet};

use crate::{Recipe, parse_flag};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IssueReason {
    #[error("recipe name is used by more than one row")]
    DuplicateName,
}

/// A recipe row that was left out of the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("row {row} ({name}): {reason}")]
pub struct RowIssue {
    /// 1-based row number on the recipe sheet, header included.
    pub row: usize,
    pub name: String,
    pub reason: IssueReason,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    pub issues: Vec<RowIssue>,
}

impl Catalog {
    /// Builds the catalog from recipe rows (header excluded).
    ///
    /// Rows without a name are skipped silently. Rows that share their name
    /// with another row are skipped and reported in [`Catalog::issues`].
    /// Fails with [`Error::EmptyCatalog`] when nothing usable remains.
    pub fn load(rows: &[Vec<String>]) -> Result<Self> {
        let mut candidates = vec![];
        let mut issues = vec![];

        for (index, row) in rows.iter().enumerate() {
            let cell = |col: usize| row.get(col).map(|v| v.trim()).unwrap_or_default();
            let line = index + FIRST_RECIPE_ROW + 1;

            let name = cell(0);
            if name.is_empty() {
                continue;
            }

            candidates.push((
                line,
                Recipe {
                    name: name.to_owned(),
                    category: cell(1).to_owned(),
                    is_breakfast: parse_flag(cell(2)),
                    is_lunch: parse_flag(cell(3)),
                    is_dinner: parse_flag(cell(4)),
                    is_snack: parse_flag(cell(5)),
                    is_side: parse_flag(cell(6)),
                },
            ));
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for (_, recipe) in candidates.iter() {
            *counts.entry(recipe.name.as_str()).or_default() += 1;
        }

        let duplicated = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name.to_owned())
            .collect::<HashSet<_>>();

        let mut recipes = Vec::with_capacity(candidates.len());
        for (line, recipe) in candidates {
            if duplicated.contains(&recipe.name) {
                tracing::warn!(row = line, name = %recipe.name, "skipping duplicated recipe");
                issues.push(RowIssue {
                    row: line,
                    name: recipe.name,
                    reason: IssueReason::DuplicateName,
                });
                continue;
            }

            recipes.push(recipe);
        }

        if recipes.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        issues.sort_by_key(|i| i.row);

        tracing::debug!(
            recipes = recipes.len(),
            issues = issues.len(),
            "recipe catalog loaded"
        );

        Ok(Self { recipes, issues })
    }

    /// Recipes eligible for `meal_type`, in catalog order.
    pub fn pool(&self, meal_type: MealType) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.serves(meal_type))
            .cloned()
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
