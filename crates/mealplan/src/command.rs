use mealplanner_grid::{GridStore, layout};
use mealplanner_recipe::{Catalog, RowIssue, list_sides, meal_options};
use mealplanner_shared::{Error, MealType, PlanShape, Result, Slot, bail};
use rand::Rng;
use serde::Deserialize;
use std::ops::Deref;
use strum::{Display, EnumString, VariantArray};

use crate::{
    Calendar, Cell, MealAssigner, WeekAssignment, read_assignments, read_side_selections,
    write_assignments, write_calendar, write_cell,
};

/// What a run does when a meal type has no eligible recipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPoolPolicy {
    /// Leave that meal type blank and plan the others.
    #[default]
    Skip,
    /// Fail the whole run.
    Abort,
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub recipes: usize,
    pub issues: Vec<RowIssue>,
    pub generated: Vec<MealType>,
    pub skipped: Vec<MealType>,
    pub sides: Vec<String>,
    pub calendar: Calendar,
}

pub struct Command<S: GridStore> {
    store: S,
    shape: PlanShape,
    policy: EmptyPoolPolicy,
}

impl<S: GridStore> Deref for Command<S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl<S: GridStore> Command<S> {
    pub fn new(store: S, shape: PlanShape) -> Self {
        Self {
            store,
            shape,
            policy: EmptyPoolPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: EmptyPoolPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn shape(&self) -> &PlanShape {
        &self.shape
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Generate Meal Plan: load the catalog, assign every meal type, then
    /// write the meal sheets and the calendar.
    ///
    /// The store is only read until the catalog loads and every assignment
    /// succeeds; a failed run leaves it untouched.
    #[tracing::instrument(skip_all, fields(weeks = self.shape.weeks, days = self.shape.days_per_week))]
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GenerateReport> {
        let catalog = Catalog::read(&self.store)?;
        let assigner = MealAssigner::new(self.shape);

        let mut planned: Vec<(MealType, Option<Vec<WeekAssignment>>)> = vec![];
        let mut generated = vec![];
        let mut skipped = vec![];

        for meal_type in MealType::VARIANTS {
            match assigner.generate(*meal_type, &catalog.pool(*meal_type), rng) {
                Ok(weeks) => {
                    generated.push(*meal_type);
                    planned.push((*meal_type, Some(weeks)));
                }
                Err(Error::NoEligibleRecipes(meal_type))
                    if self.policy == EmptyPoolPolicy::Skip =>
                {
                    tracing::warn!(%meal_type, "no eligible recipes, leaving meal type blank");
                    skipped.push(meal_type);
                    planned.push((meal_type, None));
                }
                Err(e) => return Err(e),
            }
        }

        layout::ensure_sheets(&mut self.store, &self.shape)?;

        for (meal_type, weeks) in planned {
            match weeks {
                Some(weeks) => write_assignments(&mut self.store, meal_type, &weeks, &self.shape)?,
                None => layout::reset_meal_sheet(&mut self.store, meal_type, &self.shape)?,
            }
        }

        let sides = list_sides(&catalog.recipes);
        if sides.is_empty() {
            tracing::info!("no recipe is marked as a side, side selection disabled");
        }

        let calendar = self.refresh_calendar()?;

        tracing::info!(
            recipes = catalog.len(),
            generated = generated.len(),
            skipped = skipped.len(),
            "meal plan generated"
        );

        Ok(GenerateReport {
            recipes: catalog.len(),
            issues: catalog.issues,
            generated,
            skipped,
            sides,
            calendar,
        })
    }

    /// Derives the calendar from what the grid currently holds.
    pub fn calendar(&self) -> Result<Calendar> {
        let assignments = read_assignments(&self.store, &self.shape)?;
        let sides = read_side_selections(&self.store, &self.shape)?;

        Ok(Calendar::build(&assignments, &sides, &self.shape))
    }

    /// Derives the calendar and writes it back to the calendar sheet.
    pub fn refresh_calendar(&mut self) -> Result<Calendar> {
        let calendar = self.calendar()?;
        write_calendar(&mut self.store, &calendar)?;

        Ok(calendar)
    }

    /// Picks a side for one slot, or clears it with `None`.
    #[tracing::instrument(skip(self))]
    pub fn set_side(&mut self, slot: Slot, name: Option<String>) -> Result<Calendar> {
        self.check_slot(&slot)?;

        let name = name.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty());
        if let Some(name) = name.as_deref() {
            let catalog = Catalog::read(&self.store)?;
            let sides = list_sides(&catalog.recipes);

            if sides.is_empty() {
                bail!("Side selection is disabled: no recipe is marked as a side");
            }

            if !sides.iter().any(|s| s == name) {
                bail!("'{name}' is not a side");
            }
        }

        layout::ensure_sheets(&mut self.store, &self.shape)?;
        write_cell(&mut self.store, &slot, Cell::Side, name.as_deref())?;

        self.refresh_calendar()
    }

    /// Overrides the generated meal of one slot with any catalog recipe.
    #[tracing::instrument(skip(self))]
    pub fn set_meal(&mut self, slot: Slot, name: String) -> Result<Calendar> {
        self.check_slot(&slot)?;

        let name = name.trim();
        let catalog = Catalog::read(&self.store)?;
        if !meal_options(&catalog.recipes).iter().any(|n| n == name) {
            bail!("'{name}' is not in the recipe list");
        }

        layout::ensure_sheets(&mut self.store, &self.shape)?;
        write_cell(&mut self.store, &slot, Cell::Meal, Some(name))?;

        self.refresh_calendar()
    }

    fn check_slot(&self, slot: &Slot) -> Result<()> {
        if !self.shape.contains(slot) {
            bail!(
                "week {} day {} is outside the {}-week plan of {} days",
                slot.week + 1,
                slot.day + 1,
                self.shape.weeks,
                self.shape.days_per_week
            );
        }

        Ok(())
    }
}
