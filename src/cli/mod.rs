use anyhow::bail;
use clap::Args;
use mealplanner_grid::Workbook;
use mealplanner_mealplan::Command;
use mealplanner_shared::{Day, MealType, Slot};

use crate::config::Config;

pub mod plan;
pub mod recipe;
pub mod render;

/// Locates one cell of the plan. Weeks are 1-based.
#[derive(Args, Debug, Clone)]
pub struct SlotArgs {
    /// Breakfast, Lunch, Snacks or Dinner
    #[arg(long)]
    pub meal_type: MealType,

    /// Week number, starting at 1
    #[arg(long)]
    pub week: usize,

    /// Mon..Sun
    #[arg(long)]
    pub day: Day,
}

impl SlotArgs {
    pub fn slot(&self) -> anyhow::Result<Slot> {
        if self.week == 0 {
            bail!("weeks are numbered from 1");
        }

        Ok(Slot::new(self.meal_type, self.week - 1, self.day.index()))
    }
}

pub(crate) fn open(config: &Config) -> anyhow::Result<Command<Workbook>> {
    let workbook = Workbook::open(&config.workbook.path)?;

    Ok(Command::new(workbook, config.plan.shape()).policy(config.plan.on_empty_pool))
}

pub(crate) fn save(config: &Config, command: Command<Workbook>) -> anyhow::Result<()> {
    command.into_inner().save(&config.workbook.path)?;

    tracing::debug!(path = %config.workbook.path, "workbook written");

    Ok(())
}
