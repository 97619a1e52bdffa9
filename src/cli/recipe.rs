use clap::Args;
use mealplanner_grid::{Workbook, layout};
use mealplanner_recipe::{AddRecipeInput, Catalog, append_recipe, list_sides};

use crate::cli::render;
use crate::config::Config;

#[derive(Args, Debug, Clone)]
pub struct AddRecipeArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub category: String,

    #[arg(long)]
    pub breakfast: bool,

    #[arg(long)]
    pub lunch: bool,

    #[arg(long)]
    pub dinner: bool,

    #[arg(long)]
    pub snacks: bool,

    /// Offer this recipe as a side
    #[arg(long)]
    pub side: bool,
}

impl From<AddRecipeArgs> for AddRecipeInput {
    fn from(args: AddRecipeArgs) -> Self {
        Self {
            name: args.name,
            category: args.category,
            is_breakfast: args.breakfast,
            is_lunch: args.lunch,
            is_dinner: args.dinner,
            is_snack: args.snacks,
            is_side: args.side,
        }
    }
}

pub fn list(config: &Config) -> anyhow::Result<String> {
    let workbook = Workbook::open(&config.workbook.path)?;
    let catalog = Catalog::read(&workbook)?;

    Ok(render::catalog(&catalog))
}

pub fn sides(config: &Config) -> anyhow::Result<String> {
    let workbook = Workbook::open(&config.workbook.path)?;
    let catalog = Catalog::read(&workbook)?;

    Ok(render::sides(&list_sides(&catalog.recipes)))
}

#[tracing::instrument(skip(config))]
pub fn add(config: &Config, args: AddRecipeArgs) -> anyhow::Result<String> {
    let mut workbook = Workbook::open(&config.workbook.path)?;
    layout::ensure_sheets(&mut workbook, &config.plan.shape())?;

    let name = args.name.trim().to_owned();
    let row = append_recipe(&mut workbook, args.into())?;
    workbook.save(&config.workbook.path)?;

    Ok(format!("Added '{name}' on row {row}."))
}
