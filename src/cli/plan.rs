use mealplanner_grid::{Workbook, layout};
use rand::{SeedableRng, rngs::StdRng};

use crate::cli::{SlotArgs, open, render, save};
use crate::config::Config;

pub fn init(config: &Config) -> anyhow::Result<String> {
    let mut workbook = Workbook::open(&config.workbook.path)?;
    let created = layout::ensure_sheets(&mut workbook, &config.plan.shape())?;
    workbook.save(&config.workbook.path)?;

    tracing::info!(path = %config.workbook.path, created, "workbook ready");

    Ok(if created {
        format!(
            "Created {} with {} starter recipes.",
            config.workbook.path,
            layout::SPECIALS.len()
        )
    } else {
        format!("{} is ready.", config.workbook.path)
    })
}

#[tracing::instrument(skip(config))]
pub fn generate(config: &Config, seed: Option<u64>) -> anyhow::Result<String> {
    let mut command = open(config)?;

    let report = match seed.or(config.plan.seed) {
        Some(seed) => command.generate(&mut StdRng::seed_from_u64(seed))?,
        None => command.generate(&mut rand::rng())?,
    };

    save(config, command)?;

    Ok(render::report(&report))
}

pub fn calendar(config: &Config) -> anyhow::Result<String> {
    let mut command = open(config)?;
    let calendar = command.refresh_calendar()?;
    save(config, command)?;

    Ok(render::calendar(&calendar))
}

#[tracing::instrument(skip(config))]
pub fn set_side(config: &Config, slot: SlotArgs, name: Option<String>) -> anyhow::Result<String> {
    let mut command = open(config)?;
    let calendar = command.set_side(slot.slot()?, name)?;
    save(config, command)?;

    Ok(render::calendar(&calendar))
}

#[tracing::instrument(skip(config))]
pub fn set_meal(config: &Config, slot: SlotArgs, name: String) -> anyhow::Result<String> {
    let mut command = open(config)?;
    let calendar = command.set_meal(slot.slot()?, name)?;
    save(config, command)?;

    Ok(render::calendar(&calendar))
}
