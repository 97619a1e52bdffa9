use anyhow::Result;
use clap::{Parser, Subcommand};
use mealplanner::cli::{self, SlotArgs, recipe::AddRecipeArgs};

/// mealplanner - Multi-week meal planning on a spreadsheet-style workbook
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Random multi-week meal plans from your own recipe list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Workbook file (overrides config file)
    #[arg(long, global = true)]
    workbook: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the workbook with its sheets and starter recipes
    Init,
    /// Generate a fresh meal plan and rebuild the calendar
    Generate {
        /// Seed for a reproducible plan (overrides config file)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the recipe catalog and any skipped rows
    Recipes,
    /// List the recipes that can be picked as sides
    Sides,
    /// Append a recipe to the recipe sheet
    AddRecipe(AddRecipeArgs),
    /// Pick or clear the side of one meal
    SetSide {
        #[command(flatten)]
        slot: SlotArgs,

        /// Side name; omit to clear
        #[arg(long)]
        name: Option<String>,
    },
    /// Replace the meal of one slot with any recipe
    SetMeal {
        #[command(flatten)]
        slot: SlotArgs,

        #[arg(long)]
        name: String,
    },
    /// Rebuild the calendar from the meal sheets and print it
    Calendar,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = mealplanner::Config::load(cli.config.clone())?;
    if let Some(workbook) = cli.workbook {
        config.workbook.path = workbook;
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealplanner::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    let output = match cli.command {
        Commands::Init => cli::plan::init(&config),
        Commands::Generate { seed } => cli::plan::generate(&config, seed),
        Commands::Recipes => cli::recipe::list(&config),
        Commands::Sides => cli::recipe::sides(&config),
        Commands::AddRecipe(args) => cli::recipe::add(&config, args),
        Commands::SetSide { slot, name } => cli::plan::set_side(&config, slot, name),
        Commands::SetMeal { slot, name } => cli::plan::set_meal(&config, slot, name),
        Commands::Calendar => cli::plan::calendar(&config),
    }?;

    println!("{output}");

    Ok(())
}
