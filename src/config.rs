use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealplanner_mealplan::EmptyPoolPolicy;
use mealplanner_shared::PlanShape;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub workbook: WorkbookConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    #[serde(default = "default_weeks")]
    pub weeks: usize,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: usize,
    #[serde(default)]
    pub on_empty_pool: EmptyPoolPolicy,
    /// Fixed seed for reproducible plans; a fresh one is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            weeks: default_weeks(),
            days_per_week: default_days_per_week(),
            on_empty_pool: EmptyPoolPolicy::default(),
            seed: None,
        }
    }
}

impl PlanConfig {
    pub fn shape(&self) -> PlanShape {
        PlanShape::new(self.weeks, self.days_per_week)
    }
}

fn default_weeks() -> usize {
    4
}

fn default_days_per_week() -> usize {
    7
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorkbookConfig {
    #[serde(default = "default_workbook_path")]
    pub path: String,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            path: default_workbook_path(),
        }
    }
}

fn default_workbook_path() -> String {
    "mealplan.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON log lines instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALPLANNER__PLAN__WEEKS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("plan.weeks", default_weeks() as u64)?
            .set_default("plan.days_per_week", default_days_per_week() as u64)?
            .set_default("plan.on_empty_pool", "skip")?
            .set_default("workbook.path", default_workbook_path())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=52).contains(&self.plan.weeks) {
            return Err("Plan weeks must be between 1 and 52".to_string());
        }
        if !(1..=7).contains(&self.plan.days_per_week) {
            return Err("Plan days_per_week must be between 1 and 7".to_string());
        }
        if self.workbook.path.trim().is_empty() {
            return Err("Workbook path must not be empty".to_string());
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}
