//! User settings for budget-tracker
//!
//! Presentation and startup preferences. The ledger itself is never saved;
//! only this file is.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings for budget-tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of transactions `recent` shows when no count is given
    #[serde(default = "default_recent_count")]
    pub default_recent_count: i64,

    /// Whether a new session starts with the sample budgets and transactions
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_count() -> i64 {
    5
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_recent_count: default_recent_count(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings that would break formatting later on
    ///
    /// A date format must render a plain calendar date, so time and offset
    /// specifiers such as `%H` or `%z` are refused along with unknown ones.
    pub fn validate(&self) -> Result<(), BudgetError> {
        let mut rendered = String::new();
        write!(rendered, "{}", NaiveDate::MIN.format(&self.date_format)).map_err(|_| {
            BudgetError::Config(format!("Invalid date format: {}", self.date_format))
        })
    }
}
