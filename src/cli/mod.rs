//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the ledger
//! and reporter. A [`Session`] owns the ledger for the life of the process.

pub mod ledger;
pub mod menu;
pub mod report;

use chrono::NaiveDate;
use tracing::info;

use crate::config::Settings;
use crate::display::DisplayOptions;
use crate::error::{BudgetError, BudgetResult};
use crate::ledger::Ledger;
use crate::setup::seed_sample_data;

pub use ledger::{handle_add_command, handle_budget_command};
pub use menu::Menu;
pub use report::{handle_recent_command, handle_report_command};

/// Session state held by the CLI for one process run
#[derive(Debug, Clone)]
pub struct Session {
    pub ledger: Ledger,
    pub display: DisplayOptions,
    /// Date used for new transactions and for dating the sample data
    pub today: NaiveDate,
    pub default_recent_count: i64,
}

impl Session {
    /// Start a session, seeding sample data when `seed` is set
    pub fn new(settings: &Settings, today: NaiveDate, seed: bool) -> Self {
        let mut ledger = Ledger::new();
        if seed {
            seed_sample_data(&mut ledger, today);
        }
        info!(%today, seeded = seed, "session started");

        Self {
            ledger,
            display: DisplayOptions::from(settings),
            today,
            default_recent_count: settings.default_recent_count,
        }
    }
}

/// Reject blank category names, for both the subcommands and the menu
pub fn validate_category(name: &str) -> BudgetResult<()> {
    if name.trim().is_empty() {
        return Err(BudgetError::Validation("Category name cannot be empty".into()));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| BudgetError::invalid_date(s))
}
