//! Configuration module for budget-tracker
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{BudgetPaths, DIR_ENV_VAR};
pub use settings::Settings;
