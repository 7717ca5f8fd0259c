//! budget-tracker - personal budget ledger
//!
//! Tracks spending limits per category, records transactions against those
//! categories, and reports spending against the budget.
//!
//! # Architecture
//!
//! - `models`: money and transaction types
//! - `ledger`: the in-memory store of budgets and transactions
//! - `reports`: read-only views (budget report, recent transactions) and export
//! - `display`: terminal formatting
//! - `config`: config directory and user settings
//! - `setup`: sample data for a new session
//! - `cli`: command handlers and the interactive menu
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use budget_tracker::ledger::Ledger;
//! use budget_tracker::models::Money;
//! use budget_tracker::reports::Reporter;
//! use chrono::NaiveDate;
//!
//! let mut ledger = Ledger::new();
//! ledger.set_budget("Food", Money::from_dollars(500));
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! ledger.add_transaction("Grocery shopping", Money::from_cents(7550), "Food", date);
//!
//! let report = Reporter::new(&ledger).budget_report();
//! assert_eq!(report.total_remaining, Money::from_cents(42450));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod setup;

pub use error::{BudgetError, BudgetResult};
pub use ledger::Ledger;
