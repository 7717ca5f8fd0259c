//! CLI commands that modify the session ledger
//!
//! Nothing is persisted, so each command applies its change to this run's
//! ledger and prints the report that results.

use chrono::NaiveDate;

use super::{handle_report_command, parse_date, validate_category, Session};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::reports::OutputFormat;

/// Record a transaction, then print the budget report
pub fn handle_add_command(
    session: &mut Session,
    description: String,
    amount: &str,
    category: String,
    date: Option<&str>,
) -> BudgetResult<()> {
    let amount = Money::parse(amount)?;
    let date = resolve_date(session.today, date)?;

    validate_category(&category)?;

    session.ledger.add_transaction(description, amount, category, date);
    println!("Transaction added successfully!");
    println!();
    handle_report_command(session, OutputFormat::Text, None)
}

/// Set or replace a category allotment, then print the budget report
pub fn handle_budget_command(
    session: &mut Session,
    category: String,
    amount: &str,
) -> BudgetResult<()> {
    let amount = Money::parse(amount)?;

    validate_category(&category)?;

    let previous = session.ledger.budget_for(&category);
    session.ledger.set_budget(category.clone(), amount);
    match previous {
        Some(previous) => println!(
            "Budget for '{}' changed from {} to {}",
            category,
            session.display.money(previous),
            session.display.money(amount)
        ),
        None => println!(
            "Budget for '{}' set to {}",
            category,
            session.display.money(amount)
        ),
    }
    println!();
    handle_report_command(session, OutputFormat::Text, None)
}

fn resolve_date(today: NaiveDate, date: Option<&str>) -> BudgetResult<NaiveDate> {
    match date {
        Some(raw) => parse_date(raw),
        None => Ok(today),
    }
}
