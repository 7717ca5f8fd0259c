//! Interactive menu
//!
//! A numbered read-eval loop over a session. Input and output are generic so
//! the loop can be driven from stdin/stdout or from an in-memory script.

use std::io::{BufRead, Write};

use tracing::debug;

use super::{validate_category, Session};
use crate::display::{format_budget_report, format_recent_transactions};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::reports::Reporter;

const MENU: &str = "\n=== BUDGET TRACKER MENU ===\n\
                    1. Add Transaction\n\
                    2. View Budget Report\n\
                    3. View Recent Transactions\n\
                    4. Exit\n";

/// A single menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTransaction,
    BudgetReport,
    RecentTransactions,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection, `None` for anything unrecognised
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddTransaction),
            "2" => Some(Self::BudgetReport),
            "3" => Some(Self::RecentTransactions),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive menu over a reader and writer
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self, session: &mut Session) -> BudgetResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddTransaction) => {
                    if !self.add_transaction(session)? {
                        return Ok(());
                    }
                }
                Some(MenuChoice::BudgetReport) => {
                    let report = Reporter::new(&session.ledger).budget_report();
                    write!(self.output, "{}", format_budget_report(&report, &session.display))?;
                }
                Some(MenuChoice::RecentTransactions) => {
                    let Some(count) = self.prompt_count()? else {
                        return Ok(());
                    };
                    let recent = Reporter::new(&session.ledger).recent_transactions(count);
                    writeln!(self.output)?;
                    write!(
                        self.output,
                        "{}",
                        format_recent_transactions(&recent, &session.display)
                    )?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    /// Returns false if input ended part way through
    fn add_transaction(&mut self, session: &mut Session) -> BudgetResult<bool> {
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(false);
        };
        let Some(amount) = self.prompt_amount()? else {
            return Ok(false);
        };
        let Some(category) = self.prompt_category()? else {
            return Ok(false);
        };

        session
            .ledger
            .add_transaction(description, amount, category, session.today);
        writeln!(self.output, "Transaction added successfully!")?;
        Ok(true)
    }

    fn prompt_amount(&mut self) -> BudgetResult<Option<Money>> {
        loop {
            let Some(raw) = self.prompt("Enter amount: ")? else {
                return Ok(None);
            };
            match Money::parse(&raw) {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => writeln!(self.output, "Please enter an amount such as 12.50.")?,
            }
        }
    }

    fn prompt_category(&mut self) -> BudgetResult<Option<String>> {
        loop {
            let Some(raw) = self.prompt("Enter category: ")? else {
                return Ok(None);
            };
            match validate_category(&raw) {
                Ok(()) => return Ok(Some(raw)),
                Err(_) => writeln!(self.output, "Category name cannot be empty.")?,
            }
        }
    }

    fn prompt_count(&mut self) -> BudgetResult<Option<i64>> {
        loop {
            let Some(raw) = self.prompt("How many recent transactions to show? ")? else {
                return Ok(None);
            };
            match raw.trim().parse::<i64>() {
                Ok(count) => return Ok(Some(count)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Print `message` and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }
}
