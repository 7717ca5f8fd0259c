//! Reports module for budget-tracker
//!
//! Read-only views over a [`Ledger`]: the budget report and the recent
//! transactions listing, plus writers for exporting them.

pub mod budget;
pub mod export;
pub mod recent;

pub use budget::{BudgetReport, CategoryReportRow};
pub use export::{write_budget_report, write_transactions, OutputFormat};
pub use recent::recent_transactions;

use crate::ledger::Ledger;
use crate::models::Transaction;

/// Stateless reporter over a borrowed ledger
pub struct Reporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Reporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Totals and per-category breakdown
    pub fn budget_report(&self) -> BudgetReport {
        BudgetReport::generate(self.ledger)
    }

    /// See [`recent_transactions`]
    pub fn recent_transactions(&self, count: i64) -> Vec<&'a Transaction> {
        recent::recent_transactions(self.ledger, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::setup::sample::sample_ledger;
    use chrono::NaiveDate;

    #[test]
    fn test_reporter_delegates() {
        let ledger = sample_ledger(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        let reporter = Reporter::new(&ledger);

        assert_eq!(reporter.budget_report(), BudgetReport::generate(&ledger));
        assert_eq!(
            reporter.recent_transactions(3),
            recent_transactions(&ledger, 3)
        );
    }

    #[test]
    fn test_reports_leave_ledger_untouched() {
        let ledger = sample_ledger(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        let snapshot = ledger.clone();
        let reporter = Reporter::new(&ledger);

        let _ = reporter.budget_report();
        let _ = reporter.recent_transactions(4);

        assert_eq!(ledger.transactions(), snapshot.transactions());
        assert_eq!(ledger.total_budget(), snapshot.total_budget());
        assert_eq!(ledger.total_spending(), Money::from_cents(26550));
    }
}
