//! Budget Report
//!
//! Totals for the whole ledger plus a budgeted / spent / remaining line for
//! every defined category.

use serde::Serialize;

use crate::ledger::Ledger;
use crate::models::Money;

/// A row in the budget report for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReportRow {
    /// Category name
    pub category: String,
    /// Current allotment
    pub budgeted: Money,
    /// Sum of transactions recorded against this category
    pub spent: Money,
    /// Allotment minus spending
    pub remaining: Money,
}

impl CategoryReportRow {
    /// Check if this category is overspent
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    /// Sum of all category allotments
    pub total_budget: Money,
    /// Sum of all transactions, including unbudgeted categories
    pub total_spent: Money,
    /// Total budget minus total spent
    pub total_remaining: Money,
    /// One row per defined category, ascending by name
    pub categories: Vec<CategoryReportRow>,
}

impl BudgetReport {
    /// Generate a budget report from the current ledger contents
    pub fn generate(ledger: &Ledger) -> Self {
        let categories = ledger
            .budgets()
            .map(|(name, budgeted)| {
                let spent = ledger.category_spending(name);
                CategoryReportRow {
                    category: name.to_string(),
                    budgeted,
                    spent,
                    remaining: budgeted - spent,
                }
            })
            .collect();

        Self {
            total_budget: ledger.total_budget(),
            total_spent: ledger.total_spending(),
            total_remaining: ledger.remaining_budget(),
            categories,
        }
    }

    /// Look up the row for a category by name
    pub fn category(&self, name: &str) -> Option<&CategoryReportRow> {
        self.categories.iter().find(|row| row.category == name)
    }

    /// Spending recorded against categories that have no budget line
    pub fn unbudgeted_spending(&self) -> Money {
        let budgeted_spent: Money = self.categories.iter().map(|row| row.spent).sum();
        self.total_spent - budgeted_spent
    }

    /// Rows whose spending exceeds their allotment
    pub fn overspent_categories(&self) -> Vec<&CategoryReportRow> {
        self.categories.iter().filter(|row| row.is_overspent()).collect()
    }

    /// Check if the ledger as a whole is over budget
    pub fn is_over_budget(&self) -> bool {
        self.total_remaining.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::sample::sample_ledger;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_generate_sample_report() {
        let report = BudgetReport::generate(&sample_ledger(today()));

        assert_eq!(report.total_budget, Money::from_dollars(1150));
        assert_eq!(report.total_spent, Money::from_cents(26550));
        assert_eq!(report.total_remaining, Money::from_cents(88450));
        assert_eq!(report.categories.len(), 4);

        let food = report.category("Food").unwrap();
        assert_eq!(food.budgeted, Money::from_dollars(500));
        assert_eq!(food.spent, Money::from_cents(7550));
        assert_eq!(food.remaining, Money::from_cents(42450));
        assert!(!food.is_overspent());
    }

    #[test]
    fn test_every_row_is_consistent() {
        let report = BudgetReport::generate(&sample_ledger(today()));
        for row in &report.categories {
            assert_eq!(row.remaining, row.budgeted - row.spent);
        }
        assert_eq!(report.unbudgeted_spending(), Money::zero());
    }

    #[test]
    fn test_unbudgeted_spending_only_in_totals() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", Money::from_dollars(100));
        ledger.add_transaction("Lunch", Money::from_dollars(12), "Food", today());
        ledger.add_transaction("Present", Money::from_dollars(30), "Gifts", today());

        let report = BudgetReport::generate(&ledger);
        assert_eq!(report.categories.len(), 1);
        assert!(report.category("Gifts").is_none());
        assert_eq!(report.total_spent, Money::from_dollars(42));
        assert_eq!(report.unbudgeted_spending(), Money::from_dollars(30));
        assert_eq!(report.total_remaining, Money::from_dollars(58));
    }

    #[test]
    fn test_overspent_rows() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Fun", Money::from_dollars(20));
        ledger.set_budget("Rent", Money::from_dollars(900));
        ledger.add_transaction("Arcade", Money::from_dollars(25), "Fun", today());

        let report = BudgetReport::generate(&ledger);
        let overspent: Vec<_> = report
            .overspent_categories()
            .iter()
            .map(|row| row.category.as_str())
            .collect();
        assert_eq!(overspent, vec!["Fun"]);
        assert!(!report.is_over_budget());
    }

    #[test]
    fn test_empty_ledger_report() {
        let report = BudgetReport::generate(&Ledger::new());
        assert!(report.categories.is_empty());
        assert_eq!(report.total_budget, Money::zero());
        assert_eq!(report.total_remaining, Money::zero());
    }

    #[test]
    fn test_report_serializes_amounts_as_decimals() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", Money::from_dollars(500));
        ledger.add_transaction("Groceries", Money::from_cents(7550), "Food", today());

        let json = serde_json::to_value(BudgetReport::generate(&ledger)).unwrap();
        assert_eq!(json["total_spent"], "75.50");
        assert_eq!(json["categories"][0]["category"], "Food");
        assert_eq!(json["categories"][0]["remaining"], "424.50");
    }
}
