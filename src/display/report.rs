//! Budget report formatting for terminal output

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::DisplayOptions;
use crate::reports::{BudgetReport, CategoryReportRow};

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

impl CategoryLine {
    fn new(row: &CategoryReportRow, opts: &DisplayOptions) -> Self {
        let category = if row.is_overspent() {
            format!("{} (over)", row.category)
        } else {
            row.category.clone()
        };

        Self {
            category,
            budgeted: opts.money(row.budgeted),
            spent: opts.money(row.spent),
            remaining: opts.money(row.remaining),
        }
    }
}

/// Format the budget report: totals, then the per-category breakdown
pub fn format_budget_report(report: &BudgetReport, opts: &DisplayOptions) -> String {
    let mut output = String::from("=== BUDGET REPORT ===\n");
    output.push_str(&format!("Total Budget: {}\n", opts.money(report.total_budget)));
    output.push_str(&format!("Total Spent: {}\n", opts.money(report.total_spent)));
    output.push_str(&format!("Remaining: {}\n", opts.money(report.total_remaining)));
    if report.is_over_budget() {
        output.push_str(&format!(
            "Over budget by {}\n",
            opts.money(-report.total_remaining)
        ));
    }
    output.push('\n');
    output.push_str("Category Breakdown:\n");

    if report.categories.is_empty() {
        output.push_str("No budget categories defined.\n");
    } else {
        let lines: Vec<CategoryLine> = report
            .categories
            .iter()
            .map(|row| CategoryLine::new(row, opts))
            .collect();
        let mut table = Table::new(lines);
        table
            .with(Style::psql())
            .modify(Columns::new(1..), Alignment::right());
        output.push_str(&table.to_string());
        output.push('\n');

        let overspent = report.overspent_categories();
        if !overspent.is_empty() {
            let names: Vec<&str> = overspent.iter().map(|row| row.category.as_str()).collect();
            output.push_str(&format!("Overspent: {}\n", names.join(", ")));
        }
    }

    let unbudgeted = report.unbudgeted_spending();
    if !unbudgeted.is_zero() {
        output.push_str(&format!(
            "Spent outside budgeted categories: {}\n",
            opts.money(unbudgeted)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::Money;
    use crate::setup::sample::sample_ledger;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_sample_report_output() {
        let report = BudgetReport::generate(&sample_ledger(today()));
        let output = format_budget_report(&report, &DisplayOptions::default());

        assert!(output.starts_with("=== BUDGET REPORT ==="));
        assert!(output.contains("Total Budget: $1150.00"));
        assert!(output.contains("Total Spent: $265.50"));
        assert!(output.contains("Remaining: $884.50"));
        assert!(output.contains("Food"));
        assert!(output.contains("$424.50"));
        assert!(!output.contains("outside budgeted"));
        assert!(!output.contains("Over budget"));
        assert!(!output.contains("Overspent:"));
    }

    #[test]
    fn test_overspent_and_unbudgeted_are_flagged() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Fun", Money::from_dollars(10));
        ledger.add_transaction("Bowling", Money::from_dollars(15), "Fun", today());
        ledger.add_transaction("Taxi", Money::from_dollars(8), "Travel", today());

        let report = BudgetReport::generate(&ledger);
        let output = format_budget_report(&report, &DisplayOptions::default());

        assert!(output.contains("Fun (over)"));
        assert!(output.contains("-$5.00"));
        assert!(output.contains("Spent outside budgeted categories: $8.00"));
        assert!(output.contains("Overspent: Fun\n"));
        assert!(output.contains("Over budget by $13.00"));
    }

    #[test]
    fn test_overspent_categories_listed_by_name() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Rent", Money::from_dollars(900));
        ledger.set_budget("Fun", Money::from_dollars(20));
        ledger.set_budget("Food", Money::from_dollars(50));
        ledger.add_transaction("Arcade", Money::from_dollars(25), "Fun", today());
        ledger.add_transaction("Feast", Money::from_dollars(60), "Food", today());

        let report = BudgetReport::generate(&ledger);
        let output = format_budget_report(&report, &DisplayOptions::default());

        assert!(output.contains("Overspent: Food, Fun\n"));
        assert!(!output.contains("Over budget by"));
    }

    #[test]
    fn test_empty_report() {
        let report = BudgetReport::generate(&Ledger::new());
        let output = format_budget_report(&report, &DisplayOptions::default());
        assert!(output.contains("No budget categories defined."));
    }
}
