//! Report output in text, JSON, YAML, or CSV form

use std::io::Write;

use clap::ValueEnum;

use super::BudgetReport;
use crate::display::{self, DisplayOptions};
use crate::error::BudgetResult;
use crate::models::Transaction;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal text
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

/// Write a budget report in the requested format
pub fn write_budget_report<W: Write + ?Sized>(
    report: &BudgetReport,
    format: OutputFormat,
    opts: &DisplayOptions,
    writer: &mut W,
) -> BudgetResult<()> {
    match format {
        OutputFormat::Text => {
            writer.write_all(display::format_budget_report(report, opts).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *writer, report)?,
        OutputFormat::Csv => {
            let mut csv = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *writer);
            csv.write_record(["category", "budgeted", "spent", "remaining"])?;
            for row in &report.categories {
                csv.serialize(row)?;
            }
            csv.write_record([
                "TOTAL".to_string(),
                report.total_budget.to_decimal_string(),
                report.total_spent.to_decimal_string(),
                report.total_remaining.to_decimal_string(),
            ])?;
            csv.flush()?;
        }
    }
    Ok(())
}

/// Write a recent-transactions listing in the requested format
pub fn write_transactions<W: Write + ?Sized>(
    transactions: &[&Transaction],
    format: OutputFormat,
    opts: &DisplayOptions,
    writer: &mut W,
) -> BudgetResult<()> {
    match format {
        OutputFormat::Text => {
            writer.write_all(display::format_recent_transactions(transactions, opts).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, transactions)?;
            writeln!(writer)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *writer, transactions)?,
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(&mut *writer);
            csv.write_record(["date", "category", "amount", "description"])?;
            for txn in transactions {
                csv.write_record([
                    txn.date().format("%Y-%m-%d").to_string(),
                    txn.category().to_string(),
                    txn.amount().to_decimal_string(),
                    txn.description().to_string(),
                ])?;
            }
            csv.flush()?;
        }
    }
    Ok(())
}
