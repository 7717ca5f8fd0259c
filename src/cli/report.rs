//! CLI commands for reports

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::Session;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::{write_budget_report, write_transactions, OutputFormat, Reporter};

/// Print or export the budget report
pub fn handle_report_command(
    session: &Session,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let report = Reporter::new(&session.ledger).budget_report();
    with_output(output.as_deref(), |writer| {
        write_budget_report(&report, format, &session.display, writer)
    })
}

/// Print or export the most recent transactions
///
/// Falls back to the configured default when `count` is not given.
pub fn handle_recent_command(
    session: &Session,
    count: Option<i64>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let count = count.unwrap_or(session.default_recent_count);
    let recent = Reporter::new(&session.ledger).recent_transactions(count);
    with_output(output.as_deref(), |writer| {
        write_transactions(&recent, format, &session.display, writer)
    })
}

/// Run `write` against the output file, or stdout when no path is given
fn with_output<F>(path: Option<&Path>, write: F) -> BudgetResult<()>
where
    F: FnOnce(&mut dyn Write) -> BudgetResult<()>,
{
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "report written");
            println!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
