//! Display formatting for CLI output
//!
//! Turns ledger data and reports into terminal text. Nothing here computes
//! totals; that is done by [`crate::ledger`] and [`crate::reports`].

pub mod report;
pub mod transaction;

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

pub use report::format_budget_report;
pub use transaction::{format_recent_transactions, format_transaction_line};

/// Presentation preferences taken from user settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    /// strftime-style date pattern
    pub date_format: String,
}

impl DisplayOptions {
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to `YYYY-MM-DD` if the pattern can't
    /// render a plain date
    pub fn date(&self, date: NaiveDate) -> String {
        let mut rendered = String::new();
        match write!(rendered, "{}", date.format(&self.date_format)) {
            Ok(()) => rendered,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = DisplayOptions::default();
        assert_eq!(opts.money(Money::from_cents(-1999)), "-$19.99");
        assert_eq!(
            opts.date(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()),
            "2025-02-03"
        );
    }

    #[test]
    fn test_options_from_settings() {
        let settings = Settings {
            currency_symbol: "£".into(),
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let opts = DisplayOptions::from(&settings);
        assert_eq!(opts.money(Money::from_dollars(3)), "£3.00");
        assert_eq!(
            opts.date(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()),
            "03/02/2025"
        );
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let opts = DisplayOptions {
            currency_symbol: "$".into(),
            date_format: "%H:%M".into(),
        };
        assert_eq!(
            opts.date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            "2025-01-01"
        );
    }
}
