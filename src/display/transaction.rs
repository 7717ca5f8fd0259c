//! Transaction display formatting

use super::DisplayOptions;
use crate::models::Transaction;

/// Format a transaction as `date | category | amount | description`
pub fn format_transaction_line(txn: &Transaction, opts: &DisplayOptions) -> String {
    format!(
        "{} | {} | {} | {}",
        opts.date(txn.date()),
        txn.category(),
        opts.money(txn.amount()),
        txn.description()
    )
}

/// Format a recent-transactions listing with its header
pub fn format_recent_transactions(transactions: &[&Transaction], opts: &DisplayOptions) -> String {
    let mut output = String::from("=== RECENT TRANSACTIONS ===\n");

    if transactions.is_empty() {
        output.push_str("No transactions found.\n");
        return output;
    }

    for txn in transactions {
        output.push_str(&format_transaction_line(txn, opts));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            "Electric bill",
            Money::from_cents(12000),
            "Utilities",
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_line_matches_transaction_display() {
        let txn = sample();
        let line = format_transaction_line(&txn, &DisplayOptions::default());
        assert_eq!(line, "2025-01-10 | Utilities | $120.00 | Electric bill");
        assert_eq!(line, txn.to_string());
    }

    #[test]
    fn test_line_uses_options() {
        let opts = DisplayOptions {
            currency_symbol: "€".into(),
            date_format: "%d.%m.%Y".into(),
        };
        assert_eq!(
            format_transaction_line(&sample(), &opts),
            "10.01.2025 | Utilities | €120.00 | Electric bill"
        );
    }

    #[test]
    fn test_empty_listing() {
        let output = format_recent_transactions(&[], &DisplayOptions::default());
        assert!(output.starts_with("=== RECENT TRANSACTIONS ==="));
        assert!(output.contains("No transactions found."));
    }

    #[test]
    fn test_listing_one_line_per_transaction() {
        let txn = sample();
        let output = format_recent_transactions(&[&txn, &txn], &DisplayOptions::default());
        assert_eq!(output.lines().count(), 3);
    }
}
