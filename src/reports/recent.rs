//! Recent transactions listing
//!
//! Orders transactions newest first without touching the ledger's own
//! sequence.

use std::cmp::Reverse;

use crate::ledger::Ledger;
use crate::models::Transaction;

/// The `count` most recent transactions, newest date first
///
/// Transactions sharing a date are listed most recently recorded first.
/// A `count` of zero or less yields an empty list; a `count` larger than the
/// ledger yields every transaction.
pub fn recent_transactions(ledger: &Ledger, count: i64) -> Vec<&Transaction> {
    let limit = match usize::try_from(count) {
        Ok(limit) if limit > 0 => limit,
        _ => return Vec::new(),
    };

    // Reversing first makes the stable sort break date ties by reverse
    // insertion order.
    let mut ordered: Vec<&Transaction> = ledger.transactions().iter().rev().collect();
    ordered.sort_by_key(|txn| Reverse(txn.date()));
    ordered.truncate(limit);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::setup::sample::sample_ledger;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn descriptions<'a>(txns: &[&'a Transaction]) -> Vec<&'a str> {
        txns.iter().map(|t| t.description()).collect()
    }

    #[test]
    fn test_sample_recent_two() {
        let ledger = sample_ledger(day(10));
        let recent = recent_transactions(&ledger, 2);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].category(), "Entertainment");
        assert_eq!(recent[0].date(), day(10));
        assert_eq!(recent[1].category(), "Transportation");
        assert_eq!(recent[1].date(), day(9));
    }

    #[test]
    fn test_full_listing_is_non_increasing_by_date() {
        let ledger = sample_ledger(day(10));
        let recent = recent_transactions(&ledger, 10);

        assert_eq!(recent.len(), 4);
        assert!(recent.windows(2).all(|w| w[0].date() >= w[1].date()));
        assert_eq!(recent[3].category(), "Utilities");
    }

    #[test]
    fn test_count_is_clamped() {
        let ledger = sample_ledger(day(10));
        for n in 0..=6 {
            let expected = (n as usize).min(ledger.transaction_count());
            assert_eq!(recent_transactions(&ledger, n).len(), expected);
        }
    }

    #[test]
    fn test_zero_or_negative_count_is_empty() {
        let ledger = sample_ledger(day(10));
        assert!(recent_transactions(&ledger, 0).is_empty());
        assert!(recent_transactions(&ledger, -3).is_empty());
        assert!(recent_transactions(&ledger, i64::MIN).is_empty());
    }

    #[test]
    fn test_empty_ledger() {
        assert!(recent_transactions(&Ledger::new(), 5).is_empty());
    }

    #[test]
    fn test_same_date_ties_favor_later_insertion() {
        let mut ledger = Ledger::new();
        ledger.add_transaction("first", Money::from_dollars(1), "A", day(3));
        ledger.add_transaction("older", Money::from_dollars(1), "A", day(1));
        ledger.add_transaction("second", Money::from_dollars(1), "B", day(3));
        ledger.add_transaction("third", Money::from_dollars(1), "C", day(3));

        let recent = recent_transactions(&ledger, 4);
        assert_eq!(
            descriptions(&recent),
            vec!["third", "second", "first", "older"]
        );

        let again = recent_transactions(&ledger, 4);
        assert_eq!(descriptions(&recent), descriptions(&again));
    }

    #[test]
    fn test_listing_does_not_reorder_ledger() {
        let ledger = sample_ledger(day(10));
        let before: Vec<_> = ledger.transactions().to_vec();
        let _ = recent_transactions(&ledger, 4);
        assert_eq!(ledger.transactions(), before.as_slice());
    }
}
