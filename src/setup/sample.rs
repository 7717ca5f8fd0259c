//! Sample budget data
//!
//! Seeds a ledger with four categories and four recent transactions so a
//! fresh session has something to report on.

use chrono::{Days, NaiveDate};
use tracing::info;

use crate::ledger::Ledger;
use crate::models::Money;

/// Default category allotments, in cents
pub const SAMPLE_BUDGETS: [(&str, i64); 4] = [
    ("Food", 50000),
    ("Transportation", 20000),
    ("Entertainment", 15000),
    ("Utilities", 30000),
];

/// A sample transaction; `days_ago` is relative to the seeding date
#[derive(Debug, Clone, Copy)]
pub struct SampleTransaction {
    pub description: &'static str,
    pub cents: i64,
    pub category: &'static str,
    pub days_ago: u64,
}

pub const SAMPLE_TRANSACTIONS: [SampleTransaction; 4] = [
    SampleTransaction {
        description: "Grocery shopping",
        cents: 7550,
        category: "Food",
        days_ago: 2,
    },
    SampleTransaction {
        description: "Gas station",
        cents: 4500,
        category: "Transportation",
        days_ago: 1,
    },
    SampleTransaction {
        description: "Movie tickets",
        cents: 2500,
        category: "Entertainment",
        days_ago: 0,
    },
    SampleTransaction {
        description: "Electric bill",
        cents: 12000,
        category: "Utilities",
        days_ago: 5,
    },
];

/// Add the sample budgets and transactions to `ledger`
///
/// Transactions are dated relative to `today`.
pub fn seed_sample_data(ledger: &mut Ledger, today: NaiveDate) {
    for (category, cents) in SAMPLE_BUDGETS {
        ledger.set_budget(category, Money::from_cents(cents));
    }

    for sample in SAMPLE_TRANSACTIONS {
        let date = today
            .checked_sub_days(Days::new(sample.days_ago))
            .unwrap_or(today);
        ledger.add_transaction(
            sample.description,
            Money::from_cents(sample.cents),
            sample.category,
            date,
        );
    }

    info!(
        categories = SAMPLE_BUDGETS.len(),
        transactions = SAMPLE_TRANSACTIONS.len(),
        "seeded sample data"
    );
}

/// A fresh ledger holding only the sample data
pub fn sample_ledger(today: NaiveDate) -> Ledger {
    let mut ledger = Ledger::new();
    seed_sample_data(&mut ledger, today);
    ledger
}
