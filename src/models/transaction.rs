//! Transaction model
//!
//! A transaction records a single spending event against a named category.
//! Once built it can't be changed; the ledger only ever appends them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single recorded spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    description: String,
    amount: Money,
    category: String,
    date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The category does not have to have a budget defined for it, and the
    /// amount is taken as given.
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Category name, matched case-sensitively
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Check whether this transaction was recorded against `category`
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}
