//! The ledger: category budgets plus the transaction log
//!
//! The ledger is the single source of truth. It holds a map from category
//! name to allotted amount and an append-only list of transactions. All
//! totals are recomputed from those two collections on every call, so
//! re-defining a category can never count its allotment twice.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{Money, Transaction};

/// In-memory store of category budgets and recorded transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Allotment per category name; iteration is ascending by name
    budgets: BTreeMap<String, Money>,
    /// Transactions in insertion order
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget for a category, replacing any previous allotment
    ///
    /// The amount is not validated. A negative allotment is stored as-is
    /// and will show up as a nonsensical remaining figure in reports.
    pub fn set_budget(&mut self, category: impl Into<String>, amount: Money) {
        let category = category.into();
        match self.budgets.insert(category.clone(), amount) {
            Some(previous) => debug!(%category, %previous, %amount, "budget replaced"),
            None => debug!(%category, %amount, "budget defined"),
        }
    }

    /// Append a transaction to the end of the log
    pub fn add_transaction(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) {
        let txn = Transaction::new(description, amount, category, date);
        debug!(
            category = txn.category(),
            amount = %txn.amount(),
            %date,
            "transaction recorded"
        );
        self.transactions.push(txn);
    }

    /// Total spent in one category (exact, case-sensitive match)
    ///
    /// Returns zero when nothing has been recorded against `category`,
    /// whether or not it has a budget.
    pub fn category_spending(&self, category: &str) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_in_category(category))
            .map(Transaction::amount)
            .sum()
    }

    /// Total spent across every transaction, budgeted category or not
    pub fn total_spending(&self) -> Money {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Sum of all current category allotments
    pub fn total_budget(&self) -> Money {
        self.budgets.values().sum()
    }

    /// Total budget minus total spending; negative when overspent
    pub fn remaining_budget(&self) -> Money {
        self.total_budget() - self.total_spending()
    }

    /// Current allotment for a category, if one is defined
    pub fn budget_for(&self, category: &str) -> Option<Money> {
        self.budgets.get(category).copied()
    }

    /// Iterate over defined budgets as `(name, allotment)` pairs
    pub fn budgets(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.budgets.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    /// All transactions in the order they were recorded
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn category_count(&self) -> usize {
        self.budgets.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// True when no budgets and no transactions exist
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty() && self.transactions.is_empty()
    }
}
