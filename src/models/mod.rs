//! Core data models for budget-tracker
//!
//! Monetary amounts and the transaction record. The category budget map
//! lives directly on [`crate::ledger::Ledger`].

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
