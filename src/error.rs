//! Custom error types for budget-tracker
//!
//! The ledger and reporter are total functions and never fail. Everything
//! here belongs to the edges: parsing user input, loading settings, and
//! writing reports out.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for budget-tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV export errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value that could not be parsed
    #[error("Invalid {field}: {input}")]
    Parse {
        field: &'static str,
        input: String,
    },
}

impl BudgetError {
    /// Create a parse error for a monetary amount
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::Parse {
            field: "amount",
            input: input.into(),
        }
    }

    /// Create a parse error for a calendar date
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::Parse {
            field: "date",
            input: input.into(),
        }
    }

    /// Check if this is a validation or parse error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Parse { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<MoneyParseError> for BudgetError {
    fn from(err: MoneyParseError) -> Self {
        match err {
            MoneyParseError::InvalidFormat(input) => Self::invalid_amount(input),
        }
    }
}

/// Result type alias for budget-tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
