//! Custom error types for the expense tracker
//!
//! Every fallible operation in the crate reports one of these variants. None of
//! them are fatal: the ledger stays in its last valid state after any failure.

use thiserror::Error;

use crate::models::ExpenseId;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Amount was blank, non-numeric, or not strictly positive
    #[error("Amount must be a positive number: {0}")]
    InvalidAmount(String),

    /// Date was not a valid YYYY-MM-DD calendar date
    #[error("Date must be in YYYY-MM-DD format: {0}")]
    InvalidDate(String),

    /// Category was blank
    #[error("Category is required")]
    MissingCategory,

    /// Delete target is not in the ledger
    #[error("Expense not found: {id}")]
    NotFound { id: ExpenseId },

    /// Delete was requested without choosing an expense
    #[error("No expense selected")]
    NoSelection,

    /// Every id has been handed out
    #[error("No expense ids left; start a new ledger")]
    IdsExhausted,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Persisted content could not be parsed into expense records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExpenseError {
    /// Create a "not found" error for an expense id
    pub fn not_found(id: ExpenseId) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from rejecting user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidDate(_) | Self::MissingCategory
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
