//! Expense record model
//!
//! A single discrete expense. The serialized form has exactly the keys
//! `id`, `amount`, `category`, `description` and `date`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::ids::ExpenseId;
use super::money::Money;

/// Date format used for input and on disk
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseRecord {
    /// Ledger-assigned identifier
    pub id: ExpenseId,

    /// Amount spent, always positive
    pub amount: Money,

    /// Category name (preset or free text)
    pub category: String,

    /// Free-form note, may be empty
    pub description: String,

    /// Day the expense happened
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Check whether this record belongs to a category
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Validate the record's invariants
    ///
    /// Dates are valid by construction; everything else is checked here so
    /// that records read from disk get the same guarantees as new ones.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.id.is_valid() {
            return Err(ExpenseValidationError::InvalidId);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Parse a user-entered date in `YYYY-MM-DD` form
///
/// Month and day may omit their leading zero. The year must be unsigned.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.starts_with(['+', '-']) {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Render `date` with a strftime `format`, or `None` if the format cannot
/// render a plain date (unknown specifier, time or zone fields)
pub fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format)).ok()?;
    Some(rendered)
}

/// Check that a strftime format renders a plain date
pub fn is_valid_date_format(format: &str) -> bool {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|date| format_date(date, format))
        .is_some()
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    InvalidId,
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "Expense id must be between 1 and {}", u64::MAX - 1),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
