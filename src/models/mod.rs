//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: records,
//! their identifiers, money amounts and category presets.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{normalize_category, DefaultCategory};
pub use expense::{
    format_date, is_valid_date_format, parse_date, ExpenseRecord, ExpenseValidationError,
    DATE_FORMAT,
};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
