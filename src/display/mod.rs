//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and totals for the terminal.

pub mod expense;

pub use expense::{
    format_category_list, format_expense_details, format_expense_table, format_total,
};
