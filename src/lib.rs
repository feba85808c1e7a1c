//! Expense Tracker - a personal expense ledger with JSON persistence
//!
//! This library provides the core of the expense tracker: an ordered ledger of
//! expense records with validation, id assignment, category filtering and
//! totals, plus a flat JSON file format for saving and loading it. Any front
//! end (the bundled CLI, a GUI, a test) drives the ledger and renders what it
//! returns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, money, ids, categories)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (the expense ledger)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use expense_tracker::services::{ExpenseInput, ExpenseLedger};
//!
//! let mut ledger = ExpenseLedger::new();
//! ledger.add(&ExpenseInput::new("50", "Food", "lunch", "2024-06-01"))?;
//! ledger.add(&ExpenseInput::new("20", "Transport", "bus", "2024-06-02"))?;
//!
//! assert_eq!(ledger.grand_total().to_string(), "70.00");
//! assert_eq!(ledger.filter_by_category("Food").len(), 1);
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
pub use models::{ExpenseId, ExpenseRecord, Money};
pub use services::{ExpenseInput, ExpenseLedger};
