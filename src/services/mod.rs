//! Service layer for the expense tracker
//!
//! The service layer holds the business logic on top of the models and the
//! storage layer: input validation, id assignment and totals.

pub mod ledger;

pub use ledger::{total, ExpenseInput, ExpenseLedger};
