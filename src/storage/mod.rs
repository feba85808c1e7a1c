//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod expenses;
pub mod file_io;

pub use expenses::{check_records, load, save, ExpenseStore};
pub use file_io::{read_json, read_json_required, write_json_atomic};
