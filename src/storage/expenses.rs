//! Expense persistence
//!
//! Reads and writes the flat JSON array of expense records. Anything read back
//! is checked against the same invariants the ledger enforces on input, so a
//! hand-edited or truncated file is reported as a parse error instead of
//! silently producing a broken ledger.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

use super::file_io::{read_json, read_json_required, write_json_atomic};

/// Write records to `path` as a JSON array, replacing any existing file
pub fn save(records: &[ExpenseRecord], path: &Path) -> ExpenseResult<()> {
    write_json_atomic(path, records).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to save expenses");
    })?;

    info!(path = %path.display(), count = records.len(), "saved expenses");
    Ok(())
}

/// Read records from `path`
///
/// A missing or unreadable file is an I/O error; content that is not an array
/// of well-formed expenses is a parse error.
pub fn load(path: &Path) -> ExpenseResult<Vec<ExpenseRecord>> {
    let records: Vec<ExpenseRecord> = read_json_required(path).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to load expenses");
    })?;

    check_records(&records)?;

    info!(path = %path.display(), count = records.len(), "loaded expenses");
    Ok(records)
}

/// Verify per-record invariants and id uniqueness
pub fn check_records(records: &[ExpenseRecord]) -> ExpenseResult<()> {
    let mut seen = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|e| {
            ExpenseError::Parse(format!("Invalid expense at position {}: {}", index, e))
        })?;

        if !seen.insert(record.id) {
            return Err(ExpenseError::Parse(format!(
                "Duplicate expense id {} at position {}",
                record.id, index
            )));
        }
    }

    Ok(())
}

/// The working file that carries a ledger between sessions
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the working file; a file that doesn't exist yet is an empty ledger
    pub fn load(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        let records: Vec<ExpenseRecord> = read_json(&self.path)?;
        check_records(&records)?;
        Ok(records)
    }

    pub fn save(&self, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        save(records, &self.path)
    }
}
