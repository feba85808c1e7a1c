//! Strongly-typed expense identifier
//!
//! Ids are small positive integers handed out by the ledger. The newtype keeps
//! them from being mixed up with counts or list positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of an expense record, unique within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id handed out by an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id immediately after this one, if there is one
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Ids start at 1; zero never names a record and `u64::MAX` is kept free
    /// so that every stored id has a successor
    pub const fn is_valid(&self) -> bool {
        self.0 > 0 && self.0 < u64::MAX
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
