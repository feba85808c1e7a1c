//! Expense ledger
//!
//! Owns the ordered list of expense records and every operation that changes
//! it. Input arrives as raw user text and is validated here, so callers never
//! need to pre-check anything. A failed operation leaves the ledger exactly as
//! it was.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category, parse_date, ExpenseId, ExpenseRecord, Money};
use crate::storage;

/// Raw user input for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl ExpenseInput {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }
}

/// Sum of the amounts of `records`; zero when empty
pub fn total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Ordered collection of expense records
///
/// Insertion order is display order. Ids come from a counter that only moves
/// forward, so an id is never handed out twice even after deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
    next_id: ExpenseId,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: ExpenseId::FIRST,
        }
    }

    /// Build a ledger from existing records, checking their invariants
    pub fn from_records(records: Vec<ExpenseRecord>) -> ExpenseResult<Self> {
        let mut ledger = Self::new();
        ledger.replace_all(records)?;
        Ok(ledger)
    }

    /// Validate input, assign the next id and append the record
    pub fn add(&mut self, input: &ExpenseInput) -> ExpenseResult<ExpenseRecord> {
        let record = self.build_record(input).inspect_err(|e| {
            warn!(error = %e, "rejected expense input");
        })?;

        self.next_id = record.id.next().ok_or(ExpenseError::IdsExhausted)?;
        self.records.push(record.clone());

        info!(
            id = %record.id,
            amount = %record.amount,
            category = %record.category,
            "added expense"
        );
        Ok(record)
    }

    fn build_record(&self, input: &ExpenseInput) -> ExpenseResult<ExpenseRecord> {
        if input.amount.trim().is_empty() {
            return Err(ExpenseError::InvalidAmount("amount is required".into()));
        }

        let category =
            normalize_category(&input.category).ok_or(ExpenseError::MissingCategory)?;

        let amount = Money::parse(&input.amount)
            .map_err(|e| ExpenseError::InvalidAmount(e.to_string()))?;
        if !amount.is_positive() {
            return Err(ExpenseError::InvalidAmount(input.amount.trim().to_string()));
        }

        let date = parse_date(&input.date)
            .ok_or_else(|| ExpenseError::InvalidDate(input.date.trim().to_string()))?;

        if !self.next_id.is_valid() {
            return Err(ExpenseError::IdsExhausted);
        }

        Ok(ExpenseRecord::new(
            self.next_id,
            amount,
            category,
            input.description.trim(),
            date,
        ))
    }

    /// Remove the record with `id`, returning it
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<ExpenseRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ExpenseError::not_found(id))?;

        let removed = self.records.remove(index);
        info!(id = %removed.id, "deleted expense");
        Ok(removed)
    }

    /// Remove the currently selected record, if there is one
    pub fn delete_selected(&mut self, selection: Option<ExpenseId>) -> ExpenseResult<ExpenseRecord> {
        match selection {
            Some(id) => self.delete(id),
            None => Err(ExpenseError::NoSelection),
        }
    }

    /// All records in insertion order
    pub fn list_all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Records whose category matches exactly, in insertion order
    pub fn filter_by_category(&self, category: &str) -> Vec<ExpenseRecord> {
        let category = category.trim();
        let matching: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.in_category(category))
            .cloned()
            .collect();

        debug!(category, matches = matching.len(), "filtered expenses");
        matching
    }

    /// Sum of every amount in the ledger
    pub fn grand_total(&self) -> Money {
        total(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next successful `add` will use
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    /// Distinct categories in the order they first appear
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    /// Replace the whole ledger with `records`
    ///
    /// Records are checked first; on error nothing changes.
    pub fn replace_all(&mut self, records: Vec<ExpenseRecord>) -> ExpenseResult<()> {
        storage::check_records(&records)?;

        let next_id = match records.iter().map(|r| r.id).max() {
            Some(max) => max.next().ok_or(ExpenseError::IdsExhausted)?,
            None => ExpenseId::FIRST,
        };

        self.records = records;
        self.next_id = next_id;
        debug!(count = self.records.len(), next_id = %self.next_id, "replaced ledger contents");
        Ok(())
    }

    /// Save to a chosen path; `None` means the choice was cancelled
    pub fn save_to(&self, path: Option<&Path>) -> ExpenseResult<bool> {
        match path {
            Some(path) => {
                storage::save(&self.records, path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Load from a chosen path, replacing all records; `None` means cancelled
    pub fn load_from(&mut self, path: Option<&Path>) -> ExpenseResult<bool> {
        match path {
            Some(path) => {
                let records = storage::load(path)?;
                self.replace_all(records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn input(amount: &str, category: &str, description: &str, date: &str) -> ExpenseInput {
        ExpenseInput::new(amount, category, description, date)
    }

    fn lunch() -> ExpenseInput {
        input("50", "Food", "lunch", "2024-06-01")
    }

    fn bus() -> ExpenseInput {
        input("20", "Transport", "bus", "2024-06-02")
    }

    #[test]
    fn test_add_to_empty_ledger() {
        let mut ledger = ExpenseLedger::new();
        let record = ledger.add(&lunch()).unwrap();

        assert_eq!(record.id, ExpenseId::new(1));
        assert_eq!(record.amount, Money::from_cents(5000));
        assert_eq!(record.category, "Food");
        assert_eq!(record.description, "lunch");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_grows_by_one_with_increasing_ids() {
        let mut ledger = ExpenseLedger::new();
        let mut last = ExpenseId::new(0);

        for i in 1..=5 {
            let before = ledger.len();
            let record = ledger
                .add(&input(&format!("{}.25", i), "Other", "", "2024-01-31"))
                .unwrap();
            assert_eq!(ledger.len(), before + 1);
            assert!(record.id > last);
            last = record.id;
        }
    }

    #[test]
    fn test_add_rejects_non_positive_amounts() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();

        for amount in ["0", "-5", "0.001", "abc", "", "  ", "inf", "NaN"] {
            let err = ledger
                .add(&input(amount, "Food", "", "2024-06-01"))
                .unwrap_err();
            assert!(
                matches!(err, ExpenseError::InvalidAmount(_)),
                "{amount:?} gave {err:?}"
            );
        }
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.next_id(), ExpenseId::new(2));
    }

    #[test]
    fn test_add_rejects_invalid_dates() {
        let mut ledger = ExpenseLedger::new();

        for date in ["2024-13-40", "2023-02-29", "06/01/2024", "yesterday", ""] {
            let err = ledger.add(&input("5", "Food", "", date)).unwrap_err();
            assert!(matches!(err, ExpenseError::InvalidDate(_)), "{date:?}");
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_missing_category() {
        let mut ledger = ExpenseLedger::new();

        let err = ledger.add(&input("5", "   ", "", "2024-06-01")).unwrap_err();
        assert!(matches!(err, ExpenseError::MissingCategory));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_missing_category_reported_before_bad_amount() {
        let mut ledger = ExpenseLedger::new();
        let err = ledger.add(&input("abc", "", "", "bad")).unwrap_err();
        assert!(matches!(err, ExpenseError::MissingCategory));

        let err = ledger.add(&input("", "", "", "bad")).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount(_)));
    }

    #[test]
    fn test_add_trims_text_and_accepts_custom_category() {
        let mut ledger = ExpenseLedger::new();
        let record = ledger
            .add(&input(" ₹12.5 ", "  Pet supplies ", "  kibble ", " 2024-06-03 "))
            .unwrap();

        assert_eq!(record.amount, Money::from_cents(1250));
        assert_eq!(record.category, "Pet supplies");
        assert_eq!(record.description, "kibble");
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        let before = ledger.clone();

        let err = ledger.delete(ExpenseId::new(9)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_delete_without_selection() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();

        let err = ledger.delete_selected(None).unwrap_err();
        assert!(matches!(err, ExpenseError::NoSelection));
        assert_eq!(ledger.len(), 1);

        let removed = ledger.delete_selected(Some(ExpenseId::new(1))).unwrap();
        assert_eq!(removed.description, "lunch");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        ledger.add(&bus()).unwrap();

        ledger.delete(ExpenseId::new(1)).unwrap();
        let third = ledger.add(&lunch()).unwrap();
        assert_eq!(third.id, ExpenseId::new(3));

        ledger.delete(ExpenseId::new(3)).unwrap();
        let fourth = ledger.add(&lunch()).unwrap();
        assert_eq!(fourth.id, ExpenseId::new(4));

        let ids: Vec<u64> = ledger.list_all().iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        ledger.add(&bus()).unwrap();
        ledger.add(&input("7", "Food", "snack", "2024-06-03")).unwrap();

        let food = ledger.filter_by_category("Food");
        let ids: Vec<u64> = food.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(ledger.filter_by_category("food").is_empty());
        assert!(ledger.filter_by_category("Bills").is_empty());
        assert_eq!(ledger.categories(), vec!["Food", "Transport"]);
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&[]), Money::zero());

        let mut ledger = ExpenseLedger::new();
        ledger.add(&input("10.10", "Food", "", "2024-06-01")).unwrap();
        ledger.add(&input("0.20", "Food", "", "2024-06-01")).unwrap();
        ledger.add(&input("5", "Bills", "", "2024-06-01")).unwrap();

        assert_eq!(total(ledger.list_all()), Money::from_cents(1530));
        assert_eq!(ledger.grand_total(), Money::from_cents(1530));
        assert_eq!(total(&ledger.filter_by_category("Food")), Money::from_cents(1030));
    }

    #[test]
    fn test_add_filter_delete_scenario() {
        let mut ledger = ExpenseLedger::new();

        let first = ledger.add(&lunch()).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(first.id, ExpenseId::new(1));
        assert_eq!(ledger.grand_total().to_string(), "50.00");

        ledger.add(&bus()).unwrap();
        assert_eq!(ledger.grand_total().to_string(), "70.00");

        let food = ledger.filter_by_category("Food");
        assert_eq!(food, vec![first]);
        assert_eq!(total(&food).to_string(), "50.00");

        ledger.delete(ExpenseId::new(1)).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list_all()[0].id, ExpenseId::new(2));
        assert_eq!(ledger.grand_total().to_string(), "20.00");
    }

    #[test]
    fn test_replace_all_resumes_ids_after_max() {
        let mut ledger = ExpenseLedger::new();
        let records = vec![ExpenseRecord::new(
            ExpenseId::new(5),
            Money::from_cents(100),
            "Food",
            "",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )];

        ledger.replace_all(records).unwrap();
        assert_eq!(ledger.add(&lunch()).unwrap().id, ExpenseId::new(6));
    }

    #[test]
    fn test_add_fails_once_ids_run_out() {
        let mut ledger = ExpenseLedger::new();
        let records = vec![ExpenseRecord::new(
            ExpenseId::new(u64::MAX - 1),
            Money::from_cents(100),
            "Food",
            "",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )];
        ledger.replace_all(records).unwrap();
        let before = ledger.clone();

        let err = ledger.add(&lunch()).unwrap_err();
        assert!(matches!(err, ExpenseError::IdsExhausted));
        assert_eq!(ledger, before);

        // Validation errors still win over exhaustion
        let err = ledger.add(&input("-1", "Food", "", "2024-06-01")).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount(_)));
    }

    #[test]
    fn test_load_rejects_last_possible_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("max_id.json");
        std::fs::write(
            &path,
            format!(
                r#"[{{"id": {}, "amount": 5, "category": "Food", "description": "", "date": "2024-06-01"}}]"#,
                u64::MAX
            ),
        )
        .unwrap();

        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        let before = ledger.clone();

        let err = ledger.load_from(Some(&path)).unwrap_err();
        assert!(matches!(err, ExpenseError::Parse(_)), "{err:?}");
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_amounts_above_cap_are_rejected() {
        let mut ledger = ExpenseLedger::new();

        let err = ledger.add(&input("9e16", "Food", "", "2024-06-01")).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount(_)));
        assert!(ledger.is_empty());

        let cap = crate::models::money::MAX_UNITS.to_string();
        ledger.add(&input(&cap, "Food", "", "2024-06-01")).unwrap();
        ledger.add(&input(&cap, "Food", "", "2024-06-02")).unwrap();
        assert_eq!(
            ledger.grand_total().cents(),
            2 * crate::models::money::MAX_UNITS * 100
        );
    }

    #[test]
    fn test_replace_all_rejects_invalid_records() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        let before = ledger.clone();

        let dupes = vec![before.list_all()[0].clone(), before.list_all()[0].clone()];
        let err = ledger.replace_all(dupes).unwrap_err();
        assert!(matches!(err, ExpenseError::Parse(_)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        ledger.add(&bus()).unwrap();
        ledger.add(&input("3.33", "Other", "", "2024-06-04")).unwrap();
        assert!(ledger.save_to(Some(&path)).unwrap());

        let mut restored = ExpenseLedger::new();
        restored.add(&input("99", "Bills", "", "2024-01-01")).unwrap();
        assert!(restored.load_from(Some(&path)).unwrap());

        assert_eq!(restored.list_all(), ledger.list_all());
        assert_eq!(restored.next_id(), ExpenseId::new(4));
    }

    #[test]
    fn test_cancelled_paths_are_no_ops() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        let before = ledger.clone();

        assert!(!ledger.save_to(None).unwrap());
        assert!(!ledger.load_from(None).unwrap());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_failed_load_leaves_ledger_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ExpenseLedger::new();
        ledger.add(&lunch()).unwrap();
        let before = ledger.clone();

        let missing = temp_dir.path().join("missing.json");
        let err = ledger.load_from(Some(&missing)).unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
        assert_eq!(ledger, before);

        let corrupt = temp_dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "[{\"id\": 1}]").unwrap();
        let err = ledger.load_from(Some(&corrupt)).unwrap_err();
        assert!(matches!(err, ExpenseError::Parse(_)));
        assert_eq!(ledger, before);
    }
}
