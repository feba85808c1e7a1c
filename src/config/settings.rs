//! User settings for the expense tracker
//!
//! Manages display preferences and the category choices offered for new
//! expenses.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{is_valid_date_format, normalize_category, DefaultCategory};
use crate::storage::{read_json_required, write_json_atomic};

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol shown in front of amounts and totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category used when none is given
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Categories offered for quick entry (any other text is accepted too)
    #[serde(default = "DefaultCategory::names")]
    pub categories: Vec<String>,

    /// Date format preference for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_category() -> String {
    DefaultCategory::default().name().to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_category: default_category(),
            categories: DefaultCategory::names(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let settings: Settings = read_json_required(&settings_path).map_err(|e| {
                ExpenseError::Config(format!("Failed to read settings file: {}", e))
            })?;
            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values that can't be expressed through serde alone
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(ExpenseError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Configured categories followed by any extra ones in use, without repeats
    pub fn category_choices(&self, in_use: &[String]) -> Vec<String> {
        let mut choices: Vec<String> = Vec::new();
        for name in self.categories.iter().chain(in_use) {
            if let Some(name) = normalize_category(name) {
                if !choices.contains(&name) {
                    choices.push(name);
                }
            }
        }
        choices
    }
}
