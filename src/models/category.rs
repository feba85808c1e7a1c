//! Expense categories
//!
//! Categories are free text so users can invent their own, but a fixed set of
//! presets is offered for quick entry.

use std::fmt;

/// Preset categories offered when entering an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultCategory {
    #[default]
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Education,
    Other,
}

impl DefaultCategory {
    /// Get all presets in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Entertainment,
            Self::Bills,
            Self::Healthcare,
            Self::Education,
            Self::Other,
        ]
    }

    /// Get the name for this preset
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// All preset names as owned strings
    pub fn names() -> Vec<String> {
        Self::all().iter().map(|c| c.name().to_string()).collect()
    }
}

impl fmt::Display for DefaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize a user-entered category, returning `None` when it is blank
pub fn normalize_category(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
