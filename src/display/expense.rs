//! Expense display formatting
//!
//! Renders expense records and totals for terminal output.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_date, ExpenseRecord, Money, DATE_FORMAT};

/// One rendered table row
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Date")]
    date: String,
}

impl ExpenseRow {
    fn new(record: &ExpenseRecord, symbol: &str, date_format: &str) -> Self {
        Self {
            id: record.id.to_string(),
            amount: record.amount.format_with_symbol(symbol),
            category: record.category.clone(),
            description: truncate(&record.description, 40),
            date: display_date(record.date, date_format),
        }
    }
}

/// Format records as a table in the order given
pub fn format_expense_table(records: &[ExpenseRecord], symbol: &str, date_format: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = records
        .iter()
        .map(|r| ExpenseRow::new(r, symbol, date_format));

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Format the total line shown under the table
pub fn format_total(total: Money, symbol: &str, filtered: bool) -> String {
    if filtered {
        format!("Total Spent (Filtered): {}", total.format_with_symbol(symbol))
    } else {
        format!("Total Spent: {}", total.format_with_symbol(symbol))
    }
}

/// Format a single expense for confirmation messages
pub fn format_expense_details(record: &ExpenseRecord, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", record.id));
    output.push_str(&format!("Amount:      {}\n", record.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", record.category));

    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }

    output.push_str(&format!("Date:        {}\n", display_date(record.date, date_format)));
    output
}

/// Format the category choices, marking the default
pub fn format_category_list(categories: &[String], default: &str) -> String {
    if categories.is_empty() {
        return "No categories configured.\n".to_string();
    }

    let mut output = String::from("Categories:\n");
    for name in categories {
        let marker = if name == default { " (default)" } else { "" };
        output.push_str(&format!("  {}{}\n", name, marker));
    }
    output
}

/// Render a date with the preferred format, falling back to `YYYY-MM-DD`
fn display_date(date: NaiveDate, date_format: &str) -> String {
    format_date(date, date_format)
        .unwrap_or_else(|| date.format(DATE_FORMAT).to_string())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
