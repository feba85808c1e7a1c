//! Expense CLI commands
//!
//! Each command loads the working ledger, runs one ledger operation and
//! writes the ledger back only when it changed.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_category_list, format_expense_details, format_expense_table, format_total,
};
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, DATE_FORMAT};
use crate::services::{total, ExpenseInput, ExpenseLedger};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "50" or "12.34")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses with their total
    List {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: Option<ExpenseId>,
    },

    /// Show the total spent
    Total {
        /// Only count expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List category choices
    Categories,

    /// Save all expenses to a JSON file
    Save {
        /// Destination file
        path: PathBuf,
    },

    /// Replace all expenses with the contents of a JSON file
    Load {
        /// Source file
        path: PathBuf,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let mut ledger = ExpenseLedger::from_records(store.load()?)?;
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let input = ExpenseInput::new(
                amount,
                category.unwrap_or_else(|| settings.default_category.clone()),
                description.unwrap_or_default(),
                date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string()),
            );

            let record = ledger.add(&input)?;
            store.save(ledger.list_all())?;

            println!("Added expense:");
            print!("{}", format_expense_details(&record, symbol, date_format));
            println!("{}", format_total(ledger.grand_total(), symbol, false));
        }

        ExpenseCommands::List { category } => match category {
            Some(category) => {
                let filtered = ledger.filter_by_category(&category);
                print!("{}", format_expense_table(&filtered, symbol, date_format));
                println!("{}", format_total(total(&filtered), symbol, true));
            }
            None => {
                print!("{}", format_expense_table(ledger.list_all(), symbol, date_format));
                println!("{}", format_total(ledger.grand_total(), symbol, false));
            }
        },

        ExpenseCommands::Delete { id } => {
            let removed = ledger.delete_selected(id)?;
            store.save(ledger.list_all())?;

            println!("Deleted expense {}: {}", removed.id, removed);
            println!("{}", format_total(ledger.grand_total(), symbol, false));
        }

        ExpenseCommands::Total { category } => match category {
            Some(category) => {
                let filtered = ledger.filter_by_category(&category);
                println!("{}", format_total(total(&filtered), symbol, true));
            }
            None => println!("{}", format_total(ledger.grand_total(), symbol, false)),
        },

        ExpenseCommands::Categories => {
            let choices = settings.category_choices(&ledger.categories());
            print!("{}", format_category_list(&choices, &settings.default_category));
        }

        ExpenseCommands::Save { path } => {
            ledger.save_to(Some(&path))?;
            println!("Saved {} expenses to {}", ledger.len(), path.display());
        }

        ExpenseCommands::Load { path } => {
            ledger.load_from(Some(&path))?;
            store.save(ledger.list_all())?;

            println!("Loaded {} expenses from {}", ledger.len(), path.display());
            println!("{}", format_total(ledger.grand_total(), symbol, false));
        }
    }

    Ok(())
}
