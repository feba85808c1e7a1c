use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::{file_io::json_file_valid, ExpenseStore};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Record expenses and keep a running total",
    long_about = "Records individual expenses, lists them with a running total, \
                  filters by category and saves or loads the whole list as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = ExpenseStore::new(paths.expenses_file());

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            if let Err(err) = handle_expense_command(&store, &settings, cmd) {
                if err.is_validation() {
                    eprintln!("Nothing was recorded.");
                } else if err.is_not_found() {
                    eprintln!("Run 'expense list' to see expense ids.");
                }
                return Err(err.into());
            }
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Categories: {}", settings.categories.join(", "));
            println!("Run 'expense add <AMOUNT>' to record your first expense.");
        }
        Some(Commands::Config) => {
            let data_state = if !store.exists() {
                "not created yet"
            } else if json_file_valid(store.path()) {
                "ok"
            } else {
                "unreadable"
            };

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {} ({})", store.path().display(), data_state);
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default category: {}", settings.default_category);
            println!("  Date format:      {}", settings.date_format);
        }
        None => {
            println!("Expense Tracker - record expenses and keep a running total");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
