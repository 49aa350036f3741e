use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{handle_summary_command, handle_transaction_command, TransactionCommands};
use fintrack::config::{paths::DATA_DIR_ENV, FintrackPaths, Settings};
use fintrack::storage::open_store;

/// Environment variable holding a tracing filter, e.g. `fintrack=debug`
const LOG_ENV: &str = "FINTRACK_LOG";

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "fintrack records income and expenses, keeps a running balance and \
                  shows where the money goes, from an interactive terminal UI or \
                  plain commands."
)]
struct Cli {
    /// Directory holding settings, data and logs
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Show balance, income, expenses and spending per category
    Summary,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_file_logging(&paths, &settings)?;
            let store = open_store(&paths)?;
            fintrack::tui::run_tui(store, &settings)?;
        }
        Commands::Transaction(cmd) => {
            init_stderr_logging();
            let mut store = open_store(&paths)?;
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Commands::Summary => {
            init_stderr_logging();
            let mut store = open_store(&paths)?;
            handle_summary_command(&mut store, &settings);
        }
        Commands::Config { save } => {
            println!("fintrack configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Log file:          {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
            println!("  Chart title:     {}", settings.chart_title);

            if save {
                settings.save(&paths)?;
                println!();
                println!("Settings saved.");
            }
        }
    }

    Ok(())
}

/// The TUI owns the terminal, so its logs go to a file
fn init_file_logging(paths: &FintrackPaths, settings: &Settings) -> Result<()> {
    paths.ensure_directories()?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .with_context(|| format!("Failed to open log file {}", paths.log_file().display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("fintrack={}", settings.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Plain commands keep stdout clean and only log warnings unless asked
fn init_stderr_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
