use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::debug;

use budget_tracker::cli::{
    handle_add_command, handle_budget_command, handle_recent_command, handle_report_command,
    parse_date, Menu, Session,
};
use budget_tracker::config::{BudgetPaths, Settings, DIR_ENV_VAR};
use budget_tracker::reports::OutputFormat;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget ledger",
    long_about = "Track category budgets and spending, then report how much is \
                  left. Each run starts from the sample budget (or an empty one \
                  with --empty); nothing is saved between runs."
)]
struct Cli {
    /// Start with an empty ledger instead of the sample data
    #[arg(long, global = true)]
    empty: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Directory holding config.json
    #[arg(long, global = true, env = DIR_ENV_VAR, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Show the budget report
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the most recent transactions
    Recent {
        /// Number of transactions to show
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Record a transaction for this run and show the report
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Set a category budget for this run and show the report
    Budget {
        /// Category name
        category: String,
        /// Allotted amount (e.g., "500")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show current configuration and paths
    Config,

    /// Write the default configuration file
    Init,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    budget_tracker::logging::init(cli.verbose);

    let paths = match cli.config_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!(config = %paths.settings_file().display(), "configuration resolved");

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let seed = settings.seed_sample_data && !cli.empty;
    let mut session = Session::new(&settings, today, seed);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(stdin.lock(), stdout.lock()).run(&mut session)?;
        }
        Commands::Report { format, output } => {
            handle_report_command(&session, format, output)?;
        }
        Commands::Recent {
            count,
            format,
            output,
        } => {
            handle_recent_command(&session, count, format, output)?;
        }
        Commands::Add {
            description,
            amount,
            category,
            date,
        } => {
            handle_add_command(&mut session, description, &amount, category, date.as_deref())?;
        }
        Commands::Budget { category, amount } => {
            handle_budget_command(&mut session, category, &amount)?;
        }
        Commands::Config => {
            println!("budget-tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Default recent count: {}", settings.default_recent_count);
            println!("  Seed sample data:     {}", settings.seed_sample_data);
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
    }

    Ok(())
}
