use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finboard::cli::{
    handle_budgets, handle_config, handle_dashboard, handle_goals, handle_notifications,
    handle_reports, handle_transactions, Context, TransactionArgs,
};
use finboard::config::paths::{FinboardPaths, DATA_DIR_ENV};

#[derive(Parser)]
#[command(
    name = "finboard",
    version,
    about = "Terminal dashboard for personal-finance snapshots",
    long_about = "finboard reads saved snapshots of your expenses, incomes, budgets and \
                  savings goals and shows budget statuses, month-over-month trends, \
                  goal progress and reminders."
)]
struct Cli {
    /// Base directory holding config.json and the snapshot/ folder
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Compute date-relative figures as of this day (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, trends, recent transactions and notifications
    #[command(alias = "dash")]
    Dashboard,

    /// Show budgets with usage and status
    Budgets {
        /// Only the budget for this category
        category: Option<String>,
    },

    /// Show savings goals with progress and deadlines
    Goals {
        /// Show details for one goal (ID or name)
        goal: Option<String>,
    },

    /// List expenses and incomes, newest first
    #[command(alias = "txn")]
    Transactions(TransactionArgs),

    /// List generated reports
    Reports,

    /// Show budget alerts and goal reminders
    Notifications,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = match cli.data_dir {
        Some(dir) => FinboardPaths::with_base_dir(dir),
        None => FinboardPaths::new()?,
    };
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let ctx = Context::load(paths, today)?;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => handle_dashboard(&ctx)?,
        Commands::Budgets { category } => handle_budgets(&ctx, category)?,
        Commands::Goals { goal } => handle_goals(&ctx, goal)?,
        Commands::Transactions(args) => handle_transactions(&ctx, args)?,
        Commands::Reports => handle_reports(&ctx)?,
        Commands::Notifications => handle_notifications(&ctx)?,
        Commands::Config => handle_config(&ctx)?,
    }

    Ok(())
}
