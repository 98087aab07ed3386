//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the views in [`crate::reports`].

pub mod budget;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod goal;
pub mod report;
pub mod transaction;

pub use budget::handle_budgets;
pub use config::handle_config;
pub use context::Context;
pub use dashboard::{handle_dashboard, handle_notifications};
pub use goal::handle_goals;
pub use report::handle_reports;
pub use transaction::{handle_transactions, TransactionArgs};
