//! finboard - Terminal dashboard for personal-finance snapshots
//!
//! This library turns snapshots of expenses, incomes, budgets and savings
//! goals into the figures a finance dashboard shows: budget and goal
//! statuses, month-over-month trends, totals, per-day savings needs and
//! notifications.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Typed records and their wire shapes
//! - `metrics`: Pure financial metrics engine
//! - `storage`: Snapshot sources and concurrent loading
//! - `reports`: Dashboard, budget, goal and transaction views
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard::metrics::classify_budget;
//! use finboard::models::{Budget, ExpenseCategory, Money};
//!
//! let budget = Budget::new("1", ExpenseCategory::Food, Money::from_units(500), Money::from_units(400));
//! assert_eq!(classify_budget(&budget)?.label(), "warning");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::FinboardError;
