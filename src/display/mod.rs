//! Display formatting for terminal output
//!
//! Renders the views in [`crate::reports`] as tables, using the currency
//! symbol and date format from [`Settings`](crate::config::Settings).

pub mod budget;
pub mod dashboard;
pub mod format;
pub mod goal;
pub mod report;
pub mod transaction;

pub use budget::format_budget_overview;
pub use dashboard::format_dashboard;
pub use goal::{format_goal_details, format_goal_overview};
pub use report::{format_notifications, format_report, format_report_list};
pub use transaction::{format_ledger, format_transaction_table};
