//! Views for finboard
//!
//! Each view turns a snapshot into the rows and totals one screen shows:
//! the dashboard, budget and goal overviews, and the transaction ledger.

pub mod budget_overview;
pub mod dashboard;
pub mod goal_overview;
pub mod ledger;

pub use budget_overview::{BudgetOverviewReport, BudgetRow};
pub use dashboard::DashboardReport;
pub use goal_overview::{GoalOverviewReport, GoalRow};
pub use ledger::{TransactionFilter, TransactionLedger};
