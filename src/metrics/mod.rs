//! Financial metrics engine
//!
//! Pure functions over record snapshots: status classifications, month-over-
//! month trends, totals, per-day projections and notifications. Nothing here
//! performs I/O or keeps state, and "today" is always supplied by the caller
//! so results are deterministic.
//!
//! The only failure is malformed input (a non-positive budget limit or goal
//! target), reported as [`FinboardError::InvalidInput`]. Divisions by an
//! empty previous month or by zero remaining days are defined as zero.
//!
//! [`FinboardError::InvalidInput`]: crate::error::FinboardError::InvalidInput

pub mod budget;
pub mod goal;
pub mod notifications;
pub mod totals;
pub mod trend;

pub use budget::{budget_percentage, classify_budget, BudgetStatus};
pub use goal::{
    classify_goal, days_remaining, goal_percentage, is_goal_complete, per_day_savings_needed,
    GoalStatus,
};
pub use notifications::{cap_per_kind, pending_notifications, Notification};
pub use totals::{aggregate_totals, DashboardTotals};
pub use trend::{month_over_month_change, percent_change, savings_change, SavingsTrend, TrendDelta};
