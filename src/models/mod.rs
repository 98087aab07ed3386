//! Core data models for finboard
//!
//! Typed snapshots of the records the remote API serves: expenses, incomes,
//! budgets, savings goals and generated reports, plus the wire shapes they
//! are validated from.

pub mod budget;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod report;
pub mod transaction;
pub mod wire;

pub use budget::Budget;
pub use category::ExpenseCategory;
pub use expense::{Expense, Income};
pub use goal::Goal;
pub use ids::{BudgetId, ExpenseId, GoalId, IncomeId, ReportId};
pub use money::Money;
pub use period::MonthPeriod;
pub use report::{CategoryAmount, Report, ReportData, ReportKind};
pub use transaction::{Transaction, TransactionKind};

use crate::error::FinboardError;

/// Validation failures shared by all record types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordValidationError {
    #[error("{0} cannot be negative")]
    NegativeAmount(&'static str),
    #[error("{0} must be greater than zero")]
    NonPositiveAmount(&'static str),
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

impl From<RecordValidationError> for FinboardError {
    fn from(err: RecordValidationError) -> Self {
        FinboardError::InvalidInput(err.to_string())
    }
}
