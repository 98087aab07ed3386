//! Budget classification
//!
//! Thresholds are compared in exact integer arithmetic on cents, so a budget
//! at exactly 80% or 100% lands on the boundary the rules name regardless of
//! float rounding.

use serde::Serialize;
use std::fmt;

use crate::error::{FinboardError, FinboardResult};
use crate::models::Budget;

/// Percentage of the limit at which a budget turns to `Warning`
pub const WARNING_PERCENT: i128 = 80;

/// Percentage of the limit at which a budget is `Exceeded`
pub const EXCEEDED_PERCENT: i128 = 100;

/// Health of a monthly budget. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn ensure_positive_limit(budget: &Budget) -> FinboardResult<()> {
    if !budget.monthly_limit.is_positive() {
        return Err(FinboardError::invalid_input(format!(
            "budget {} has non-positive monthly limit {}",
            budget.id, budget.monthly_limit
        )));
    }
    Ok(())
}

/// Whether `current_spending` is at least `percent` of `monthly_limit`.
/// Caller has checked the limit is positive.
pub(crate) fn spending_at_least(budget: &Budget, percent: i128) -> bool {
    i128::from(budget.current_spending.cents()) * 100
        >= i128::from(budget.monthly_limit.cents()) * percent
}

/// Whether `current_spending` is strictly above `percent` of `monthly_limit`.
pub(crate) fn spending_above(budget: &Budget, percent: i128) -> bool {
    i128::from(budget.current_spending.cents()) * 100
        > i128::from(budget.monthly_limit.cents()) * percent
}

/// current_spending / monthly_limit × 100
pub fn budget_percentage(budget: &Budget) -> FinboardResult<f64> {
    ensure_positive_limit(budget)?;
    Ok(budget.current_spending.percent_of(budget.monthly_limit))
}

/// Classify a budget: `exceeded` at 100% or more, `warning` from 80% up to
/// 100%, `good` below 80%.
///
/// # Errors
///
/// `InvalidInput` when the monthly limit is zero or negative.
pub fn classify_budget(budget: &Budget) -> FinboardResult<BudgetStatus> {
    ensure_positive_limit(budget)?;

    let status = if spending_at_least(budget, EXCEEDED_PERCENT) {
        BudgetStatus::Exceeded
    } else if spending_at_least(budget, WARNING_PERCENT) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    };
    Ok(status)
}
