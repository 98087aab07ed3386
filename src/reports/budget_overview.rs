//! Budget Overview Report
//!
//! Every budget with its usage percentage and status, plus totals across all
//! budgets for the current month.

use serde::Serialize;

use crate::error::FinboardResult;
use crate::metrics::{budget_percentage, classify_budget, BudgetStatus};
use crate::models::{Budget, BudgetId, ExpenseCategory, Money};

/// A row in the budget report for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    pub budget_id: BudgetId,
    pub category: ExpenseCategory,
    pub monthly_limit: Money,
    pub current_spending: Money,
    /// Limit left; negative when overspent
    pub remaining: Money,
    pub percentage: f64,
    pub status: BudgetStatus,
}

impl BudgetRow {
    /// Percentage clamped to 100, for progress bars
    pub fn bar_percentage(&self) -> f64 {
        self.percentage.min(100.0)
    }
}

/// Budget Overview Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverviewReport {
    pub rows: Vec<BudgetRow>,
    pub total_limit: Money,
    pub total_spent: Money,
    /// total_limit − total_spent; negative when budgets are overspent overall
    pub total_remaining: Money,
}

impl BudgetOverviewReport {
    /// Build the report, keeping the budgets in the order given
    pub fn generate(budgets: &[Budget]) -> FinboardResult<Self> {
        let mut rows = Vec::with_capacity(budgets.len());
        let mut total_limit = Money::zero();
        let mut total_spent = Money::zero();

        for budget in budgets {
            rows.push(BudgetRow {
                budget_id: budget.id.clone(),
                category: budget.category,
                monthly_limit: budget.monthly_limit,
                current_spending: budget.current_spending,
                remaining: budget.remaining(),
                percentage: budget_percentage(budget)?,
                status: classify_budget(budget)?,
            });
            total_limit += budget.monthly_limit;
            total_spent += budget.current_spending;
        }

        Ok(Self {
            rows,
            total_limit,
            total_spent,
            total_remaining: total_limit - total_spent,
        })
    }

    pub fn count_with_status(&self, status: BudgetStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
