//! Snapshot-wide totals

use serde::Serialize;

use crate::models::{Expense, Income, Money};

/// Sums over a whole record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardTotals {
    pub total_expenses: Money,
    pub total_incomes: Money,
    /// total_incomes − total_expenses; negative when spending outran income
    pub net_savings: Money,
}

pub fn aggregate_totals(expenses: &[Expense], incomes: &[Income]) -> DashboardTotals {
    let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
    let total_incomes: Money = incomes.iter().map(|i| i.amount).sum();
    DashboardTotals {
        total_expenses,
        total_incomes,
        net_savings: total_incomes - total_expenses,
    }
}
