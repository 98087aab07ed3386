//! Monthly category budgets
//!
//! `current_spending` arrives from the API already scoped to the current
//! calendar month, so a budget carries everything needed to classify it.

use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::BudgetId;
use super::money::Money;
use super::RecordValidationError;

/// A per-category monthly spending ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: ExpenseCategory,
    pub monthly_limit: Money,
    pub current_spending: Money,
}

impl Budget {
    pub fn new(
        id: impl Into<BudgetId>,
        category: ExpenseCategory,
        monthly_limit: Money,
        current_spending: Money,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            monthly_limit,
            current_spending,
        }
    }

    /// Limit left this month; negative once the budget is overspent
    pub fn remaining(&self) -> Money {
        self.monthly_limit - self.current_spending
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.monthly_limit.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount("monthlyLimit"));
        }
        if self.current_spending.is_negative() {
            return Err(RecordValidationError::NegativeAmount("currentSpending"));
        }
        Ok(())
    }
}
