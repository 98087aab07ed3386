//! Expense and income records
//!
//! Both are immutable snapshots of what the API returned; the only difference
//! is that expenses carry a category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::{ExpenseId, IncomeId};
use super::money::Money;
use super::RecordValidationError;

/// A single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: impl Into<ExpenseId>,
        description: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            category,
            date,
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.amount.is_negative() {
            return Err(RecordValidationError::NegativeAmount("amount"));
        }
        Ok(())
    }
}

/// A single income entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl Income {
    pub fn new(
        id: impl Into<IncomeId>,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            date,
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.amount.is_negative() {
            return Err(RecordValidationError::NegativeAmount("amount"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_expense_validation() {
        let ok = Expense::new("1", "Lunch", Money::from_cents(1250), ExpenseCategory::Food, day());
        assert!(ok.validate().is_ok());

        let zero = Expense::new("2", "Free", Money::zero(), ExpenseCategory::Other, day());
        assert!(zero.validate().is_ok());

        let bad = Expense::new("3", "Refund?", Money::from_cents(-1), ExpenseCategory::Other, day());
        assert_eq!(
            bad.validate(),
            Err(RecordValidationError::NegativeAmount("amount"))
        );
    }

    #[test]
    fn test_income_validation() {
        let salary = Income::new("1", "Salary", Money::from_units(3000), day());
        assert!(salary.validate().is_ok());

        let bad = Income::new("2", "Oops", Money::from_cents(-100), day());
        assert!(bad.validate().is_err());
    }
}
