//! Unified transaction view
//!
//! Expenses and incomes live behind separate endpoints. For listing they are
//! merged into one `Transaction` type tagged by kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ExpenseCategory;
use super::expense::{Expense, Income};
use super::money::Money;

/// Whether money went out or came in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "expenses" => Ok(Self::Expense),
            "income" | "incomes" => Ok(Self::Income),
            other => Err(format!("Unknown transaction kind: {}", other)),
        }
    }
}

/// An expense or income entry in a merged listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub id: String,
    pub description: String,
    pub amount: Money,
    /// Only expenses have a category
    pub category: Option<ExpenseCategory>,
    pub date: NaiveDate,
}

impl Transaction {
    /// Amount with sign applied: outflows negative, inflows positive
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Expense => -self.amount,
            TransactionKind::Income => self.amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl From<&Expense> for Transaction {
    fn from(expense: &Expense) -> Self {
        Self {
            kind: TransactionKind::Expense,
            id: expense.id.to_string(),
            description: expense.description.clone(),
            amount: expense.amount,
            category: Some(expense.category),
            date: expense.date,
        }
    }
}

impl From<&Income> for Transaction {
    fn from(income: &Income) -> Self {
        Self {
            kind: TransactionKind::Income,
            id: income.id.to_string(),
            description: income.description.clone(),
            amount: income.amount,
            category: None,
            date: income.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    #[test]
    fn test_from_expense() {
        let expense = Expense::new("e1", "Bus", Money::from_cents(275), ExpenseCategory::Transportation, day());
        let txn = Transaction::from(&expense);
        assert!(txn.is_expense());
        assert_eq!(txn.category, Some(ExpenseCategory::Transportation));
        assert_eq!(txn.signed_amount().cents(), -275);
    }

    #[test]
    fn test_from_income() {
        let income = Income::new("i1", "Salary", Money::from_units(2000), day());
        let txn = Transaction::from(&income);
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.category, None);
        assert_eq!(txn.signed_amount(), Money::from_units(2000));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Expense".parse(), Ok(TransactionKind::Expense));
        assert_eq!("incomes".parse(), Ok(TransactionKind::Income));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }
}
