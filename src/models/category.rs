//! Expense categories
//!
//! The API uses a closed set of upper-case category names. Budgets are keyed
//! by category, at most one per user and category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category for expenses and budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Rent,
    Shopping,
    Health,
    Groceries,
    Other,
}

impl ExpenseCategory {
    /// All categories, in the order the API lists them
    pub const ALL: [ExpenseCategory; 9] = [
        Self::Food,
        Self::Transportation,
        Self::Entertainment,
        Self::Utilities,
        Self::Rent,
        Self::Shopping,
        Self::Health,
        Self::Groceries,
        Self::Other,
    ];

    /// The wire name, e.g. `FOOD`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transportation => "TRANSPORTATION",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Utilities => "UTILITIES",
            Self::Rent => "RENT",
            Self::Shopping => "SHOPPING",
            Self::Health => "HEALTH",
            Self::Groceries => "GROCERIES",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable name, e.g. `Food`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Rent => "Rent",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Groceries => "Groceries",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a category name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown expense category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Case-insensitive; accepts both `FOOD` and `Food`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
