//! Savings goal model
//!
//! A goal is a target amount with a deadline and a running saved amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;
use super::RecordValidationError;

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub target_amount: Money,
    pub saved_amount: Money,
    pub target_date: NaiveDate,
    /// Not every endpoint returns it (the dashboard listing omits it)
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
}

impl Goal {
    pub fn new(
        id: impl Into<GoalId>,
        name: impl Into<String>,
        target_amount: Money,
        saved_amount: Money,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            target_amount,
            saved_amount,
            target_date,
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Amount still to save; zero once the target is reached
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.saved_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyField("name"));
        }
        if !self.target_amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount("targetAmount"));
        }
        if self.saved_amount.is_negative() {
            return Err(RecordValidationError::NegativeAmount("savedAmount"));
        }
        Ok(())
    }
}
