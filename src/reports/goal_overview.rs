//! Goal Overview Report
//!
//! Progress, status and per-day savings need for every goal as of a given day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FinboardResult;
use crate::metrics::{
    classify_goal, days_remaining, goal_percentage, per_day_savings_needed, GoalStatus,
};
use crate::models::{Goal, GoalId, Money};

/// A row in the goal report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalRow {
    pub goal_id: GoalId,
    pub name: String,
    pub description: String,
    pub target_amount: Money,
    pub saved_amount: Money,
    pub remaining: Money,
    pub target_date: NaiveDate,
    pub percentage: f64,
    pub status: GoalStatus,
    pub days_remaining: i64,
    pub per_day_needed: Money,
}

impl GoalRow {
    /// "12 days left", "Due today" or "3 days overdue"
    pub fn deadline_label(&self) -> String {
        match self.days_remaining {
            d if d > 0 => format!("{} days left", d),
            0 => "Due today".to_string(),
            d => format!("{} days overdue", d.abs()),
        }
    }
}

/// Goal Overview Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalOverviewReport {
    pub today: NaiveDate,
    pub rows: Vec<GoalRow>,
    pub completed: usize,
    pub total_target: Money,
    pub total_saved: Money,
}

impl GoalOverviewReport {
    pub fn generate(goals: &[Goal], today: NaiveDate) -> FinboardResult<Self> {
        let rows = goals
            .iter()
            .map(|goal| {
                Ok(GoalRow {
                    goal_id: goal.id.clone(),
                    name: goal.name.clone(),
                    description: goal.description.clone(),
                    target_amount: goal.target_amount,
                    saved_amount: goal.saved_amount,
                    remaining: goal.remaining(),
                    target_date: goal.target_date,
                    percentage: goal_percentage(goal)?,
                    status: classify_goal(goal, today)?,
                    days_remaining: days_remaining(goal, today),
                    per_day_needed: per_day_savings_needed(goal, today),
                })
            })
            .collect::<FinboardResult<Vec<_>>>()?;

        Ok(Self {
            today,
            completed: rows
                .iter()
                .filter(|r| r.status == GoalStatus::Completed)
                .count(),
            total_target: goals.iter().map(|g| g.target_amount).sum(),
            total_saved: goals.iter().map(|g| g.saved_amount).sum(),
            rows,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
