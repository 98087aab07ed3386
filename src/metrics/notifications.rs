//! Budget alerts and goal reminders

use chrono::NaiveDate;
use serde::Serialize;

use super::budget::{budget_percentage, spending_above, WARNING_PERCENT};
use super::goal::{days_remaining, is_goal_complete};
use crate::error::FinboardResult;
use crate::models::{Budget, BudgetId, ExpenseCategory, Goal, GoalId};

/// Incomplete goals due within this many days get a reminder
pub const GOAL_REMINDER_WITHIN_DAYS: i64 = 60;

/// Something the user should look at
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// A budget above 80% of its limit
    BudgetAlert {
        budget_id: BudgetId,
        category: ExpenseCategory,
        percentage: f64,
    },
    /// An incomplete goal coming due
    GoalReminder {
        goal_id: GoalId,
        name: String,
        days_remaining: i64,
    },
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Self::BudgetAlert { .. } => "Budget Alert",
            Self::GoalReminder { .. } => "Goal Reminder",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::BudgetAlert {
                category,
                percentage,
                ..
            } => format!(
                "You've used {:.0}% of your {} budget",
                percentage.round(),
                category.label().to_lowercase()
            ),
            Self::GoalReminder {
                name,
                days_remaining,
                ..
            } => format!("Your \"{}\" goal is {} days away", name, days_remaining),
        }
    }

    pub fn is_budget_alert(&self) -> bool {
        matches!(self, Self::BudgetAlert { .. })
    }
}

/// Budget alerts for every budget strictly above 80% of its limit, followed
/// by reminders for every incomplete goal due in 1 to 60 days. Input order
/// is preserved within each kind.
///
/// # Errors
///
/// `InvalidInput` for a budget with a non-positive limit or a goal with a
/// non-positive target.
pub fn pending_notifications(
    budgets: &[Budget],
    goals: &[Goal],
    today: NaiveDate,
) -> FinboardResult<Vec<Notification>> {
    let mut notifications = Vec::new();

    for budget in budgets {
        let percentage = budget_percentage(budget)?;
        if spending_above(budget, WARNING_PERCENT) {
            notifications.push(Notification::BudgetAlert {
                budget_id: budget.id.clone(),
                category: budget.category,
                percentage,
            });
        }
    }

    for goal in goals {
        if is_goal_complete(goal)? {
            continue;
        }
        let days = days_remaining(goal, today);
        if days > 0 && days <= GOAL_REMINDER_WITHIN_DAYS {
            notifications.push(Notification::GoalReminder {
                goal_id: goal.id.clone(),
                name: goal.name.clone(),
                days_remaining: days,
            });
        }
    }

    Ok(notifications)
}

/// Keep at most `limit` notifications of each kind, preserving order
pub fn cap_per_kind(notifications: Vec<Notification>, limit: usize) -> Vec<Notification> {
    let mut budget_alerts = 0;
    let mut goal_reminders = 0;
    notifications
        .into_iter()
        .filter(|n| {
            let seen = if n.is_budget_alert() {
                &mut budget_alerts
            } else {
                &mut goal_reminders
            };
            *seen += 1;
            *seen <= limit
        })
        .collect()
}
