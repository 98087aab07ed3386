//! Savings goal classification and projections

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{Goal, Money};

/// A goal due within this many days (and not yet late) is `Urgent`
pub const URGENT_WITHIN_DAYS: i64 = 30;

/// Status of a savings goal, a pure function of its progress and deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Urgent,
    Overdue,
    Completed,
}

impl GoalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Urgent => "urgent",
            Self::Overdue => "overdue",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn ensure_positive_target(goal: &Goal) -> FinboardResult<()> {
    if !goal.target_amount.is_positive() {
        return Err(FinboardError::invalid_input(format!(
            "goal '{}' has non-positive target amount {}",
            goal.name, goal.target_amount
        )));
    }
    Ok(())
}

/// Whole days from `today` until the target date. Negative once past due,
/// zero on the due date itself.
pub fn days_remaining(goal: &Goal, today: NaiveDate) -> i64 {
    (goal.target_date - today).num_days()
}

/// saved_amount / target_amount × 100
pub fn goal_percentage(goal: &Goal) -> FinboardResult<f64> {
    ensure_positive_target(goal)?;
    Ok(goal.saved_amount.percent_of(goal.target_amount))
}

/// Whether the saved amount has reached the target
pub fn is_goal_complete(goal: &Goal) -> FinboardResult<bool> {
    ensure_positive_target(goal)?;
    Ok(goal.saved_amount >= goal.target_amount)
}

/// Classify a goal as of `today`.
///
/// Completion wins over lateness: a funded goal is `completed` even when its
/// date has passed. Otherwise `overdue` past the date, `urgent` within
/// [`URGENT_WITHIN_DAYS`], else `active`.
///
/// # Errors
///
/// `InvalidInput` when the target amount is zero or negative.
pub fn classify_goal(goal: &Goal, today: NaiveDate) -> FinboardResult<GoalStatus> {
    if is_goal_complete(goal)? {
        return Ok(GoalStatus::Completed);
    }

    let days = days_remaining(goal, today);
    let status = if days < 0 {
        GoalStatus::Overdue
    } else if days <= URGENT_WITHIN_DAYS {
        GoalStatus::Urgent
    } else {
        GoalStatus::Active
    };
    Ok(status)
}

/// Amount to put aside each day to hit the target on time, rounded up to
/// the next cent.
///
/// Zero when the goal is due today or already late (there are no days left
/// to spread over) and when it is already funded.
pub fn per_day_savings_needed(goal: &Goal, today: NaiveDate) -> Money {
    let days = days_remaining(goal, today);
    if days <= 0 {
        return Money::zero();
    }
    goal.remaining().div_ceil(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn goal(target: i64, saved: i64, due_in_days: i64) -> Goal {
        Goal::new(
            "g1",
            "Holiday",
            Money::from_units(target),
            Money::from_units(saved),
            today() + Duration::days(due_in_days),
        )
    }

    #[test]
    fn test_overdue_example() {
        let g = goal(1000, 200, -5);
        assert_eq!(classify_goal(&g, today()).unwrap(), GoalStatus::Overdue);
    }

    #[test]
    fn test_completion_beats_lateness() {
        let funded_late = goal(1000, 1000, -90);
        assert_eq!(classify_goal(&funded_late, today()).unwrap(), GoalStatus::Completed);

        let overfunded = goal(1000, 1500, 400);
        assert_eq!(classify_goal(&overfunded, today()).unwrap(), GoalStatus::Completed);
    }

    #[test]
    fn test_urgent_window() {
        assert_eq!(classify_goal(&goal(1000, 0, 0), today()).unwrap(), GoalStatus::Urgent);
        assert_eq!(classify_goal(&goal(1000, 0, 30), today()).unwrap(), GoalStatus::Urgent);
        assert_eq!(classify_goal(&goal(1000, 0, 31), today()).unwrap(), GoalStatus::Active);
        assert_eq!(classify_goal(&goal(1000, 0, -1), today()).unwrap(), GoalStatus::Overdue);
    }

    #[test]
    fn test_non_positive_target_is_invalid_input() {
        let g = goal(0, 0, 10);
        assert!(classify_goal(&g, today()).unwrap_err().is_invalid_input());
        assert!(goal_percentage(&g).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_days_remaining() {
        assert_eq!(days_remaining(&goal(1, 0, 12), today()), 12);
        assert_eq!(days_remaining(&goal(1, 0, -3), today()), -3);
    }

    #[test]
    fn test_per_day_savings_needed() {
        // 800 over 40 days
        assert_eq!(
            per_day_savings_needed(&goal(1000, 200, 40), today()),
            Money::from_units(20)
        );
        // 100.00 over 3 days rounds up
        assert_eq!(
            per_day_savings_needed(&goal(100, 0, 3), today()),
            Money::from_cents(3334)
        );
    }

    #[test]
    fn test_per_day_savings_zero_when_due_or_funded() {
        assert_eq!(per_day_savings_needed(&goal(1000, 200, 0), today()), Money::zero());
        assert_eq!(per_day_savings_needed(&goal(1000, 200, -8), today()), Money::zero());
        assert_eq!(per_day_savings_needed(&goal(1000, 1200, 30), today()), Money::zero());
    }

    #[test]
    fn test_goal_percentage() {
        let pct = goal_percentage(&goal(400, 100, 10)).unwrap();
        assert!((pct - 25.0).abs() < 1e-9);
    }
}
