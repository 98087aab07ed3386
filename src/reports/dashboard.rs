//! Dashboard Report
//!
//! Everything the overview screen shows, computed from one snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use super::ledger::{TransactionFilter, TransactionLedger};
use crate::config::Settings;
use crate::error::FinboardResult;
use crate::metrics::{
    aggregate_totals, cap_per_kind, is_goal_complete, month_over_month_change,
    pending_notifications, savings_change, DashboardTotals, Notification, SavingsTrend,
    TrendDelta,
};
use crate::models::Transaction;
use crate::storage::{Collection, Snapshot};

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub today: NaiveDate,
    pub totals: DashboardTotals,
    pub income_trend: TrendDelta,
    pub expense_trend: TrendDelta,
    pub savings_trend: SavingsTrend,
    pub goal_count: usize,
    pub completed_goals: usize,
    /// Leading expenses and incomes of the snapshot merged newest first
    pub recent: Vec<Transaction>,
    pub notifications: Vec<Notification>,
    /// Collections shown as empty because they failed to load
    pub degraded: Vec<Collection>,
}

impl DashboardReport {
    pub fn generate(
        snapshot: &Snapshot,
        settings: &Settings,
        today: NaiveDate,
    ) -> FinboardResult<Self> {
        let income_trend =
            month_over_month_change(&snapshot.incomes, |i| i.amount, |i| i.date, today);
        let expense_trend =
            month_over_month_change(&snapshot.expenses, |e| e.amount, |e| e.date, today);

        let mut completed_goals = 0;
        for goal in &snapshot.goals {
            if is_goal_complete(goal)? {
                completed_goals += 1;
            }
        }

        let recent_expenses =
            &snapshot.expenses[..settings.recent_expenses.min(snapshot.expenses.len())];
        let recent_incomes =
            &snapshot.incomes[..settings.recent_incomes.min(snapshot.incomes.len())];
        let recent = TransactionLedger::generate(
            recent_expenses,
            recent_incomes,
            &TransactionFilter::default(),
        )
        .entries;

        let notifications = cap_per_kind(
            pending_notifications(&snapshot.budgets, &snapshot.goals, today)?,
            settings.notification_limit,
        );

        Ok(Self {
            today,
            totals: aggregate_totals(&snapshot.expenses, &snapshot.incomes),
            savings_trend: savings_change(&income_trend, &expense_trend),
            income_trend,
            expense_trend,
            goal_count: snapshot.goals.len(),
            completed_goals,
            recent,
            notifications,
            degraded: snapshot.degraded.clone(),
        })
    }
}
