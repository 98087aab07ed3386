//! Point-in-time record snapshots
//!
//! The four core collections are fetched concurrently and fail independently:
//! a collection that cannot be loaded is replaced by an empty one and listed
//! in [`Snapshot::degraded`], so the rest of the view still renders.

use std::thread;

use super::source::{Collection, RecordSource};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Budget, Expense, Goal, Income, Report};

/// Records as of one fetch. Treated as immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    /// Collections that failed to load and were replaced by empty ones
    pub degraded: Vec<Collection>,
}

impl Snapshot {
    /// Fetch expenses, incomes, budgets and goals in parallel
    pub fn load(source: &dyn RecordSource) -> Self {
        let (expenses, incomes, budgets, goals) = thread::scope(|scope| {
            let expenses = scope.spawn(|| source.expenses());
            let incomes = scope.spawn(|| source.incomes());
            let budgets = scope.spawn(|| source.budgets());
            let goals = scope.spawn(|| source.goals());
            (
                join(Collection::Expenses, expenses),
                join(Collection::Incomes, incomes),
                join(Collection::Budgets, budgets),
                join(Collection::Goals, goals),
            )
        });

        let mut degraded = Vec::new();
        let snapshot = Self {
            expenses: or_empty(Collection::Expenses, expenses, &mut degraded),
            incomes: or_empty(Collection::Incomes, incomes, &mut degraded),
            budgets: or_empty(Collection::Budgets, budgets, &mut degraded),
            goals: or_empty(Collection::Goals, goals, &mut degraded),
            degraded,
        };

        tracing::info!(
            expenses = snapshot.expenses.len(),
            incomes = snapshot.incomes.len(),
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            degraded = snapshot.degraded.len(),
            "snapshot loaded"
        );
        snapshot
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Fetch the report listing, degrading to empty on failure.
///
/// Returns the reports and whether the fetch failed.
pub fn load_reports(source: &dyn RecordSource) -> (Vec<Report>, bool) {
    let mut degraded = Vec::new();
    let reports = or_empty(Collection::Reports, source.reports(), &mut degraded);
    (reports, !degraded.is_empty())
}

fn join<T>(
    collection: Collection,
    handle: thread::ScopedJoinHandle<'_, FinboardResult<Vec<T>>>,
) -> FinboardResult<Vec<T>> {
    handle
        .join()
        .unwrap_or_else(|_| Err(FinboardError::Storage(format!("{} loader panicked", collection))))
}

fn or_empty<T>(
    collection: Collection,
    result: FinboardResult<Vec<T>>,
    degraded: &mut Vec<Collection>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(%collection, error = %e, "collection unavailable, showing it as empty");
            degraded.push(collection);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;

    /// Source where budgets and reports always fail
    struct FlakySource;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
    }

    impl RecordSource for FlakySource {
        fn expenses(&self) -> FinboardResult<Vec<Expense>> {
            Ok(vec![Expense::new(
                "e1",
                "Coffee",
                Money::from_cents(450),
                ExpenseCategory::Food,
                day(),
            )])
        }

        fn incomes(&self) -> FinboardResult<Vec<Income>> {
            Ok(vec![Income::new("i1", "Pay", Money::from_units(100), day())])
        }

        fn budgets(&self) -> FinboardResult<Vec<Budget>> {
            Err(FinboardError::Storage("connection refused".into()))
        }

        fn goals(&self) -> FinboardResult<Vec<Goal>> {
            Ok(Vec::new())
        }

        fn reports(&self) -> FinboardResult<Vec<Report>> {
            Err(FinboardError::Storage("connection refused".into()))
        }
    }

    #[test]
    fn test_failed_collection_degrades_to_empty() {
        let snapshot = Snapshot::load(&FlakySource);
        assert_eq!(snapshot.expenses.len(), 1);
        assert_eq!(snapshot.incomes.len(), 1);
        assert!(snapshot.budgets.is_empty());
        assert_eq!(snapshot.degraded, vec![Collection::Budgets]);
        assert!(snapshot.is_degraded());
    }

    #[test]
    fn test_load_reports_degrades() {
        let (reports, failed) = load_reports(&FlakySource);
        assert!(reports.is_empty());
        assert!(failed);
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = Snapshot::default();
        assert!(!snapshot.is_degraded());
        assert!(snapshot.goals.is_empty());
    }
}
