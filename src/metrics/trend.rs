//! Month-over-month trends
//!
//! Records are bucketed by calendar month relative to a caller-supplied
//! "today". Records outside the current and previous month are ignored.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, MonthPeriod};

/// Change of an aggregate between the previous and the current month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendDelta {
    pub current_total: Money,
    pub previous_total: Money,
    /// 0 when there is nothing to compare against
    pub percent_change: f64,
}

/// Change in net savings (incomes minus expenses) between two months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsTrend {
    pub current_net: Money,
    pub previous_net: Money,
    pub change: Money,
    /// Relative to the magnitude of the previous month's net; 0 when that
    /// net was exactly zero
    pub percent_change: f64,
}

/// (current − previous) / previous × 100, or 0 when previous is not positive
pub fn percent_change(current: Money, previous: Money) -> f64 {
    if !previous.is_positive() {
        return 0.0;
    }
    (current - previous).percent_of(previous)
}

/// Sum `amount_of` over records dated in the month of `today` and in the
/// month before it (January compares against December of the prior year).
pub fn month_over_month_change<T, A, D>(
    records: &[T],
    amount_of: A,
    date_of: D,
    today: NaiveDate,
) -> TrendDelta
where
    A: Fn(&T) -> Money,
    D: Fn(&T) -> NaiveDate,
{
    let current = MonthPeriod::containing(today);
    let previous = current.prev();

    let mut current_total = Money::zero();
    let mut previous_total = Money::zero();
    for record in records {
        let date = date_of(record);
        if current.contains(date) {
            current_total += amount_of(record);
        } else if previous.contains(date) {
            previous_total += amount_of(record);
        }
    }

    TrendDelta {
        current_total,
        previous_total,
        percent_change: percent_change(current_total, previous_total),
    }
}

/// Combine income and expense trends into a net-savings trend
pub fn savings_change(incomes: &TrendDelta, expenses: &TrendDelta) -> SavingsTrend {
    let current_net = incomes.current_total - expenses.current_total;
    let previous_net = incomes.previous_total - expenses.previous_total;
    let change = current_net - previous_net;
    let percent_change = if previous_net.is_zero() {
        0.0
    } else {
        change.percent_of(previous_net.abs())
    };

    SavingsTrend {
        current_net,
        previous_net,
        change,
        percent_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Income};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(units: i64, on: NaiveDate) -> Expense {
        Expense::new("e", "x", Money::from_units(units), ExpenseCategory::Other, on)
    }

    fn expense_trend(records: &[Expense], today: NaiveDate) -> TrendDelta {
        month_over_month_change(records, |e| e.amount, |e| e.date, today)
    }

    #[test]
    fn test_basic_change() {
        let records = vec![
            expense(150, date(2025, 5, 2)),
            expense(50, date(2025, 5, 20)),
            expense(100, date(2025, 4, 30)),
            expense(999, date(2025, 3, 31)),
            expense(999, date(2024, 5, 2)),
        ];
        let trend = expense_trend(&records, date(2025, 5, 21));
        assert_eq!(trend.current_total, Money::from_units(200));
        assert_eq!(trend.previous_total, Money::from_units(100));
        assert!((trend.percent_change - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_previous_month_yields_zero_percent() {
        let records = vec![expense(100, date(2025, 5, 2))];
        let trend = expense_trend(&records, date(2025, 5, 10));
        assert_eq!(trend.current_total, Money::from_units(100));
        assert_eq!(trend.previous_total, Money::zero());
        assert_eq!(trend.percent_change, 0.0);
        assert!(trend.percent_change.is_finite());
    }

    #[test]
    fn test_january_compares_with_previous_december() {
        let records = vec![
            expense(80, date(2025, 1, 3)),
            expense(100, date(2024, 12, 24)),
            expense(500, date(2025, 12, 24)),
        ];
        let trend = expense_trend(&records, date(2025, 1, 10));
        assert_eq!(trend.current_total, Money::from_units(80));
        assert_eq!(trend.previous_total, Money::from_units(100));
        assert!((trend.percent_change + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_records() {
        let trend = expense_trend(&[], date(2025, 1, 10));
        assert_eq!(trend.current_total, Money::zero());
        assert_eq!(trend.percent_change, 0.0);
    }

    #[test]
    fn test_works_over_incomes() {
        let incomes = vec![
            Income::new("i1", "Pay", Money::from_units(3000), date(2025, 2, 1)),
            Income::new("i2", "Pay", Money::from_units(2000), date(2025, 1, 1)),
        ];
        let trend = month_over_month_change(&incomes, |i| i.amount, |i| i.date, date(2025, 2, 14));
        assert!((trend.percent_change - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_change() {
        let incomes = TrendDelta {
            current_total: Money::from_units(3000),
            previous_total: Money::from_units(2000),
            percent_change: 50.0,
        };
        let expenses = TrendDelta {
            current_total: Money::from_units(1500),
            previous_total: Money::from_units(2500),
            percent_change: -40.0,
        };
        let savings = savings_change(&incomes, &expenses);
        assert_eq!(savings.current_net, Money::from_units(1500));
        assert_eq!(savings.previous_net, Money::from_units(-500));
        assert_eq!(savings.change, Money::from_units(2000));
        // relative to |previous net|
        assert!((savings.percent_change - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_change_zero_previous_net() {
        let flat = TrendDelta {
            current_total: Money::from_units(10),
            previous_total: Money::from_units(100),
            percent_change: 0.0,
        };
        let savings = savings_change(&flat, &flat);
        assert_eq!(savings.previous_net, Money::zero());
        assert_eq!(savings.percent_change, 0.0);
    }
}
