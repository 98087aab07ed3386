//! Calendar month periods
//!
//! Month-over-month trends compare the calendar month containing "today"
//! against the one immediately before it.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a month period. Returns `None` unless `month` is in 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The immediately preceding month (January rolls back to December)
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Whether `date` falls in this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_containing_and_contains() {
        let period = MonthPeriod::containing(date(2025, 3, 17));
        assert_eq!(period.to_string(), "2025-03");
        assert!(period.contains(date(2025, 3, 1)));
        assert!(period.contains(date(2025, 3, 31)));
        assert!(!period.contains(date(2025, 4, 1)));
        assert!(!period.contains(date(2024, 3, 17)));
    }

    #[test]
    fn test_prev_rolls_over_year() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthPeriod::new(2024, 12).unwrap());
        let jun = MonthPeriod::new(2025, 6).unwrap();
        assert_eq!(jun.prev(), MonthPeriod::new(2025, 5).unwrap());
    }

    #[test]
    fn test_new_rejects_bad_month() {
        assert!(MonthPeriod::new(2025, 0).is_none());
        assert!(MonthPeriod::new(2025, 13).is_none());
    }
}
