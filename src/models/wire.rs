//! Wire shapes returned by the remote API
//!
//! The API sends camelCase JSON with fractional amounts and date strings in
//! more than one format. Records are validated here, once, and converted to
//! the typed models; nothing downstream sees a raw record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use super::category::ExpenseCategory;
use super::expense::{Expense, Income};
use super::goal::Goal;
use super::money::Money;
use super::report::{Report, ReportData, ReportKind};
use super::budget::Budget;
use crate::error::{FinboardError, FinboardResult};

/// Record identifiers come back as strings or as numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireExpense {
    pub id: WireId,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireIncome {
    pub id: WireId,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBudget {
    pub id: WireId,
    pub category: String,
    pub monthly_limit: f64,
    #[serde(default)]
    pub current_spending: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGoal {
    pub id: WireId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target_amount: f64,
    #[serde(default)]
    pub saved_amount: f64,
    pub target_date: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReport {
    pub id: WireId,
    #[serde(rename = "type")]
    pub kind: String,
    pub generated_at: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Parse a calendar date as the API formats them.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 / ISO-8601 date-times (the date part is
/// used as written, no zone conversion) and `DD/MM/YYYY`.
pub fn parse_api_date(s: &str) -> FinboardResult<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Ok(date);
    }
    Err(FinboardError::invalid_input(format!("unparsable date '{}'", s)))
}

/// Parse a timestamp; a bare date reads as midnight
pub fn parse_api_datetime(s: &str) -> FinboardResult<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    parse_api_date(s).map(|date| date.and_time(chrono::NaiveTime::MIN))
}

fn money(field: &'static str, amount: f64) -> FinboardResult<Money> {
    Money::from_amount(amount)
        .ok_or_else(|| {
            FinboardError::invalid_input(format!("{} is not a finite number within range", field))
        })
}

fn category(code: &str) -> FinboardResult<ExpenseCategory> {
    code.parse()
        .map_err(|e: super::category::UnknownCategory| FinboardError::invalid_input(e.to_string()))
}

impl TryFrom<WireExpense> for Expense {
    type Error = FinboardError;

    fn try_from(wire: WireExpense) -> FinboardResult<Self> {
        let expense = Expense {
            id: String::from(wire.id).into(),
            description: wire.description,
            amount: money("amount", wire.amount)?,
            category: category(&wire.category)?,
            date: parse_api_date(&wire.date)?,
        };
        expense.validate()?;
        Ok(expense)
    }
}

impl TryFrom<WireIncome> for Income {
    type Error = FinboardError;

    fn try_from(wire: WireIncome) -> FinboardResult<Self> {
        let income = Income {
            id: String::from(wire.id).into(),
            description: wire.description,
            amount: money("amount", wire.amount)?,
            date: parse_api_date(&wire.date)?,
        };
        income.validate()?;
        Ok(income)
    }
}

impl TryFrom<WireBudget> for Budget {
    type Error = FinboardError;

    fn try_from(wire: WireBudget) -> FinboardResult<Self> {
        let budget = Budget {
            id: String::from(wire.id).into(),
            category: category(&wire.category)?,
            monthly_limit: money("monthlyLimit", wire.monthly_limit)?,
            current_spending: money("currentSpending", wire.current_spending)?,
        };
        budget.validate()?;
        Ok(budget)
    }
}

impl TryFrom<WireGoal> for Goal {
    type Error = FinboardError;

    fn try_from(wire: WireGoal) -> FinboardResult<Self> {
        let goal = Goal {
            id: String::from(wire.id).into(),
            name: wire.name,
            description: wire.description.unwrap_or_default(),
            target_amount: money("targetAmount", wire.target_amount)?,
            saved_amount: money("savedAmount", wire.saved_amount)?,
            target_date: parse_api_date(&wire.target_date)?,
            created_at: wire.created_at.as_deref().map(parse_api_date).transpose()?,
        };
        goal.validate()?;
        Ok(goal)
    }
}

impl TryFrom<WireReport> for Report {
    type Error = FinboardError;

    fn try_from(wire: WireReport) -> FinboardResult<Self> {
        let kind = ReportKind::from_code(&wire.kind);
        let data = ReportData::interpret(&kind, &wire.data);
        Ok(Report {
            id: String::from(wire.id).into(),
            kind,
            generated_at: parse_api_datetime(&wire.generated_at)?,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_api_date_formats() {
        assert_eq!(parse_api_date("2025-03-09").unwrap(), date(2025, 3, 9));
        assert_eq!(
            parse_api_date("2025-03-09T23:30:00Z").unwrap(),
            date(2025, 3, 9)
        );
        assert_eq!(
            parse_api_date("2025-03-09T10:15:00.123").unwrap(),
            date(2025, 3, 9)
        );
        assert_eq!(parse_api_date("09/03/2025").unwrap(), date(2025, 3, 9));
    }

    #[test]
    fn test_parse_api_date_rejects_garbage() {
        let err = parse_api_date("next tuesday").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(parse_api_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_api_datetime_bare_date_is_midnight() {
        let dt = parse_api_datetime("2025-01-02").unwrap();
        assert_eq!(dt.date(), date(2025, 1, 2));
        assert_eq!(dt.time(), chrono::NaiveTime::MIN);
    }

    #[test]
    fn test_expense_from_wire() {
        let wire: WireExpense = serde_json::from_str(
            r#"{"id": 7, "description": "Groceries run", "amount": 54.3,
                "category": "GROCERIES", "date": "2025-01-04"}"#,
        )
        .unwrap();
        let expense = Expense::try_from(wire).unwrap();
        assert_eq!(expense.id.as_str(), "7");
        assert_eq!(expense.amount.cents(), 5430);
        assert_eq!(expense.category, ExpenseCategory::Groceries);
        assert_eq!(expense.date, date(2025, 1, 4));
    }

    #[test]
    fn test_expense_unknown_category_is_invalid_input() {
        let wire: WireExpense = serde_json::from_str(
            r#"{"id": "x", "amount": 1, "category": "YACHTS", "date": "2025-01-04"}"#,
        )
        .unwrap();
        assert!(Expense::try_from(wire).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_expense_huge_amount_is_invalid_input() {
        let wire: WireExpense = serde_json::from_str(
            r#"{"id": "x", "amount": 5e16, "category": "RENT", "date": "2025-01-04"}"#,
        )
        .unwrap();
        let err = Expense::try_from(wire).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_budget_zero_limit_is_invalid_input() {
        let wire: WireBudget = serde_json::from_str(
            r#"{"id": "b", "category": "FOOD", "monthlyLimit": 0, "currentSpending": 10}"#,
        )
        .unwrap();
        assert!(Budget::try_from(wire).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_goal_from_wire() {
        let wire: WireGoal = serde_json::from_str(
            r#"{"id": "g1", "name": "Emergency fund", "description": "Three months",
                "targetAmount": 5000, "savedAmount": 1250.5,
                "targetDate": "2025-12-31", "createdAt": "2025-01-01T08:00:00"}"#,
        )
        .unwrap();
        let goal = Goal::try_from(wire).unwrap();
        assert_eq!(goal.saved_amount.cents(), 125050);
        assert_eq!(goal.created_at, Some(date(2025, 1, 1)));
        assert_eq!(goal.description, "Three months");
    }

    #[test]
    fn test_goal_bad_date_is_invalid_input() {
        let wire: WireGoal = serde_json::from_str(
            r#"{"id": "g1", "name": "Car", "targetAmount": 5000, "targetDate": "soon"}"#,
        )
        .unwrap();
        assert!(Goal::try_from(wire).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_report_from_wire() {
        let wire: WireReport = serde_json::from_str(
            r#"{"id": 3, "type": "income_vs_expenses", "generatedAt": "2025-02-01T12:00:00Z",
                "data": {"totalIncome": 10, "totalExpenses": 4, "netSavings": 6}}"#,
        )
        .unwrap();
        let report = Report::try_from(wire).unwrap();
        assert_eq!(report.kind, ReportKind::IncomeVsExpenses);
        assert!(matches!(
            report.data,
            ReportData::IncomeVsExpenses { net_savings, .. } if net_savings == Money::from_units(6)
        ));
    }
}
