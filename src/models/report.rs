//! Generated report records
//!
//! Reports are produced server-side; the client only lists them and reads
//! their loosely-typed `data` payload according to the report type.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ReportId;
use super::money::Money;

/// Kind of server-generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    SpendingTrend,
    IncomeVsExpenses,
    /// A type this client does not know how to read
    Unknown(String),
}

impl ReportKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "spending_trend" => Self::SpendingTrend,
            "income_vs_expenses" => Self::IncomeVsExpenses,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::SpendingTrend => "Spending Trends",
            Self::IncomeVsExpenses => "Income vs Expenses",
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Spending total for one category in a spending-trend report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAmount {
    /// Display name, e.g. "Groceries"
    pub category: String,
    pub amount: Money,
}

/// The interpreted payload of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ReportData {
    SpendingTrend(Vec<CategoryAmount>),
    IncomeVsExpenses {
        total_income: Money,
        total_expenses: Money,
        net_savings: Money,
    },
    Unavailable,
}

impl ReportData {
    /// Read the raw `data` object for a report of the given kind.
    ///
    /// Missing, non-numeric or out-of-range amounts read as zero. Spending
    /// categories keep the order the API sent them in.
    pub fn interpret(kind: &ReportKind, data: &serde_json::Value) -> Self {
        match kind {
            ReportKind::SpendingTrend => {
                let categories = data
                    .get("spendingByCategory")
                    .and_then(|v| v.as_object())
                    .map(|by_category| {
                        by_category
                            .iter()
                            .map(|(category, amount)| CategoryAmount {
                                category: capitalize(category),
                                amount: amount_field(Some(amount)),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                Self::SpendingTrend(categories)
            }
            ReportKind::IncomeVsExpenses => Self::IncomeVsExpenses {
                total_income: amount_field(data.get("totalIncome")),
                total_expenses: amount_field(data.get("totalExpenses")),
                net_savings: amount_field(data.get("netSavings")),
            },
            ReportKind::Unknown(_) => Self::Unavailable,
        }
    }
}

/// A report as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub id: ReportId,
    pub kind: ReportKind,
    pub generated_at: NaiveDateTime,
    pub data: ReportData,
}

fn amount_field(value: Option<&serde_json::Value>) -> Money {
    value
        .and_then(|v| v.as_f64())
        .and_then(Money::from_amount)
        .unwrap_or_default()
}

/// "GROCERIES" -> "Groceries"
fn capitalize(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
