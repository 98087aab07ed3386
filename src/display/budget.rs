//! Budget overview formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_bar, format_percentage, heading, money};
use crate::config::Settings;
use crate::metrics::BudgetStatus;
use crate::reports::{BudgetOverviewReport, BudgetRow};

#[derive(Tabled)]
struct BudgetTableRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent / Limit")]
    usage: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BudgetTableRow {
    fn new(row: &BudgetRow, settings: &Settings) -> Self {
        Self {
            category: row.category.to_string(),
            usage: format!(
                "{} / {}",
                money(row.current_spending, settings),
                money(row.monthly_limit, settings)
            ),
            remaining: money(row.remaining, settings),
            used: format!("{} used", format_percentage(row.percentage)),
            bar: format_bar(row.bar_percentage(), 100.0, 10),
            status: row.status.to_string(),
        }
    }
}

/// Format the budget overview as a table with totals
pub fn format_budget_overview(report: &BudgetOverviewReport, settings: &Settings) -> String {
    let mut output = heading("Budgets");

    if report.is_empty() {
        output.push_str("No budgets set up yet.\n");
        return output;
    }

    let rows: Vec<BudgetTableRow> = report
        .rows
        .iter()
        .map(|row| BudgetTableRow::new(row, settings))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&format!(
        "\nTotal budget: {}   Spent: {}   Remaining: {}\n",
        money(report.total_limit, settings),
        money(report.total_spent, settings),
        money(report.total_remaining, settings)
    ));
    output.push_str(&format!(
        "{} good, {} warning, {} exceeded\n",
        report.count_with_status(BudgetStatus::Good),
        report.count_with_status(BudgetStatus::Warning),
        report.count_with_status(BudgetStatus::Exceeded)
    ));

    output
}
