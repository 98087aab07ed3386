//! Report and notification formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{heading, money};
use crate::config::Settings;
use crate::metrics::Notification;
use crate::models::{Report, ReportData};

#[derive(Tabled)]
struct CategoryTableRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format one report with its interpreted breakdown
pub fn format_report(report: &Report, settings: &Settings) -> String {
    let mut output = format!(
        "{} (#{}, generated {})\n",
        report.kind,
        report.id,
        report.generated_at.format("%Y-%m-%d %H:%M")
    );

    match &report.data {
        ReportData::SpendingTrend(amounts) if amounts.is_empty() => {
            output.push_str("  No spending recorded.\n");
        }
        ReportData::SpendingTrend(amounts) => {
            let rows: Vec<CategoryTableRow> = amounts
                .iter()
                .map(|a| CategoryTableRow {
                    category: a.category.clone(),
                    amount: money(a.amount, settings),
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            output.push_str(&table.to_string());
            output.push('\n');
        }
        ReportData::IncomeVsExpenses {
            total_income,
            total_expenses,
            net_savings,
        } => {
            output.push_str(&format!("  Total income:   {}\n", money(*total_income, settings)));
            output.push_str(&format!("  Total expenses: {}\n", money(*total_expenses, settings)));
            output.push_str(&format!("  Net savings:    {}\n", money(*net_savings, settings)));
        }
        ReportData::Unavailable => {
            output.push_str("  No breakdown available for this report type.\n");
        }
    }

    output
}

/// Format the report listing
pub fn format_report_list(reports: &[Report], settings: &Settings) -> String {
    let mut output = heading("Reports");

    if reports.is_empty() {
        output.push_str("No reports generated yet.\n");
        return output;
    }

    for report in reports {
        output.push('\n');
        output.push_str(&format_report(report, settings));
    }

    output
}

/// One line per notification: "Budget Alert: You've used 85% of ..."
pub fn format_notifications(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return "No new notifications\n".to_string();
    }

    notifications
        .iter()
        .map(|n| {
            let icon = if n.is_budget_alert() { "⚠" } else { "◷" };
            format!("{} {}: {}\n", icon, n.title(), n.message())
        })
        .collect()
}
