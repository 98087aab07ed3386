//! Dashboard formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{degraded_notice, format_trend, heading, money};
use super::report::format_notifications;
use super::transaction::format_transaction_table;
use crate::config::Settings;
use crate::reports::DashboardReport;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "This month")]
    current: String,
    #[tabled(rename = "Last month")]
    previous: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Format the dashboard: summary cards, recent transactions, notifications
pub fn format_dashboard(report: &DashboardReport, settings: &Settings) -> String {
    let mut output = heading(&format!("Dashboard ({})", report.today));

    output.push_str(&degraded_notice(&report.degraded));

    output.push_str(&format!(
        "Total income: {}   Total expenses: {}   Net savings: {}\n",
        money(report.totals.total_incomes, settings),
        money(report.totals.total_expenses, settings),
        money(report.totals.net_savings, settings)
    ));

    let completed = if report.completed_goals > 0 {
        format!("{} goals completed", report.completed_goals)
    } else {
        "Keep working on your goals!".to_string()
    };
    output.push_str(&format!("Goals: {} ({})\n\n", report.goal_count, completed));

    let rows = vec![
        SummaryRow {
            label: "Income",
            current: money(report.income_trend.current_total, settings),
            previous: money(report.income_trend.previous_total, settings),
            change: format_trend(report.income_trend.percent_change),
        },
        SummaryRow {
            label: "Expenses",
            current: money(report.expense_trend.current_total, settings),
            previous: money(report.expense_trend.previous_total, settings),
            change: format_trend(report.expense_trend.percent_change),
        },
        SummaryRow {
            label: "Savings",
            current: money(report.savings_trend.current_net, settings),
            previous: money(report.savings_trend.previous_net, settings),
            change: format_trend(report.savings_trend.percent_change),
        },
    ];
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push_str("\n\n");

    output.push_str("Recent transactions\n");
    output.push_str(&format_transaction_table(&report.recent, settings));
    output.push('\n');

    output.push_str("Notifications\n");
    output.push_str(&format_notifications(&report.notifications));

    output
}
