//! Goal overview formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{date, format_bar, format_percentage, heading, money, truncate};
use crate::config::Settings;
use crate::metrics::GoalStatus;
use crate::reports::{GoalOverviewReport, GoalRow};

#[derive(Tabled)]
struct GoalTableRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved / Target")]
    progress: String,
    #[tabled(rename = "Complete")]
    complete: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Target date")]
    target_date: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Per day needed")]
    per_day: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl GoalTableRow {
    fn new(row: &GoalRow, settings: &Settings) -> Self {
        let per_day = if row.status == GoalStatus::Completed {
            "Goal Completed!".to_string()
        } else if row.days_remaining > 0 {
            money(row.per_day_needed, settings)
        } else {
            "-".to_string()
        };

        Self {
            name: truncate(&row.name, 24),
            progress: format!(
                "{} / {}",
                money(row.saved_amount, settings),
                money(row.target_amount, settings)
            ),
            complete: format_percentage(row.percentage),
            bar: format_bar(row.percentage.min(100.0), 100.0, 10),
            target_date: date(row.target_date, settings),
            deadline: row.deadline_label(),
            per_day,
            status: row.status.to_string(),
        }
    }
}

/// Format the goal overview as a table with totals
pub fn format_goal_overview(report: &GoalOverviewReport, settings: &Settings) -> String {
    let mut output = heading("Savings Goals");

    if report.is_empty() {
        output.push_str("No savings goals yet.\n");
        return output;
    }

    let rows: Vec<GoalTableRow> = report
        .rows
        .iter()
        .map(|row| GoalTableRow::new(row, settings))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&format!(
        "\nCompleted: {} of {}   Total target: {}   Total saved: {}\n",
        report.completed,
        report.rows.len(),
        money(report.total_target, settings),
        money(report.total_saved, settings)
    ));

    output
}

/// Format a single goal's details
pub fn format_goal_details(row: &GoalRow, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", row.name));
    output.push_str(&format!("  ID:             {}\n", row.goal_id));
    if !row.description.is_empty() {
        output.push_str(&format!("  Description:    {}\n", row.description));
    }
    output.push_str(&format!(
        "  Progress:       {} / {} ({})\n",
        money(row.saved_amount, settings),
        money(row.target_amount, settings),
        format_percentage(row.percentage)
    ));
    output.push_str(&format!(
        "                  {}\n",
        format_bar(row.percentage.min(100.0), 100.0, 30)
    ));
    output.push_str(&format!("  Remaining:      {}\n", money(row.remaining, settings)));
    output.push_str(&format!(
        "  Target date:    {} ({})\n",
        date(row.target_date, settings),
        row.deadline_label()
    ));
    output.push_str(&format!("  Status:         {}\n", row.status));

    if row.status == GoalStatus::Completed {
        output.push_str("  Goal Completed!\n");
    } else if row.days_remaining > 0 {
        output.push_str(&format!(
            "  Per day needed: {}\n",
            money(row.per_day_needed, settings)
        ));
    }

    output
}
