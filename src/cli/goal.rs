//! CLI command for savings goals

use super::context::Context;
use super::dashboard::notice_for;
use crate::display::{format_goal_details, format_goal_overview};
use crate::error::{FinboardError, FinboardResult};
use crate::reports::{GoalOverviewReport, GoalRow};
use crate::storage::Collection;

/// Handle `finboard goals [GOAL]`
pub fn handle_goals(ctx: &Context, goal: Option<String>) -> FinboardResult<()> {
    let snapshot = ctx.snapshot();
    let report = GoalOverviewReport::generate(&snapshot.goals, ctx.today)?;
    print!("{}", notice_for(&snapshot, &[Collection::Goals]));

    match goal {
        Some(identifier) => {
            let row = find_goal(&report.rows, &identifier)?;
            print!("{}", format_goal_details(row, &ctx.settings));
        }
        None => print!("{}", format_goal_overview(&report, &ctx.settings)),
    }
    Ok(())
}

/// Find a goal by ID or case-insensitive name
fn find_goal<'a>(rows: &'a [GoalRow], identifier: &str) -> FinboardResult<&'a GoalRow> {
    rows.iter()
        .find(|r| r.goal_id.as_str() == identifier)
        .or_else(|| {
            rows.iter()
                .find(|r| r.name.eq_ignore_ascii_case(identifier.trim()))
        })
        .ok_or_else(|| FinboardError::goal_not_found(identifier))
}
