//! Dashboard and notification commands

use super::context::Context;
use crate::display::format::degraded_notice;
use crate::display::{format_dashboard, format_notifications};
use crate::error::FinboardResult;
use crate::metrics::pending_notifications;
use crate::reports::DashboardReport;
use crate::storage::{Collection, Snapshot};

/// Handle `finboard dashboard`
pub fn handle_dashboard(ctx: &Context) -> FinboardResult<()> {
    let snapshot = ctx.snapshot();
    let report = DashboardReport::generate(&snapshot, &ctx.settings, ctx.today)?;
    print!("{}", format_dashboard(&report, &ctx.settings));
    Ok(())
}

/// Handle `finboard notifications`. Unlike the dashboard, nothing is capped.
pub fn handle_notifications(ctx: &Context) -> FinboardResult<()> {
    let snapshot = ctx.snapshot();
    let notifications = pending_notifications(&snapshot.budgets, &snapshot.goals, ctx.today)?;
    print!(
        "{}",
        notice_for(&snapshot, &[Collection::Budgets, Collection::Goals])
    );
    print!("{}", format_notifications(&notifications));
    Ok(())
}

/// Warnings for the degraded collections a view depends on
pub(crate) fn notice_for(snapshot: &Snapshot, used: &[Collection]) -> String {
    let relevant: Vec<Collection> = snapshot
        .degraded
        .iter()
        .copied()
        .filter(|c| used.contains(c))
        .collect();
    degraded_notice(&relevant)
}
