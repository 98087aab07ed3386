//! CLI command for server-generated reports

use super::context::Context;
use crate::display::format::degraded_notice;
use crate::display::format_report_list;
use crate::error::FinboardResult;
use crate::storage::{load_reports, Collection};

/// Handle `finboard reports`
pub fn handle_reports(ctx: &Context) -> FinboardResult<()> {
    let (reports, failed) = load_reports(&ctx.source());
    if failed {
        print!("{}", degraded_notice(&[Collection::Reports]));
    }
    print!("{}", format_report_list(&reports, &ctx.settings));
    Ok(())
}
