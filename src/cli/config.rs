//! CLI command showing configuration and paths

use super::context::Context;
use crate::error::FinboardResult;
use crate::storage::Collection;

/// Handle `finboard config`
pub fn handle_config(ctx: &Context) -> FinboardResult<()> {
    let source = ctx.source();
    let settings = &ctx.settings;

    println!("finboard Configuration");
    println!("======================");
    println!("Base directory:     {}", ctx.paths.base_dir().display());
    println!("Settings file:      {}", ctx.paths.settings_file().display());
    println!("Snapshot directory: {}", source.dir().display());
    println!("Today:              {}", ctx.today);
    println!();
    println!("Snapshot files:");
    for collection in [
        Collection::Expenses,
        Collection::Incomes,
        Collection::Budgets,
        Collection::Goals,
        Collection::Reports,
    ] {
        let path = source.path_for(collection);
        let state = if path.exists() { "present" } else { "missing" };
        println!("  {:<14} {}", collection.file_name(), state);
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Date format:         {}", settings.date_format);
    println!("  Notification limit:  {}", settings.notification_limit);
    println!("  Recent expenses:     {}", settings.recent_expenses);
    println!("  Recent incomes:      {}", settings.recent_incomes);
    println!("  Recent transactions: {}", settings.recent_transactions);

    Ok(())
}
