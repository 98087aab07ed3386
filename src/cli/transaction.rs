//! CLI command for the transaction listing

use clap::Args;

use super::context::Context;
use super::dashboard::notice_for;
use crate::display::format_ledger;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{ExpenseCategory, TransactionKind};
use crate::reports::{TransactionFilter, TransactionLedger};
use crate::storage::Collection;

/// Filters for `finboard transactions`
#[derive(Args, Debug, Default)]
pub struct TransactionArgs {
    /// Only transactions whose description contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only expenses in this category (e.g. "groceries"), or "all"
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only "expense" or "income" entries
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Number of transactions to show (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl TransactionArgs {
    /// Build the ledger filter, rejecting unknown categories and kinds
    pub fn filter(&self) -> FinboardResult<TransactionFilter> {
        let category = match self.category.as_deref() {
            None => None,
            Some(c) if c.eq_ignore_ascii_case("all") => None,
            Some(c) => Some(
                c.parse::<ExpenseCategory>()
                    .map_err(|e| FinboardError::Validation(e.to_string()))?,
            ),
        };

        let kind = match self.kind.as_deref() {
            None => None,
            Some(k) if k.eq_ignore_ascii_case("all") => None,
            Some(k) => Some(k.parse::<TransactionKind>().map_err(FinboardError::Validation)?),
        };

        Ok(TransactionFilter {
            search: self.search.clone().filter(|s| !s.trim().is_empty()),
            category,
            kind,
        })
    }
}

/// Handle `finboard transactions`
pub fn handle_transactions(ctx: &Context, args: TransactionArgs) -> FinboardResult<()> {
    let filter = args.filter()?;
    let snapshot = ctx.snapshot();
    let ledger = TransactionLedger::generate(&snapshot.expenses, &snapshot.incomes, &filter);
    let limit = args.limit.unwrap_or(ctx.settings.recent_transactions);

    print!(
        "{}",
        notice_for(&snapshot, &[Collection::Expenses, Collection::Incomes])
    );
    print!("{}", format_ledger(&ledger, limit, &ctx.settings));
    Ok(())
}
