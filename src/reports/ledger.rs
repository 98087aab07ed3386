//! Transaction Ledger
//!
//! Expenses and incomes merged into one list, newest first, with filtering.

use serde::Serialize;

use crate::models::{Expense, ExpenseCategory, Income, Money, Transaction, TransactionKind};

/// Filter options for the ledger
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Only expenses in this category (incomes never match)
    pub category: Option<ExpenseCategory>,
    /// Only this kind
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    /// Check if a transaction matches this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(ref search) = self.search {
            if !txn
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }

        if let Some(category) = self.category {
            if txn.category != Some(category) {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        true
    }
}

/// Transaction Ledger
#[derive(Debug, Clone, Serialize)]
pub struct TransactionLedger {
    pub entries: Vec<Transaction>,
    pub total_inflows: Money,
    pub total_outflows: Money,
}

impl TransactionLedger {
    /// Merge, sort newest first and filter. Same-day entries keep their
    /// input order, expenses ahead of incomes.
    pub fn generate(expenses: &[Expense], incomes: &[Income], filter: &TransactionFilter) -> Self {
        let mut entries: Vec<Transaction> = expenses
            .iter()
            .map(Transaction::from)
            .chain(incomes.iter().map(Transaction::from))
            .filter(|txn| filter.matches(txn))
            .collect();

        // sort_by is stable
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        let (mut total_inflows, mut total_outflows) = (Money::zero(), Money::zero());
        for txn in &entries {
            match txn.kind {
                TransactionKind::Income => total_inflows += txn.amount,
                TransactionKind::Expense => total_outflows += txn.amount,
            }
        }

        Self {
            entries,
            total_inflows,
            total_outflows,
        }
    }

    /// The first `limit` entries
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.entries[..limit.min(self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn expenses() -> Vec<Expense> {
        vec![
            Expense::new("e1", "Weekly groceries", Money::from_units(80), ExpenseCategory::Groceries, day(3)),
            Expense::new("e2", "Cinema", Money::from_units(15), ExpenseCategory::Entertainment, day(10)),
            Expense::new("e3", "Grocery top-up", Money::from_units(12), ExpenseCategory::Groceries, day(10)),
        ]
    }

    fn incomes() -> Vec<Income> {
        vec![
            Income::new("i1", "Salary", Money::from_units(2500), day(1)),
            Income::new("i2", "Sold bike", Money::from_units(150), day(10)),
        ]
    }

    #[test]
    fn test_merged_newest_first_and_stable() {
        let ledger = TransactionLedger::generate(&expenses(), &incomes(), &TransactionFilter::default());
        let ids: Vec<_> = ledger.entries.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e3", "i2", "e1", "i1"]);
        assert_eq!(ledger.total_inflows, Money::from_units(2650));
        assert_eq!(ledger.total_outflows, Money::from_units(107));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = TransactionFilter {
            search: Some("GROCER".into()),
            ..Default::default()
        };
        let ledger = TransactionLedger::generate(&expenses(), &incomes(), &filter);
        assert_eq!(ledger.entries.len(), 2);
    }

    #[test]
    fn test_category_filter_excludes_incomes() {
        let filter = TransactionFilter {
            category: Some(ExpenseCategory::Entertainment),
            ..Default::default()
        };
        let ledger = TransactionLedger::generate(&expenses(), &incomes(), &filter);
        assert_eq!(ledger.entries.len(), 1);
        assert_eq!(ledger.entries[0].id, "e2");
        assert_eq!(ledger.total_inflows, Money::zero());
    }

    #[test]
    fn test_kind_filter() {
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Income),
            ..Default::default()
        };
        let ledger = TransactionLedger::generate(&expenses(), &incomes(), &filter);
        assert!(ledger.entries.iter().all(|t| t.kind == TransactionKind::Income));
        assert_eq!(ledger.entries.len(), 2);
    }

    #[test]
    fn test_recent() {
        let ledger = TransactionLedger::generate(&expenses(), &incomes(), &TransactionFilter::default());
        assert_eq!(ledger.recent(2).len(), 2);
        assert_eq!(ledger.recent(50).len(), 5);
    }
}
