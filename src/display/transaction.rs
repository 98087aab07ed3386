//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{date, money, signed_money, truncate};
use crate::config::Settings;
use crate::models::Transaction;
use crate::reports::TransactionLedger;

#[derive(Tabled)]
struct TransactionTableRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionTableRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            date: date(txn.date, settings),
            description: truncate(&txn.description, 32),
            category: txn
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "Income".to_string()),
            amount: signed_money(txn.signed_amount(), settings),
        }
    }
}

/// Format transactions as a table. Expenses show with a "-" prefix and
/// their category, incomes with "+" and "Income".
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionTableRow> = transactions
        .iter()
        .map(|txn| TransactionTableRow::new(txn, settings))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the ledger, showing at most `limit` entries
pub fn format_ledger(ledger: &TransactionLedger, limit: usize, settings: &Settings) -> String {
    let shown = ledger.recent(limit);
    let mut output = format_transaction_table(shown, settings);

    if !ledger.entries.is_empty() {
        output.push_str(&format!(
            "\nShowing {} of {} transactions   In: {}   Out: {}\n",
            shown.len(),
            ledger.entries.len(),
            money(ledger.total_inflows, settings),
            money(ledger.total_outflows, settings)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Income, Money};
    use crate::reports::TransactionFilter;
    use chrono::NaiveDate;

    fn ledger() -> TransactionLedger {
        let day = |d| NaiveDate::from_ymd_opt(2025, 2, d).unwrap();
        TransactionLedger::generate(
            &[Expense::new("e1", "Bus pass", Money::from_units(60), ExpenseCategory::Transportation, day(3))],
            &[Income::new("i1", "Freelance", Money::from_cents(42050), day(4))],
            &TransactionFilter::default(),
        )
    }

    #[test]
    fn test_format_ledger() {
        let output = format_ledger(&ledger(), 10, &Settings::default());
        assert!(output.contains("-$60.00"));
        assert!(output.contains("Transportation"));
        assert!(output.contains("+$420.50"));
        assert!(output.contains("Income"));
        assert!(output.contains("Showing 2 of 2 transactions"));
    }

    #[test]
    fn test_limit() {
        let output = format_ledger(&ledger(), 1, &Settings::default());
        assert!(output.contains("Freelance"));
        assert!(!output.contains("Bus pass"));
        assert!(output.contains("Showing 1 of 2 transactions"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            format_transaction_table(&[], &Settings::default()),
            "No transactions found.\n"
        );
    }
}
