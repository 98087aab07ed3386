//! CLI command for budgets

use super::context::Context;
use super::dashboard::notice_for;
use crate::display::format_budget_overview;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Budget, ExpenseCategory};
use crate::reports::BudgetOverviewReport;
use crate::storage::Collection;

/// Handle `finboard budgets [CATEGORY]`
pub fn handle_budgets(ctx: &Context, category: Option<String>) -> FinboardResult<()> {
    let snapshot = ctx.snapshot();
    print!("{}", notice_for(&snapshot, &[Collection::Budgets]));

    let report = match category {
        Some(name) => {
            let budget = find_budget(&snapshot.budgets, &name)?;
            BudgetOverviewReport::generate(std::slice::from_ref(budget))?
        }
        None => BudgetOverviewReport::generate(&snapshot.budgets)?,
    };

    print!("{}", format_budget_overview(&report, &ctx.settings));
    Ok(())
}

/// Find the budget for a category name or code
fn find_budget<'a>(budgets: &'a [Budget], name: &str) -> FinboardResult<&'a Budget> {
    let category = name
        .parse::<ExpenseCategory>()
        .map_err(|e| FinboardError::Validation(e.to_string()))?;

    budgets
        .iter()
        .find(|b| b.category == category)
        .ok_or_else(|| FinboardError::budget_not_found(category.label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn budgets() -> Vec<Budget> {
        vec![
            Budget::new("b1", ExpenseCategory::Food, Money::from_units(200), Money::zero()),
            Budget::new("b2", ExpenseCategory::Utilities, Money::from_units(150), Money::zero()),
        ]
    }

    #[test]
    fn test_find_budget() {
        let budgets = budgets();
        assert_eq!(find_budget(&budgets, "utilities").unwrap().id.as_str(), "b2");
        assert!(find_budget(&budgets, "rent").unwrap_err().is_not_found());
        assert!(find_budget(&budgets, "boats").unwrap_err().is_validation());
    }
}
