//! Budget business logic - expense items and the spend summary shown on
//! the event dashboard.

use crate::entities::{BudgetCategory, BudgetItem};

/// A budget line as entered on the add-item form.
#[derive(Clone, Debug)]
pub struct BudgetItemDraft {
    /// Expense category
    pub category: BudgetCategory,
    /// Amount in som
    pub amount: i64,
    /// What the money is for
    pub description: String,
    /// Optional date
    pub date: Option<String>,
}

/// Appends a new budget item with the given id.
pub fn add_item(items: &mut Vec<BudgetItem>, draft: BudgetItemDraft, id: String) -> BudgetItem {
    let item = BudgetItem {
        id,
        category: draft.category,
        amount: draft.amount,
        description: draft.description,
        date: draft.date,
    };
    items.push(item.clone());
    item
}

/// Spending analysis against the event's budget ceiling. The ceiling is a
/// soft target: overspend is surfaced here and never blocks anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetSummary {
    /// The event's budget ceiling in som
    pub total_budget: i64,
    /// Sum of all budget items in som
    pub total_spent: i64,
    /// Ceiling minus spend; negative when over budget
    pub remaining: i64,
    /// Spend as a percentage of the ceiling (0 when the ceiling is 0)
    pub spent_percent: f64,
}

impl BudgetSummary {
    /// Computes the summary for a set of items against a ceiling.
    #[must_use]
    pub fn compute(items: &[BudgetItem], total_budget: i64) -> Self {
        let total_spent: i64 = items.iter().map(|item| item.amount).sum();
        let remaining = total_budget - total_spent;
        let spent_percent = if total_budget == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                (total_spent as f64 / total_budget as f64) * 100.0
            }
        };

        Self {
            total_budget,
            total_spent,
            remaining,
            spent_percent,
        }
    }

    /// Amount over the ceiling, or `None` while spend is within budget.
    #[must_use]
    pub const fn overspend(&self) -> Option<i64> {
        if self.remaining < 0 {
            Some(-self.remaining)
        } else {
            None
        }
    }
}
