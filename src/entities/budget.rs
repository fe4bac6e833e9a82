//! Budget item entity - a single planned expense.

use serde::{Deserialize, Serialize};

/// Expense category for grouping on the budget screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    /// Venue rental
    Venue,
    /// Catering
    Food,
    /// Decoration
    Decor,
    /// Music and entertainment
    Music,
    /// Photo and video
    Photo,
    /// Everything else
    Other,
}

/// A single expense line. Belongs to the active event implicitly, not by
/// foreign key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier
    pub id: String,
    /// Expense category
    pub category: BudgetCategory,
    /// Amount in som
    pub amount: i64,
    /// What the money is for
    pub description: String,
    /// Optional date the expense is due or was made
    pub date: Option<String>,
}
