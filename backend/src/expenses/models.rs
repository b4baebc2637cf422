//! Expense data models
//!
//! Defines the persisted expense record and the request-side draft.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Unique identifier for an expense (assigned by the store)
pub type ExpenseId = i64;

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Expense {
    /// Store-assigned identifier, immutable once set
    pub id: ExpenseId,
    /// Free-form category label
    pub category: String,
    /// Monetary amount; sign and magnitude are not constrained
    pub amount: f64,
    /// Date text, stored verbatim and never parsed
    pub date: String,
}

impl Expense {
    /// Overwrite the mutable fields with those of `draft`, keeping `id`
    pub fn apply(&mut self, draft: ExpenseDraft) {
        self.category = draft.category;
        self.amount = draft.amount;
        self.date = draft.date;
    }
}

/// Expense fields as supplied by a client on create or update
///
/// Any `id` in the request body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Category label
    pub category: String,
    /// Monetary amount
    pub amount: f64,
    /// Date text
    pub date: String,
}

impl ExpenseDraft {
    /// Create a new draft
    pub fn new(category: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
        }
    }
}

/// Result of filtering expenses by a strict amount threshold
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdMatches {
    /// At least one expense exceeded the threshold
    Found(Vec<Expense>),
    /// No expense exceeded the threshold (including an empty store)
    NoMatches,
}

impl ThresholdMatches {
    /// Build from a filtered list, collapsing an empty list into `NoMatches`
    pub fn from_vec(expenses: Vec<Expense>) -> Self {
        if expenses.is_empty() {
            ThresholdMatches::NoMatches
        } else {
            ThresholdMatches::Found(expenses)
        }
    }

    /// Flatten into a list (empty for `NoMatches`)
    pub fn into_vec(self) -> Vec<Expense> {
        match self {
            ThresholdMatches::Found(expenses) => expenses,
            ThresholdMatches::NoMatches => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_preserves_id() {
        let mut expense = Expense {
            id: 42,
            category: "Food".to_string(),
            amount: 12.5,
            date: "2024-01-01".to_string(),
        };
        expense.apply(ExpenseDraft::new("Rent", -900.0, "next tuesday"));

        assert_eq!(expense.id, 42);
        assert_eq!(expense.category, "Rent");
        assert_eq!(expense.amount, -900.0);
        assert_eq!(expense.date, "next tuesday");
    }

    #[test]
    fn test_draft_ignores_id_in_body() {
        let draft: ExpenseDraft = serde_json::from_str(
            r#"{"id": 99, "category": "Food", "amount": 3, "date": "2024-02-02"}"#,
        )
        .unwrap();
        assert_eq!(draft, ExpenseDraft::new("Food", 3.0, "2024-02-02"));
    }

    #[test]
    fn test_draft_requires_all_fields() {
        let result = serde_json::from_str::<ExpenseDraft>(r#"{"category": "Food", "amount": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_threshold_matches_collapses_empty() {
        assert_eq!(ThresholdMatches::from_vec(vec![]), ThresholdMatches::NoMatches);
        assert!(ThresholdMatches::NoMatches.into_vec().is_empty());
    }
}
