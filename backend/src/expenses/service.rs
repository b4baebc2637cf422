//! Expense service
//!
//! Business operations on top of an [`ExpenseStore`]: update-merge and the
//! above-threshold filter. Everything else is a pass-through.

use crate::error::AppError;
use crate::expenses::models::{Expense, ExpenseDraft, ExpenseId, ThresholdMatches};
use crate::expenses::store::ExpenseStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Expense operations over a shared record store
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
}

impl ExpenseService {
    /// Create a service backed by `store`
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Every stored expense, in store order
    pub async fn list_all(&self) -> Result<Vec<Expense>, AppError> {
        let expenses = self.store.find_all().await?;
        debug!(count = expenses.len(), "Listed expenses");
        Ok(expenses)
    }

    /// A single expense, or `None` when the id is unknown
    pub async fn get_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, AppError> {
        let expense = self.store.find_by_id(id).await?;
        debug!(expense_id = id, found = expense.is_some(), "Fetched expense");
        Ok(expense)
    }

    /// Expenses whose amount is strictly greater than `threshold`
    pub async fn list_above_threshold(&self, threshold: f64) -> Result<ThresholdMatches, AppError> {
        let matches: Vec<Expense> = self
            .store
            .find_all()
            .await?
            .into_iter()
            .filter(|expense| expense.amount > threshold)
            .collect();

        debug!(threshold, matched = matches.len(), "Filtered expenses by threshold");
        Ok(ThresholdMatches::from_vec(matches))
    }

    /// Persist a new expense and return it with its assigned id
    pub async fn create(&self, draft: ExpenseDraft) -> Result<Expense, AppError> {
        let expense = self.store.insert(&draft).await?;
        info!(
            expense_id = expense.id,
            category = %expense.category,
            amount = expense.amount,
            "Created expense"
        );
        Ok(expense)
    }

    /// Overwrite category, amount and date of an existing expense
    ///
    /// Returns `None` (and leaves the store untouched) when `id` is unknown.
    pub async fn update(
        &self,
        id: ExpenseId,
        draft: ExpenseDraft,
    ) -> Result<Option<Expense>, AppError> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            warn!(expense_id = id, "Expense not found for update");
            return Ok(None);
        };

        existing.apply(draft);
        let saved = self.store.save(&existing).await?;
        info!(expense_id = saved.id, "Updated expense");
        Ok(Some(saved))
    }

    /// Delete an expense. Unknown ids are ignored.
    pub async fn delete(&self, id: ExpenseId) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;
        info!(expense_id = id, "Deleted expense");
        Ok(())
    }
}
