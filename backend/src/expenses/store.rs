//! Record store contract
//!
//! The service layer only talks to persistence through this trait, so the
//! SQLite-backed [`ExpenseDb`](super::ExpenseDb) can be swapped for any other
//! implementation (tests use an in-memory one).

use crate::error::AppError;
use crate::expenses::models::{Expense, ExpenseDraft, ExpenseId};
use async_trait::async_trait;

/// Durable table of expense rows addressed by a store-generated id
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Fetch every stored expense. Ordering is implementation-defined.
    async fn find_all(&self) -> Result<Vec<Expense>, AppError>;

    /// Fetch a single expense by id
    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, AppError>;

    /// Insert a new row and return it with its assigned id
    async fn insert(&self, draft: &ExpenseDraft) -> Result<Expense, AppError>;

    /// Overwrite the row with `expense.id`, creating it if absent
    async fn save(&self, expense: &Expense) -> Result<Expense, AppError>;

    /// Delete by id. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), AppError>;
}
