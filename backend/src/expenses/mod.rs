//! Expenses module
//!
//! Expense records, their SQLite storage, and the service that operates on them.

pub mod db;
pub mod models;
pub mod service;
pub mod store;

pub use db::ExpenseDb;
pub use models::{Expense, ExpenseDraft, ExpenseId, ThresholdMatches};
pub use service::ExpenseService;
pub use store::ExpenseStore;
