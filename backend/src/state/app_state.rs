// Application state management
// Holds the expense service and process-level metadata

use crate::expenses::{ExpenseService, ExpenseStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// State shared by all handlers
pub type SharedState = Arc<AppState>;

/// Main application state
///
/// Contains no mutable in-process data; all records live in the store.
#[derive(Clone)]
pub struct AppState {
    /// Expense operations
    pub expenses: ExpenseService,
    /// When this process started serving
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create application state over the given store
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self {
            expenses: ExpenseService::new(store),
            started_at: Utc::now(),
        }
    }

    /// Wrap into the shared handle used as router state
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
