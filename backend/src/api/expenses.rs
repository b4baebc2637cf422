//! Expense API handlers
//!
//! Contains HTTP request handlers for expense CRUD operations and the
//! high-expense threshold query.

use crate::error::AppError;
use crate::expenses::{Expense, ExpenseDraft, ExpenseId};
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

/// Query parameters for the high-expense filter
#[derive(Debug, Deserialize)]
pub struct ThresholdQuery {
    /// Amounts strictly above this value are returned
    pub threshold: f64,
}

/// GET /api/expenses - List all expenses
pub async fn list_expenses(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let expenses = state.expenses.list_all().await?;
    Ok(Json(expenses))
}

/// GET /api/expenses/:id - Get a specific expense
pub async fn get_expense(
    State(state): State<SharedState>,
    Path(id): Path<ExpenseId>,
) -> Result<Json<Expense>, AppError> {
    let expense = state
        .expenses
        .get_by_id(id)
        .await?
        .ok_or(AppError::ExpenseNotFound(id))?;

    Ok(Json(expense))
}

/// GET /api/expenses/high-expenses?threshold=T - Expenses with amount > T
///
/// No matches is not an error; the response is an empty list.
pub async fn list_high_expenses(
    State(state): State<SharedState>,
    Query(query): Query<ThresholdQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    if !query.threshold.is_finite() {
        return Err(AppError::InvalidRequest(format!(
            "threshold must be a finite number, got {}",
            query.threshold
        )));
    }

    let matches = state.expenses.list_above_threshold(query.threshold).await?;
    Ok(Json(matches.into_vec()))
}

/// POST /api/expenses - Create a new expense
pub async fn create_expense(
    State(state): State<SharedState>,
    Json(draft): Json<ExpenseDraft>,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let expense = state.expenses.create(draft).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// PUT /api/expenses/:id - Overwrite category, amount and date of an expense
pub async fn update_expense(
    State(state): State<SharedState>,
    Path(id): Path<ExpenseId>,
    Json(draft): Json<ExpenseDraft>,
) -> Result<Json<Expense>, AppError> {
    let expense = state
        .expenses
        .update(id, draft)
        .await?
        .ok_or(AppError::ExpenseNotFound(id))?;

    Ok(Json(expense))
}

/// DELETE /api/expenses/:id - Delete an expense
///
/// Succeeds whether or not the expense existed.
pub async fn delete_expense(
    State(state): State<SharedState>,
    Path(id): Path<ExpenseId>,
) -> Result<StatusCode, AppError> {
    state.expenses.delete(id).await?;
    Ok(StatusCode::OK)
}
