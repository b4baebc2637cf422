//! Health check endpoint

use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, response::Json};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" when the store answered
    pub status: String,
    /// Crate version
    pub version: String,
    /// RFC 3339 timestamp of process start
    pub started_at: String,
    /// Number of stored expenses
    pub expense_count: usize,
}

/// GET /api/health - Liveness plus a store round-trip
pub async fn health_check(
    State(state): State<SharedState>,
) -> Result<Json<HealthResponse>, AppError> {
    let expense_count = state.expenses.list_all().await?.len();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at.to_rfc3339(),
        expense_count,
    }))
}
