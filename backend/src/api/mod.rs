//! API module
//!
//! Contains HTTP request handlers and assembles them into the application router.

pub mod expenses;
pub mod health;
pub mod middleware;

use crate::state::SharedState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with all routes and middleware
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/api/expenses/high-expenses",
            get(expenses::list_high_expenses),
        )
        .route(
            "/api/expenses/:id",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        // The browser frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
