//! Mintly Backend Library
//!
//! Expense tracking REST API over a SQLite record store.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod expenses;
/// Application state management
///
/// Holds the expense service shared by all handlers.
pub mod state;

pub use error::AppError;
