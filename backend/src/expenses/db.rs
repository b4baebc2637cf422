//! Expense database operations
//!
//! SQLite implementation of [`ExpenseStore`].

use crate::error::AppError;
use crate::expenses::models::{Expense, ExpenseDraft, ExpenseId};
use crate::expenses::store::ExpenseStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Database connection pool for expense records
pub struct ExpenseDb {
    pool: SqlitePool,
}

impl ExpenseDb {
    /// Initialize database connection pool
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file, or a `sqlite:` URL
    ///
    /// # Returns
    /// * `Ok(ExpenseDb)` if successful
    /// * `Err(AppError)` if connection or migration failed
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            // Ensure parent directory exists
            if let Some(parent) = PathBuf::from(db_path).parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
                })?;
            }
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database path: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to connect to database: {}", e))
            })?;

        info!("Connected to SQLite database at: {}", db_path);

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations...");

        let migration_sql = include_str!("../../migrations/001_create_expenses.sql");

        for statement in split_statements(migration_sql) {
            sqlx::query(statement.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow::anyhow!(
                        "Migration failed: {} - Statement: {}",
                        e,
                        statement.chars().take(100).collect::<String>()
                    ))
                })?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Strip `--` comments from a migration script and split it into statements
fn split_statements(sql: &str) -> Vec<String> {
    let mut cleaned = String::new();
    for line in sql.lines() {
        let without_comment = match line.find("--") {
            Some(pos) => &line[..pos],
            None => line,
        };
        let trimmed = without_comment.trim();
        if trimmed.is_empty() {
            continue;
        }
        cleaned.push_str(trimmed);
        cleaned.push(' ');
    }

    cleaned
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl ExpenseStore for ExpenseDb {
    async fn find_all(&self) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT id, category, amount, date FROM expenses ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch expenses: {}", e)))?;

        Ok(expenses)
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            "SELECT id, category, amount, date FROM expenses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch expense: {}", e)))?;

        Ok(expense)
    }

    async fn insert(&self, draft: &ExpenseDraft) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            "INSERT INTO expenses (category, amount, date) VALUES (?, ?, ?) \
             RETURNING id, category, amount, date",
        )
        .bind(&draft.category)
        .bind(draft.amount)
        .bind(&draft.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to insert expense: {}", e)))?;

        debug!("Inserted expense: {}", expense.id);
        Ok(expense)
    }

    async fn save(&self, expense: &Expense) -> Result<Expense, AppError> {
        let saved = sqlx::query_as::<_, Expense>(
            "INSERT INTO expenses (id, category, amount, date) VALUES (?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             category = excluded.category, amount = excluded.amount, date = excluded.date \
             RETURNING id, category, amount, date",
        )
        .bind(expense.id)
        .bind(&expense.category)
        .bind(expense.amount)
        .bind(&expense.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to save expense: {}", e)))?;

        debug!("Saved expense: {}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), AppError> {
        sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to delete expense: {}", e)))?;

        debug!("Deleted expense: {}", id);
        Ok(())
    }
}
