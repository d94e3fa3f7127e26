use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};

use super::models::{RecurringTransaction, Transaction};
use crate::errors::AppError;

/// Read-only provider of every stored one-off transaction.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError>;
}

/// Read-only provider of every stored recurring transaction template.
#[async_trait]
pub trait RecurringTransactionSource: Send + Sync {
    async fn list_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>, AppError>;
}

/// Postgres-backed transaction source.
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionSource for PgTransactionRepository {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, category_id, type_id, amount, date, description,
                   created_at, updated_at
            FROM transactions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch transactions: {e}");
            AppError::FetchError(format!("failed to list transactions: {e}"))
        })?;

        debug!(count = transactions.len(), "Fetched transactions");
        Ok(transactions)
    }
}

/// Postgres-backed recurring transaction source.
#[derive(Clone)]
pub struct PgRecurringTransactionRepository {
    pool: PgPool,
}

impl PgRecurringTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecurringTransactionSource for PgRecurringTransactionRepository {
    async fn list_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>, AppError> {
        let recurring = sqlx::query_as::<_, RecurringTransaction>(
            r#"
            SELECT id, category_id, type_id, amount, frequency, start_date,
                   end_date, last_occurrence, description, created_at, updated_at
            FROM recurring_transactions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch recurring transactions: {e}");
            AppError::FetchError(format!("failed to list recurring transactions: {e}"))
        })?;

        debug!(count = recurring.len(), "Fetched recurring transactions");
        Ok(recurring)
    }
}
