use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Row, TypeInfo};
use tracing::{debug, warn};

use super::models::{QueryResult, QueryRow, QueryValue};
use crate::errors::AppError;

const STATEMENT_TIMEOUT_MS: u32 = 10_000;

/// Runs generated SQL and returns typed rows.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<QueryResult, AppError>;
}

/// Executes inside a read-only transaction that is always rolled back.
#[derive(Clone)]
pub struct PgSqlExecutor {
    pool: PgPool,
}

impl PgSqlExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SqlExecutor for PgSqlExecutor {
    async fn execute(&self, sql: &str) -> Result<QueryResult, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;
        sqlx::query(&format!(
            "SET LOCAL statement_timeout = {STATEMENT_TIMEOUT_MS}"
        ))
        .execute(&mut *tx)
        .await?;

        let rows = sqlx::query(sql)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::QueryFailed(e.to_string()));

        if let Err(e) = tx.rollback().await {
            warn!("Failed to roll back read-only query transaction: {e}");
        }

        let rows = rows?;
        debug!(rows = rows.len(), "Generated query executed");

        convert_rows(&rows)
    }
}

fn convert_rows(rows: &[PgRow]) -> Result<QueryResult, AppError> {
    // Without rows there is nothing to read column names from
    let Some(first) = rows.first() else {
        return Ok(QueryResult::default());
    };

    let columns: Vec<String> = first
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    let mut converted = Vec::with_capacity(rows.len());
    for row in rows {
        let mut out = QueryRow::new();
        for (index, name) in columns.iter().enumerate() {
            let value =
                decode_value(row, index).map_err(|e| AppError::QueryFailed(e.to_string()))?;
            out.insert(name.clone(), value);
        }
        converted.push(out);
    }

    Ok(QueryResult {
        columns,
        rows: converted,
    })
}

fn number<T: Into<f64>>(v: Option<T>) -> Option<QueryValue> {
    v.map(|n| QueryValue::Number(n.into()))
}

fn decode_value(row: &PgRow, index: usize) -> Result<QueryValue, sqlx::Error> {
    let type_name = row.column(index).type_info().name().to_string();

    let value = match type_name.as_str() {
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(QueryValue::Bool),
        "INT2" => number(row.try_get::<Option<i16>, _>(index)?),
        "INT4" => number(row.try_get::<Option<i32>, _>(index)?),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)?
            .map(|n| QueryValue::Number(n as f64)),
        "FLOAT4" => number(row.try_get::<Option<f32>, _>(index)?),
        "FLOAT8" => number(row.try_get::<Option<f64>, _>(index)?),
        "NUMERIC" => row
            .try_get::<Option<Decimal>, _>(index)?
            .and_then(|d| d.to_f64())
            .map(QueryValue::Number),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map(|d| QueryValue::Date(d.and_time(NaiveTime::MIN).and_utc())),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map(|d| QueryValue::Date(d.and_utc())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map(QueryValue::Date),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CHAR" => row
            .try_get::<Option<String>, _>(index)?
            .map(QueryValue::Text),
        other => {
            debug!(column_type = other, "Unsupported column type, returning null");
            None
        }
    };

    Ok(value.unwrap_or(QueryValue::Null))
}
