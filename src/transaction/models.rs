use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for one-off transactions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i32,
    pub category_id: Option<i32>,
    pub type_id: Option<i32>,
    pub amount: Decimal,
    /// NULL dates are allowed by the schema; such rows never reach a bucket
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Database model for recurring transaction templates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecurringTransaction {
    pub id: i32,
    pub category_id: Option<i32>,
    pub type_id: Option<i32>,
    pub amount: Decimal,
    /// Free-text cadence ("monthly", "yearly", ...)
    pub frequency: String,
    pub start_date: NaiveDate,
    /// `None` while the template is still active
    pub end_date: Option<NaiveDate>,
    pub last_occurrence: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Transaction information returned in responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction identifier
    #[schema(example = 42)]
    pub id: i32,
    /// Category this transaction belongs to
    pub category_id: Option<i32>,
    /// Type (income/expense) this transaction belongs to
    pub type_id: Option<i32>,
    /// Signed amount
    #[schema(example = 50.00)]
    pub amount: Decimal,
    /// When the spend occurred
    pub date: Option<DateTime<Utc>>,
    #[schema(example = "Weekly groceries")]
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            category_id: t.category_id,
            type_id: t.type_id,
            amount: t.amount,
            date: t.date,
            description: t.description,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Recurring transaction template returned in responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionResponse {
    #[schema(example = 7)]
    pub id: i32,
    pub category_id: Option<i32>,
    pub type_id: Option<i32>,
    #[schema(example = 39.90)]
    pub amount: Decimal,
    /// Cadence as stored, e.g. "monthly"
    #[schema(example = "monthly")]
    pub frequency: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub last_occurrence: Option<NaiveDate>,
    #[schema(example = "Streaming subscription")]
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RecurringTransaction> for RecurringTransactionResponse {
    fn from(r: RecurringTransaction) -> Self {
        Self {
            id: r.id,
            category_id: r.category_id,
            type_id: r.type_id,
            amount: r.amount,
            frequency: r.frequency,
            start_date: r.start_date,
            end_date: r.end_date,
            last_occurrence: r.last_occurrence,
            description: r.description,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
