use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

/// Request body for a natural-language question
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Question about the stored transactions (1-2000 characters)
    #[validate(length(min = 1, max = 2000, message = "Question must be 1-2000 characters"))]
    #[schema(example = "How much did I spend on groceries last month?")]
    pub question: String,
}

/// A single cell of a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum QueryValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
}

/// Column name -> value
pub type QueryRow = BTreeMap<String, QueryValue>;

/// Rows returned by an executed query
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Column names in select order
    pub columns: Vec<String>,
    /// One object per row, each cell tagged with its kind
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<QueryRow>,
}

/// Answer to a natural-language question
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryAnswerResponse {
    #[schema(example = "How much did I spend on groceries last month?")]
    pub question: String,
    /// SQL that was executed
    #[schema(example = "SELECT SUM(t.amount) AS total FROM transactions t")]
    pub query: String,
    /// Summary written by the language model
    #[schema(example = "You spent R$ 812.40 on groceries in May.")]
    pub answer: String,
    pub result: QueryResult,
}
