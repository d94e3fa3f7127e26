use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tracing::info;

use super::executor::SqlExecutor;
use super::llm::LanguageModel;
use super::models::QueryAnswerResponse;
use crate::errors::AppError;

const SQL_SYSTEM_PROMPT: &str = r#"Translate the user's question into a single PostgreSQL SELECT statement.
Tables:
  types(id, name, description, deleted_at) -- name is 'income' or 'expense'
  categories(id, name, description, color, deleted_at)
  transactions(id, category_id, type_id, amount, description, date)
  recurring_transactions(id, category_id, type_id, amount, description, frequency,
                         start_date, end_date, last_occurrence)
Spend for a period may come from both transactions and recurring_transactions.
Reply with the SQL only: no markdown, no comments, no explanation."#;

const ANSWER_SYSTEM_PROMPT: &str = r#"Answer the user's question concisely using only the query results provided.
Lead with the direct answer, include exact numbers, and say so plainly when the results are empty."#;

lazy_static! {
    /// Contents of the first markdown code fence, language tag optional
    static ref FENCED_BLOCK: Regex =
        Regex::new(r"(?s)```[A-Za-z]*[ \t]*\r?\n?(.*?)```").expect("Invalid fence regex");
}

/// Strip markdown fences, whitespace and trailing semicolons from model output.
/// Returns `None` when nothing is left.
pub fn sanitize_sql(raw: &str) -> Option<String> {
    let body = FENCED_BLOCK
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw);

    let sql = body.trim().trim_end_matches(';').trim();
    if sql.is_empty() {
        None
    } else {
        Some(sql.to_string())
    }
}

/// Question -> SQL -> rows -> written answer.
pub struct QueryService {
    model: Arc<dyn LanguageModel>,
    executor: Arc<dyn SqlExecutor>,
}

impl QueryService {
    pub fn new(model: Arc<dyn LanguageModel>, executor: Arc<dyn SqlExecutor>) -> Self {
        Self { model, executor }
    }

    pub async fn answer(&self, question: &str) -> Result<QueryAnswerResponse, AppError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::ValidationError(
                "Question cannot be empty".to_string(),
            ));
        }

        let raw = self.model.complete(SQL_SYSTEM_PROMPT, question).await?;
        let sql = sanitize_sql(&raw).ok_or_else(|| {
            AppError::UpstreamError("Language model returned no SQL".to_string())
        })?;
        info!(%sql, "Generated SQL for question");

        let result = self.executor.execute(&sql).await?;

        let payload = serde_json::to_string(&result)
            .map_err(|e| AppError::InternalError(format!("Failed to encode results: {e}")))?;
        let prompt = format!("Question: {question}\nQuery: {sql}\nResults (JSON): {payload}");

        let answer = self.model.complete(ANSWER_SYSTEM_PROMPT, &prompt).await?;
        info!(rows = result.rows.len(), "Answered question");

        Ok(QueryAnswerResponse {
            question: question.to_string(),
            query: sql,
            answer: answer.trim().to_string(),
            result,
        })
    }
}
