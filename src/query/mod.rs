mod executor;
pub mod handlers;
mod llm;
pub mod models;
mod service;

// Re-export handlers for use in main.rs
pub use handlers::ask_question;

pub use executor::{PgSqlExecutor, SqlExecutor};
pub use llm::{LanguageModel, OpenAiClient};
pub use models::{QueryResult, QueryRow, QueryValue};
pub use service::{sanitize_sql, QueryService};
