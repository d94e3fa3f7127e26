pub mod handlers;
pub mod models;
mod repository;

// Re-export handlers for use in main.rs
pub use handlers::{list_recurring_transactions, list_transactions};

pub use models::{RecurringTransaction, Transaction};
pub use repository::{
    PgRecurringTransactionRepository, PgTransactionRepository, RecurringTransactionSource,
    TransactionSource,
};
