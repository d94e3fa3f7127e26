use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::errors::{AppError, ErrorResponse};

use super::models::{RecurringTransactionResponse, TransactionResponse};
use super::repository::{RecurringTransactionSource, TransactionSource};

/// GET /transactions - List every one-off transaction
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "Transactions",
    responses(
        (status = 200, description = "All one-off transactions", body = Vec<TransactionResponse>),
        (status = 500, description = "Transaction store unavailable", body = ErrorResponse)
    )
)]
#[get("/transactions")]
pub async fn list_transactions(
    source: web::Data<Arc<dyn TransactionSource>>,
) -> Result<HttpResponse, AppError> {
    let transactions = source.list_transactions().await?;

    let response: Vec<TransactionResponse> = transactions.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /recurring-transactions - List every recurring transaction template
#[utoipa::path(
    get,
    path = "/recurring-transactions",
    tag = "Transactions",
    responses(
        (status = 200, description = "All recurring transactions", body = Vec<RecurringTransactionResponse>),
        (status = 500, description = "Transaction store unavailable", body = ErrorResponse)
    )
)]
#[get("/recurring-transactions")]
pub async fn list_recurring_transactions(
    source: web::Data<Arc<dyn RecurringTransactionSource>>,
) -> Result<HttpResponse, AppError> {
    let recurring = source.list_recurring_transactions().await?;

    let response: Vec<RecurringTransactionResponse> =
        recurring.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(response))
}
