use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::errors::{AppError, ErrorResponse};

use super::models::{QueryAnswerResponse, QueryRequest};
use super::service::QueryService;

/// POST /v1/query - Answer a question about the stored transactions
#[utoipa::path(
    post,
    path = "/v1/query",
    tag = "Query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Generated SQL, its rows and a written answer", body = QueryAnswerResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 422, description = "Generated SQL could not be executed", body = ErrorResponse),
        (status = 502, description = "Language model failed", body = ErrorResponse),
        (status = 503, description = "Language model not configured", body = ErrorResponse)
    )
)]
#[post("/v1/query")]
pub async fn ask_question(
    service: web::Data<QueryService>,
    body: web::Json<QueryRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let answer = service.answer(&body.question).await?;

    Ok(HttpResponse::Ok().json(answer))
}
