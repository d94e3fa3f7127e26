use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    /// A transaction, recurring transaction or catalog source failed.
    FetchError(String),
    /// The database rejected a generated query.
    QueryFailed(String),
    /// The language model call failed or returned something unusable.
    UpstreamError(String),
    ServiceUnavailable(String),
    InternalError(String),
}

/// Standard error response format
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type code (e.g., "VALIDATION_ERROR", "FETCH_ERROR")
    #[schema(example = "FETCH_ERROR")]
    pub error: String,
    /// Human-readable error message
    #[schema(example = "failed to list transactions: pool timed out")]
    pub message: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            AppError::FetchError(msg) => write!(f, "Fetch error: {msg}"),
            AppError::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            AppError::UpstreamError(msg) => write!(f, "Upstream error: {msg}"),
            AppError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {msg}"),
            AppError::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::FetchError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "FETCH_ERROR"),
            AppError::QueryFailed(_) => (StatusCode::UNPROCESSABLE_ENTITY, "QUERY_FAILED"),
            AppError::UpstreamError(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            AppError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            AppError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = self.parts();

        let message = match self {
            AppError::ValidationError(msg)
            | AppError::QueryFailed(msg)
            | AppError::ServiceUnavailable(msg) => msg.clone(),
            AppError::FetchError(msg) | AppError::UpstreamError(msg) => {
                warn!("{error_type}: {msg}");
                msg.clone()
            }
            AppError::InternalError(msg) => {
                // Log the actual error for debugging, but don't expose to client
                error!("Internal error: {msg}");
                "An internal error occurred".to_string()
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message,
        })
    }
}

// Convenience conversion from sqlx::Error
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}
