use utoipa::OpenApi;

use crate::analytics::models::{AverageSummaryResponse, AverageTrendResponse};
use crate::catalog::models::{DimensionKind, DimensionResponse};
use crate::errors::ErrorResponse;
use crate::health::HealthResponse;
use crate::query::models::{QueryAnswerResponse, QueryRequest, QueryResult};
use crate::transaction::models::{RecurringTransactionResponse, TransactionResponse};

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spend Analytics API",
        version = "1.0.0",
        description = "Average spend per category and transaction type, plus natural-language questions over the transaction store",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:1234", description = "Development server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Transactions", description = "Raw one-off and recurring transactions"),
        (name = "Catalog", description = "Category and transaction type catalogs"),
        (name = "Analytics", description = "Monthly and all-time averages"),
        (name = "Query", description = "Natural-language questions answered with SQL")
    ),
    paths(
        crate::health::health_check,
        // Transaction endpoints
        crate::transaction::handlers::list_transactions,
        crate::transaction::handlers::list_recurring_transactions,
        // Catalog endpoints
        crate::catalog::handlers::list_categories,
        crate::catalog::handlers::list_types,
        // Analytics endpoints
        crate::analytics::handlers::get_category_average,
        crate::analytics::handlers::get_category_average_trend,
        crate::analytics::handlers::get_type_average,
        crate::analytics::handlers::get_type_average_trend,
        crate::analytics::handlers::get_average_spend,
        crate::analytics::handlers::get_average_spend_summary,
        // Query endpoints
        crate::query::handlers::ask_question,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            TransactionResponse,
            RecurringTransactionResponse,
            DimensionKind,
            DimensionResponse,
            AverageSummaryResponse,
            AverageTrendResponse,
            QueryRequest,
            QueryResult,
            QueryAnswerResponse,
        )
    )
)]
pub struct ApiDoc;
