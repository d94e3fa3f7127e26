use actix_web::{get, web, HttpResponse};

use crate::catalog::DimensionKind;
use crate::errors::{AppError, ErrorResponse};

use super::engine::{AggregationEngine, RecordScope};
use super::models::{AverageSummaryResponse, AverageTrendResponse};

async fn summary(
    engine: &AggregationEngine,
    kind: DimensionKind,
    scope: RecordScope,
) -> Result<HttpResponse, AppError> {
    let results = engine.average_summary(kind, scope).await?;

    let response: Vec<AverageSummaryResponse> = results.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(response))
}

async fn trend(
    engine: &AggregationEngine,
    kind: DimensionKind,
    scope: RecordScope,
) -> Result<HttpResponse, AppError> {
    let results = engine.average_trend(kind, scope).await?;

    let response: Vec<AverageTrendResponse> = results
        .into_iter()
        .filter_map(AverageTrendResponse::from_result)
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/categories/average - All-time average per category
#[utoipa::path(
    get,
    path = "/api/v1/categories/average",
    tag = "Analytics",
    responses(
        (status = 200, description = "Mean of monthly averages per category", body = Vec<AverageSummaryResponse>),
        (status = 500, description = "A source could not be read", body = ErrorResponse)
    )
)]
#[get("/api/v1/categories/average")]
pub async fn get_category_average(
    engine: web::Data<AggregationEngine>,
) -> Result<HttpResponse, AppError> {
    summary(&engine, DimensionKind::Category, RecordScope::All).await
}

/// GET /api/v1/categories/average/monthly - Average per category and month
#[utoipa::path(
    get,
    path = "/api/v1/categories/average/monthly",
    tag = "Analytics",
    responses(
        (status = 200, description = "Monthly averages per category", body = Vec<AverageTrendResponse>),
        (status = 500, description = "A source could not be read", body = ErrorResponse)
    )
)]
#[get("/api/v1/categories/average/monthly")]
pub async fn get_category_average_trend(
    engine: web::Data<AggregationEngine>,
) -> Result<HttpResponse, AppError> {
    trend(&engine, DimensionKind::Category, RecordScope::All).await
}

/// GET /api/v1/types/average - All-time average per transaction type
#[utoipa::path(
    get,
    path = "/api/v1/types/average",
    tag = "Analytics",
    responses(
        (status = 200, description = "Mean of monthly averages per type", body = Vec<AverageSummaryResponse>),
        (status = 500, description = "A source could not be read", body = ErrorResponse)
    )
)]
#[get("/api/v1/types/average")]
pub async fn get_type_average(
    engine: web::Data<AggregationEngine>,
) -> Result<HttpResponse, AppError> {
    summary(&engine, DimensionKind::Type, RecordScope::All).await
}

/// GET /api/v1/types/average/monthly - Average per transaction type and month
#[utoipa::path(
    get,
    path = "/api/v1/types/average/monthly",
    tag = "Analytics",
    responses(
        (status = 200, description = "Monthly averages per type", body = Vec<AverageTrendResponse>),
        (status = 500, description = "A source could not be read", body = ErrorResponse)
    )
)]
#[get("/api/v1/types/average/monthly")]
pub async fn get_type_average_trend(
    engine: web::Data<AggregationEngine>,
) -> Result<HttpResponse, AppError> {
    trend(&engine, DimensionKind::Type, RecordScope::All).await
}

/// GET /average-spend - Monthly average spend per category (expenses only)
#[utoipa::path(
    get,
    path = "/average-spend",
    tag = "Analytics",
    responses(
        (status = 200, description = "Monthly average spend per category", body = Vec<AverageTrendResponse>),
        (status = 500, description = "A source could not be read", body = ErrorResponse)
    )
)]
#[get("/average-spend")]
pub async fn get_average_spend(
    engine: web::Data<AggregationEngine>,
) -> Result<HttpResponse, AppError> {
    trend(&engine, DimensionKind::Category, RecordScope::ExpenseOnly).await
}

/// GET /average-spend/summary - All-time average spend per category (expenses only)
#[utoipa::path(
    get,
    path = "/average-spend/summary",
    tag = "Analytics",
    responses(
        (status = 200, description = "Average spend per category", body = Vec<AverageSummaryResponse>),
        (status = 500, description = "A source could not be read", body = ErrorResponse)
    )
)]
#[get("/average-spend/summary")]
pub async fn get_average_spend_summary(
    engine: web::Data<AggregationEngine>,
) -> Result<HttpResponse, AppError> {
    summary(&engine, DimensionKind::Category, RecordScope::ExpenseOnly).await
}
