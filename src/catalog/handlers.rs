use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::errors::{AppError, ErrorResponse};

use super::models::{DimensionKind, DimensionResponse};
use super::repository::DimensionCatalog;

async fn list(
    catalog: &dyn DimensionCatalog,
    kind: DimensionKind,
) -> Result<HttpResponse, AppError> {
    let dimensions = catalog.list_dimensions(kind).await?;

    let response: Vec<DimensionResponse> = dimensions.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /categories - List all categories, including soft-deleted ones
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "Category catalog", body = Vec<DimensionResponse>),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
#[get("/categories")]
pub async fn list_categories(
    catalog: web::Data<Arc<dyn DimensionCatalog>>,
) -> Result<HttpResponse, AppError> {
    list(catalog.get_ref().as_ref(), DimensionKind::Category).await
}

/// GET /types - List all transaction types, including soft-deleted ones
#[utoipa::path(
    get,
    path = "/types",
    tag = "Catalog",
    responses(
        (status = 200, description = "Type catalog", body = Vec<DimensionResponse>),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
#[get("/types")]
pub async fn list_types(
    catalog: web::Data<Arc<dyn DimensionCatalog>>,
) -> Result<HttpResponse, AppError> {
    list(catalog.get_ref().as_ref(), DimensionKind::Type).await
}
