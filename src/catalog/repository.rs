use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};

use super::models::{Dimension, DimensionKind};
use crate::errors::AppError;

/// Read-only provider of category and type rows, soft-deleted ones included.
#[async_trait]
pub trait DimensionCatalog: Send + Sync {
    async fn list_dimensions(&self, kind: DimensionKind) -> Result<Vec<Dimension>, AppError>;
}

/// Postgres-backed catalog over the `categories` and `types` tables.
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DimensionCatalog for PgCatalogRepository {
    async fn list_dimensions(&self, kind: DimensionKind) -> Result<Vec<Dimension>, AppError> {
        // No deleted_at filter: deleted rows must keep resolving
        let sql = match kind {
            DimensionKind::Category => {
                r#"
                SELECT id, name, description, color, deleted_at
                FROM categories
                ORDER BY id ASC
                "#
            }
            DimensionKind::Type => {
                r#"
                SELECT id, name, description, NULL::text AS color, deleted_at
                FROM types
                ORDER BY id ASC
                "#
            }
        };

        let dimensions = sqlx::query_as::<_, Dimension>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch {} catalog: {e}", kind.as_str());
                AppError::FetchError(format!("failed to list {} catalog: {e}", kind.as_str()))
            })?;

        debug!(kind = kind.as_str(), count = dimensions.len(), "Fetched catalog");
        Ok(dimensions)
    }
}
