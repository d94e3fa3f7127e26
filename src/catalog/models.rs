use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Name of the type row that marks a record as spending
pub const EXPENSE_TYPE_NAME: &str = "expense";

/// Grouping axis for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    /// Spending category (Food, Housing, ...)
    Category,
    /// Transaction type (income / expense)
    Type,
}

impl DimensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKind::Category => "category",
            DimensionKind::Type => "type",
        }
    }
}

/// A category or type row. Soft-deleted rows are kept so historical
/// transactions still resolve to a name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dimension {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Only categories carry a color
    pub color: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Dimension {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_expense_type(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(EXPENSE_TYPE_NAME)
    }
}

/// id -> display name lookup built from a catalog listing
#[derive(Debug, Default)]
pub struct NameLookup {
    names: HashMap<i32, String>,
}

impl NameLookup {
    pub fn from_dimensions(dimensions: &[Dimension]) -> Self {
        let names = dimensions
            .iter()
            .map(|d| (d.id, d.name.clone()))
            .collect();
        Self { names }
    }

    /// Unknown ids resolve to an empty name.
    pub fn resolve(&self, id: i32) -> String {
        self.names.get(&id).cloned().unwrap_or_default()
    }
}

/// Catalog entry returned in responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DimensionResponse {
    #[schema(example = 6)]
    pub id: i32,
    #[schema(example = "Grocery")]
    pub name: String,
    #[schema(example = "Grocery shop: food, house items, cleaning items")]
    pub description: Option<String>,
    #[schema(example = "#4CAF50")]
    pub color: Option<String>,
    /// Set when the entry was soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Dimension> for DimensionResponse {
    fn from(d: Dimension) -> Self {
        Self {
            id: d.id,
            name: d.name,
            description: d.description,
            color: d.color,
            deleted_at: d.deleted_at,
        }
    }
}
