pub mod handlers;
pub mod models;
mod repository;

// Re-export handlers for use in main.rs
pub use handlers::{list_categories, list_types};

pub use models::{Dimension, DimensionKind, NameLookup};
pub use repository::{DimensionCatalog, PgCatalogRepository};
