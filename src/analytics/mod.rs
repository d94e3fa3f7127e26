pub mod bucket;
mod engine;
pub mod handlers;
pub mod models;
pub mod rollup;

// Re-export handlers for use in main.rs
pub use handlers::{
    get_average_spend, get_average_spend_summary, get_category_average,
    get_category_average_trend, get_type_average, get_type_average_trend,
};

pub use engine::{AggregationEngine, AverageResult, RecordScope};
