pub mod analytics;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod health;
pub mod openapi;
pub mod query;
pub mod transaction;
