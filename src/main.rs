use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use spend_analytics::analytics::{self, AggregationEngine};
use spend_analytics::catalog::{self, DimensionCatalog, PgCatalogRepository};
use spend_analytics::config::AppConfig;
use spend_analytics::query::{self, OpenAiClient, PgSqlExecutor, QueryService};
use spend_analytics::transaction::{
    self, PgRecurringTransactionRepository, PgTransactionRepository, RecurringTransactionSource,
    TransactionSource,
};
use spend_analytics::{health, openapi};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().expect("Failed to load configuration");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await
        .expect("Failed to create pool");

    // Sources are shared between the listing endpoints and the aggregation engine
    let transactions: Arc<dyn TransactionSource> =
        Arc::new(PgTransactionRepository::new(pool.clone()));
    let recurring: Arc<dyn RecurringTransactionSource> =
        Arc::new(PgRecurringTransactionRepository::new(pool.clone()));
    let catalog: Arc<dyn DimensionCatalog> = Arc::new(PgCatalogRepository::new(pool.clone()));

    let engine = web::Data::new(AggregationEngine::new(
        transactions.clone(),
        recurring.clone(),
        catalog.clone(),
    ));

    if config.language_model.api_key.is_none() {
        info!("OPENAI_API_KEY not set, /v1/query will answer 503");
    }
    let query_service = web::Data::new(QueryService::new(
        Arc::new(OpenAiClient::new(config.language_model.clone())),
        Arc::new(PgSqlExecutor::new(pool.clone())),
    ));

    let allowed_origins = config.allowed_origins.clone();

    info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let allowed_origins = allowed_origins.clone();

        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origin_str = origin.to_str().unwrap_or("");
                allowed_origins.iter().any(|allowed| allowed == origin_str)
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            // Middleware (order matters: outer to inner)
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Shared state
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(transactions.clone()))
            .app_data(web::Data::new(recurring.clone()))
            .app_data(web::Data::new(catalog.clone()))
            .app_data(engine.clone())
            .app_data(query_service.clone())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
            .service(health::health_check)
            // Raw data
            .service(transaction::list_transactions)
            .service(transaction::list_recurring_transactions)
            .service(catalog::list_categories)
            .service(catalog::list_types)
            // Aggregations (longer paths first)
            .service(analytics::get_category_average_trend)
            .service(analytics::get_category_average)
            .service(analytics::get_type_average_trend)
            .service(analytics::get_type_average)
            .service(analytics::get_average_spend_summary)
            .service(analytics::get_average_spend)
            // Natural-language query
            .service(query::ask_question)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
