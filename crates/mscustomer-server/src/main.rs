use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::PgCustomerRepository;
use application::CustomerService;
use config::ServerConfig;
use mscustomer::CustomerRepository;

/// Customer service over whichever repository the server was wired with
pub type AppCustomerService = CustomerService<dyn CustomerRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<AppCustomerService>,
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Customer API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the full router: health, optional Swagger UI, customer routes
fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let customer_routes = match &config.path_prefix {
        Some(prefix) => Router::new().nest(prefix, routes::customer::router()),
        None => routes::customer::router(),
    };

    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(customer_routes);

    if config.swagger_ui {
        let openapi = routes::swagger::ApiDoc::openapi();
        router =
            router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🗂️  Customer API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let customer_repo: Arc<dyn CustomerRepository> = Arc::new(PgCustomerRepository::new(pool));
    let customer_service = Arc::new(CustomerService::new(customer_repo));

    let state = AppState { customer_service };
    let router = build_router(state, &config);

    if let Some(prefix) = &config.path_prefix {
        tracing::info!("🔀 Customer routes mounted under {}", prefix);
    }
    if config.swagger_ui {
        tracing::info!("📚 Swagger UI: /swagger-ui");
    } else {
        tracing::warn!("⚠️  Swagger UI disabled");
    }
    tracing::info!("✅ Customer API ready");

    Ok(router.into())
}
