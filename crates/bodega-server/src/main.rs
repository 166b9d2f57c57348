use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod errors;
mod models;
mod routes;

use adapters::{PgOrderRepository, PgProductRepository};
use application::{CatalogService, OrderService};

/// Type aliases for application services with concrete repository implementations
pub type AppCatalogService = CatalogService<PgProductRepository>;
pub type AppOrderService = OrderService<PgOrderRepository, PgProductRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub catalog_service: Arc<AppCatalogService>,
    pub order_service: Arc<AppOrderService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Bodega API is running - the corner store is open".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Bodega API initializing...");

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set (see .env)")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("Failed to connect to Postgres")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Repositories are explicit injected handles; nothing holds a
    // process-wide client.
    let product_repo = Arc::new(PgProductRepository::new(pool.clone()));
    let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));
    let catalog_service = Arc::new(CatalogService::new(product_repo.clone()));
    let order_service = Arc::new(OrderService::new(order_repo, product_repo));

    let state = AppState {
        pool: pool.clone(),
        catalog_service,
        order_service,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::products::router())
        .merge(routes::orders::router())
        .merge(routes::order_items::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("Invalid BIND_ADDR: {}", bind_addr))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Bodega API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router)
        .await
        .context("Server exited with an error")?;

    Ok(())
}
