//! order-backend server entry point.
//!
//! Starts the Axum HTTP server exposing the order and product REST API.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use order_backend::api;
use order_backend::app_state::AppState;
use order_backend::config::BackendConfig;
use order_backend::persistence::{self, PostgresOrderRepository, PostgresProductRepository};
use order_backend::service::{OrderService, ProductService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = BackendConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting order-backend");

    // Connect to PostgreSQL and apply migrations
    let pool = persistence::connect(&config).await?;
    sqlx::migrate!().run(&pool).await?;

    // Build repositories and services
    let orders = Arc::new(PostgresOrderRepository::new(pool.clone()));
    let products = Arc::new(PostgresProductRepository::new(pool));

    // Build application state
    let app_state = AppState {
        order_service: Arc::new(OrderService::new(orders)),
        product_service: Arc::new(ProductService::new(products)),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
