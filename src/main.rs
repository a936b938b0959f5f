//! Inventa Server - Equipment Inventory Management System
//!
//! A Rust REST API server for equipment inventory management.

use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventa_server::{
    api,
    config::{AppConfig, BackendKind},
    repository::{InventoryRepository, MemInventory, PgInventory, RestInventory},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("inventa_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Inventa Server v{}", env!("CARGO_PKG_VERSION"));

    // Wire in the configured data-access backend
    let repository: Arc<dyn InventoryRepository> = match config.backend.kind {
        BackendKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect(&config.database.url)
                .await
                .expect("Failed to connect to database");

            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("Database migrations completed");

            Arc::new(PgInventory::new(pool))
        }
        BackendKind::Rest => {
            tracing::info!("Using REST backend at {}", config.backend.rest_base_url);
            Arc::new(RestInventory::new(&config.backend.rest_base_url))
        }
        BackendKind::Memory => {
            tracing::info!("Using in-memory backend with demo data");
            Arc::new(MemInventory::with_demo_data())
        }
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let services = Services::new(repository, &config.translate);
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = api::create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
