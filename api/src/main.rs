// Asset capture API server entry point

use std::error::Error;
use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_capture_api::build_router;
use asset_capture_api::config::ApiConfig;
use asset_capture_api::db::DbPool;
use asset_capture_api::handlers::AppState;

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    // Establish database connection pool
    let db_pool = DbPool::new(&config).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
        e
    })?;
    tracing::info!("Connected to database");

    // Create tables if missing
    db_pool.ensure_schema().await.map_err(|e| {
        tracing::error!("Failed to prepare schema: {}", e);
        e
    })?;
    tracing::info!("Schema ready");

    let app_state = AppState::new(db_pool.repositories());
    let app = build_router(app_state, config.max_body_bytes);

    // Parse server address from config
    let addr: SocketAddr = config.server_addr().parse()?;

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
