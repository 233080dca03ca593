//! LGU Health ERP - Stock Monitoring Server
//!
//! Turns inventory snapshots of a municipal health office into ranked
//! expiry and stock-level alerts with summary counts.

use axum::{routing::get, Router};
use chrono::Utc;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{InventorySource, SnapshotSource};
use services::StockMonitoringService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub monitor: StockMonitoringService<SnapshotSource>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lsm_server=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting LGU Health ERP Stock Monitoring Server");
    tracing::info!("Environment: {}", config.environment);

    let source = SnapshotSource::from_config(&config).await?;
    tracing::info!("Inventory source: {}", source.name());

    let monitor = StockMonitoringService::new(source, config.monitoring);

    // Initial load; a failure leaves the monitor empty until the next refresh
    monitor.refresh(Utc::now().date_naive()).await;

    let state = AppState {
        monitor,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let ip: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((ip, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "LGU Health ERP Stock Monitoring API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
