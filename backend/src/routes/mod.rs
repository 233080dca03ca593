//! Route definitions for the stock monitoring API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/stock-monitoring", stock_monitoring_routes())
}

/// Stock monitoring routes
fn stock_monitoring_routes() -> Router<AppState> {
    Router::new()
        .route("/alerts", get(handlers::list_alerts))
        .route("/alerts/export", get(handlers::export_alerts))
        .route("/stats", get(handlers::get_stats))
        .route("/refresh", post(handlers::refresh_alerts))
}
