//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub source: String,
    pub last_refresh: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.monitor.status().await;
    let last_refresh = match (status.last_refreshed_at, status.last_error) {
        (None, _) => "pending".to_string(),
        (Some(_), None) => "ok".to_string(),
        (Some(_), Some(_)) => "degraded".to_string(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        source: state.monitor.source_name().to_string(),
        last_refresh,
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> crate::error::AppError {
    crate::error::AppError::NotFound("route".to_string())
}
