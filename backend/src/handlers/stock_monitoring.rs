//! HTTP handlers for the stock monitoring endpoints

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use shared::{AlertQuery, StockAlert};

use crate::error::{AppError, AppResult};
use crate::services::stock_monitoring::{MonitorStatus, RefreshOutcome};
use crate::AppState;

/// Query parameters for a manual refresh
#[derive(Debug, Deserialize)]
pub struct RefreshQuery {
    /// Evaluation date (YYYY-MM-DD); defaults to the current UTC date
    pub today: Option<String>,
}

/// List ranked alerts, filtered by search text and tab
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Json<Vec<StockAlert>> {
    Json(state.monitor.alerts(&query).await)
}

/// Get summary stats and refresh status
pub async fn get_stats(State(state): State<AppState>) -> Json<MonitorStatus> {
    Json(state.monitor.status().await)
}

/// Reload the snapshot and rebuild alerts
pub async fn refresh_alerts(
    State(state): State<AppState>,
    Query(query): Query<RefreshQuery>,
) -> AppResult<Json<RefreshOutcome>> {
    let today = match query.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::Validation {
            field: "today".to_string(),
            message: format!("'{}' is not a YYYY-MM-DD date", raw),
        })?,
        None => Utc::now().date_naive(),
    };
    Ok(Json(state.monitor.refresh(today).await))
}

/// Export the filtered alerts as CSV
pub async fn export_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> AppResult<impl IntoResponse> {
    let csv = state.monitor.export_csv(&query).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"stock_alerts.csv\""),
        ],
        csv,
    ))
}
