//! Error handling for the LGU Health ERP backend
//!
//! Provides consistent JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{ExportError, SnapshotError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid inventory snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Inventory service error: {0}")]
    InventoryService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::InvalidSnapshot(err) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "INVALID_SNAPSHOT".to_string(),
                    message: err.to_string(),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::InventoryService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "INVENTORY_SERVICE_ERROR".to_string(),
                    message: format!("Inventory service error: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::Export(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "EXPORT_ERROR".to_string(),
                    message: "Failed to export alerts".to_string(),
                    field: None,
                },
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message: "A database error occurred".to_string(),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_error_maps_to_bad_gateway() {
        let err: AppError = SnapshotError::DuplicateItemCode("MED1".to_string()).into();
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(detail.code, "INVALID_SNAPSHOT");
        assert!(detail.message.contains("MED1"));
    }

    #[test]
    fn test_validation_error_carries_field() {
        let err = AppError::Validation {
            field: "tab".to_string(),
            message: "Unknown tab".to_string(),
        };
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.field.as_deref(), Some("tab"));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::DatabaseError(sqlx::Error::RowNotFound);
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail.message, "A database error occurred");
    }

    #[test]
    fn test_every_variant_has_its_own_code() {
        let errors = vec![
            AppError::Validation {
                field: "today".to_string(),
                message: "bad date".to_string(),
            },
            SnapshotError::DuplicateItemCode("MED1".to_string()).into(),
            AppError::NotFound("route".to_string()),
            AppError::InventoryService("timeout".to_string()),
            AppError::Configuration("missing url".to_string()),
            AppError::Export(ExportError::Writer("closed".to_string())),
            AppError::DatabaseError(sqlx::Error::PoolClosed),
        ];
        let codes: std::collections::HashSet<String> = errors
            .iter()
            .map(|err| err.status_and_detail().1.code)
            .collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains("INTERNAL_ERROR"));
    }
}
