//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_store::StoreError;
use sync::SyncError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Sync coordinator error.
    Sync(SyncError),
    /// Catalog store error outside the coordinator.
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Sync(err) => sync_error_to_response(err),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "catalog store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch products".to_string(),
                )
            }
        };

        metrics::counter!("catalog_http_errors_total", "status" => status.as_str().to_string())
            .increment(1);

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn sync_error_to_response(err: SyncError) -> (StatusCode, String) {
    match &err {
        SyncError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        SyncError::NotFound(_) => (StatusCode::NOT_FOUND, "Product not found".to_string()),
        SyncError::Store(e) => {
            tracing::error!(error = %e, "catalog store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Catalog store unavailable".to_string(),
            )
        }
        SyncError::CreationFailed { reason } => {
            tracing::error!(%reason, "product creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create product in external catalog".to_string(),
            )
        }
        SyncError::OrphanedRecord { product_id, .. } => {
            tracing::error!(error = %err, "product left without external counterpart");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "Product {product_id} could not be synced and could not be rolled back"
                ),
            )
        }
    }
}

impl From<SyncError> for ApiError {
    fn from(err: SyncError) -> Self {
        ApiError::Sync(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
