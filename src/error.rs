use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub table: String,
}

/// Custom error type for API endpoints
///
/// Maps the two failure kinds a handler can produce onto HTTP responses:
/// a missing item becomes a 404 naming the key, and any store interaction
/// failure becomes a 500 with a generic verb-specific message. Callers are
/// never shown the underlying store error; it is logged before the response
/// is produced.
#[derive(Debug)]
pub enum ApiError {
    /// No item stored under the addressed key
    ItemNotFound(String),
    /// Store interaction failed; `action` names the attempted operation
    Store {
        action: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn store(action: &'static str, source: anyhow::Error) -> Self {
        ApiError::Store { action, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::ItemNotFound(key) => (
                StatusCode::NOT_FOUND,
                format!("Item not found for id: {}", key),
            ),
            ApiError::Store { action, source } => {
                tracing::error!("Error trying to {}: {:#}", action, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {}", action),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
