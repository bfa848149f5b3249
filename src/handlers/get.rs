use crate::dynamo::Item;
use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/items/{id} handler - Retrieve one item by primary key
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = String, Path, description = "Primary-key value of the item")
    ),
    responses(
        (status = 200, description = "Item found", body = serde_json::Value),
        (status = 404, description = "No item stored under that key", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state
        .dynamo_client
        .get_by_key(&id)
        .await
        .map_err(|e| ApiError::store("get item", e))?;

    match item {
        Some(item) => {
            tracing::info!("Successfully retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}
