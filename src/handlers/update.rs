use crate::dynamo::Item;
use crate::error::{ApiError, ErrorResponse};
use crate::handlers::create::parse_body;
use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value as JsonValue;

/// PUT /api/items/{id} handler - Replace or upsert one item
///
/// The path id is forced into the body as the primary key; it always wins
/// over any conflicting key in the request body. The write is a full
/// replace.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = String, Path, description = "Primary-key value of the item")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Item written", body = serde_json::Value),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let mut item = parse_body(&body);
    item.insert(
        state.dynamo_client.primary_key().to_string(),
        JsonValue::String(id.clone()),
    );

    state
        .dynamo_client
        .put(&item)
        .await
        .map_err(|e| ApiError::store("update item", e))?;

    tracing::info!("Updated item with id: {}", id);
    Ok((StatusCode::OK, Json(item)))
}
