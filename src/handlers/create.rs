use crate::dynamo::Item;
use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// POST /api/items handler - Create a new item
///
/// The key is the body's primary-key field when it is a non-empty string,
/// otherwise a freshly generated UUID. The assigned key is merged into the
/// body before the write, and the full item is echoed back.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Item created, key assigned", body = serde_json::Value),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let mut item = parse_body(&body);
    let id = derive_key(&item, state.dynamo_client.primary_key());
    item.insert(
        state.dynamo_client.primary_key().to_string(),
        JsonValue::String(id.clone()),
    );

    state
        .dynamo_client
        .put(&item)
        .await
        .map_err(|e| ApiError::store("create item", e))?;

    tracing::info!("Created item with id: {}", id);
    Ok((StatusCode::CREATED, Json(item)))
}

/// Decode a request body as an open attribute mapping
///
/// An absent, malformed, or non-object body is treated as an empty mapping,
/// never rejected.
pub(crate) fn parse_body(bytes: &[u8]) -> Item {
    serde_json::from_slice(bytes).unwrap_or_default()
}

/// Reuse the caller-supplied primary-key field when it is a non-empty
/// string; otherwise generate a fresh random identifier.
fn derive_key(body: &Item, primary_key: &str) -> String {
    match body.get(primary_key) {
        Some(JsonValue::String(key)) if !key.is_empty() => key.clone(),
        _ => Uuid::new_v4().to_string(),
    }
}
