use crate::error::{ApiError, ErrorResponse};
use crate::models::ListResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /api/items handler - List all items
///
/// Scans the table and returns every item from the first result page along
/// with its count.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All items in the table", body = ListResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let items = state
        .dynamo_client
        .list_all()
        .await
        .map_err(|e| ApiError::store("list items", e))?;

    let response = ListResponse {
        count: items.len(),
        items,
    };

    tracing::info!("Listed {} items", response.count);
    Ok((StatusCode::OK, Json(response)))
}
