use crate::error::ErrorResponse;
use crate::models::{DiscoveryEndpoints, DiscoveryResponse};
use axum::{Json, http::StatusCode};

/// GET / handler - Root discovery document
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Available endpoints", body = DiscoveryResponse)
    ),
    tag = "meta"
)]
pub async fn root_handler() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse {
        message: "DynamoDB CRUD API is running".to_string(),
        docs: "/api/health".to_string(),
        endpoints: DiscoveryEndpoints {
            list_items: "GET /api/items".to_string(),
            get_item: "GET /api/items/:id".to_string(),
            create_item: "POST /api/items".to_string(),
            update_item: "PUT /api/items/:id".to_string(),
            delete_item: "DELETE /api/items/:id".to_string(),
        },
    })
}

/// Catch-all for any route the router does not match
pub async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Route not found".to_string(),
        }),
    )
}
