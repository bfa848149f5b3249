use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

/// DELETE /api/items/{id} handler - Remove one item
///
/// Idempotent: deleting a key that was never written still answers 204.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = String, Path, description = "Primary-key value of the item")
    ),
    responses(
        (status = 204, description = "Item removed (or was already absent)"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .dynamo_client
        .delete_by_key(&id)
        .await
        .map_err(|e| ApiError::store("delete item", e))?;

    tracing::info!("Deleted item with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dynamo::DynamoClient;
    use crate::handlers::{create_handler, get_handler};
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{get, post},
    };
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn setup_test_app() -> Option<Router> {
        unsafe {
            std::env::set_var("AWS_ACCESS_KEY_ID", "test");
            std::env::set_var("AWS_SECRET_ACCESS_KEY", "test");
        }

        let config = Config {
            table_name: "delete-endpoint-test".to_string(),
            primary_key: "id".to_string(),
            aws_region: "us-west-2".to_string(),
            dynamo_endpoint: Some("http://localhost:8000".to_string()),
            service_port: 4000,
            service_host: "0.0.0.0".to_string(),
        };

        let dynamo_client = match DynamoClient::from_config(&config).await {
            Ok(client) => client,
            Err(e) => {
                println!("DynamoDB Local not reachable, skipping: {:#}", e);
                return None;
            }
        };

        let state = AppState {
            dynamo_client,
            config: Arc::new(config),
        };

        Some(
            Router::new()
                .route("/api/items", post(create_handler))
                .route(
                    "/api/items/{id}",
                    get(get_handler).delete(delete_handler),
                )
                .with_state(state),
        )
    }

    #[tokio::test]
    async fn test_delete_endpoint_removes_item() {
        let Some(app) = setup_test_app().await else {
            return;
        };

        let test_data = json!({"name": "doomed"});
        let create_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/items")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&test_data).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(create_response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(create_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let id = created["id"].as_str().unwrap();

        let delete_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

        let body = axum::body::to_bytes(delete_response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());

        let get_response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_endpoint_is_idempotent() {
        let Some(app) = setup_test_app().await else {
            return;
        };

        // Deleting a key that was never written answers exactly like
        // deleting an existing one
        let missing_id = Uuid::new_v4().to_string();
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/items/{}", missing_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
