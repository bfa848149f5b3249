use crate::error::HealthResponse;
use crate::state::AppState;
use axum::{Json, extract::State};

/// GET /api/health handler - Liveness probe
///
/// Returns static liveness plus the configured table name. Performs no store
/// call, so it cannot detect an unreachable table.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        table: state.config.table_name.clone(),
    })
}
