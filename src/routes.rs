// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const API_PREFIX: &str = "/api";
pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{id}";

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler,
    not_found_handler, root_handler, update_handler,
};
use crate::state::AppState;

/// Assemble the full application router
///
/// The item routes are nested under the API prefix. Layer order follows the
/// original middleware chain: request tracing innermost, permissive CORS
/// outermost, and a catch-all 404 for anything unmatched.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(HEALTH, get(health_handler))
        .route(ITEMS, get(list_handler).post(create_handler))
        .route(
            ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        );

    Router::new()
        .route(ROOT, get(root_handler))
        .nest(API_PREFIX, api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
