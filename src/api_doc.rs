use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{DiscoveryEndpoints, DiscoveryResponse, ListResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-dynamo-crud API",
        version = "1.0.0",
        description = "A minimal JSON CRUD gateway over a single DynamoDB table"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            ListResponse,
            DiscoveryResponse,
            DiscoveryEndpoints,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "meta", description = "Service discovery"),
        (name = "health", description = "Liveness probe"),
        (name = "items", description = "Item CRUD operations")
    )
)]
pub struct ApiDoc;
