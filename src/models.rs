use serde::{Deserialize, Serialize};

use crate::dynamo::Item;

/// Response type for the list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListResponse {
    pub count: usize,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Item>,
}

/// Root discovery document listing the available endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DiscoveryResponse {
    pub message: String,
    pub docs: String,
    pub endpoints: DiscoveryEndpoints,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryEndpoints {
    pub list_items: String,
    pub get_item: String,
    pub create_item: String,
    pub update_item: String,
    pub delete_item: String,
}
