mod api_doc;
mod config;
mod dynamo;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use std::sync::Arc;

use config::Config;
use dynamo::DynamoClient;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-dynamo-crud starting");

    let config = Config::from_env()?;
    config.log_startup();

    let dynamo_client = DynamoClient::from_config(&config).await?;

    let bind_addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        dynamo_client,
        config: Arc::new(config),
    };

    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("DynamoDB CRUD API listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
