use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};
use serde_json::Value as JsonValue;

use crate::config::Config;

/// One record in the table: an open attribute mapping with one designated
/// primary-key attribute.
pub type Item = serde_json::Map<String, JsonValue>;

/// Shareable DynamoDB client for use across async handlers
///
/// Holds the table name and primary-key attribute name alongside the SDK
/// client; both are fixed for the process lifetime.
#[derive(Clone)]
pub struct DynamoClient {
    inner: Arc<Inner>,
}

struct Inner {
    client: Client,
    table_name: String,
    primary_key: String,
}

impl DynamoClient {
    /// Create a new DynamoDB client from configuration
    ///
    /// The SDK config is built from the configured region, with the endpoint
    /// override applied when set. When an endpoint override is present
    /// (a local DynamoDB instance), the table is auto-provisioned if it does
    /// not exist, enabling zero-setup local development. Against production
    /// AWS the table is an operator-owned resource and is never created here.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.dynamo_endpoint {
            tracing::info!("Connecting to DynamoDB at endpoint override: {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        } else {
            tracing::info!("Connecting to AWS DynamoDB in region: {}", config.aws_region);
        }

        let sdk_config = loader.load().await;
        let client = Client::new(&sdk_config);

        if config.dynamo_endpoint.is_some() {
            ensure_table_exists(&client, &config.table_name, &config.primary_key).await?;
        }

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                table_name: config.table_name.clone(),
                primary_key: config.primary_key.clone(),
            }),
        })
    }

    /// Name of the table this client addresses
    pub fn table_name(&self) -> &str {
        &self.inner.table_name
    }

    /// Name of the primary-key attribute
    pub fn primary_key(&self) -> &str {
        &self.inner.primary_key
    }

    /// Scan the table and return all items from the first result page
    ///
    /// No pagination: if DynamoDB truncates the scan for size limits, only
    /// that first page is returned and the count reflects that page. Known
    /// limitation of this gateway.
    ///
    /// # Errors
    /// Returns an error if the scan fails or an item cannot be converted to
    /// JSON
    pub async fn list_all(&self) -> Result<Vec<Item>> {
        let output = self
            .inner
            .client
            .scan()
            .table_name(&self.inner.table_name)
            .send()
            .await
            .context("Failed to scan items from DynamoDB")?;

        let items: Vec<Item> = from_items(output.items.unwrap_or_default())
            .context("Failed to convert scanned items to JSON")?;

        tracing::debug!("Scanned {} items from table {}", items.len(), self.inner.table_name);
        Ok(items)
    }

    /// Read the item whose primary-key attribute equals `key`
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Item found and returned
    /// * `Ok(None)` - No item stored under that key
    /// * `Err(_)` - DynamoDB operation failed
    pub async fn get_by_key(&self, key: &str) -> Result<Option<Item>> {
        let output = self
            .inner
            .client
            .get_item()
            .table_name(&self.inner.table_name)
            .key(&self.inner.primary_key, AttributeValue::S(key.to_string()))
            .send()
            .await
            .context("Failed to get item from DynamoDB")?;

        match output.item {
            Some(attributes) => {
                let item: Item = from_item(attributes)
                    .context("Failed to convert item to JSON")?;
                tracing::debug!("Read item with key: {}", key);
                Ok(Some(item))
            }
            None => {
                tracing::debug!("Item not found with key: {}", key);
                Ok(None)
            }
        }
    }

    /// Unconditionally write `item`, fully replacing any item at the same key
    ///
    /// No merge, no existence precondition.
    ///
    /// # Errors
    /// Returns an error if the item cannot be converted or the write fails
    pub async fn put(&self, item: &Item) -> Result<()> {
        let attributes: HashMap<String, AttributeValue> =
            to_item(item).context("Failed to convert JSON item to DynamoDB attributes")?;

        self.inner
            .client
            .put_item()
            .table_name(&self.inner.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .context("Failed to put item to DynamoDB")?;

        tracing::debug!("Put item into table {}", self.inner.table_name);
        Ok(())
    }

    /// Unconditionally remove the item at `key`
    ///
    /// Succeeds even if the key does not exist, matching DynamoDB's
    /// idempotent-delete contract.
    pub async fn delete_by_key(&self, key: &str) -> Result<()> {
        self.inner
            .client
            .delete_item()
            .table_name(&self.inner.table_name)
            .key(&self.inner.primary_key, AttributeValue::S(key.to_string()))
            .send()
            .await
            .context("Failed to delete item from DynamoDB")?;

        tracing::debug!("Deleted item with key: {}", key);
        Ok(())
    }
}

/// Ensure the table exists, creating it if necessary
///
/// The created table has a single string HASH key named after the configured
/// primary-key attribute and pay-per-request billing.
async fn ensure_table_exists(client: &Client, table_name: &str, primary_key: &str) -> Result<()> {
    let tables = client
        .list_tables()
        .send()
        .await
        .context("Failed to list DynamoDB tables")?;

    if tables.table_names().contains(&table_name.to_string()) {
        tracing::info!("Table '{}' already exists", table_name);
        return Ok(());
    }

    tracing::info!("Table '{}' not found, creating...", table_name);

    client
        .create_table()
        .table_name(table_name)
        .billing_mode(BillingMode::PayPerRequest)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(primary_key)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .context("Invalid attribute definition")?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(primary_key)
                .key_type(KeyType::Hash)
                .build()
                .context("Invalid key schema")?,
        )
        .send()
        .await
        .context("Failed to create table")?;

    tracing::info!("Table '{}' created successfully", table_name);
    Ok(())
}
