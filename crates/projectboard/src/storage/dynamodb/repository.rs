//! DynamoDB repository implementation.
//!
//! Implements `ProjectRepository` from `projectboard_core::storage` against a
//! single table keyed by the configured partition/sort attribute names.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use projectboard_core::cursor::ContinuationKey;
use projectboard_core::project::{keys, Project};
use projectboard_core::storage::{ProjectPage, ProjectRepository, Result};

use super::conversions::{attrs_to_key, item_to_json, key_to_attrs, project_to_item};
use super::error::{map_put_item_error, map_query_error, map_scan_error};
use crate::config::{Config, KeySchema};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    key_schema: KeySchema,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given client, table name, and
    /// resolved key schema.
    pub fn new(client: Client, table_name: impl Into<String>, key_schema: KeySchema) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            key_schema,
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain; client timeouts inherit
    /// the SDK defaults.
    pub async fn from_env(config: &Config) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);

        Self::new(client, config.table.clone(), config.key_schema.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ProjectRepository for DynamoDbRepository {
    async fn create_project(&self, project: &Project) -> Result<()> {
        let item = project_to_item(project, &self.key_schema);

        // Unconditional write: ids are fresh v4 UUIDs, so key collisions do
        // not occur in practice and records are never updated.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn query_projects(
        &self,
        limit: u32,
        exclusive_start: Option<ContinuationKey>,
    ) -> Result<ProjectPage> {
        let mut request = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", &self.key_schema.pk_attr)
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::PARTITION_VALUE.to_string()),
            )
            .limit(limit as i32)
            // Descending by sort key, newest first.
            .scan_index_forward(false);

        if let Some(start) = &exclusive_start {
            request = request.set_exclusive_start_key(Some(key_to_attrs(start)));
        }

        let result = request.send().await.map_err(map_query_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_json)
            .collect();
        let last_evaluated_key = result.last_evaluated_key.as_ref().map(attrs_to_key);

        Ok(ProjectPage {
            items,
            last_evaluated_key,
        })
    }

    async fn scan_projects(
        &self,
        limit: u32,
        exclusive_start: Option<ContinuationKey>,
    ) -> Result<ProjectPage> {
        let mut request = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("#pk = :pk")
            .expression_attribute_names("#pk", &self.key_schema.pk_attr)
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::PARTITION_VALUE.to_string()),
            )
            .limit(limit as i32);

        if let Some(start) = &exclusive_start {
            request = request.set_exclusive_start_key(Some(key_to_attrs(start)));
        }

        let result = request.send().await.map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_json)
            .collect();
        let last_evaluated_key = result.last_evaluated_key.as_ref().map(attrs_to_key);

        Ok(ProjectPage {
            items,
            last_evaluated_key,
        })
    }
}
