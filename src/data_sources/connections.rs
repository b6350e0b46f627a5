//! Connection list data source

use super::{echo_config, page_attributes};
use crate::adapters::saviynt::{GetConnectionsRequest, SaviyntApi};
use crate::domain::values::non_empty;
use crate::domain::Result;
use crate::provider::{Attribute, AttributeType, DataSource, Schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub const DATA_SOURCE_TYPE: &str = "saviynt_connections_datasource";

#[derive(Debug, Default, Deserialize)]
struct Filter {
    connection_name: Option<String>,
    connection_type: Option<String>,
    offset: Option<String>,
    max: Option<String>,
}

pub fn schema() -> Schema {
    Schema::new("Lists connections, one page per read.")
        .with_attribute(Attribute::optional("connection_name", AttributeType::String))
        .with_attribute(Attribute::optional("connection_type", AttributeType::String))
        .with_attributes(page_attributes())
        .with_attribute(Attribute::computed(
            "results",
            AttributeType::ObjectList(vec![
                Attribute::computed("connection_name", AttributeType::String),
                Attribute::computed("connection_type", AttributeType::String),
                Attribute::computed("connection_key", AttributeType::Number),
                Attribute::computed("description", AttributeType::String),
                Attribute::computed("status", AttributeType::String),
                Attribute::computed("updated_by", AttributeType::String),
                Attribute::computed("updated_date", AttributeType::String),
                Attribute::computed("email_template", AttributeType::String),
            ]),
        ))
}

pub struct ConnectionsDataSource {
    api: Arc<dyn SaviyntApi>,
}

impl ConnectionsDataSource {
    pub fn new(api: Arc<dyn SaviyntApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataSource for ConnectionsDataSource {
    fn type_name(&self) -> &'static str {
        DATA_SOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        schema()
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        self.schema().ensure_valid(config)?;
        let filter: Filter = serde_json::from_value(config.clone())?;

        let request = GetConnectionsRequest {
            connection_name: non_empty(filter.connection_name),
            connection_type: non_empty(filter.connection_type),
            offset: non_empty(filter.offset),
            max: non_empty(filter.max),
        };
        let response = self.api.get_connections(&request).await?;

        tracing::info!(
            count = response.connection_list.len(),
            total = ?response.total_count,
            "Read connections"
        );

        let results: Vec<Value> = response
            .connection_list
            .iter()
            .map(|c| {
                json!({
                    "connection_name": c.connection_name,
                    "connection_type": c.connection_type,
                    "connection_key": c.connection_key,
                    "description": c.description,
                    "status": c.status,
                    "updated_by": c.updated_by,
                    "updated_date": c.updated_date,
                    "email_template": c.email_template,
                })
            })
            .collect();

        let mut output = echo_config(config)?;
        output.insert("results".to_string(), Value::Array(results));
        output.insert("msg".to_string(), json!(response.msg));
        output.insert("error_code".to_string(), json!(response.error_code));
        output.insert("display_count".to_string(), json!(response.display_count));
        output.insert("total_count".to_string(), json!(response.total_count));
        Ok(Value::Object(output))
    }
}
