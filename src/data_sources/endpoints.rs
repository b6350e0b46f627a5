//! Endpoint list data source

use super::{echo_config, flatten_record, page_attributes};
use crate::adapters::saviynt::{GetEndpointsRequest, SaviyntApi};
use crate::domain::values::non_empty;
use crate::domain::Result;
use crate::provider::{Attribute, AttributeType, DataSource, Schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub const DATA_SOURCE_TYPE: &str = "saviynt_endpoints_datasource";

#[derive(Debug, Default, Deserialize)]
struct Filter {
    endpointname: Option<String>,
    security_system: Option<String>,
    connection_type: Option<String>,
    offset: Option<String>,
    max: Option<String>,
}

pub fn schema() -> Schema {
    Schema::new("Lists endpoints, one page per read.")
        .with_attribute(Attribute::optional("endpointname", AttributeType::String))
        .with_attribute(Attribute::optional("security_system", AttributeType::String))
        .with_attribute(Attribute::optional("connection_type", AttributeType::String))
        .with_attributes(page_attributes())
        .with_attribute(
            Attribute::computed("results", AttributeType::MapList)
                .description("Endpoint records keyed by their wire names"),
        )
}

pub struct EndpointsDataSource {
    api: Arc<dyn SaviyntApi>,
}

impl EndpointsDataSource {
    pub fn new(api: Arc<dyn SaviyntApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataSource for EndpointsDataSource {
    fn type_name(&self) -> &'static str {
        DATA_SOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        schema()
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        self.schema().ensure_valid(config)?;
        let filter: Filter = serde_json::from_value(config.clone())?;

        let request = GetEndpointsRequest {
            endpoint_name: non_empty(filter.endpointname),
            security_system: non_empty(filter.security_system),
            connection_type: non_empty(filter.connection_type),
            offset: non_empty(filter.offset),
            max: non_empty(filter.max),
        };
        let response = self.api.get_endpoints(&request).await?;

        tracing::info!(
            count = response.endpoints.len(),
            total = ?response.total_count,
            "Read endpoints"
        );

        let results = response
            .endpoints
            .iter()
            .map(|record| flatten_record(record).map(|flat| json!(flat)))
            .collect::<Result<Vec<Value>>>()?;

        let mut output = echo_config(config)?;
        output.insert("results".to_string(), Value::Array(results));
        output.insert("msg".to_string(), json!(response.msg));
        output.insert("error_code".to_string(), json!(response.error_code));
        output.insert("display_count".to_string(), json!(response.display_count));
        output.insert("total_count".to_string(), json!(response.total_count));
        Ok(Value::Object(output))
    }
}
