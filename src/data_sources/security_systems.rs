//! Security system list data source

use super::{echo_config, flatten_record, page_attributes};
use crate::adapters::saviynt::{GetSecuritySystemsRequest, SaviyntApi};
use crate::domain::values::non_empty;
use crate::domain::Result;
use crate::provider::{Attribute, AttributeType, DataSource, Schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub const DATA_SOURCE_TYPE: &str = "saviynt_security_systems_datasource";

#[derive(Debug, Default, Deserialize)]
struct Filter {
    systemname: Option<String>,
    connection_name: Option<String>,
    connection_type: Option<String>,
    offset: Option<String>,
    max: Option<String>,
}

pub fn schema() -> Schema {
    Schema::new("Lists security systems, one page per read.")
        .with_attribute(Attribute::optional("systemname", AttributeType::String))
        .with_attribute(Attribute::optional("connection_name", AttributeType::String))
        .with_attribute(Attribute::optional("connection_type", AttributeType::String))
        .with_attributes(page_attributes())
        .with_attribute(Attribute::computed("results", AttributeType::MapList))
}

pub struct SecuritySystemsDataSource {
    api: Arc<dyn SaviyntApi>,
}

impl SecuritySystemsDataSource {
    pub fn new(api: Arc<dyn SaviyntApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataSource for SecuritySystemsDataSource {
    fn type_name(&self) -> &'static str {
        DATA_SOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        schema()
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        self.schema().ensure_valid(config)?;
        let filter: Filter = serde_json::from_value(config.clone())?;

        let request = GetSecuritySystemsRequest {
            systemname: non_empty(filter.systemname),
            connection_name: non_empty(filter.connection_name),
            connection_type: non_empty(filter.connection_type),
            offset: non_empty(filter.offset),
            max: non_empty(filter.max),
        };
        let response = self.api.get_security_systems(&request).await?;

        tracing::info!(
            count = response.security_system_details.len(),
            total = ?response.total_count,
            "Read security systems"
        );

        let results = response
            .security_system_details
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::saviynt::fake::FakeSaviynt;
    use crate::adapters::saviynt::paths;

    #[tokio::test]
    async fn test_read_security_systems() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(
            paths::GET_SECURITY_SYSTEMS,
            json!({
                "errorCode": 0,
                "msg": "Success",
                "displayCount": 1,
                "totalCount": 1,
                "securitySystemDetails": [
                    {"systemname": "hr_system", "displayName": "HR System", "hostname": "hr.example.com"}
                ]
            }),
        );

        let output = SecuritySystemsDataSource::new(fake.clone())
            .read(&json!({"connection_name": "hr_conn", "offset": "0", "max": ""}))
            .await
            .unwrap();

        let request = fake.calls_to(paths::GET_SECURITY_SYSTEMS).pop().unwrap();
        assert_eq!(request, json!({"connectionname": "hr_conn", "offset": "0"}));
        assert_eq!(output["results"][0]["displayName"], "HR System");
        assert_eq!(output["error_code"], "0");
        assert_eq!(output["max"], "");
    }

    #[tokio::test]
    async fn test_empty_result() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(paths::GET_SECURITY_SYSTEMS, json!({"errorCode": "0"}));

        let output = SecuritySystemsDataSource::new(fake.clone())
            .read(&json!({}))
            .await
            .unwrap();
        assert_eq!(output["results"], json!([]));
        assert_eq!(output["total_count"], Value::Null);
    }
}
