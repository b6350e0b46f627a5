//! Per-connector connection data source
//!
//! Fetches one connection by name or key. Values of the connector's
//! sensitive fields are left out of `connection_attributes` unless
//! `authenticate = true`.

use super::echo_config;
use crate::adapters::saviynt::{GetConnectionDetailsRequest, SaviyntApi};
use crate::domain::values::{non_empty, value_to_attribute};
use crate::domain::{ProviderError, Result};
use crate::provider::{Attribute, AttributeType, DataSource, Schema};
use crate::resources::ConnectorSpec;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
struct Lookup {
    connection_name: Option<String>,
    connection_key: Option<i64>,
    #[serde(default)]
    authenticate: Option<bool>,
}

pub fn schema_for(spec: &ConnectorSpec) -> Schema {
    Schema::new(format!("Reads a {} connection.", spec.description))
        .with_attribute(
            Attribute::optional_computed("connection_name", AttributeType::String)
                .description("Name of the connection; this or connection_key is required"),
        )
        .with_attribute(Attribute::optional_computed("connection_key", AttributeType::Number))
        .with_attribute(
            Attribute::optional("authenticate", AttributeType::Bool)
                .description("Include sensitive connection attributes in the output"),
        )
        .with_attribute(Attribute::computed("id", AttributeType::String))
        .with_attribute(Attribute::computed("connection_type", AttributeType::String))
        .with_attribute(Attribute::computed("description", AttributeType::String))
        .with_attribute(Attribute::computed("defaultsavroles", AttributeType::String))
        .with_attribute(Attribute::computed("email_template", AttributeType::String))
        .with_attribute(Attribute::computed("status", AttributeType::String))
        .with_attribute(Attribute::computed("updated_by", AttributeType::String))
        .with_attribute(Attribute::computed("updated_date", AttributeType::String))
        .with_attribute(
            Attribute::computed("connection_attributes", AttributeType::StringMap).sensitive(),
        )
        .with_attribute(Attribute::computed("msg", AttributeType::String))
        .with_attribute(Attribute::computed("error_code", AttributeType::String))
}

pub struct ConnectionDataSource {
    spec: &'static ConnectorSpec,
    api: Arc<dyn SaviyntApi>,
}

impl ConnectionDataSource {
    pub fn new(spec: &'static ConnectorSpec, api: Arc<dyn SaviyntApi>) -> Self {
        Self { spec, api }
    }
}

#[async_trait]
impl DataSource for ConnectionDataSource {
    fn type_name(&self) -> &'static str {
        self.spec.data_source_type
    }

    fn schema(&self) -> Schema {
        schema_for(self.spec)
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        self.schema().ensure_valid(config)?;
        let lookup: Lookup = serde_json::from_value(config.clone())?;
        let authenticate = lookup.authenticate.unwrap_or(false);

        let request = match (non_empty(lookup.connection_name), lookup.connection_key) {
            (Some(name), _) => GetConnectionDetailsRequest::by_name(name),
            (None, Some(key)) => GetConnectionDetailsRequest::by_key(key.to_string()),
            (None, None) => {
                return Err(ProviderError::Validation(
                    "Either connection_name or connection_key must be set".to_string(),
                ))
            }
        };

        let details = self.api.get_connection_details(&request).await?;

        if let Some(ref remote_type) = details.connection_type {
            if !remote_type.eq_ignore_ascii_case(self.spec.connection_type) {
                return Err(ProviderError::Validation(format!(
                    "Connection type mismatch: expected {}, got {remote_type}",
                    self.spec.connection_type
                )));
            }
        }

        let mut attributes = BTreeMap::new();
        let mut hidden = 0usize;
        if let Some(ref remote) = details.connection_attributes {
            for (key, value) in remote {
                if !authenticate && self.spec.is_sensitive_key(key) {
                    hidden += 1;
                    continue;
                }
                if let Some(text) = value_to_attribute(value)? {
                    attributes.insert(key.clone(), text);
                }
            }
        }

        tracing::info!(
            data_source = self.spec.data_source_type,
            connection_name = ?details.connection_name,
            attribute_count = attributes.len(),
            hidden_count = hidden,
            "Read connection"
        );

        let id = details
            .connection_key
            .map(|k| k.to_string())
            .or_else(|| details.connection_name.clone());

        let mut output = echo_config(config)?;
        output.insert("id".to_string(), json!(id));
        output.insert("connection_name".to_string(), json!(details.connection_name));
        output.insert("connection_key".to_string(), json!(details.connection_key));
        output.insert("connection_type".to_string(), json!(details.connection_type));
        output.insert("description".to_string(), json!(details.description));
        output.insert("defaultsavroles".to_string(), json!(details.defaultsavroles));
        output.insert("email_template".to_string(), json!(details.email_template));
        output.insert("status".to_string(), json!(details.status));
        output.insert("updated_by".to_string(), json!(details.updated_by));
        output.insert("updated_date".to_string(), json!(details.updated_date));
        output.insert("connection_attributes".to_string(), json!(attributes));
        output.insert("msg".to_string(), json!(details.msg));
        output.insert("error_code".to_string(), json!(details.error_code));
        Ok(Value::Object(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::saviynt::fake::FakeSaviynt;
    use crate::adapters::saviynt::paths;
    use crate::resources::connectors::{ad, salesforce};

    fn details() -> Value {
        json!({
            "errorCode": "0",
            "msg": "Success",
            "connectionkey": 41,
            "connectionname": "corp_ad",
            "connectiontype": "AD",
            "connectionattributes": {
                "URL": "ldap://dc01",
                "PASSWORD": "hunter2",
                "STATUS_THRESHOLD_CONFIG": {"statusAndThresholdConfig": {"deleteLinks": false}}
            }
        })
    }

    #[tokio::test]
    async fn test_sensitive_values_hidden_by_default() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(paths::GET_CONNECTION_DETAILS, details());

        let output = ConnectionDataSource::new(&ad::SPEC, fake.clone())
            .read(&json!({"connection_name": "corp_ad"}))
            .await
            .unwrap();

        let attributes = &output["connection_attributes"];
        assert_eq!(attributes["URL"], "ldap://dc01");
        assert!(attributes.get("PASSWORD").is_none());
        assert_eq!(
            attributes["STATUS_THRESHOLD_CONFIG"],
            r#"{"statusAndThresholdConfig":{"deleteLinks":false}}"#
        );
        assert_eq!(output["id"], "41");
    }

    #[tokio::test]
    async fn test_authenticate_reveals_sensitive_values() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(paths::GET_CONNECTION_DETAILS, details());

        let output = ConnectionDataSource::new(&ad::SPEC, fake.clone())
            .read(&json!({"connection_key": 41, "authenticate": true}))
            .await
            .unwrap();

        assert_eq!(output["connection_attributes"]["PASSWORD"], "hunter2");
        let request = fake.calls_to(paths::GET_CONNECTION_DETAILS).pop().unwrap();
        assert_eq!(request, json!({"connectionkey": "41"}));
    }

    #[tokio::test]
    async fn test_requires_name_or_key() {
        let fake = Arc::new(FakeSaviynt::new());
        let err = ConnectionDataSource::new(&ad::SPEC, fake.clone())
            .read(&json!({}))
            .await
            .unwrap_err();
        assert!(err.is_local());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_type_mismatch() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(paths::GET_CONNECTION_DETAILS, details());

        let err = ConnectionDataSource::new(&salesforce::SPEC, fake.clone())
            .read(&json!({"connection_name": "corp_ad"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Connection type mismatch"));
    }
}
