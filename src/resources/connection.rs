//! Generic connection resource
//!
//! One handler serves every connector type. The connector-specific part is a
//! static [`ConnectorSpec`]: the platform's type literal, the registered type
//! names and the field table.
//!
//! Connection name and type identify a connection and can never change once
//! it exists. Every other attribute is sent in full on each create or update,
//! which the platform treats as an upsert.

use super::fields::{
    build_wire_attributes, merge_remote, normalize, refresh_attributes, AttributeMap, FieldSpec,
};
use crate::adapters::saviynt::{
    ConnectionDetailsResponse, ConnectionRequest, GetConnectionDetailsRequest, SaviyntApi,
};
use crate::domain::values::string_or_empty;
use crate::domain::{ProviderError, Result};
use crate::provider::{Attribute, AttributeType, Resource, Schema};
use crate::log_resource_operation;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Static description of one connector type
#[derive(Debug)]
pub struct ConnectorSpec {
    /// Type literal the platform uses, e.g. `AD`
    pub connection_type: &'static str,
    pub resource_type: &'static str,
    pub data_source_type: &'static str,
    /// Human readable connector name
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ConnectorSpec {
    pub fn field(&self, attribute: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.attribute == attribute)
    }

    /// True when `api_key` names a sensitive field of this connector
    pub fn is_sensitive_key(&self, api_key: &str) -> bool {
        self.fields
            .iter()
            .any(|f| f.sensitive && f.api_key.eq_ignore_ascii_case(api_key))
    }

    fn matches_type(&self, remote_type: &str) -> bool {
        remote_type.eq_ignore_ascii_case(self.connection_type)
    }
}

/// Base attributes shared by every connection
pub fn base_attributes() -> Vec<Attribute> {
    vec![
        Attribute::computed("id", AttributeType::String)
            .description("Connection key, or the connection name when the key is unknown"),
        Attribute::computed("connection_key", AttributeType::Number)
            .description("Key assigned by the platform"),
        Attribute::required("connection_name", AttributeType::String)
            .description("Name of the connection; cannot be changed"),
        Attribute::optional_computed("connection_type", AttributeType::String)
            .description("Connection type; defaults to the connector's type and cannot be changed"),
        Attribute::optional("description", AttributeType::String),
        Attribute::optional("defaultsavroles", AttributeType::String)
            .description("Default SAV roles for managing the connection"),
        Attribute::optional("email_template", AttributeType::String)
            .description("Email template applicable for notifications"),
        Attribute::optional("vault_connection", AttributeType::String),
        Attribute::optional("vault_configuration", AttributeType::String),
        Attribute::optional("save_in_vault", AttributeType::String),
        Attribute::computed("msg", AttributeType::String).description("Message of the last call"),
        Attribute::computed("error_code", AttributeType::String)
            .description("Error code of the last call"),
    ]
}

/// Resource schema of a connector
pub fn schema_for(spec: &ConnectorSpec) -> Schema {
    Schema::new(format!("Manages a {} connection.", spec.description))
        .with_attributes(base_attributes())
        .with_attributes(spec.fields.iter().map(FieldSpec::schema_attribute))
}

/// Connection state and plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionModel {
    pub id: Option<String>,
    pub connection_key: Option<i64>,
    #[serde(default)]
    pub connection_name: String,
    pub connection_type: Option<String>,
    pub description: Option<String>,
    pub defaultsavroles: Option<String>,
    pub email_template: Option<String>,
    pub vault_connection: Option<String>,
    pub vault_configuration: Option<String>,
    pub save_in_vault: Option<String>,
    pub msg: Option<String>,
    pub error_code: Option<String>,
    #[serde(flatten)]
    pub attributes: AttributeMap,
}

impl ConnectionModel {
    /// Parses a plan or state document for `spec`
    pub fn from_value(spec: &ConnectorSpec, value: &Value) -> Result<Self> {
        let mut model: ConnectionModel = serde_json::from_value(value.clone()).map_err(|e| {
            ProviderError::Serialization(format!("Invalid {} document: {e}", spec.resource_type))
        })?;
        normalize(spec.fields, &mut model.attributes);
        Ok(model)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Connection type from the document, or the connector default
    fn planned_type(&self, spec: &ConnectorSpec) -> String {
        match self.connection_type.as_deref() {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => spec.connection_type.to_string(),
        }
    }

    fn build_request(&self, spec: &ConnectorSpec, connection_type: String) -> Result<ConnectionRequest> {
        Ok(ConnectionRequest {
            connection_type,
            connection_name: self.connection_name.clone(),
            description: string_or_empty(&self.description),
            defaultsavroles: string_or_empty(&self.defaultsavroles),
            email_template: string_or_empty(&self.email_template),
            vault_connection: string_or_empty(&self.vault_connection),
            vault_configuration: string_or_empty(&self.vault_configuration),
            save_in_vault: string_or_empty(&self.save_in_vault),
            attributes: build_wire_attributes(spec.fields, &self.attributes)?,
        })
    }

    /// Copies a `getConnectionDetails` record into the model
    pub fn apply_details(
        &mut self,
        spec: &ConnectorSpec,
        details: &ConnectionDetailsResponse,
    ) -> Result<()> {
        if details.connection_key.is_some() {
            self.connection_key = details.connection_key;
        }
        merge_remote(&mut self.description, details.description.clone());
        merge_remote(&mut self.defaultsavroles, details.defaultsavroles.clone());
        merge_remote(&mut self.email_template, details.email_template.clone());
        if let Some(ref remote) = details.connection_attributes {
            refresh_attributes(spec.fields, &mut self.attributes, remote)?;
        }
        self.id = Some(connection_id(self.connection_key, &self.connection_name));
        Ok(())
    }
}

/// State id: the connection key, falling back to the name
fn connection_id(connection_key: Option<i64>, connection_name: &str) -> String {
    connection_key
        .map(|key| key.to_string())
        .unwrap_or_else(|| connection_name.to_string())
}

/// Rejects a connection type other than the connector's own
fn ensure_connector_type(spec: &ConnectorSpec, connection_type: &str) -> Result<()> {
    if spec.matches_type(connection_type) {
        Ok(())
    } else {
        Err(ProviderError::Validation(format!(
            "connection_type must be \"{}\" for {}, got \"{connection_type}\"",
            spec.connection_type, spec.resource_type
        )))
    }
}

/// Resource handler for one connector type
pub struct ConnectionResource {
    spec: &'static ConnectorSpec,
    api: Arc<dyn SaviyntApi>,
}

impl ConnectionResource {
    pub fn new(spec: &'static ConnectorSpec, api: Arc<dyn SaviyntApi>) -> Self {
        Self { spec, api }
    }

    /// Issues the upsert and folds the response into the model
    async fn save(&self, mut model: ConnectionModel, connection_type: String) -> Result<Value> {
        let request = model.build_request(self.spec, connection_type.clone())?;
        let response = self.api.create_or_update_connection(&request).await?;

        if response.connection_key.is_some() {
            model.connection_key = response.connection_key;
        }
        model.connection_type = Some(connection_type);
        model.msg = response.msg;
        model.error_code = Some(response.error_code.unwrap_or_else(|| "0".to_string()));
        model.id = Some(connection_id(model.connection_key, &model.connection_name));
        model.to_value()
    }

    async fn fetch(&self, connection_name: &str) -> Result<ConnectionDetailsResponse> {
        self.api
            .get_connection_details(&GetConnectionDetailsRequest::by_name(connection_name))
            .await
    }
}

#[async_trait]
impl Resource for ConnectionResource {
    fn type_name(&self) -> &'static str {
        self.spec.resource_type
    }

    fn schema(&self) -> Schema {
        schema_for(self.spec)
    }

    async fn create(&self, plan: &Value) -> Result<Value> {
        self.schema().ensure_valid(plan)?;
        let model = ConnectionModel::from_value(self.spec, plan)?;
        let connection_type = model.planned_type(self.spec);
        ensure_connector_type(self.spec, &connection_type)?;

        log_resource_operation!("create", self.spec.resource_type, model.connection_name);
        self.save(model, connection_type).await
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let mut model = ConnectionModel::from_value(self.spec, state)?;
        log_resource_operation!("read", self.spec.resource_type, model.connection_name);

        let details = self.fetch(&model.connection_name).await?;
        model.apply_details(self.spec, &details)?;
        model.to_value()
    }

    async fn update(&self, plan: &Value, prior: &Value) -> Result<Value> {
        self.schema().ensure_valid(plan)?;
        let mut planned = ConnectionModel::from_value(self.spec, plan)?;
        let prior = ConnectionModel::from_value(self.spec, prior)?;

        if planned.connection_name != prior.connection_name {
            tracing::warn!(
                prior = %prior.connection_name,
                planned = %planned.connection_name,
                "Rejected connection rename"
            );
            return Err(ProviderError::Validation(
                "Connection name cannot be updated".to_string(),
            ));
        }

        let connection_type = planned.planned_type(self.spec);
        if !connection_type.eq_ignore_ascii_case(&prior.planned_type(self.spec)) {
            return Err(ProviderError::Validation(
                "Connection type cannot by updated".to_string(),
            ));
        }
        ensure_connector_type(self.spec, &connection_type)?;

        log_resource_operation!("update", self.spec.resource_type, planned.connection_name);

        planned.connection_key = prior.connection_key;
        self.save(planned, connection_type).await
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let model = ConnectionModel::from_value(self.spec, state)?;
        log_resource_operation!("delete", self.spec.resource_type, model.connection_name);
        tracing::warn!(
            connection_name = %model.connection_name,
            "Connection removed from state only; the remote connection is not deleted"
        );
        Ok(())
    }

    async fn import(&self, id: &str) -> Result<Value> {
        log_resource_operation!("import", self.spec.resource_type, id);

        let details = self.fetch(id).await?;
        if let Some(ref remote_type) = details.connection_type {
            if !self.spec.matches_type(remote_type) {
                return Err(ProviderError::Validation(format!(
                    "Connection type mismatch: {id} is a {remote_type} connection, expected {}",
                    self.spec.connection_type
                )));
            }
        }

        let mut model = ConnectionModel {
            connection_name: details
                .connection_name
                .clone()
                .unwrap_or_else(|| id.to_string()),
            connection_type: Some(self.spec.connection_type.to_string()),
            msg: details.msg.clone(),
            error_code: Some(details.error_code.clone().unwrap_or_else(|| "0".to_string())),
            ..Default::default()
        };
        normalize(self.spec.fields, &mut model.attributes);
        model.apply_details(self.spec, &details)?;
        model.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::saviynt::fake::FakeSaviynt;
    use crate::adapters::saviynt::paths;
    use crate::resources::connectors::ad;
    use serde_json::json;

    fn resource(fake: &Arc<FakeSaviynt>) -> ConnectionResource {
        ConnectionResource::new(&ad::SPEC, fake.clone())
    }

    fn plan() -> Value {
        json!({
            "connection_name": "corp_ad",
            "description": "Corporate directory",
            "url": "ldap://dc01:389",
            "username": "CN=svc,DC=corp",
            "password": "secret",
            "create_account_json": "{\"cn\":\"${user.username}\"}"
        })
    }

    #[tokio::test]
    async fn test_create_sends_coalesced_request() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(
            paths::TEST_CONNECTION,
            json!({"errorCode": "0", "msg": "Connection created", "connectionKey": 41}),
        );

        let state = resource(&fake).create(&plan()).await.unwrap();

        let calls = fake.calls_to(paths::TEST_CONNECTION);
        assert_eq!(calls.len(), 1);
        let body = &calls[0];
        assert_eq!(body["connectiontype"], "AD");
        assert_eq!(body["connectionName"], "corp_ad");
        assert_eq!(body["URL"], "ldap://dc01:389");
        assert_eq!(body["PASSWORD"], "secret");
        assert_eq!(body["emailTemplate"], "");
        assert_eq!(body["SEARCHFILTER"], "");

        assert_eq!(state["id"], "41");
        assert_eq!(state["connection_key"], 41);
        assert_eq!(state["connection_type"], "AD");
        assert_eq!(state["msg"], "Connection created");
        assert_eq!(state["error_code"], "0");
        assert_eq!(state["search_filter"], Value::Null);
    }

    #[tokio::test]
    async fn test_create_id_falls_back_to_name() {
        let fake = Arc::new(FakeSaviynt::new());
        let state = resource(&fake).create(&plan()).await.unwrap();
        assert_eq!(state["id"], "corp_ad");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_json_without_calling_api() {
        let fake = Arc::new(FakeSaviynt::new());
        let mut plan = plan();
        plan["create_account_json"] = json!("{not json");

        let err = resource(&fake).create(&plan).await.unwrap_err();
        assert!(matches!(err, ProviderError::Serialization(_)));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_foreign_type() {
        let fake = Arc::new(FakeSaviynt::new());
        let mut plan = plan();
        plan["connection_type"] = json!("DB");

        let err = resource(&fake).create(&plan).await.unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_surfaces_api_error() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(
            paths::TEST_CONNECTION,
            json!({"errorCode": "1", "msg": "Invalid URL"}),
        );

        let err = resource(&fake).create(&plan()).await.unwrap_err();
        assert!(!err.is_local());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[tokio::test]
    async fn test_update_rejects_rename() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = resource(&fake);
        let prior = resource.create(&plan()).await.unwrap();

        let mut renamed = plan();
        renamed["connection_name"] = json!("corp_ad_2");
        let err = resource.update(&renamed, &prior).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation error: Connection name cannot be updated"
        );
        assert_eq!(fake.calls_to(paths::TEST_CONNECTION).len(), 1);
    }

    #[tokio::test]
    async fn test_update_rejects_type_change() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = resource(&fake);
        let prior = resource.create(&plan()).await.unwrap();

        let mut retyped = plan();
        retyped["connection_type"] = json!("LDAP");
        let err = resource.update(&retyped, &prior).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation error: Connection type cannot by updated"
        );
        assert_eq!(fake.calls_to(paths::TEST_CONNECTION).len(), 1);
    }

    #[tokio::test]
    async fn test_update_accepts_type_differing_only_in_case() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = resource(&fake);
        let mut lowercase = plan();
        lowercase["connection_type"] = json!("ad");
        let prior = resource.create(&lowercase).await.unwrap();
        assert_eq!(prior["connection_type"], "ad");

        let mut changed = plan();
        changed["description"] = json!("Directory for corp users");
        let state = resource.update(&changed, &prior).await.unwrap();

        assert_eq!(state["connection_type"], "AD");
        assert_eq!(state["description"], "Directory for corp users");
        assert_eq!(fake.calls_to(paths::TEST_CONNECTION).len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_key() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(
            paths::TEST_CONNECTION,
            json!({"errorCode": "0", "msg": "Success", "connectionKey": 7}),
        );
        let resource = resource(&fake);
        let prior = resource.create(&plan()).await.unwrap();

        fake.respond(paths::TEST_CONNECTION, json!({"errorCode": "0", "msg": "Updated"}));
        let mut changed = plan();
        changed["page_size"] = json!("1000");
        let state = resource.update(&changed, &prior).await.unwrap();

        assert_eq!(state["connection_key"], 7);
        assert_eq!(state["page_size"], "1000");
        assert_eq!(state["msg"], "Updated");
        let body = fake.calls_to(paths::TEST_CONNECTION).pop().unwrap();
        assert_eq!(body["PAGE_SIZE"], "1000");
    }

    #[tokio::test]
    async fn test_read_refreshes_from_details() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = resource(&fake);
        let state = resource.create(&plan()).await.unwrap();

        fake.respond(
            paths::GET_CONNECTION_DETAILS,
            json!({
                "errorCode": "0",
                "msg": "Success",
                "connectionkey": 41,
                "connectionname": "corp_ad",
                "connectiontype": "AD",
                "description": "Changed remotely",
                "emailtemplate": "",
                "connectionattributes": {
                    "URL": "ldap://dc02:389",
                    "PASSWORD": "********",
                    "SEARCHFILTER": ""
                }
            }),
        );

        let refreshed = resource.read(&state).await.unwrap();
        assert_eq!(refreshed["description"], "Changed remotely");
        assert_eq!(refreshed["url"], "ldap://dc02:389");
        assert_eq!(refreshed["password"], "secret");
        assert_eq!(refreshed["search_filter"], Value::Null);
        assert_eq!(refreshed["email_template"], Value::Null);
        assert_eq!(refreshed["id"], "41");

        let lookup = fake.calls_to(paths::GET_CONNECTION_DETAILS);
        assert_eq!(lookup[0], json!({"connectionname": "corp_ad"}));
    }

    #[tokio::test]
    async fn test_import_rejects_type_mismatch() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(
            paths::GET_CONNECTION_DETAILS,
            json!({"errorCode": "0", "connectionname": "hr_db", "connectiontype": "DB"}),
        );

        let err = resource(&fake).import("hr_db").await.unwrap_err();
        assert!(err.to_string().contains("Connection type mismatch"));
    }

    #[tokio::test]
    async fn test_delete_is_local() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = resource(&fake);
        let state = resource.create(&plan()).await.unwrap();

        resource.delete(&state).await.unwrap();
        assert_eq!(fake.calls().len(), 1);
    }
}
