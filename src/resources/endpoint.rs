//! Endpoint resource
//!
//! An endpoint is the governed scope of a security system. Besides its flat
//! attributes it carries three nested lists: requestable role types, task
//! email templates and mapped endpoints. Endpoint names are unique; creating
//! a second endpoint with the same name is rejected before `createEndpoint`
//! is issued.

use super::fields::{
    build_wire_attributes, find_record, lookup, normalize, null_as_default,
    refresh_attributes, remote_string, AttributeMap, FieldSpec,
};
use crate::adapters::saviynt::{
    EndpointRequest, GetEndpointsRequest, MappedEndpoint, RequestableRoleType, SaviyntApi,
    StatusResponse, TaskEmailTemplate,
};
use crate::domain::values::{non_empty, string_or_empty};
use crate::domain::{ProviderError, Result, SaviyntError};
use crate::log_resource_operation;
use crate::provider::{Attribute, AttributeType, Resource, Schema};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

pub const RESOURCE_TYPE: &str = "saviynt_endpoint_resource";

macro_rules! endpoint_fields {
    (
        fixed: [$($fixed:expr),* $(,)?],
        custom_property: [$($cp:literal),*],
        account_custom_property_label: [$($acp:literal),*],
        custom_property_label: [$($cpl:literal),*] $(,)?
    ) => {
        &[
            $($fixed,)*
            $(FieldSpec::text(
                concat!("custom_property", $cp),
                concat!("customproperty", $cp),
            ),)*
            $(FieldSpec::text(
                concat!("account_custom_property_", $acp, "_label"),
                concat!("accountCustomProperty", $acp, "Label"),
            ),)*
            $(FieldSpec::text(
                concat!("custom_property", $cpl, "_label"),
                concat!("customproperty", $cpl, "Label"),
            ),)*
        ]
    };
}

/// Optional flat attributes of an endpoint
pub const FIELDS: &[FieldSpec] = endpoint_fields! {
    fixed: [
        FieldSpec::text("description", "description"),
        FieldSpec::text("owner_type", "ownerType"),
        FieldSpec::text("owner", "owner"),
        FieldSpec::text("resource_owner_type", "resourceOwnerType"),
        FieldSpec::text("resource_owner", "resourceOwner"),
        FieldSpec::text("access_query", "accessquery"),
        FieldSpec::text("enable_copy_access", "enableCopyAccess"),
        FieldSpec::text(
            "disable_new_account_request_if_account_exists",
            "disableNewAccountRequestIfAccountExists",
        ),
        FieldSpec::text("disable_remove_account", "disableRemoveAccount"),
        FieldSpec::text("disable_modify_account", "disableModifyAccount"),
        FieldSpec::text("user_account_correlation_rule", "userAccountCorrelationRule"),
        FieldSpec::text("create_ent_task_for_remove_acc", "createEntTaskforRemoveAcc"),
        FieldSpec::text("outofband_action", "outOfBandAction"),
        FieldSpec::json("connection_config", "connectionconfig"),
        FieldSpec::text("requestable", "requestable"),
        FieldSpec::text("parent_account_pattern", "parentAccountPattern"),
        FieldSpec::text("service_account_name_rule", "serviceAccountNameRule"),
        FieldSpec::text("service_account_access_query", "serviceAccountAccessQuery"),
        FieldSpec::text("block_inflight_request", "blockInflightRequest"),
        FieldSpec::text("account_name_rule", "accountNameRule"),
        FieldSpec::text("allow_change_password_sql_query", "allowChangePasswordSqlquery"),
        FieldSpec::text("account_name_validator_regex", "accountNameValidatorRegex"),
        FieldSpec::json("status_config", "StatusConfig"),
        FieldSpec::json("plugin_configs", "pluginConfigs"),
        FieldSpec::json("endpoint_config", "endpointConfig"),
        FieldSpec::text("allow_remove_all_role_on_request", "allowRemoveAllRoleOnRequest"),
        FieldSpec::text("change_password_access_query", "changePasswordAccessQuery"),
        FieldSpec::text("primary_account_type", "primaryAccountType"),
        FieldSpec::text("account_type_no_password_change", "accountTypeNoPasswordChange"),
        FieldSpec::text("account_type_no_deprovision", "accountTypeNoDeprovision"),
        FieldSpec::text("role_type_as_json", "roleTypeAsJson"),
        FieldSpec::text("enable_account_query", "enableAccountQuery"),
        FieldSpec::text("disable_account_query", "disableAccountQuery"),
        FieldSpec::text("ent_type_as_json", "entTypeAsJson"),
        FieldSpec::text("taskemail_templates", "taskemailtemplates"),
        FieldSpec::text("create_account_workflow", "createAccountWorkflow"),
        FieldSpec::text("modify_account_workflow", "modifyAccountWorkflow"),
        FieldSpec::text("remove_account_workflow", "removeAccountWorkflow"),
        FieldSpec::text("account_query", "accountQuery"),
    ],
    custom_property: [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45
    ],
    account_custom_property_label: [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30
    ],
    custom_property_label: [31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45],
};

/// Requestable role type (state shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTypeModel {
    #[serde(default)]
    pub role_type: String,
    #[serde(default)]
    pub request_option: Option<String>,
    #[serde(default)]
    pub required: Option<String>,
    #[serde(default)]
    pub requested_timeframe: Option<String>,
    #[serde(default)]
    pub enable_requested_timeframe: Option<String>,
    #[serde(default)]
    pub hide_requested_timeframe: Option<String>,
    #[serde(default)]
    pub show_on: Option<String>,
}

impl From<&RoleTypeModel> for RequestableRoleType {
    fn from(m: &RoleTypeModel) -> Self {
        Self {
            role_type: m.role_type.clone(),
            request_option: string_or_empty(&m.request_option),
            required: string_or_empty(&m.required),
            requested_timeframe: string_or_empty(&m.requested_timeframe),
            enable_requested_timeframe: string_or_empty(&m.enable_requested_timeframe),
            hide_requested_timeframe: string_or_empty(&m.hide_requested_timeframe),
            show_on: string_or_empty(&m.show_on),
        }
    }
}

impl From<RequestableRoleType> for RoleTypeModel {
    fn from(w: RequestableRoleType) -> Self {
        Self {
            role_type: w.role_type,
            request_option: non_empty(Some(w.request_option)),
            required: non_empty(Some(w.required)),
            requested_timeframe: non_empty(Some(w.requested_timeframe)),
            enable_requested_timeframe: non_empty(Some(w.enable_requested_timeframe)),
            hide_requested_timeframe: non_empty(Some(w.hide_requested_timeframe)),
            show_on: non_empty(Some(w.show_on)),
        }
    }
}

/// Task email template (state shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplateModel {
    #[serde(default)]
    pub email_template_type: String,
    #[serde(default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub email_template: Option<String>,
}

impl From<&EmailTemplateModel> for TaskEmailTemplate {
    fn from(m: &EmailTemplateModel) -> Self {
        Self {
            email_template_type: m.email_template_type.clone(),
            task_type: string_or_empty(&m.task_type),
            email_template: string_or_empty(&m.email_template),
        }
    }
}

impl From<TaskEmailTemplate> for EmailTemplateModel {
    fn from(w: TaskEmailTemplate) -> Self {
        Self {
            email_template_type: w.email_template_type,
            task_type: non_empty(Some(w.task_type)),
            email_template: non_empty(Some(w.email_template)),
        }
    }
}

/// Mapped endpoint (state shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedEndpointModel {
    #[serde(default)]
    pub security_system: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub requestable: Option<String>,
    #[serde(default)]
    pub operation: Option<String>,
}

impl From<&MappedEndpointModel> for MappedEndpoint {
    fn from(m: &MappedEndpointModel) -> Self {
        Self {
            security_system: m.security_system.clone(),
            endpoint: m.endpoint.clone(),
            requestable: string_or_empty(&m.requestable),
            operation: string_or_empty(&m.operation),
        }
    }
}

impl From<MappedEndpoint> for MappedEndpointModel {
    fn from(w: MappedEndpoint) -> Self {
        Self {
            security_system: w.security_system,
            endpoint: w.endpoint,
            requestable: non_empty(Some(w.requestable)),
            operation: non_empty(Some(w.operation)),
        }
    }
}

/// Endpoint state and plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointModel {
    pub id: Option<String>,
    #[serde(default)]
    pub endpoint_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub security_system: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requestable_role_type: Vec<RoleTypeModel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_template: Vec<EmailTemplateModel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mapped_endpoints: Vec<MappedEndpointModel>,
    pub msg: Option<String>,
    pub error_code: Option<String>,
    #[serde(flatten)]
    pub attributes: AttributeMap,
}

impl EndpointModel {
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut model: EndpointModel = serde_json::from_value(value.clone()).map_err(|e| {
            ProviderError::Serialization(format!("Invalid {RESOURCE_TYPE} document: {e}"))
        })?;
        normalize(FIELDS, &mut model.attributes);
        Ok(model)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn build_request(&self) -> Result<EndpointRequest> {
        Ok(EndpointRequest {
            endpoint_name: self.endpoint_name.clone(),
            display_name: self.display_name.clone(),
            security_system: self.security_system.clone(),
            attributes: build_wire_attributes(FIELDS, &self.attributes)?,
            requestable_role_type: self.requestable_role_type.iter().map(Into::into).collect(),
            task_email_templates: self.email_template.iter().map(Into::into).collect(),
            mapped_endpoints: self.mapped_endpoints.iter().map(Into::into).collect(),
        })
    }

    fn apply_status(&mut self, status: StatusResponse) {
        self.msg = status.msg;
        self.error_code = Some(status.error_code.unwrap_or_else(|| "0".to_string()));
        self.id = Some(self.endpoint_name.clone());
    }

    /// Copies a `getEndpoints` record into the model
    ///
    /// Nested lists are only replaced when the record carries them.
    pub fn apply_record(&mut self, record: &Map<String, Value>) -> Result<()> {
        if let Some(display_name) = non_empty(remote_string(record, "displayName")?) {
            self.display_name = display_name;
        }
        if let Some(security_system) = non_empty(remote_string(record, "securitysystem")?) {
            self.security_system = security_system;
        }
        refresh_attributes(FIELDS, &mut self.attributes, record)?;

        if let Some(rows) = nested_rows::<RequestableRoleType>(record, "requestableRoleType")? {
            self.requestable_role_type = rows.into_iter().map(Into::into).collect();
        }
        if let Some(rows) = nested_rows::<TaskEmailTemplate>(record, "taskEmailTemplates")? {
            self.email_template = rows.into_iter().map(Into::into).collect();
        }
        if let Some(rows) = nested_rows::<MappedEndpoint>(record, "mappedEndpoints")? {
            self.mapped_endpoints = rows.into_iter().map(Into::into).collect();
        }

        self.id = Some(self.endpoint_name.clone());
        Ok(())
    }
}

/// Decodes a nested list from a record; `None` when absent or null
///
/// Some tenants return nested lists as JSON-encoded strings.
fn nested_rows<T: DeserializeOwned>(record: &Map<String, Value>, key: &str) -> Result<Option<Vec<T>>> {
    let value = match lookup(record, key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => serde_json::from_str(s)?,
        Some(other) => other.clone(),
    };
    serde_json::from_value(value).map(Some).map_err(|e| {
        ProviderError::Serialization(format!("Unreadable {key} in endpoint record: {e}"))
    })
}

fn role_type_attributes() -> Vec<Attribute> {
    vec![
        Attribute::required("role_type", AttributeType::String),
        Attribute::optional("request_option", AttributeType::String),
        Attribute::optional("required", AttributeType::String),
        Attribute::optional("requested_timeframe", AttributeType::String),
        Attribute::optional("enable_requested_timeframe", AttributeType::String),
        Attribute::optional("hide_requested_timeframe", AttributeType::String),
        Attribute::optional("show_on", AttributeType::String),
    ]
}

fn email_template_attributes() -> Vec<Attribute> {
    vec![
        Attribute::required("email_template_type", AttributeType::String),
        Attribute::optional("task_type", AttributeType::String),
        Attribute::optional("email_template", AttributeType::String),
    ]
}

fn mapped_endpoint_attributes() -> Vec<Attribute> {
    vec![
        Attribute::required("security_system", AttributeType::String),
        Attribute::required("endpoint", AttributeType::String),
        Attribute::optional("requestable", AttributeType::String),
        Attribute::optional("operation", AttributeType::String),
    ]
}

pub fn schema() -> Schema {
    Schema::new("Manages an endpoint of a security system.")
        .with_attribute(Attribute::computed("id", AttributeType::String))
        .with_attribute(
            Attribute::required("endpoint_name", AttributeType::String)
                .description("Name of the endpoint; cannot be changed"),
        )
        .with_attribute(Attribute::required("display_name", AttributeType::String))
        .with_attribute(
            Attribute::required("security_system", AttributeType::String)
                .description("Security system the endpoint belongs to"),
        )
        .with_attributes(FIELDS.iter().map(FieldSpec::schema_attribute))
        .with_attribute(Attribute::optional(
            "requestable_role_type",
            AttributeType::ObjectList(role_type_attributes()),
        ))
        .with_attribute(Attribute::optional(
            "email_template",
            AttributeType::ObjectList(email_template_attributes()),
        ))
        .with_attribute(Attribute::optional(
            "mapped_endpoints",
            AttributeType::ObjectList(mapped_endpoint_attributes()),
        ))
        .with_attribute(Attribute::computed("msg", AttributeType::String))
        .with_attribute(Attribute::computed("error_code", AttributeType::String))
}

pub struct EndpointResource {
    api: Arc<dyn SaviyntApi>,
}

impl EndpointResource {
    pub fn new(api: Arc<dyn SaviyntApi>) -> Self {
        Self { api }
    }

    /// Looks an endpoint up by exact name
    async fn find(&self, endpoint_name: &str) -> Result<Option<Map<String, Value>>> {
        let request = GetEndpointsRequest {
            endpoint_name: Some(endpoint_name.to_string()),
            ..Default::default()
        };
        let response = self.api.get_endpoints(&request).await?;
        Ok(find_record(&response.endpoints, "endpointname", endpoint_name).cloned())
    }

    /// Duplicate check ahead of `createEndpoint`
    ///
    /// An API error code on this lookup means the endpoint is not there.
    async fn exists(&self, endpoint_name: &str) -> Result<bool> {
        match self.find(endpoint_name).await {
            Ok(record) => Ok(record.is_some()),
            Err(ProviderError::Api(SaviyntError::ApiError { code, message })) => {
                tracing::debug!(endpoint_name, code = %code, message = %message, "Endpoint lookup returned no match");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn require(&self, endpoint_name: &str) -> Result<Map<String, Value>> {
        self.find(endpoint_name).await?.ok_or_else(|| {
            SaviyntError::NotFound(format!("Endpoint {endpoint_name} does not exist")).into()
        })
    }
}

#[async_trait]
impl Resource for EndpointResource {
    fn type_name(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        schema()
    }

    async fn create(&self, plan: &Value) -> Result<Value> {
        self.schema().ensure_valid(plan)?;
        let mut model = EndpointModel::from_value(plan)?;
        let request = model.build_request()?;

        log_resource_operation!("create", RESOURCE_TYPE, model.endpoint_name);

        if self.exists(&model.endpoint_name).await? {
            return Err(ProviderError::Validation(
                "Endpoint name already exists".to_string(),
            ));
        }

        let status = self.api.create_endpoint(&request).await?;
        model.apply_status(status);
        model.to_value()
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let mut model = EndpointModel::from_value(state)?;
        log_resource_operation!("read", RESOURCE_TYPE, model.endpoint_name);

        let record = self.require(&model.endpoint_name).await?;
        model.apply_record(&record)?;
        model.to_value()
    }

    async fn update(&self, plan: &Value, prior: &Value) -> Result<Value> {
        self.schema().ensure_valid(plan)?;
        let mut planned = EndpointModel::from_value(plan)?;
        let prior = EndpointModel::from_value(prior)?;

        if planned.endpoint_name != prior.endpoint_name {
            return Err(ProviderError::Validation(
                "Endpoint name cannot be updated".to_string(),
            ));
        }

        log_resource_operation!("update", RESOURCE_TYPE, planned.endpoint_name);

        let request = planned.build_request()?;
        let status = self.api.update_endpoint(&request).await?;
        planned.apply_status(status);
        planned.to_value()
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let model = EndpointModel::from_value(state)?;
        log_resource_operation!("delete", RESOURCE_TYPE, model.endpoint_name);
        tracing::warn!(
            endpoint_name = %model.endpoint_name,
            "Endpoint removed from state only; the remote endpoint is not deleted"
        );
        Ok(())
    }

    async fn import(&self, id: &str) -> Result<Value> {
        log_resource_operation!("import", RESOURCE_TYPE, id);

        let record = self.require(id).await?;
        let mut model = EndpointModel {
            endpoint_name: id.to_string(),
            error_code: Some("0".to_string()),
            ..Default::default()
        };
        normalize(FIELDS, &mut model.attributes);
        model.apply_record(&record)?;
        model.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::saviynt::fake::FakeSaviynt;
    use crate::adapters::saviynt::paths;
    use serde_json::json;

    fn plan() -> Value {
        json!({
            "endpoint_name": "hr_portal",
            "display_name": "HR Portal",
            "security_system": "hr_system",
            "description": "HR self service",
            "custom_property1": "cost_center",
            "account_custom_property_1_label": "Cost center",
            "custom_property45_label": "Region",
            "requestable_role_type": [
                {"role_type": "ENTERPRISE", "request_option": "DropdownSingle", "required": "true"}
            ],
            "mapped_endpoints": [
                {"security_system": "ad_system", "endpoint": "corp_ad", "operation": "ADD"}
            ]
        })
    }

    #[test]
    fn test_generated_custom_property_fields() {
        let keys: Vec<_> = FIELDS.iter().map(|f| (f.attribute, f.api_key)).collect();
        assert!(keys.contains(&("custom_property1", "customproperty1")));
        assert!(keys.contains(&("custom_property45", "customproperty45")));
        assert!(keys.contains(&(
            "account_custom_property_30_label",
            "accountCustomProperty30Label"
        )));
        assert!(keys.contains(&("custom_property31_label", "customproperty31Label")));
        assert!(!keys.iter().any(|(a, _)| *a == "custom_property46"));
    }

    #[tokio::test]
    async fn test_create_sends_nested_lists() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(paths::GET_ENDPOINTS, json!({"errorCode": "0", "Endpoints": []}));
        fake.respond(paths::CREATE_ENDPOINT, json!({"errorCode": "0", "msg": "Success"}));

        let state = EndpointResource::new(fake.clone()).create(&plan()).await.unwrap();

        let body = fake.calls_to(paths::CREATE_ENDPOINT).pop().unwrap();
        assert_eq!(body["endpointname"], "hr_portal");
        assert_eq!(body["displayName"], "HR Portal");
        assert_eq!(body["customproperty1"], "cost_center");
        assert_eq!(body["customproperty2"], "");
        assert_eq!(body["accountCustomProperty1Label"], "Cost center");
        assert_eq!(body["requestableRoleType"][0]["roleType"], "ENTERPRISE");
        assert_eq!(body["requestableRoleType"][0]["requestOption"], "DropdownSingle");
        assert_eq!(body["mappedEndpoints"][0]["securitySystem"], "ad_system");
        assert!(body.get("taskEmailTemplates").is_none());

        assert_eq!(state["id"], "hr_portal");
        assert_eq!(state["msg"], "Success");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(
            paths::GET_ENDPOINTS,
            json!({"errorCode": "0", "Endpoints": [{"endpointname": "hr_portal"}]}),
        );

        let err = EndpointResource::new(fake.clone())
            .create(&plan())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Endpoint name already exists");
        assert!(fake.calls_to(paths::CREATE_ENDPOINT).is_empty());
    }

    #[tokio::test]
    async fn test_lookup_error_code_means_absent() {
        let fake = Arc::new(FakeSaviynt::new());
        fake.respond(
            paths::GET_ENDPOINTS,
            json!({"errorCode": "1", "msg": "No endpoints found"}),
        );

        EndpointResource::new(fake.clone()).create(&plan()).await.unwrap();
        assert_eq!(fake.calls_to(paths::CREATE_ENDPOINT).len(), 1);
    }

    #[tokio::test]
    async fn test_update_rejects_rename() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = EndpointResource::new(fake.clone());
        let prior = resource.create(&plan()).await.unwrap();

        let mut renamed = plan();
        renamed["endpoint_name"] = json!("hr_portal_v2");
        let err = resource.update(&renamed, &prior).await.unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Endpoint name cannot be updated");
        assert!(fake.calls_to(paths::UPDATE_ENDPOINT).is_empty());
    }

    #[tokio::test]
    async fn test_read_refreshes_record() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = EndpointResource::new(fake.clone());
        let state = resource.create(&plan()).await.unwrap();

        fake.respond(
            paths::GET_ENDPOINTS,
            json!({
                "errorCode": "0",
                "Endpoints": [{
                    "endpointname": "hr_portal",
                    "displayName": "HR Portal (new)",
                    "securitysystem": "hr_system",
                    "description": "",
                    "customproperty2": "location",
                    "taskEmailTemplates": "[{\"emailTemplateType\":\"TaskCreation\",\"taskType\":\"ADDACCESS\",\"emailTemplate\":\"Notify\"}]"
                }]
            }),
        );

        let refreshed = resource.read(&state).await.unwrap();
        assert_eq!(refreshed["display_name"], "HR Portal (new)");
        assert_eq!(refreshed["description"], "");
        assert_eq!(refreshed["custom_property2"], "location");
        assert_eq!(refreshed["email_template"][0]["task_type"], "ADDACCESS");
        assert_eq!(refreshed["requestable_role_type"][0]["role_type"], "ENTERPRISE");
    }

    #[tokio::test]
    async fn test_read_missing_endpoint() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = EndpointResource::new(fake.clone());
        let state = resource.create(&plan()).await.unwrap();

        let err = resource.read(&state).await.unwrap_err();
        assert!(matches!(err, ProviderError::Api(SaviyntError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_propagates_api_error_code() {
        let fake = Arc::new(FakeSaviynt::new());
        let resource = EndpointResource::new(fake.clone());
        let state = resource.create(&plan()).await.unwrap();

        fake.respond(
            paths::GET_ENDPOINTS,
            json!({"errorCode": "1", "msg": "Insufficient privileges"}),
        );

        let err = resource.read(&state).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Api(SaviyntError::ApiError { ref message, .. })
                if message == "Insufficient privileges"
        ));

        let err = resource.import("hr_portal").await.unwrap_err();
        assert!(!matches!(err, ProviderError::Api(SaviyntError::NotFound(_))));
    }
}
