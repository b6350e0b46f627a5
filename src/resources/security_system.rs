//! Security system resource

use super::fields::{
    build_wire_attributes, find_record, normalize, refresh_attributes, remote_string,
    AttributeMap, FieldSpec,
};
use crate::adapters::saviynt::{GetSecuritySystemsRequest, SaviyntApi, SecuritySystemRequest, StatusResponse};
use crate::domain::values::non_empty;
use crate::domain::{ProviderError, Result, SaviyntError};
use crate::log_resource_operation;
use crate::provider::{Attribute, AttributeType, Resource, Schema};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

pub const RESOURCE_TYPE: &str = "saviynt_security_system_resource";

/// Optional flat attributes of a security system
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("hostname", "hostname"),
    FieldSpec::text("port", "port"),
    FieldSpec::text("access_add_workflow", "accessAddWorkflow"),
    FieldSpec::text("access_remove_workflow", "accessRemoveWorkflow"),
    FieldSpec::text("add_service_account_workflow", "addServiceAccountWorkflow"),
    FieldSpec::text("remove_service_account_workflow", "removeServiceAccountWorkflow"),
    FieldSpec::json("connection_parameters", "connectionparameters"),
    FieldSpec::text("automated_provisioning", "automatedProvisioning"),
    FieldSpec::text("use_open_connector", "useopenconnector"),
    FieldSpec::text("manage_entity", "manageEntity"),
    FieldSpec::text("persistent_data", "persistentData"),
    FieldSpec::text("default_system", "defaultSystem"),
    FieldSpec::text("recon_application", "reconApplication"),
    FieldSpec::text("instant_provision", "instantprovision"),
    FieldSpec::text("provisioning_tries", "provisioningTries"),
    FieldSpec::text("provisioning_comments", "provisioningcomments"),
    FieldSpec::text("proposed_account_owners_workflow", "proposedAccountOwnersworkflow"),
    FieldSpec::text("firefighterid_workflow", "firefighteridWorkflow"),
    FieldSpec::text(
        "firefighterid_request_access_workflow",
        "firefighteridRequestAccessWorkflow",
    ),
    FieldSpec::text("policy_rule", "policyRule"),
    FieldSpec::text("policy_rule_service_account", "policyRuleServiceAccount"),
    FieldSpec::text("connectionname", "connectionname"),
    FieldSpec::text("provisioning_connection", "provisioningConnection"),
    FieldSpec::text("service_desk_connection", "serviceDeskConnection"),
    FieldSpec::json("external_risk_connection_json", "externalRiskConnectionJson"),
    FieldSpec::text("inherent_sod_report_fields", "inherentSODReportFields"),
];

/// Security system state and plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecuritySystemModel {
    pub id: Option<String>,
    #[serde(default)]
    pub systemname: String,
    #[serde(default)]
    pub display_name: String,
    pub msg: Option<String>,
    pub error_code: Option<String>,
    #[serde(flatten)]
    pub attributes: AttributeMap,
}

impl SecuritySystemModel {
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut model: SecuritySystemModel =
            serde_json::from_value(value.clone()).map_err(|e| {
                ProviderError::Serialization(format!("Invalid {RESOURCE_TYPE} document: {e}"))
            })?;
        normalize(FIELDS, &mut model.attributes);
        Ok(model)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn build_request(&self) -> Result<SecuritySystemRequest> {
        Ok(SecuritySystemRequest {
            systemname: self.systemname.clone(),
            display_name: self.display_name.clone(),
            attributes: build_wire_attributes(FIELDS, &self.attributes)?,
        })
    }

    fn apply_status(&mut self, status: StatusResponse) {
        self.msg = status.msg;
        self.error_code = Some(status.error_code.unwrap_or_else(|| "0".to_string()));
        self.id = Some(self.systemname.clone());
    }

    pub fn apply_record(&mut self, record: &Map<String, Value>) -> Result<()> {
        if let Some(display_name) = non_empty(remote_string(record, "displayName")?) {
            self.display_name = display_name;
        }
        refresh_attributes(FIELDS, &mut self.attributes, record)?;
        self.id = Some(self.systemname.clone());
        Ok(())
    }
}

pub fn schema() -> Schema {
    Schema::new("Manages a security system.")
        .with_attribute(Attribute::computed("id", AttributeType::String))
        .with_attribute(
            Attribute::required("systemname", AttributeType::String)
                .description("Name of the security system; cannot be changed"),
        )
        .with_attribute(Attribute::required("display_name", AttributeType::String))
        .with_attributes(FIELDS.iter().map(FieldSpec::schema_attribute))
        .with_attribute(Attribute::computed("msg", AttributeType::String))
        .with_attribute(Attribute::computed("error_code", AttributeType::String))
}

pub struct SecuritySystemResource {
    api: Arc<dyn SaviyntApi>,
}

impl SecuritySystemResource {
    pub fn new(api: Arc<dyn SaviyntApi>) -> Self {
        Self { api }
    }

    async fn fetch(&self, systemname: &str) -> Result<Map<String, Value>> {
        let request = GetSecuritySystemsRequest {
            systemname: Some(systemname.to_string()),
            ..Default::default()
        };
        let response = self.api.get_security_systems(&request).await?;
        find_record(&response.security_system_details, "systemname", systemname)
            .cloned()
            .ok_or_else(|| {
                SaviyntError::NotFound(format!("Security system {systemname} does not exist"))
                    .into()
            })
    }
}

#[async_trait]
impl Resource for SecuritySystemResource {
    fn type_name(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        schema()
    }

    async fn create(&self, plan: &Value) -> Result<Value> {
        self.schema().ensure_valid(plan)?;
        let mut model = SecuritySystemModel::from_value(plan)?;
        let request = model.build_request()?;

        log_resource_operation!("create", RESOURCE_TYPE, model.systemname);

        let status = self.api.create_security_system(&request).await?;
        model.apply_status(status);
        model.to_value()
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let mut model = SecuritySystemModel::from_value(state)?;
        log_resource_operation!("read", RESOURCE_TYPE, model.systemname);

        let record = self.fetch(&model.systemname).await?;
        model.apply_record(&record)?;
        model.to_value()
    }

    async fn update(&self, plan: &Value, prior: &Value) -> Result<Value> {
        self.schema().ensure_valid(plan)?;
        let mut planned = SecuritySystemModel::from_value(plan)?;
        let prior = SecuritySystemModel::from_value(prior)?;

        if planned.systemname != prior.systemname {
            return Err(ProviderError::Validation(
                "System name cannot be updated".to_string(),
            ));
        }

        log_resource_operation!("update", RESOURCE_TYPE, planned.systemname);

        let request = planned.build_request()?;
        let status = self.api.update_security_system(&request).await?;
        planned.apply_status(status);
        planned.to_value()
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let model = SecuritySystemModel::from_value(state)?;
        log_resource_operation!("delete", RESOURCE_TYPE, model.systemname);
        tracing::warn!(
            systemname = %model.systemname,
            "Security system removed from state only; the remote system is not deleted"
        );
        Ok(())
    }

    async fn import(&self, id: &str) -> Result<Value> {
        log_resource_operation!("import", RESOURCE_TYPE, id);

        let record = self.fetch(id).await?;
        let mut model = SecuritySystemModel {
            systemname: id.to_string(),
            error_code: Some("0".to_string()),
            ..Default::default()
        };
        normalize(FIELDS, &mut model.attributes);
        model.apply_record(&record)?;
        model.to_value()
    }
}
