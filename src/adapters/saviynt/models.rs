//! Saviynt REST API request and response models
//!
//! Wire names follow the platform's JSON exactly; most of the v5 API mixes
//! lowercase and camelCase keys, and several numeric fields are returned as
//! strings on some tenants and as numbers on others.

use crate::domain::SaviyntError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Body of `POST /ECM/api/login`
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Token returned by the login call
#[derive(Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub expires_in: Option<String>,
}

/// Status carried by every v5 response
///
/// An absent code or `"0"` means success.
pub trait ApiStatus {
    fn error_code(&self) -> Option<&str>;
    fn msg(&self) -> Option<&str>;

    /// Turns a non-zero `errorCode` into [`SaviyntError::ApiError`]
    fn check(self) -> Result<Self, SaviyntError>
    where
        Self: Sized,
    {
        match self.error_code().map(str::trim) {
            None | Some("") | Some("0") => Ok(self),
            Some(code) => Err(SaviyntError::ApiError {
                code: code.to_string(),
                message: self.msg().unwrap_or_default().to_string(),
            }),
        }
    }
}

macro_rules! impl_api_status {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ApiStatus for $ty {
                fn error_code(&self) -> Option<&str> {
                    self.error_code.as_deref()
                }

                fn msg(&self) -> Option<&str> {
                    self.msg.as_deref()
                }
            }
        )+
    };
}

/// Plain `{errorCode, msg}` response of create/update calls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(
        rename = "errorCode",
        default,
        deserialize_with = "de_opt_string_or_number"
    )]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

// ---------------------------------------------------------------------------
// Connections
// ---------------------------------------------------------------------------

/// Body of `testConnection`, the create-or-update call for connections
///
/// Connector-specific keys are flattened next to the base keys. Every key is
/// always present; an empty string means "not set".
#[derive(Clone, Default, Serialize)]
pub struct ConnectionRequest {
    #[serde(rename = "connectiontype")]
    pub connection_type: String,
    #[serde(rename = "connectionName")]
    pub connection_name: String,
    pub description: String,
    pub defaultsavroles: String,
    #[serde(rename = "emailTemplate")]
    pub email_template: String,
    #[serde(rename = "vaultConnection")]
    pub vault_connection: String,
    #[serde(rename = "vaultConfiguration")]
    pub vault_configuration: String,
    #[serde(rename = "saveInVault")]
    pub save_in_vault: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl fmt::Debug for ConnectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // attribute values may hold credentials
        f.debug_struct("ConnectionRequest")
            .field("connection_type", &self.connection_type)
            .field("connection_name", &self.connection_name)
            .field("attribute_keys", &self.attributes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Response of `testConnection`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionResponse {
    #[serde(
        rename = "errorCode",
        default,
        deserialize_with = "de_opt_string_or_number"
    )]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(
        rename = "connectionKey",
        alias = "connectionkey",
        default,
        deserialize_with = "de_opt_i64"
    )]
    pub connection_key: Option<i64>,
}

/// Filter of `getConnections`
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetConnectionsRequest {
    #[serde(rename = "connectionname", skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(rename = "connectiontype", skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// One row of the `getConnections` list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionSummary {
    #[serde(rename = "connectionname", alias = "CONNECTIONNAME", default)]
    pub connection_name: Option<String>,
    #[serde(rename = "connectiontype", alias = "CONNECTIONTYPE", default)]
    pub connection_type: Option<String>,
    #[serde(
        rename = "connectionkey",
        alias = "CONNECTIONKEY",
        default,
        deserialize_with = "de_opt_i64"
    )]
    pub connection_key: Option<i64>,
    #[serde(
        rename = "connectiondescription",
        alias = "description",
        alias = "CONNECTIONDESCRIPTION",
        default
    )]
    pub description: Option<String>,
    #[serde(alias = "STATUS", default, deserialize_with = "de_opt_string_or_number")]
    pub status: Option<String>,
    #[serde(rename = "updatedby", alias = "UPDATEDBY", default)]
    pub updated_by: Option<String>,
    #[serde(rename = "updatedate", alias = "UPDATEDATE", default)]
    pub updated_date: Option<String>,
    #[serde(rename = "emailtemplate", alias = "EMAILTEMPLATE", default)]
    pub email_template: Option<String>,
}

/// Response of `getConnections`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetConnectionsResponse {
    #[serde(
        rename = "errorCode",
        default,
        deserialize_with = "de_opt_string_or_number"
    )]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(rename = "displaycount", alias = "displayCount", default, deserialize_with = "de_opt_i64")]
    pub display_count: Option<i64>,
    #[serde(rename = "totalcount", alias = "totalCount", default, deserialize_with = "de_opt_i64")]
    pub total_count: Option<i64>,
    #[serde(rename = "connectionList", default)]
    pub connection_list: Vec<ConnectionSummary>,
}

/// Lookup of `getConnectionDetails`, by name or by key
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetConnectionDetailsRequest {
    #[serde(rename = "connectionname", skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(rename = "connectionkey", skip_serializing_if = "Option::is_none")]
    pub connection_key: Option<String>,
}

impl GetConnectionDetailsRequest {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            connection_name: Some(name.into()),
            connection_key: None,
        }
    }

    pub fn by_key(key: impl Into<String>) -> Self {
        Self {
            connection_name: None,
            connection_key: Some(key.into()),
        }
    }
}

/// Response of `getConnectionDetails`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionDetailsResponse {
    #[serde(
        rename = "errorCode",
        alias = "errorcode",
        default,
        deserialize_with = "de_opt_string_or_number"
    )]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(rename = "connectionkey", alias = "connectionKey", default, deserialize_with = "de_opt_i64")]
    pub connection_key: Option<i64>,
    #[serde(rename = "connectionname", alias = "connectionName", default)]
    pub connection_name: Option<String>,
    #[serde(rename = "connectiontype", alias = "connectionType", default)]
    pub connection_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub defaultsavroles: Option<String>,
    #[serde(rename = "emailtemplate", alias = "emailTemplate", default)]
    pub email_template: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub status: Option<String>,
    #[serde(rename = "updatedby", default)]
    pub updated_by: Option<String>,
    #[serde(rename = "updatedate", default)]
    pub updated_date: Option<String>,
    #[serde(rename = "connectionattributes", alias = "connectionAttributes", default)]
    pub connection_attributes: Option<Map<String, Value>>,
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// Requestable role type row (wire shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestableRoleType {
    pub role_type: String,
    #[serde(default)]
    pub request_option: String,
    #[serde(default)]
    pub required: String,
    #[serde(default)]
    pub requested_timeframe: String,
    #[serde(default)]
    pub enable_requested_timeframe: String,
    #[serde(default)]
    pub hide_requested_timeframe: String,
    #[serde(default)]
    pub show_on: String,
}

/// Task email template row (wire shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEmailTemplate {
    pub email_template_type: String,
    #[serde(default)]
    pub task_type: String,
    #[serde(default)]
    pub email_template: String,
}

/// Mapped endpoint row (wire shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedEndpoint {
    pub security_system: String,
    pub endpoint: String,
    #[serde(default)]
    pub requestable: String,
    #[serde(default)]
    pub operation: String,
}

/// Body of `createEndpoint` / `updateEndpoint`
#[derive(Debug, Clone, Default, Serialize)]
pub struct EndpointRequest {
    #[serde(rename = "endpointname")]
    pub endpoint_name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "securitysystem")]
    pub security_system: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
    #[serde(rename = "requestableRoleType", skip_serializing_if = "Vec::is_empty")]
    pub requestable_role_type: Vec<RequestableRoleType>,
    #[serde(rename = "taskEmailTemplates", skip_serializing_if = "Vec::is_empty")]
    pub task_email_templates: Vec<TaskEmailTemplate>,
    #[serde(rename = "mappedEndpoints", skip_serializing_if = "Vec::is_empty")]
    pub mapped_endpoints: Vec<MappedEndpoint>,
}

/// Filter of `getEndpoints`
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetEndpointsRequest {
    #[serde(rename = "endpointname", skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
    #[serde(rename = "securitySystem", skip_serializing_if = "Option::is_none")]
    pub security_system: Option<String>,
    #[serde(rename = "connectionType", skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// Response of `getEndpoints`
///
/// Endpoint records carry around a hundred keys, kept as raw JSON objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetEndpointsResponse {
    #[serde(
        rename = "errorCode",
        default,
        deserialize_with = "de_opt_string_or_number"
    )]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(rename = "displayCount", alias = "displaycount", default, deserialize_with = "de_opt_i64")]
    pub display_count: Option<i64>,
    #[serde(rename = "totalCount", alias = "totalcount", default, deserialize_with = "de_opt_i64")]
    pub total_count: Option<i64>,
    #[serde(rename = "Endpoints", alias = "endpoints", default)]
    pub endpoints: Vec<Map<String, Value>>,
}

// ---------------------------------------------------------------------------
// Security systems
// ---------------------------------------------------------------------------

/// Body of `createSecuritySystem` / `updateSecuritySystem`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecuritySystemRequest {
    pub systemname: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

/// Filter of `getSecuritySystems`
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetSecuritySystemsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systemname: Option<String>,
    #[serde(rename = "connectionname", skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(rename = "connectiontype", skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// Response of `getSecuritySystems`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetSecuritySystemsResponse {
    #[serde(
        rename = "errorCode",
        default,
        deserialize_with = "de_opt_string_or_number"
    )]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(rename = "displayCount", alias = "displaycount", default, deserialize_with = "de_opt_i64")]
    pub display_count: Option<i64>,
    #[serde(rename = "totalCount", alias = "totalcount", default, deserialize_with = "de_opt_i64")]
    pub total_count: Option<i64>,
    #[serde(rename = "securitySystemDetails", default)]
    pub security_system_details: Vec<Map<String, Value>>,
}

impl_api_status!(
    StatusResponse,
    ConnectionResponse,
    GetConnectionsResponse,
    ConnectionDetailsResponse,
    GetEndpointsResponse,
    GetSecuritySystemsResponse,
);

/// Accepts `"1"`, `1` or `null`
fn de_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Accepts `42`, `"42"`, `""` or `null`
fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("{n} is not an integer"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not an integer"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected integer, got {other}"
        ))),
    }
}
