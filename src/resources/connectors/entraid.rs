//! Microsoft Entra ID (Azure AD) connector

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "AzureAD",
    resource_type: "saviynt_entraid_connection_resource",
    data_source_type: "saviynt_entraid_connection_datasource",
    description: "Entra ID",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("client_id", "CLIENT_ID"),
    FieldSpec::secret("client_secret", "CLIENT_SECRET"),
    FieldSpec::text("aad_tenant_id", "AAD_TENANT_ID"),
    FieldSpec::secret("access_token", "ACCESS_TOKEN"),
    FieldSpec::secret("azure_mgmt_access_token", "AZURE_MGMT_ACCESS_TOKEN"),
    FieldSpec::text("authentication_endpoint", "AUTHENTICATION_ENDPOINT"),
    FieldSpec::text("microsoft_graph_endpoint", "MICROSOFT_GRAPH_ENDPOINT"),
    FieldSpec::text("azure_management_endpoint", "AZURE_MANAGEMENT_ENDPOINT"),
    FieldSpec::json("import_user_json", "ImportUserJSON"),
    FieldSpec::json("create_account_json", "CREATEACCOUNTJSON"),
    FieldSpec::json("update_account_json", "UPDATEACCOUNTJSON"),
    FieldSpec::json("enable_account_json", "ENABLEACCOUNTJSON"),
    FieldSpec::json("disable_account_json", "DISABLEACCOUNTJSON"),
    FieldSpec::json("add_access_json", "ADDACCESSJSON"),
    FieldSpec::json("remove_access_json", "REMOVEACCESSJSON"),
    FieldSpec::json("update_user_json", "UPDATEUSERJSON"),
    FieldSpec::json("change_pass_json", "CHANGEPASSJSON"),
    FieldSpec::json("remove_account_json", "REMOVEACCOUNTJSON"),
    FieldSpec::secret_json("connection_json", "CONNECTIONJSON"),
    FieldSpec::json("create_group_json", "CREATEGROUPJSON"),
    FieldSpec::json("update_group_json", "UPDATEGROUPJSON"),
    FieldSpec::json("add_access_to_entitlement_json", "ADDACCESSTOENTITLEMENTJSON"),
    FieldSpec::json("remove_access_from_entitlement_json", "REMOVEACCESSFROMENTITLEMENTJSON"),
    FieldSpec::json("delete_group_json", "DELETEGROUPJSON"),
    FieldSpec::json("create_service_principal_json", "CREATESERVICEPRINCIPALJSON"),
    FieldSpec::json("update_service_principal_json", "UPDATESERVICEPRINCIPALJSON"),
    FieldSpec::json("remove_service_principal_json", "REMOVESERVICEPRINCIPALJSON"),
    FieldSpec::text("entitlement_attribute", "ENTITLEMENT_ATTRIBUTE"),
    FieldSpec::text("accounts_filter", "ACCOUNTS_FILTER"),
    FieldSpec::json("endpoints_filter", "ENDPOINTS_FILTER"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::json("modify_user_data_json", "MODIFYUSERDATAJSON"),
    FieldSpec::text("enhanced_directory_roles", "ENHANCEDDIRECTORYROLES"),
    FieldSpec::json("config_json", "ConfigJSON"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
