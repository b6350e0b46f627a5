//! Salesforce connector

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "SalesForce",
    resource_type: "saviynt_salesforce_connection_resource",
    data_source_type: "saviynt_salesforce_connection_datasource",
    description: "Salesforce",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("client_id", "CLIENT_ID"),
    FieldSpec::secret("client_secret", "CLIENT_SECRET"),
    FieldSpec::secret("refresh_token", "REFRESH_TOKEN"),
    FieldSpec::text("redirect_uri", "REDIRECT_URI"),
    FieldSpec::text("instance_url", "INSTANCE_URL"),
    FieldSpec::text("object_to_be_imported", "OBJECT_TO_BE_IMPORTED"),
    FieldSpec::json("feature_license_json", "FEATURE_LICENSE_JSON"),
    FieldSpec::text("custom_createaccount_url", "CUSTOM_CREATEACCOUNT_URL"),
    FieldSpec::json("create_account_json", "CREATEACCOUNTJSON"),
    FieldSpec::text("account_filter_query", "ACCOUNT_FILTER_QUERY"),
    FieldSpec::text("account_field_query", "ACCOUNT_FIELD_QUERY"),
    FieldSpec::json("field_mapping_json", "FIELD_MAPPING_JSON"),
    FieldSpec::json("modify_account_json", "MODIFYACCOUNTJSON"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::json("custom_config_json", "CUSTOMCONFIGJSON"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
