//! Workday connector (SOAP and RaaS)

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "Workday",
    resource_type: "saviynt_workday_connection_resource",
    data_source_type: "saviynt_workday_connection_datasource",
    description: "Workday",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("base_url", "BASE_URL"),
    FieldSpec::text("api_version", "API_VERSION"),
    FieldSpec::text("tenant_name", "TENANT_NAME"),
    FieldSpec::text("report_owner", "REPORT_OWNER"),
    FieldSpec::text("use_oauth", "USE_OAUTH"),
    FieldSpec::text("include_reference_descriptors", "INCLUDE_REFERENCE_DESCRIPTORS"),
    FieldSpec::text("use_enhance_orgrole", "USE_ENHANCE_ORGROLE"),
    FieldSpec::text("use_x509auth_for_soap", "USEX509AUTHFORSOAP"),
    FieldSpec::secret("x509_key", "X509KEY"),
    FieldSpec::secret("x509_cert", "X509CERT"),
    FieldSpec::text("username", "USERNAME"),
    FieldSpec::secret("password", "PASSWORD"),
    FieldSpec::text("client_id", "CLIENT_ID"),
    FieldSpec::secret("client_secret", "CLIENT_SECRET"),
    FieldSpec::secret("refresh_token", "REFRESH_TOKEN"),
    FieldSpec::text("page_size", "PAGE_SIZE"),
    FieldSpec::text("user_import_payload", "USER_IMPORT_PAYLOAD"),
    FieldSpec::json("user_import_mapping", "USER_IMPORT_MAPPING"),
    FieldSpec::text("account_import_payload", "ACCOUNT_IMPORT_PAYLOAD"),
    FieldSpec::json("account_import_mapping", "ACCOUNT_IMPORT_MAPPING"),
    FieldSpec::text("access_import_list", "ACCESS_IMPORT_LIST"),
    FieldSpec::json("raas_mapping_json", "RAAS_MAPPING_JSON"),
    FieldSpec::json("access_import_mapping", "ACCESS_IMPORT_MAPPING"),
    FieldSpec::text("org_role_import_payload", "ORGROLE_IMPORT_PAYLOAD"),
    FieldSpec::text("assign_orgrole_payload", "ASSIGN_ORGROLE_PAYLOAD"),
    FieldSpec::text("remove_orgrole_payload", "REMOVE_ORGROLE_PAYLOAD"),
    FieldSpec::text("update_account_payload", "UPDATE_ACCOUNT_PAYLOAD"),
    FieldSpec::text("update_user_payload", "UPDATE_USER_PAYLOAD"),
    FieldSpec::text("create_account_payload", "CREATE_ACCOUNT_PAYLOAD"),
    FieldSpec::json("custom_config", "CUSTOM_CONFIG"),
    FieldSpec::json("status_key_json", "STATUS_KEY_JSON"),
    FieldSpec::json("user_attribute_json", "USERATTRIBUTEJSON"),
    FieldSpec::json("modify_user_data_json", "MODIFYUSERDATAJSON"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
