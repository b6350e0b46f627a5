//! ADSI connector (multi-forest Active Directory through the Saviynt ADSI agent)

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "ADSI",
    resource_type: "saviynt_adsi_connection_resource",
    data_source_type: "saviynt_adsi_connection_datasource",
    description: "ADSI",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("url", "URL"),
    FieldSpec::text("username", "USERNAME"),
    FieldSpec::secret("password", "PASSWORD"),
    FieldSpec::text("connection_url", "CONNECTION_URL"),
    FieldSpec::text("provisioning_url", "PROVISIONING_URL"),
    FieldSpec::text("forestlist", "FORESTLIST"),
    FieldSpec::text("default_user_role", "DEFAULT_USER_ROLE"),
    FieldSpec::json("update_user_json", "UPDATEUSERJSON"),
    FieldSpec::json("endpoints_filter", "ENDPOINTS_FILTER"),
    FieldSpec::text("search_filter", "SEARCHFILTER"),
    FieldSpec::text("object_filter", "OBJECTFILTER"),
    FieldSpec::text("account_attribute", "ACCOUNT_ATTRIBUTE"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::text("entitlement_attribute", "ENTITLEMENT_ATTRIBUTE"),
    FieldSpec::text("user_attribute", "USER_ATTRIBUTE"),
    FieldSpec::text("group_search_base_dn", "GroupSearchBaseDN"),
    FieldSpec::json("check_for_unique", "CHECKFORUNIQUE"),
    FieldSpec::json("status_key_json", "STATUSKEYJSON"),
    FieldSpec::json("group_import_mapping", "GroupImportMapping"),
    FieldSpec::text("import_nested_membership", "IMPORTNESTEDMEMBERSHIP"),
    FieldSpec::text("page_size", "PAGE_SIZE"),
    FieldSpec::text("access_import_list", "ACCESSIMPORTLIST"),
    FieldSpec::json("create_account_json", "CREATEACCOUNTJSON"),
    FieldSpec::json("update_account_json", "UPDATEACCOUNTJSON"),
    FieldSpec::json("enable_account_json", "ENABLEACCOUNTJSON"),
    FieldSpec::json("disable_account_json", "DISABLEACCOUNTJSON"),
    FieldSpec::json("remove_account_json", "REMOVEACCOUNTJSON"),
    FieldSpec::json("add_access_json", "ADDACCESSJSON"),
    FieldSpec::json("remove_access_json", "REMOVEACCESSJSON"),
    FieldSpec::json("reset_and_change_password_json", "RESETANDCHANGEPASSWRDJSON"),
    FieldSpec::json("create_group_json", "CREATEGROUPJSON"),
    FieldSpec::json("update_group_json", "UPDATEGROUPJSON"),
    FieldSpec::json("remove_group_json", "REMOVEGROUPJSON"),
    FieldSpec::json("add_access_entitlement_json", "ADDACCESSENTITLEMENTJSON"),
    FieldSpec::json("custom_config_json", "CUSTOMCONFIGJSON"),
    FieldSpec::json("remove_access_entitlement_json", "REMOVEACCESSENTITLEMENTJSON"),
    FieldSpec::json("create_service_account_json", "CREATESERVICEACCOUNTJSON"),
    FieldSpec::json("update_service_account_json", "UPDATESERVICEACCOUNTJSON"),
    FieldSpec::json("remove_service_account_json", "REMOVESERVICEACCOUNTJSON"),
    FieldSpec::json("modify_user_data_json", "MODIFYUSERDATAJSON"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
