//! JDBC database connector

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "DB",
    resource_type: "saviynt_db_connection_resource",
    data_source_type: "saviynt_db_connection_datasource",
    description: "database",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("url", "URL"),
    FieldSpec::text("username", "USERNAME"),
    FieldSpec::secret("password", "PASSWORD"),
    FieldSpec::text("driver_name", "DRIVER"),
    FieldSpec::json("connection_properties", "CONNECTIONPROPERTIES"),
    FieldSpec::text("password_min_length", "PASSWORD_MIN_LENGTH"),
    FieldSpec::text("password_max_length", "PASSWORD_MAX_LENGTH"),
    FieldSpec::text("password_no_of_caps_alpha", "PASSWORD_NOOFCAPSALPHA"),
    FieldSpec::text("password_no_of_digits", "PASSWORD_NOOFDIGITS"),
    FieldSpec::text("password_no_of_spl_chars", "PASSWORD_NOOFSPLCHARS"),
    FieldSpec::json("create_account_json", "CREATEACCOUNTJSON"),
    FieldSpec::json("update_account_json", "UPDATEACCOUNTJSON"),
    FieldSpec::json("grant_access_json", "GRANTACCESSJSON"),
    FieldSpec::json("revoke_access_json", "REVOKEACCESSJSON"),
    FieldSpec::json("change_pass_json", "CHANGEPASSJSON"),
    FieldSpec::json("delete_account_json", "DELETEACCOUNTJSON"),
    FieldSpec::json("enable_account_json", "ENABLEACCOUNTJSON"),
    FieldSpec::json("disable_account_json", "DISABLEACCOUNTJSON"),
    FieldSpec::json("account_exists_json", "ACCOUNTEXISTSJSON"),
    FieldSpec::json("update_user_json", "UPDATEUSERJSON"),
    FieldSpec::json("accounts_import", "ACCOUNTSIMPORT"),
    FieldSpec::json("entitlement_value_import", "ENTITLEMENTVALUEIMPORT"),
    FieldSpec::json("role_owner_import", "ROLEOWNERIMPORT"),
    FieldSpec::json("create_entitlement_json", "CREATEENTITLEMENTJSON"),
    FieldSpec::json("update_entitlement_json", "UPDATEENTITLEMENTJSON"),
    FieldSpec::json("delete_entitlement_json", "DELETEENTITLEMENTJSON"),
    FieldSpec::text("max_pagination_size", "MAX_PAGINATION_SIZE"),
    FieldSpec::json("cli_command_json", "CLI_COMMAND_JSON"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::json("user_import", "USERIMPORT"),
    FieldSpec::json("modify_user_data_json", "MODIFYUSERDATAJSON"),
];
