//! Active Directory / LDAP connector

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "AD",
    resource_type: "saviynt_ad_connection_resource",
    data_source_type: "saviynt_ad_connection_datasource",
    description: "Active Directory",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("url", "URL"),
    FieldSpec::text("username", "USERNAME"),
    FieldSpec::secret("password", "PASSWORD"),
    FieldSpec::text("ldap_or_ad", "LDAP_OR_AD"),
    FieldSpec::text("entitlement_attribute", "ENTITLEMENT_ATTRIBUTE"),
    FieldSpec::json("check_for_unique", "CHECKFORUNIQUE"),
    FieldSpec::text("group_search_base_dn", "GroupSearchBaseDN"),
    FieldSpec::json("create_update_mappings", "CREATEUPDATEMAPPINGS"),
    FieldSpec::json("incremental_config", "INCREMENTAL_CONFIG"),
    FieldSpec::text("max_changenumber", "MAX_CHANGENUMBER"),
    FieldSpec::text("read_operational_attributes", "READ_OPERATIONAL_ATTRIBUTES"),
    FieldSpec::text("base", "BASE"),
    FieldSpec::text("dc_locator", "DC_LOCATOR"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::json("remove_account_action", "REMOVEACCOUNTACTION"),
    FieldSpec::text("account_attribute", "ACCOUNT_ATTRIBUTE"),
    FieldSpec::text("account_name_rule", "ACCOUNTNAMERULE"),
    FieldSpec::json("advance_filter_json", "ADVANCE_FILTER_JSON"),
    FieldSpec::text("set_random_password", "SETRANDOMPASSWORD"),
    FieldSpec::text("password_min_length", "PASSWORD_MIN_LENGTH"),
    FieldSpec::text("password_max_length", "PASSWORD_MAX_LENGTH"),
    FieldSpec::text("password_noofcapsalpha", "PASSWORD_NOOFCAPSALPHA"),
    FieldSpec::text("password_noofdigits", "PASSWORD_NOOFDIGITS"),
    FieldSpec::text("password_noofsplchars", "PASSWORD_NOOFSPLCHARS"),
    FieldSpec::text("reuse_inactive_account", "REUSEINACTIVEACCOUNT"),
    FieldSpec::json("import_json", "IMPORTJSON"),
    FieldSpec::text("support_empty_string", "SUPPORTEMPTYSTRING"),
    FieldSpec::json("enable_account_json", "ENABLEACCOUNTJSON"),
    FieldSpec::json("disable_account_json", "DISABLEACCOUNTJSON"),
    FieldSpec::text("user_attribute", "USER_ATTRIBUTE"),
    FieldSpec::text("default_user_role", "DEFAULT_USER_ROLE"),
    FieldSpec::json("endpoints_filter", "ENDPOINTS_FILTER"),
    FieldSpec::json("create_account_json", "CREATEACCOUNTJSON"),
    FieldSpec::json("update_account_json", "UPDATEACCOUNTJSON"),
    FieldSpec::json("reuse_account_json", "REUSEACCOUNTJSON"),
    FieldSpec::text("enforce_tree_deletion", "ENFORCE_TREE_DELETION"),
    FieldSpec::text("search_filter", "SEARCHFILTER"),
    FieldSpec::text("object_filter", "OBJECTFILTER"),
    FieldSpec::json("update_user_json", "UPDATEUSERJSON"),
    FieldSpec::json("group_import_mapping", "GroupImportMapping"),
    FieldSpec::json("unlock_account_json", "UNLOCKACCOUNTJSON"),
    FieldSpec::text("page_size", "PAGE_SIZE"),
    FieldSpec::json("modify_user_data_json", "MODIFYUSERDATAJSON"),
    FieldSpec::text("org_base", "ORG_BASE"),
    FieldSpec::text("organization_attribute", "ORGANIZATION_ATTRIBUTE"),
    FieldSpec::json("create_org_json", "CREATEORGJSON"),
    FieldSpec::json("update_org_json", "UPDATEORGJSON"),
    FieldSpec::json("config_json", "ConfigJSON"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
