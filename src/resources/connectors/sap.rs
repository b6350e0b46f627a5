//! SAP connector (JCo)

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "SAP",
    resource_type: "saviynt_sap_connection_resource",
    data_source_type: "saviynt_sap_connection_datasource",
    description: "SAP",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("message_server", "MESSAGESERVER"),
    FieldSpec::text("jco_ashost", "JCO_ASHOST"),
    FieldSpec::text("jco_sysnr", "JCO_SYSNR"),
    FieldSpec::text("jco_client", "JCO_CLIENT"),
    FieldSpec::text("jco_user", "JCO_USER"),
    FieldSpec::secret("password", "PASSWORD"),
    FieldSpec::text("jco_lang", "JCO_LANG"),
    FieldSpec::text("jco_r3name", "JCO_R3NAME"),
    FieldSpec::text("jco_mshost", "JCO_MSHOST"),
    FieldSpec::text("jco_msserv", "JCO_MSSERV"),
    FieldSpec::text("jco_group", "JCO_GROUP"),
    FieldSpec::text("sap_table", "SAPTABLE"),
    FieldSpec::text("system_name", "SYSTEMNAME"),
    FieldSpec::text("terminated_user_group", "TERMINATEDUSERGROUP"),
    FieldSpec::text("terminated_user_role_action", "TERMINATED_USER_ROLE_ACTION"),
    FieldSpec::json("create_account_json", "CREATEACCOUNTJSON"),
    FieldSpec::json("update_account_json", "UPDATEACCOUNTJSON"),
    FieldSpec::text("prov_jco_ashost", "PROV_JCO_ASHOST"),
    FieldSpec::text("prov_jco_sysnr", "PROV_JCO_SYSNR"),
    FieldSpec::text("prov_jco_client", "PROV_JCO_CLIENT"),
    FieldSpec::text("prov_jco_user", "PROV_JCO_USER"),
    FieldSpec::secret("prov_password", "PROV_PASSWORD"),
    FieldSpec::text("prov_jco_lang", "PROV_JCO_LANG"),
    FieldSpec::text("reset_pwd_for_newaccount", "RESET_PWD_FOR_NEWACCOUNT"),
    FieldSpec::text("enforce_password_change", "ENFORCEPASSWORDCHANGE"),
    FieldSpec::text("password_min_length", "PASSWORD_MIN_LENGTH"),
    FieldSpec::text("password_max_length", "PASSWORD_MAX_LENGTH"),
    FieldSpec::text("password_noofcapsalpha", "PASSWORD_NOOFCAPSALPHA"),
    FieldSpec::text("password_noofdigits", "PASSWORD_NOOFDIGITS"),
    FieldSpec::text("password_noofsplchars", "PASSWORD_NOOFSPLCHARS"),
    FieldSpec::text("tables", "TABLES"),
    FieldSpec::json("hana_ref_table_json", "HANAREFTABLEJSON"),
    FieldSpec::json("user_import_json", "USER_IMPORT_JSON"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::text("set_cua_system", "SETCUASYSTEM"),
    FieldSpec::json("fire_fighter_id_grant_access_json", "FIREFIGHTERID_GRANT_ACCESS"),
    FieldSpec::json("fire_fighter_id_revoke_access_json", "FIREFIGHTERID_REVOKE_ACCESS"),
    FieldSpec::json("modify_user_data_json", "MODIFYUSERDATAJSON"),
    FieldSpec::json("external_sod_eval_json", "EXTERNAL_SOD_EVAL_JSON"),
    FieldSpec::text("logs_table_filter", "LOGS_TABLE_FILTER"),
    FieldSpec::text("ecc_or_s4hana", "ECCORS4HANA"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
