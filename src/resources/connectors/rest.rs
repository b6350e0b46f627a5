//! Generic REST connector

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "REST",
    resource_type: "saviynt_rest_connection_resource",
    data_source_type: "saviynt_rest_connection_datasource",
    description: "REST",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::secret_json("connection_json", "ConnectionJSON"),
    FieldSpec::json("import_user_json", "ImportUserJSON"),
    FieldSpec::json("import_account_ent_json", "ImportAccountEntJSON"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::json("create_account_json", "CreateAccountJSON"),
    FieldSpec::json("update_account_json", "UpdateAccountJSON"),
    FieldSpec::json("enable_account_json", "EnableAccountJSON"),
    FieldSpec::json("disable_account_json", "DisableAccountJSON"),
    FieldSpec::json("add_access_json", "AddAccessJSON"),
    FieldSpec::json("remove_access_json", "RemoveAccessJSON"),
    FieldSpec::json("update_user_json", "UpdateUserJSON"),
    FieldSpec::json("change_pass_json", "ChangePassJSON"),
    FieldSpec::json("remove_account_json", "RemoveAccountJSON"),
    FieldSpec::json("ticket_status_json", "TicketStatusJSON"),
    FieldSpec::json("create_ticket_json", "CreateTicketJSON"),
    FieldSpec::json("endpoints_filter", "ENDPOINTS_FILTER"),
    FieldSpec::json("passwd_policy_json", "PasswdPolicyJSON"),
    FieldSpec::json("config_json", "ConfigJSON"),
    FieldSpec::json("add_ffid_access_json", "AddFFIDAccessJSON"),
    FieldSpec::json("remove_ffid_access_json", "RemoveFFIDAccessJSON"),
    FieldSpec::json("modify_user_data_json", "MODIFYUSERDATAJSON"),
    FieldSpec::json("send_otp_json", "SendOtpJSON"),
    FieldSpec::json("validate_otp_json", "ValidateOtpJSON"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
