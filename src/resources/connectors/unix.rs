//! Unix connector (SSH)

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "Unix",
    resource_type: "saviynt_unix_connection_resource",
    data_source_type: "saviynt_unix_connection_datasource",
    description: "Unix",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("host_name", "HOST_NAME"),
    FieldSpec::text("port_number", "PORT_NUMBER"),
    FieldSpec::text("username", "USERNAME"),
    FieldSpec::secret("password", "PASSWORD"),
    FieldSpec::text("groups_file", "GROUPS_FILE"),
    FieldSpec::text("accounts_file", "ACCOUNTS_FILE"),
    FieldSpec::text("shadow_file", "SHADOW_FILE"),
    FieldSpec::text("provision_account_command", "PROVISION_ACCOUNT_COMMAND"),
    FieldSpec::text("deprovision_account_command", "DEPROVISION_ACCOUNT_COMMAND"),
    FieldSpec::text("add_access_command", "ADD_ACCESS_COMMAND"),
    FieldSpec::text("remove_access_command", "REMOVE_ACCESS_COMMAND"),
    FieldSpec::json("change_password_json", "CHANGE_PASSWORD_JSON"),
    FieldSpec::secret("pem_key_file", "PEM_KEY_FILE"),
    FieldSpec::secret("passphrase", "PASSPHRASE"),
    FieldSpec::text("update_ssh_keys_command", "UPDATE_SSH_KEYS_COMMAND"),
    FieldSpec::text("create_group_command", "CREATE_GROUP_COMMAND"),
    FieldSpec::text("delete_group_command", "DELETE_GROUP_COMMAND"),
    FieldSpec::text("add_group_owner_command", "ADD_GROUP_OWNER_COMMAND"),
    FieldSpec::text("add_primary_group_command", "ADD_PRIMARY_GROUP_COMMAND"),
    FieldSpec::text("firefighterid_grant_access_command", "FIREFIGHTERID_GRANT_ACCESS_COMMAND"),
    FieldSpec::text("firefighterid_revoke_access_command", "FIREFIGHTERID_REVOKE_ACCESS_COMMAND"),
    FieldSpec::json("custom_config_json", "CUSTOM_CONFIG_JSON"),
    FieldSpec::text("lock_account_command", "LOCK_ACCOUNT_COMMAND"),
    FieldSpec::text("enable_account_command", "ENABLE_ACCOUNT_COMMAND"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::text("account_entitlement_mapping_command", "ACCOUNT_ENTITLEMENT_MAPPING_COMMAND"),
    FieldSpec::secret_json("passthrough_connection_details", "PASSTHROUGH_CONNECTION_DETAILS"),
    FieldSpec::text("inactive_lock_account", "INACTIVE_LOCK_ACCOUNT"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
