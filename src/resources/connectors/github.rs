//! GitHub REST connector

use crate::resources::connection::ConnectorSpec;
use crate::resources::fields::FieldSpec;

pub static SPEC: ConnectorSpec = ConnectorSpec {
    connection_type: "GithubRest",
    resource_type: "saviynt_github_rest_connection_resource",
    data_source_type: "saviynt_github_rest_connection_datasource",
    description: "GitHub REST",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::secret_json("connection_json", "ConnectionJSON"),
    FieldSpec::json("import_account_ent_json", "ImportAccountEntJSON"),
    FieldSpec::secret("access_tokens", "ACCESS_TOKENS"),
    FieldSpec::text("organization_list", "ORGANIZATION_LIST"),
    FieldSpec::json("status_threshold_config", "STATUS_THRESHOLD_CONFIG"),
    FieldSpec::json("pam_config", "PAM_CONFIG"),
];
