//! Field tables of the supported connector types

pub mod ad;
pub mod adsi;
pub mod db;
pub mod entraid;
pub mod github;
pub mod rest;
pub mod salesforce;
pub mod sap;
pub mod unix;
pub mod workday;

use super::connection::ConnectorSpec;

/// Every connector, in registration order
pub static ALL: &[&ConnectorSpec] = &[
    &ad::SPEC,
    &adsi::SPEC,
    &db::SPEC,
    &rest::SPEC,
    &salesforce::SPEC,
    &sap::SPEC,
    &unix::SPEC,
    &workday::SPEC,
    &entraid::SPEC,
    &github::SPEC,
];

/// Looks up a connector by its resource type name
pub fn by_resource_type(type_name: &str) -> Option<&'static ConnectorSpec> {
    ALL.iter().copied().find(|s| s.resource_type == type_name)
}

/// Looks up a connector by its data source type name
pub fn by_data_source_type(type_name: &str) -> Option<&'static ConnectorSpec> {
    ALL.iter().copied().find(|s| s.data_source_type == type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test_case(&ad::SPEC ; "ad")]
    #[test_case(&adsi::SPEC ; "adsi")]
    #[test_case(&db::SPEC ; "db")]
    #[test_case(&rest::SPEC ; "rest")]
    #[test_case(&salesforce::SPEC ; "salesforce")]
    #[test_case(&sap::SPEC ; "sap")]
    #[test_case(&unix::SPEC ; "unix")]
    #[test_case(&workday::SPEC ; "workday")]
    #[test_case(&entraid::SPEC ; "entraid")]
    #[test_case(&github::SPEC ; "github")]
    fn test_field_table_is_consistent(spec: &'static ConnectorSpec) {
        let base: HashSet<_> = crate::resources::connection::base_attributes()
            .into_iter()
            .map(|a| a.name)
            .collect();

        let mut attributes = HashSet::new();
        let mut api_keys = HashSet::new();
        for field in spec.fields {
            assert!(attributes.insert(field.attribute), "duplicate attribute {}", field.attribute);
            assert!(
                api_keys.insert(field.api_key.to_ascii_lowercase()),
                "duplicate api key {}",
                field.api_key
            );
            assert!(!base.contains(field.attribute), "{} shadows a base attribute", field.attribute);
            assert!(field
                .attribute
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }

        assert!(spec.resource_type.ends_with("_connection_resource"));
        assert!(spec.data_source_type.ends_with("_connection_datasource"));
    }

    #[test]
    fn test_lookup_by_type_name() {
        assert_eq!(
            by_resource_type("saviynt_github_rest_connection_resource").map(|s| s.connection_type),
            Some("GithubRest")
        );
        assert_eq!(
            by_data_source_type("saviynt_unix_connection_datasource").map(|s| s.connection_type),
            Some("Unix")
        );
        assert!(by_resource_type("saviynt_ldap_connection_resource").is_none());
    }

    #[test]
    fn test_type_names_are_unique() {
        let names: HashSet<_> = ALL
            .iter()
            .flat_map(|s| [s.resource_type, s.data_source_type])
            .collect();
        assert_eq!(names.len(), ALL.len() * 2);
    }
}
