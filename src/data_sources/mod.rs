//! Read-only data sources
//!
//! Each data source issues a single call and returns one page of results. The
//! configured filter is echoed back in the output next to the results.

pub mod connection;
pub mod connections;
pub mod endpoints;
pub mod security_systems;

pub use connection::ConnectionDataSource;
pub use connections::ConnectionsDataSource;
pub use endpoints::EndpointsDataSource;
pub use security_systems::SecuritySystemsDataSource;

use crate::domain::values::value_to_attribute;
use crate::domain::{ProviderError, Result};
use crate::provider::{Attribute, AttributeType};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Flattens a remote record into a string map, dropping null values
pub(crate) fn flatten_record(record: &Map<String, Value>) -> Result<BTreeMap<String, String>> {
    let mut flat = BTreeMap::new();
    for (key, value) in record {
        if let Some(text) = value_to_attribute(value)? {
            flat.insert(key.clone(), text);
        }
    }
    Ok(flat)
}

/// Copies the configuration into a fresh output object
pub(crate) fn echo_config(config: &Value) -> Result<Map<String, Value>> {
    config
        .as_object()
        .cloned()
        .ok_or_else(|| ProviderError::Validation("Configuration must be a JSON object".to_string()))
}

/// Attributes shared by the paginated list data sources
pub(crate) fn page_attributes() -> Vec<Attribute> {
    vec![
        Attribute::optional("offset", AttributeType::String)
            .description("Index of the first record to return"),
        Attribute::optional("max", AttributeType::String)
            .description("Maximum number of records to return"),
        Attribute::computed("msg", AttributeType::String),
        Attribute::computed("error_code", AttributeType::String),
        Attribute::computed("display_count", AttributeType::Number),
        Attribute::computed("total_count", AttributeType::Number),
    ]
}
