//! Schema command implementation
//!
//! Prints provider, resource and data source schemas as JSON. No
//! configuration file or login is needed.

use super::common::{EXIT_FAILED, EXIT_OK};
use crate::provider::SaviyntProvider;
use clap::Args;
use serde_json::{json, Map, Value};

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Print only this resource or data source type
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,
}

impl SchemaArgs {
    /// Execute the schema command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let output = match self.type_name.as_deref() {
            Some(type_name) => {
                let schema = SaviyntProvider::resource_schema(type_name)
                    .or_else(|| SaviyntProvider::data_source_schema(type_name));
                match schema {
                    Some(schema) => serde_json::to_value(schema)?,
                    None => {
                        eprintln!("❌ Unknown resource or data source type \"{type_name}\"");
                        return Ok(EXIT_FAILED);
                    }
                }
            }
            None => full_schema()?,
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(EXIT_OK)
    }
}

fn full_schema() -> anyhow::Result<Value> {
    let mut resources = Map::new();
    for type_name in SaviyntProvider::resource_types() {
        if let Some(schema) = SaviyntProvider::resource_schema(type_name) {
            resources.insert(type_name.to_string(), serde_json::to_value(schema)?);
        }
    }

    let mut data_sources = Map::new();
    for type_name in SaviyntProvider::data_source_types() {
        if let Some(schema) = SaviyntProvider::data_source_schema(type_name) {
            data_sources.insert(type_name.to_string(), serde_json::to_value(schema)?);
        }
    }

    Ok(json!({
        "provider": SaviyntProvider::schema(),
        "resource_schemas": resources,
        "data_source_schemas": data_sources,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_schema_lists_every_type() {
        let schema = full_schema().unwrap();
        assert_eq!(schema["resource_schemas"].as_object().unwrap().len(), 12);
        assert!(schema["data_source_schemas"]["saviynt_endpoints_datasource"].is_object());
        assert!(schema["provider"]["attributes"].is_array());
    }
}
