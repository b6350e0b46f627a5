//! Show command implementation
//!
//! Prints local state as JSON. No login is needed.

use super::common::{load, open_state, parse_address, redact, EXIT_FAILED, EXIT_OK};
use crate::provider::SaviyntProvider;
use clap::Args;
use serde_json::{Map, Value};

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Show a single address
    #[arg(short, long)]
    pub address: Option<String>,

    /// Print sensitive attributes instead of masking them
    #[arg(long)]
    pub show_sensitive: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        let state = match open_state(&config).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let output = match self.address.as_deref() {
            Some(raw) => {
                let address = match parse_address(raw) {
                    Ok(a) => a,
                    Err(code) => return Ok(code),
                };
                let Some(entry) = state.get(&address).await else {
                    eprintln!("❌ Resource {address} is not in state");
                    return Ok(EXIT_FAILED);
                };
                self.display(&entry.resource_type, &entry.attributes)
            }
            None => {
                let document = state.snapshot().await;
                let mut resources = Map::new();
                for (key, entry) in &document.resources {
                    resources.insert(
                        key.clone(),
                        self.display(&entry.resource_type, &entry.attributes),
                    );
                }
                serde_json::json!({
                    "version": document.version,
                    "serial": document.serial,
                    "lineage": document.lineage,
                    "updated_at": document.updated_at,
                    "resources": resources,
                })
            }
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(EXIT_OK)
    }

    fn display(&self, resource_type: &str, attributes: &Value) -> Value {
        if self.show_sensitive {
            return attributes.clone();
        }
        match SaviyntProvider::resource_schema(resource_type) {
            Some(schema) => {
                let sensitive: Vec<&str> = schema.sensitive_attributes().collect();
                redact(attributes, &sensitive)
            }
            None => attributes.clone(),
        }
    }
}
