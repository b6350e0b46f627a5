//! Read command implementation
//!
//! Runs a data source and prints its output as JSON on stdout.

use super::common::{connect, read_attributes, redact, report_failure, EXIT_OK};
use crate::provider::SaviyntProvider;
use clap::Args;
use serde_json::{json, Value};

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Data source type, e.g. `saviynt_connections_datasource`
    #[arg(short, long)]
    pub data_source: String,

    /// JSON or TOML file with the data source arguments
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Print sensitive output attributes instead of masking them
    #[arg(long)]
    pub show_sensitive: bool,
}

impl ReadArgs {
    /// Execute the read command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match self.filter.as_deref() {
            Some(path) => match read_attributes(path) {
                Ok(c) => c,
                Err(code) => return Ok(code),
            },
            None => json!({}),
        };
        let lifecycle = match connect(config_path).await {
            Ok(l) => l,
            Err(code) => return Ok(code),
        };

        let output = match lifecycle.read_data_source(&self.data_source, &config).await {
            Ok(o) => o,
            Err(e) => return Ok(report_failure(&e)),
        };

        println!("{}", serde_json::to_string_pretty(&self.mask(output))?);
        Ok(EXIT_OK)
    }

    fn mask(&self, output: Value) -> Value {
        if self.show_sensitive {
            return output;
        }
        match SaviyntProvider::data_source_schema(&self.data_source) {
            Some(schema) => {
                let sensitive: Vec<&str> = schema.sensitive_attributes().collect();
                redact(&output, &sensitive)
            }
            None => output,
        }
    }
}
