//! Apply command implementation
//!
//! Creates the resource at an address, or updates it when state already
//! holds an entry for that address.

use super::common::{connect, parse_address, read_attributes, report_failure, EXIT_OK};
use crate::core::lifecycle::ApplyOutcome;
use clap::Args;

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Resource address, `<type>.<name>`
    #[arg(short, long)]
    pub address: String,

    /// JSON or TOML file holding the planned attributes
    #[arg(short = 'f', long)]
    pub config_file: String,
}

impl ApplyArgs {
    /// Execute the apply command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(address = %self.address, config_file = %self.config_file, "Applying resource");

        let address = match parse_address(&self.address) {
            Ok(a) => a,
            Err(code) => return Ok(code),
        };
        let plan = match read_attributes(&self.config_file) {
            Ok(p) => p,
            Err(code) => return Ok(code),
        };
        let lifecycle = match connect(config_path).await {
            Ok(l) => l,
            Err(code) => return Ok(code),
        };

        match lifecycle.apply(&address, &plan).await {
            Ok(ApplyOutcome::Created) => println!("✅ {address}: created"),
            Ok(ApplyOutcome::Updated) => println!("✅ {address}: updated"),
            Ok(ApplyOutcome::Unchanged) => println!("✅ {address}: no changes"),
            Err(e) => return Ok(report_failure(&e)),
        }
        Ok(EXIT_OK)
    }
}
