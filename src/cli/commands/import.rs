//! Import command implementation

use super::common::{connect, parse_address, report_failure, EXIT_OK};
use clap::Args;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Address to record the object under, `<type>.<name>`
    #[arg(short, long)]
    pub address: String,

    /// Remote identifier: connection name, endpoint name or system name
    #[arg(long)]
    pub id: String,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(address = %self.address, id = %self.id, "Importing resource");

        let address = match parse_address(&self.address) {
            Ok(a) => a,
            Err(code) => return Ok(code),
        };
        let lifecycle = match connect(config_path).await {
            Ok(l) => l,
            Err(code) => return Ok(code),
        };

        match lifecycle.import(&address, &self.id).await {
            Ok(_) => {
                println!("✅ {address}: imported {}", self.id);
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report_failure(&e)),
        }
    }
}
