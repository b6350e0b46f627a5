//! Destroy command implementation
//!
//! The tenant has no delete calls for these objects, so destroy only drops
//! the resource from local state.

use super::common::{connect, parse_address, report_failure, EXIT_OK};
use clap::Args;

/// Arguments for the destroy command
#[derive(Args, Debug)]
pub struct DestroyArgs {
    /// Resource address, `<type>.<name>`
    #[arg(short, long)]
    pub address: String,
}

impl DestroyArgs {
    /// Execute the destroy command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let address = match parse_address(&self.address) {
            Ok(a) => a,
            Err(code) => return Ok(code),
        };
        let lifecycle = match connect(config_path).await {
            Ok(l) => l,
            Err(code) => return Ok(code),
        };

        if let Err(e) = lifecycle.destroy(&address).await {
            return Ok(report_failure(&e));
        }

        println!("✅ {address}: removed from state");
        println!("   The object still exists in Saviynt");
        Ok(EXIT_OK)
    }
}
