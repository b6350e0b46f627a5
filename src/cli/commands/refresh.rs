//! Refresh command implementation

use super::common::{connect, parse_address, report_failure, EXIT_OK};
use crate::core::lifecycle::RefreshOutcome;
use clap::Args;

/// Arguments for the refresh command
#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Refresh a single address instead of every resource in state
    #[arg(short, long)]
    pub address: Option<String>,
}

impl RefreshArgs {
    /// Execute the refresh command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let address = match self.address.as_deref().map(parse_address).transpose() {
            Ok(a) => a,
            Err(code) => return Ok(code),
        };
        let lifecycle = match connect(config_path).await {
            Ok(l) => l,
            Err(code) => return Ok(code),
        };

        let outcomes = match address {
            Some(address) => lifecycle
                .refresh(&address)
                .await
                .map(|outcome| vec![(address, outcome)]),
            None => lifecycle.refresh_all().await,
        };

        match outcomes {
            Ok(outcomes) if outcomes.is_empty() => {
                println!("No resources in state.");
            }
            Ok(outcomes) => {
                for (address, outcome) in outcomes {
                    match outcome {
                        RefreshOutcome::Refreshed => println!("✅ {address}: refreshed"),
                        RefreshOutcome::Removed => {
                            println!("⚠️  {address}: no longer exists, removed from state")
                        }
                    }
                }
            }
            Err(e) => return Ok(report_failure(&e)),
        }
        Ok(EXIT_OK)
    }
}
