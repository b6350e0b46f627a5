//! Validate config command implementation
//!
//! Loads and validates the configuration file without contacting the tenant.

use super::common::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let base_url = config
            .provider
            .base_url()
            .unwrap_or_else(|_| config.provider.server_url.clone());

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Saviynt Server: {base_url}");
        println!("  Username: {}", config.provider.username);
        println!("  Timeout: {}s", config.provider.timeout_seconds);
        println!("  TLS Verify: {}", config.provider.tls_verify);
        println!("  State File: {}", config.state.path);
        println!("  Log Level: {}", config.logging.level);
        if config.logging.local_enabled {
            println!(
                "  Log Files: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let code = ValidateArgs {}
            .execute("/nonexistent/saviynt.toml")
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[provider]\nserver_url = \"acme.saviyntcloud.com\"\nusername = \"admin\"\npassword = \"secret\""
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }
}
