//! Init command implementation
//!
//! Writes a starter configuration file.

use super::common::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "saviynt.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Saviynt provider configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set server_url in {} to your tenant", self.output);
                println!("  2. Put SAVIYNT_USERNAME and SAVIYNT_PASSWORD in a .env file");
                println!("  3. Validate configuration: saviynt-provider validate-config");
                println!("  4. List connections: saviynt-provider read --data-source saviynt_connections_datasource");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}

fn sample_config() -> &'static str {
    r#"# Saviynt provider configuration

[provider]
# Tenant host name; https:// is assumed when no scheme is given
server_url = "example.saviyntcloud.com"
username = "${SAVIYNT_USERNAME}"
password = "${SAVIYNT_PASSWORD}"
timeout_seconds = 60
tls_verify = true

[state]
path = "saviynt.tfstate.json"

[logging]
level = "info"
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses() {
        let contents = sample_config()
            .replace("${SAVIYNT_USERNAME}", "admin")
            .replace("${SAVIYNT_PASSWORD}", "secret");
        let config = load_config_from_str(&contents).unwrap();
        assert_eq!(config.state.path, "saviynt.tfstate.json");
        assert_eq!(config.logging.local_rotation, "daily");
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("saviynt.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("saviynt.toml");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[provider]"));
    }
}
