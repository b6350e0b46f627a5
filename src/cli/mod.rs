//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Saviynt provider - manage Saviynt connections, endpoints and security systems
#[derive(Parser, Debug)]
#[command(name = "saviynt-provider")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "saviynt.toml", env = "SAVIYNT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SAVIYNT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or update a resource from an attribute file
    Apply(commands::apply::ApplyArgs),

    /// Re-read resources in state from the tenant
    Refresh(commands::refresh::RefreshArgs),

    /// Drop a resource from state
    Destroy(commands::destroy::DestroyArgs),

    /// Adopt an existing remote object into state
    Import(commands::import::ImportArgs),

    /// Run a data source and print the result
    Read(commands::read::ReadArgs),

    /// Print local state
    Show(commands::show::ShowArgs),

    /// Print resource and data source schemas
    Schema(commands::schema::SchemaArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Run the selected command and return the process exit code
    pub async fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Apply(args) => args.execute(&self.config).await,
            Commands::Refresh(args) => args.execute(&self.config).await,
            Commands::Destroy(args) => args.execute(&self.config).await,
            Commands::Import(args) => args.execute(&self.config).await,
            Commands::Read(args) => args.execute(&self.config).await,
            Commands::Show(args) => args.execute(&self.config).await,
            Commands::Schema(args) => args.execute().await,
            Commands::ValidateConfig(args) => args.execute(&self.config).await,
            Commands::Init(args) => args.execute().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_apply() {
        let cli = Cli::parse_from([
            "saviynt-provider",
            "apply",
            "--address",
            "saviynt_endpoint_resource.hr",
            "--config-file",
            "hr.json",
        ]);
        assert_eq!(cli.config, "saviynt.toml");
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.address, "saviynt_endpoint_resource.hr");
                assert_eq!(args.config_file, "hr.json");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["saviynt-provider", "--config", "custom.toml", "show"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["saviynt-provider", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_import() {
        let cli = Cli::parse_from([
            "saviynt-provider",
            "import",
            "--address",
            "saviynt_ad_connection_resource.corp",
            "--id",
            "corp_ad",
        ]);
        match cli.command {
            Commands::Import(args) => assert_eq!(args.id, "corp_ad"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_read() {
        let cli = Cli::parse_from([
            "saviynt-provider",
            "read",
            "--data-source",
            "saviynt_connections_datasource",
        ]);
        match cli.command {
            Commands::Read(args) => {
                assert_eq!(args.data_source, "saviynt_connections_datasource");
                assert!(args.filter.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_schema_type() {
        let cli = Cli::parse_from(["saviynt-provider", "schema", "--type", "saviynt_endpoint_resource"]);
        match cli.command {
            Commands::Schema(args) => {
                assert_eq!(args.type_name.as_deref(), Some("saviynt_endpoint_resource"))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_refresh_all() {
        let cli = Cli::parse_from(["saviynt-provider", "refresh"]);
        assert!(matches!(cli.command, Commands::Refresh(ref a) if a.address.is_none()));
    }

    #[test]
    fn test_cli_apply_requires_address() {
        let result = Cli::try_parse_from(["saviynt-provider", "apply", "--config-file", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["saviynt-provider", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref a) if a.force));
    }
}
