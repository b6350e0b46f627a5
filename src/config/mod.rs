//! Configuration management.
//!
//! TOML-based configuration loading, parsing and validation.
//!
//! # Overview
//!
//! The configuration file supports:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SAVIYNT_*` environment overrides
//! - Default values for optional settings
//!
//! # Example Configuration
//!
//! ```toml
//! [provider]
//! server_url = "acme.saviyntcloud.com"
//! username = "admin"
//! password = "${SAVIYNT_PASSWORD}"
//!
//! [state]
//! path = "saviynt.tfstate.json"
//!
//! [logging]
//! level = "info"
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use saviynt_provider::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("saviynt.toml")?;
//! println!("Saviynt tenant: {}", config.provider.server_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{LoggingConfig, ProviderConfig, ProviderFileConfig, StateConfig};
pub use secret::{secret_string, SecretString, SecretValue};
