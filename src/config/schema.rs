//! Configuration schema types
//!
//! This module defines the configuration file structure: the provider block,
//! local state settings and logging.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration
///
/// Maps one-to-one onto the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderFileConfig {
    /// Provider block (server and credentials)
    pub provider: ProviderConfig,

    /// Local state settings
    #[serde(default)]
    pub state: StateConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ProviderFileConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value found
    pub fn validate(&self) -> Result<(), String> {
        self.provider.validate()?;
        self.state.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Provider block
///
/// `server_url`, `username` and `password` are required. The password is
/// stored securely in memory and zeroized on drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Host name (or full URL) of the Saviynt tenant
    pub server_url: String,

    /// API user
    pub username: String,

    /// API user password
    pub password: SecretString,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification
    ///
    /// Only disable against development tenants with self-signed certificates.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl ProviderConfig {
    /// Normalized base URL of the tenant
    ///
    /// A bare host name gets an `https://` scheme; trailing slashes are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use saviynt_provider::config::ProviderConfig;
    ///
    /// assert_eq!(
    ///     ProviderConfig::normalize_server_url("acme.saviyntcloud.com/").unwrap(),
    ///     "https://acme.saviyntcloud.com"
    /// );
    /// ```
    pub fn normalize_server_url(server_url: &str) -> Result<String, String> {
        let trimmed = server_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err("provider.server_url cannot be empty".to_string());
        }

        let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        let parsed = Url::parse(&candidate)
            .map_err(|e| format!("provider.server_url '{server_url}' is not a valid URL: {e}"))?;
        if parsed.host_str().is_none() {
            return Err(format!("provider.server_url '{server_url}' has no host"));
        }

        Ok(candidate)
    }

    /// Returns the normalized base URL
    ///
    /// # Errors
    ///
    /// Returns an error if `server_url` is empty or not a valid URL
    pub fn base_url(&self) -> Result<String, String> {
        Self::normalize_server_url(&self.server_url)
    }

    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        self.base_url()?;

        if self.username.trim().is_empty() {
            return Err("provider.username cannot be empty".to_string());
        }

        if self.password.expose_secret().is_empty() {
            return Err("provider.password cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 600 {
            return Err(format!(
                "provider.timeout_seconds must be between 1 and 600, got {}",
                self.timeout_seconds
            ));
        }

        Ok(())
    }
}

/// Local state settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the JSON state file
    #[serde(default = "default_state_path")]
    pub path: String,
}

impl StateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("state.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }

    /// Console-only logging, used before a configuration file is available
    pub fn console_only(level: &str) -> Self {
        Self {
            level: level.to_string(),
            local_enabled: false,
            ..Default::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_timeout_seconds() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

fn default_state_path() -> String {
    "saviynt.tfstate.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
