//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ProviderFileConfig;
use crate::config::secret_string;
use crate::domain::errors::ProviderError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into [`ProviderFileConfig`]
/// 4. Applies environment variable overrides (SAVIYNT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a `Configuration` error if the file cannot be read or parsed, if a
/// referenced environment variable is missing, or if validation fails.
///
/// # Examples
///
/// ```no_run
/// use saviynt_provider::config::load_config;
///
/// let config = load_config("saviynt.toml").expect("Failed to load config");
/// println!("{}", config.provider.server_url);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ProviderFileConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ProviderError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ProviderError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file access.
pub fn load_config_from_str(contents: &str) -> Result<ProviderFileConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ProviderFileConfig = toml::from_str(&contents)
        .map_err(|e| ProviderError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ProviderError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ProviderError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ProviderError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SAVIYNT_* prefix
fn apply_env_overrides(config: &mut ProviderFileConfig) {
    // Provider overrides
    if let Ok(val) = std::env::var("SAVIYNT_SERVER_URL") {
        config.provider.server_url = val;
    }
    if let Ok(val) = std::env::var("SAVIYNT_USERNAME") {
        config.provider.username = val;
    }
    if let Ok(val) = std::env::var("SAVIYNT_PASSWORD") {
        config.provider.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("SAVIYNT_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.provider.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("SAVIYNT_TLS_VERIFY") {
        config.provider.tls_verify = val.parse().unwrap_or(true);
    }

    // State overrides
    if let Ok(val) = std::env::var("SAVIYNT_STATE_PATH") {
        config.state.path = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SAVIYNT_LOG_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("SAVIYNT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SAVIYNT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
