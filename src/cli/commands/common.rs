//! Helpers shared by the commands
//!
//! Exit codes: 0 success, 1 operation failed, 2 configuration error,
//! 4 connection or authentication error, 5 fatal.

use crate::config::{load_config, ProviderFileConfig};
use crate::core::lifecycle::Lifecycle;
use crate::core::state::{FileStateStorage, StateManager};
use crate::domain::{Diagnostics, ProviderError, ResourceAddress, SaviyntError};
use crate::provider::SaviyntProvider;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_CONNECTION: i32 = 4;
pub const EXIT_FATAL: i32 = 5;

/// Maps an error onto the process exit code
pub fn exit_code_for(err: &ProviderError) -> i32 {
    match err {
        ProviderError::Configuration(_) => EXIT_CONFIG,
        ProviderError::Authentication(_) => EXIT_CONNECTION,
        ProviderError::Api(
            SaviyntError::ConnectionFailed(_)
            | SaviyntError::AuthenticationFailed(_)
            | SaviyntError::Timeout(_),
        ) => EXIT_CONNECTION,
        ProviderError::Io(_) => EXIT_FATAL,
        _ => EXIT_FAILED,
    }
}

/// Prints the diagnostics of a failed operation and returns its exit code
pub fn report_failure(err: &ProviderError) -> i32 {
    crate::log_error_with_context!(err, "Operation failed");
    for diagnostic in Diagnostics::from(err).iter() {
        eprintln!("❌ {diagnostic}");
    }
    exit_code_for(err)
}

/// Loads the configuration file, printing the failure
pub fn load(config_path: &str) -> Result<ProviderFileConfig, i32> {
    load_config(config_path).map_err(|e| {
        eprintln!("❌ Failed to load configuration file: {config_path}");
        eprintln!("   Error: {e}");
        EXIT_CONFIG
    })
}

/// Opens the state file named in the configuration
pub async fn open_state(config: &ProviderFileConfig) -> Result<StateManager, i32> {
    let storage = Arc::new(FileStateStorage::new(&config.state.path));
    StateManager::open(storage).await.map_err(|e| {
        eprintln!("❌ Failed to open state file: {}", config.state.path);
        eprintln!("   Error: {e}");
        EXIT_FATAL
    })
}

/// Loads configuration, opens state and logs in
pub async fn connect(config_path: &str) -> Result<Lifecycle, i32> {
    let config = load(config_path)?;
    let state = open_state(&config).await?;

    let provider = SaviyntProvider::configure(&config.provider)
        .await
        .map_err(|e| {
            eprintln!("❌ Failed to connect to {}", config.provider.server_url);
            report_failure(&e)
        })?;

    Ok(Lifecycle::new(provider, Arc::new(state)))
}

pub fn parse_address(address: &str) -> Result<ResourceAddress, i32> {
    address.parse().map_err(|e| {
        eprintln!("❌ {e}");
        EXIT_FAILED
    })
}

/// Reads an attribute file; `.toml` files are parsed as TOML, everything else as JSON
pub fn read_attributes(path: &str) -> Result<Value, i32> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        eprintln!("❌ Failed to read {path}: {e}");
        EXIT_FAILED
    })?;
    parse_attributes(path, &contents).map_err(|e| {
        eprintln!("❌ Failed to parse {path}: {e}");
        EXIT_FAILED
    })
}

fn parse_attributes(path: &str, contents: &str) -> Result<Value, ProviderError> {
    let is_toml = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let value = if is_toml {
        let table: toml::Table = toml::from_str(contents)?;
        serde_json::to_value(table)?
    } else {
        serde_json::from_str(contents)?
    };

    if !value.is_object() {
        return Err(ProviderError::Validation(
            "Attribute file must contain an object".to_string(),
        ));
    }
    Ok(value)
}

/// Replaces sensitive attribute values with a marker for display
pub fn redact(attributes: &Value, sensitive: &[&str]) -> Value {
    let mut shown = attributes.clone();
    if let Some(map) = shown.as_object_mut() {
        for name in sensitive {
            if let Some(value) = map.get_mut(*name) {
                if !value.is_null() {
                    *value = Value::String("(sensitive value)".to_string());
                }
            }
        }
    }
    shown
}
