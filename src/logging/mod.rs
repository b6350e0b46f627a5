//! Logging and observability
//!
//! Structured logging through `tracing`, plus a few macros that keep the
//! field names of lifecycle and API logs consistent across resources.
//!
//! # Example
//!
//! ```no_run
//! use saviynt_provider::logging::init_logging;
//! use saviynt_provider::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Provider started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a lifecycle operation on a resource instance
///
/// # Example
///
/// ```no_run
/// use saviynt_provider::log_resource_operation;
///
/// log_resource_operation!("create", "saviynt_ad_connection_resource", "corp_ad");
/// ```
#[macro_export]
macro_rules! log_resource_operation {
    ($operation:expr, $resource_type:expr, $name:expr) => {
        tracing::info!(
            operation = $operation,
            resource_type = $resource_type,
            name = %$name,
            "Resource operation"
        );
    };
}

/// Log an outgoing API call
///
/// # Example
///
/// ```no_run
/// use saviynt_provider::log_api_call;
///
/// log_api_call!("/ECM/api/v5/getEndpoints");
/// ```
#[macro_export]
macro_rules! log_api_call {
    ($path:expr) => {
        tracing::debug!(path = $path, "Calling Saviynt API");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use saviynt_provider::log_error_with_context;
/// use saviynt_provider::domain::ProviderError;
///
/// let error = ProviderError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
