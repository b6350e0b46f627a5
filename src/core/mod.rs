//! Core orchestration.
//!
//! # Modules
//!
//! - [`lifecycle`] - apply, refresh, destroy, import and data source reads
//! - [`state`] - local state document and its storage backends
//!
//! # Example
//!
//! ```rust,no_run
//! use saviynt_provider::config::load_config;
//! use saviynt_provider::core::lifecycle::Lifecycle;
//! use saviynt_provider::core::state::{FileStateStorage, StateManager};
//! use saviynt_provider::domain::ResourceAddress;
//! use saviynt_provider::provider::SaviyntProvider;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("saviynt.toml")?;
//! let provider = SaviyntProvider::configure(&config.provider).await?;
//! let state = StateManager::open(Arc::new(FileStateStorage::new(&config.state.path))).await?;
//!
//! let lifecycle = Lifecycle::new(provider, Arc::new(state));
//! let address: ResourceAddress = "saviynt_security_system_resource.hr".parse()?;
//! lifecycle
//!     .apply(&address, &json!({"systemname": "hr", "display_name": "HR"}))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod lifecycle;
pub mod state;
