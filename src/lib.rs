// Saviynt Provider - infrastructure-as-code for Saviynt identity governance
// Copyright (c) 2025 Saviynt Provider Contributors
// Licensed under the MIT License

//! # Saviynt Provider
//!
//! Declarative management of Saviynt Enterprise Identity Cloud objects:
//! connections for a set of connector types, endpoints, and security systems.
//!
//! ## Overview
//!
//! This library provides:
//! - **Resources** with create, read, update, import and a state-only delete
//! - **Data sources** that list or fetch objects without touching state
//! - **Schemas** describing every attribute (required, optional, computed, sensitive)
//! - **Local state** in a JSON file, updated after every successful operation
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Lifecycle orchestration and local state
//! - [`provider`] - Provider registry, schemas, resource and data source traits
//! - [`resources`] - Connection, endpoint and security system handlers
//! - [`data_sources`] - Read-only lookups
//! - [`adapters`] - Saviynt REST client
//! - [`domain`] - Errors, diagnostics and shared value helpers
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saviynt_provider::config::load_config;
//! use saviynt_provider::provider::SaviyntProvider;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("saviynt.toml")?;
//!     let provider = SaviyntProvider::configure(&config.provider).await?;
//!
//!     let systems = provider
//!         .resource("saviynt_security_system_resource")
//!         .ok_or("unknown resource type")?;
//!     let state = systems
//!         .create(&json!({"systemname": "hr", "display_name": "HR"}))
//!         .await?;
//!
//!     println!("{state}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible call returns [`domain::Result`]. Local validation failures
//! are raised before any request is sent:
//!
//! ```rust,no_run
//! use saviynt_provider::domain::ProviderError;
//!
//! fn describe(err: &ProviderError) {
//!     if err.is_local() {
//!         eprintln!("Nothing was sent to Saviynt: {err}");
//!     }
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod data_sources;
pub mod domain;
pub mod logging;
pub mod provider;
pub mod resources;
