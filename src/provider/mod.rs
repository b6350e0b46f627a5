//! Provider registry
//!
//! [`SaviyntProvider`] knows every resource and data source type and their
//! schemas. [`SaviyntProvider::configure`] logs in and yields a
//! [`ConfiguredProvider`] that hands out handlers bound to the shared client.
//!
//! # Example
//!
//! ```rust,no_run
//! use saviynt_provider::config::load_config;
//! use saviynt_provider::provider::SaviyntProvider;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("saviynt.toml")?;
//! let provider = SaviyntProvider::configure(&config.provider).await?;
//!
//! let connections = provider
//!     .data_source("saviynt_connections_datasource")
//!     .ok_or("unknown data source")?;
//! let page = connections.read(&json!({"connection_type": "AD"})).await?;
//! println!("{page}");
//! # Ok(())
//! # }
//! ```

pub mod resource;
pub mod schema;

pub use resource::{DataSource, Resource};
pub use schema::{Attribute, AttributeType, Schema};

use crate::adapters::saviynt::{SaviyntApi, SaviyntClient};
use crate::config::ProviderConfig;
use crate::data_sources::{
    self, ConnectionDataSource, ConnectionsDataSource, EndpointsDataSource,
    SecuritySystemsDataSource,
};
use crate::domain::Result;
use crate::resources::{
    self, connectors, ConnectionResource, EndpointResource, SecuritySystemResource,
};
use std::sync::Arc;

/// Unconfigured provider: type names and schemas only
pub struct SaviyntProvider;

impl SaviyntProvider {
    /// Schema of the provider block itself
    pub fn schema() -> Schema {
        Schema::new("Saviynt identity governance provider.")
            .with_attribute(
                Attribute::required("server_url", AttributeType::String)
                    .description("Tenant host name; https:// is assumed when no scheme is given"),
            )
            .with_attribute(Attribute::required("username", AttributeType::String))
            .with_attribute(Attribute::required("password", AttributeType::String).sensitive())
    }

    /// Every registered resource type
    pub fn resource_types() -> Vec<&'static str> {
        let mut types: Vec<&'static str> =
            connectors::ALL.iter().map(|s| s.resource_type).collect();
        types.push(resources::endpoint::RESOURCE_TYPE);
        types.push(resources::security_system::RESOURCE_TYPE);
        types
    }

    /// Every registered data source type
    pub fn data_source_types() -> Vec<&'static str> {
        let mut types: Vec<&'static str> =
            connectors::ALL.iter().map(|s| s.data_source_type).collect();
        types.push(data_sources::connections::DATA_SOURCE_TYPE);
        types.push(data_sources::endpoints::DATA_SOURCE_TYPE);
        types.push(data_sources::security_systems::DATA_SOURCE_TYPE);
        types
    }

    /// Schema of a resource type, without logging in
    pub fn resource_schema(type_name: &str) -> Option<Schema> {
        if let Some(spec) = connectors::by_resource_type(type_name) {
            return Some(resources::connection::schema_for(spec));
        }
        match type_name {
            resources::endpoint::RESOURCE_TYPE => Some(resources::endpoint::schema()),
            resources::security_system::RESOURCE_TYPE => {
                Some(resources::security_system::schema())
            }
            _ => None,
        }
    }

    /// Schema of a data source type, without logging in
    pub fn data_source_schema(type_name: &str) -> Option<Schema> {
        if let Some(spec) = connectors::by_data_source_type(type_name) {
            return Some(data_sources::connection::schema_for(spec));
        }
        match type_name {
            data_sources::connections::DATA_SOURCE_TYPE => {
                Some(data_sources::connections::schema())
            }
            data_sources::endpoints::DATA_SOURCE_TYPE => Some(data_sources::endpoints::schema()),
            data_sources::security_systems::DATA_SOURCE_TYPE => {
                Some(data_sources::security_systems::schema())
            }
            _ => None,
        }
    }

    /// Log in to the tenant
    ///
    /// # Errors
    ///
    /// Returns `Configuration`, `Authentication` or `Api` errors from
    /// [`SaviyntClient::login`].
    pub async fn configure(config: &ProviderConfig) -> Result<ConfiguredProvider> {
        let client = SaviyntClient::login(config).await?;
        tracing::info!(server_url = %client.base_url(), "Provider configured");
        Ok(ConfiguredProvider::from_api(Arc::new(client)))
    }
}

/// Provider bound to an authenticated API client
#[derive(Clone)]
pub struct ConfiguredProvider {
    api: Arc<dyn SaviyntApi>,
}

impl ConfiguredProvider {
    pub fn from_api(api: Arc<dyn SaviyntApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &Arc<dyn SaviyntApi> {
        &self.api
    }

    /// Handler for a resource type, or `None` if the type is unknown
    pub fn resource(&self, type_name: &str) -> Option<Box<dyn Resource>> {
        if let Some(spec) = connectors::by_resource_type(type_name) {
            return Some(Box::new(ConnectionResource::new(spec, self.api.clone())));
        }
        match type_name {
            resources::endpoint::RESOURCE_TYPE => {
                Some(Box::new(EndpointResource::new(self.api.clone())))
            }
            resources::security_system::RESOURCE_TYPE => {
                Some(Box::new(SecuritySystemResource::new(self.api.clone())))
            }
            _ => None,
        }
    }

    /// Handler for a data source type, or `None` if the type is unknown
    pub fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        if let Some(spec) = connectors::by_data_source_type(type_name) {
            return Some(Box::new(ConnectionDataSource::new(spec, self.api.clone())));
        }
        match type_name {
            data_sources::connections::DATA_SOURCE_TYPE => {
                Some(Box::new(ConnectionsDataSource::new(self.api.clone())))
            }
            data_sources::endpoints::DATA_SOURCE_TYPE => {
                Some(Box::new(EndpointsDataSource::new(self.api.clone())))
            }
            data_sources::security_systems::DATA_SOURCE_TYPE => {
                Some(Box::new(SecuritySystemsDataSource::new(self.api.clone())))
            }
            _ => None,
        }
    }
}
