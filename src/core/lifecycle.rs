//! Lifecycle orchestration
//!
//! Drives a single resource or data source through apply, refresh, destroy
//! and import, keeping local state in step with what the handlers return.

use crate::core::state::{ResourceState, StateManager};
use crate::domain::{ProviderError, ResourceAddress, Result, SaviyntError};
use crate::provider::{ConfiguredProvider, DataSource, Resource, Schema};
use serde_json::Value;
use std::sync::Arc;

/// What `apply` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Created,
    Updated,
    /// The plan matched state; no API call was made
    Unchanged,
}

/// What `refresh` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    /// The remote object is gone and the entry was dropped from state
    Removed,
}

/// Lifecycle driver bound to a configured provider and a state
pub struct Lifecycle {
    provider: ConfiguredProvider,
    state: Arc<StateManager>,
}

impl Lifecycle {
    pub fn new(provider: ConfiguredProvider, state: Arc<StateManager>) -> Self {
        Self { provider, state }
    }

    pub fn state(&self) -> &Arc<StateManager> {
        &self.state
    }

    fn resource(&self, address: &ResourceAddress) -> Result<Box<dyn Resource>> {
        self.provider
            .resource(address.resource_type())
            .ok_or_else(|| {
                ProviderError::Validation(format!(
                    "Unknown resource type \"{}\"",
                    address.resource_type()
                ))
            })
    }

    fn data_source(&self, type_name: &str) -> Result<Box<dyn DataSource>> {
        self.provider.data_source(type_name).ok_or_else(|| {
            ProviderError::Validation(format!("Unknown data source type \"{type_name}\""))
        })
    }

    /// Create the resource, or update it when state already has an entry
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any API call. State is only
    /// written after the handler succeeds.
    pub async fn apply(&self, address: &ResourceAddress, plan: &Value) -> Result<ApplyOutcome> {
        let resource = self.resource(address)?;
        let schema = resource.schema();
        schema.ensure_valid(plan)?;

        let (outcome, new_state) = match self.state.get(address).await {
            None => {
                tracing::info!(address = %address, "Creating resource");
                (ApplyOutcome::Created, resource.create(plan).await?)
            }
            Some(prior) if plan_matches_state(&schema, plan, &prior.attributes) => {
                tracing::info!(address = %address, "No changes");
                return Ok(ApplyOutcome::Unchanged);
            }
            Some(prior) => {
                tracing::info!(address = %address, "Updating resource");
                let new_state = resource.update(plan, &prior.attributes).await?;
                (ApplyOutcome::Updated, new_state)
            }
        };

        self.state.put(address, new_state).await?;
        Ok(outcome)
    }

    /// Re-read one resource from the tenant
    pub async fn refresh(&self, address: &ResourceAddress) -> Result<RefreshOutcome> {
        let prior = self.require(address).await?;
        let resource = self.resource(address)?;

        match resource.read(&prior.attributes).await {
            Ok(state) => {
                self.state.put(address, state).await?;
                Ok(RefreshOutcome::Refreshed)
            }
            Err(ProviderError::Api(SaviyntError::NotFound(message))) => {
                tracing::warn!(
                    address = %address,
                    reason = %message,
                    "Remote object not found, removing from state"
                );
                self.state.remove(address).await?;
                Ok(RefreshOutcome::Removed)
            }
            Err(e) => Err(e),
        }
    }

    /// Re-read every resource in state
    ///
    /// Stops at the first failure.
    pub async fn refresh_all(&self) -> Result<Vec<(ResourceAddress, RefreshOutcome)>> {
        let mut outcomes = Vec::new();
        for address in self.state.list().await {
            let outcome = self.refresh(&address).await?;
            outcomes.push((address, outcome));
        }
        Ok(outcomes)
    }

    /// Delete the resource and drop it from state
    pub async fn destroy(&self, address: &ResourceAddress) -> Result<()> {
        let prior = self.require(address).await?;
        let resource = self.resource(address)?;
        resource.delete(&prior.attributes).await?;
        self.state.remove(address).await?;
        Ok(())
    }

    /// Adopt an existing remote object under `address`
    ///
    /// # Errors
    ///
    /// Returns a `State` error if the address is already managed.
    pub async fn import(&self, address: &ResourceAddress, id: &str) -> Result<Value> {
        if self.state.get(address).await.is_some() {
            return Err(ProviderError::State(format!(
                "Resource {address} already exists in state; remove it before importing"
            )));
        }

        let resource = self.resource(address)?;
        let state = resource.import(id).await?;
        self.state.put(address, state.clone()).await?;
        Ok(state)
    }

    /// Run a data source lookup; nothing is recorded in state
    pub async fn read_data_source(&self, type_name: &str, config: &Value) -> Result<Value> {
        self.data_source(type_name)?.read(config).await
    }

    async fn require(&self, address: &ResourceAddress) -> Result<ResourceState> {
        self.state.get(address).await.ok_or_else(|| {
            ProviderError::State(format!("Resource {address} is not in state"))
        })
    }
}

/// True when every configurable attribute of the plan already holds in state
///
/// Attributes the plan leaves unset must be null in state unless the server
/// computes them.
pub fn plan_matches_state(schema: &Schema, plan: &Value, state: &Value) -> bool {
    schema
        .attributes
        .iter()
        .filter(|a| a.required || a.optional)
        .all(|attribute| {
            let planned = plan.get(&attribute.name).unwrap_or(&Value::Null);
            let recorded = state.get(&attribute.name).unwrap_or(&Value::Null);
            if planned.is_null() && attribute.computed {
                return true;
            }
            planned == recorded
        })
}
