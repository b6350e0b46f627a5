//! Resource and data source traits
//!
//! Plans, states and data source configurations are JSON objects keyed by
//! attribute name, matching the schema of the object type.

use super::schema::Schema;
use crate::domain::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A managed object type
///
/// # Example
///
/// ```no_run
/// use saviynt_provider::provider::Resource;
/// use serde_json::json;
///
/// # async fn example(resource: &dyn Resource) -> saviynt_provider::domain::Result<()> {
/// let state = resource
///     .create(&json!({"systemname": "hr", "display_name": "HR"}))
///     .await?;
/// let refreshed = resource.read(&state).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Resource: Send + Sync {
    /// Registered type name, e.g. `saviynt_ad_connection_resource`
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Create the remote object and return the new state
    async fn create(&self, plan: &Value) -> Result<Value>;

    /// Refresh state from the remote object
    async fn read(&self, state: &Value) -> Result<Value>;

    /// Apply a changed plan on top of the prior state
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error, without calling the API, when the plan
    /// changes an immutable identifying attribute.
    async fn update(&self, plan: &Value, prior: &Value) -> Result<Value>;

    /// Forget the object; the remote object is left in place
    async fn delete(&self, state: &Value) -> Result<()>;

    /// Build state for an existing remote object
    async fn import(&self, id: &str) -> Result<Value>;
}

/// A read-only lookup
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Registered type name, e.g. `saviynt_connections_datasource`
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Run the lookup and return the filter echoed back with the results
    async fn read(&self, config: &Value) -> Result<Value>;
}
