//! Saviynt EIC adapter
//!
//! A thin typed client over the nine REST calls the provider needs, behind
//! the [`SaviyntApi`] trait so resources can be exercised against a fake.

pub mod client;
mod connections;
mod endpoints;
pub mod models;
mod security_systems;

#[cfg(test)]
pub(crate) mod fake;

pub use client::SaviyntClient;
pub use models::{
    ApiStatus, ConnectionDetailsResponse, ConnectionRequest, ConnectionResponse,
    ConnectionSummary, EndpointRequest, GetConnectionDetailsRequest, GetConnectionsRequest,
    GetConnectionsResponse, GetEndpointsRequest, GetEndpointsResponse, GetSecuritySystemsRequest,
    GetSecuritySystemsResponse, MappedEndpoint, RequestableRoleType, SecuritySystemRequest,
    StatusResponse, TaskEmailTemplate,
};

use crate::domain::Result;
use async_trait::async_trait;

/// API paths, relative to the tenant base URL
pub mod paths {
    pub const LOGIN: &str = "/ECM/api/login";
    pub const TEST_CONNECTION: &str = "/ECM/api/v5/testConnection";
    pub const GET_CONNECTIONS: &str = "/ECM/api/v5/getConnections";
    pub const GET_CONNECTION_DETAILS: &str = "/ECM/api/v5/getConnectionDetails";
    pub const CREATE_ENDPOINT: &str = "/ECM/api/v5/createEndpoint";
    pub const UPDATE_ENDPOINT: &str = "/ECM/api/v5/updateEndpoint";
    pub const GET_ENDPOINTS: &str = "/ECM/api/v5/getEndpoints";
    pub const CREATE_SECURITY_SYSTEM: &str = "/ECM/api/v5/createSecuritySystem";
    pub const UPDATE_SECURITY_SYSTEM: &str = "/ECM/api/v5/updateSecuritySystem";
    pub const GET_SECURITY_SYSTEMS: &str = "/ECM/api/v5/getSecuritySystems";
}

/// Operations the provider issues against a Saviynt tenant
///
/// Every method performs exactly one HTTP call. A non-zero `errorCode` in the
/// response is returned as [`SaviyntError::ApiError`](crate::domain::SaviyntError::ApiError);
/// nothing is retried.
#[async_trait]
pub trait SaviyntApi: Send + Sync {
    /// Tenant base URL the client talks to
    fn base_url(&self) -> &str;

    /// Create or update a connection (`testConnection`)
    async fn create_or_update_connection(
        &self,
        request: &ConnectionRequest,
    ) -> Result<ConnectionResponse>;

    /// List connections, one page
    async fn get_connections(&self, request: &GetConnectionsRequest)
        -> Result<GetConnectionsResponse>;

    /// Fetch one connection with its attributes
    async fn get_connection_details(
        &self,
        request: &GetConnectionDetailsRequest,
    ) -> Result<ConnectionDetailsResponse>;

    async fn create_endpoint(&self, request: &EndpointRequest) -> Result<StatusResponse>;

    async fn update_endpoint(&self, request: &EndpointRequest) -> Result<StatusResponse>;

    /// List endpoints, one page
    async fn get_endpoints(&self, request: &GetEndpointsRequest) -> Result<GetEndpointsResponse>;

    async fn create_security_system(
        &self,
        request: &SecuritySystemRequest,
    ) -> Result<StatusResponse>;

    async fn update_security_system(
        &self,
        request: &SecuritySystemRequest,
    ) -> Result<StatusResponse>;

    /// List security systems, one page
    async fn get_security_systems(
        &self,
        request: &GetSecuritySystemsRequest,
    ) -> Result<GetSecuritySystemsResponse>;
}
