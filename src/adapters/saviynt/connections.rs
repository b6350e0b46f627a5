//! Connection API calls

use super::client::SaviyntClient;
use super::models::{
    ConnectionDetailsResponse, ConnectionRequest, ConnectionResponse,
    GetConnectionDetailsRequest, GetConnectionsRequest, GetConnectionsResponse,
};
use super::paths;
use crate::domain::Result;

impl SaviyntClient {
    /// Create or update a connection
    ///
    /// The platform upserts by connection name; the same call serves both
    /// create and update.
    pub async fn test_connection(&self, request: &ConnectionRequest) -> Result<ConnectionResponse> {
        tracing::debug!(
            connection_name = %request.connection_name,
            connection_type = %request.connection_type,
            attribute_count = request.attributes.len(),
            "Submitting connection"
        );

        let response: ConnectionResponse = self.post(paths::TEST_CONNECTION, request).await?;

        tracing::info!(
            connection_name = %request.connection_name,
            connection_key = ?response.connection_key,
            "Connection saved"
        );

        Ok(response)
    }

    /// List connections matching the filter
    pub async fn list_connections(
        &self,
        request: &GetConnectionsRequest,
    ) -> Result<GetConnectionsResponse> {
        let response: GetConnectionsResponse = self.post(paths::GET_CONNECTIONS, request).await?;

        tracing::debug!(
            count = response.connection_list.len(),
            total = ?response.total_count,
            "Fetched connections"
        );

        Ok(response)
    }

    /// Fetch a single connection
    pub async fn connection_details(
        &self,
        request: &GetConnectionDetailsRequest,
    ) -> Result<ConnectionDetailsResponse> {
        self.post(paths::GET_CONNECTION_DETAILS, request).await
    }
}
