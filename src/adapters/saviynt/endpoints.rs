//! Endpoint API calls

use super::client::SaviyntClient;
use super::models::{EndpointRequest, GetEndpointsRequest, GetEndpointsResponse, StatusResponse};
use super::paths;
use crate::domain::Result;

impl SaviyntClient {
    pub(crate) async fn post_endpoint(
        &self,
        path: &str,
        request: &EndpointRequest,
    ) -> Result<StatusResponse> {
        tracing::debug!(
            endpoint_name = %request.endpoint_name,
            security_system = %request.security_system,
            role_types = request.requestable_role_type.len(),
            email_templates = request.task_email_templates.len(),
            mapped_endpoints = request.mapped_endpoints.len(),
            "Submitting endpoint"
        );

        self.post(path, request).await
    }

    /// List endpoints matching the filter
    pub async fn list_endpoints(&self, request: &GetEndpointsRequest) -> Result<GetEndpointsResponse> {
        let response: GetEndpointsResponse = self.post(paths::GET_ENDPOINTS, request).await?;

        tracing::debug!(count = response.endpoints.len(), "Fetched endpoints");

        Ok(response)
    }
}
