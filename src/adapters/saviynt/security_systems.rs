//! Security system API calls

use super::client::SaviyntClient;
use super::models::{
    GetSecuritySystemsRequest, GetSecuritySystemsResponse, SecuritySystemRequest, StatusResponse,
};
use super::paths;
use crate::domain::Result;

impl SaviyntClient {
    pub(crate) async fn post_security_system(
        &self,
        path: &str,
        request: &SecuritySystemRequest,
    ) -> Result<StatusResponse> {
        tracing::debug!(systemname = %request.systemname, "Submitting security system");
        self.post(path, request).await
    }

    /// List security systems matching the filter
    pub async fn list_security_systems(
        &self,
        request: &GetSecuritySystemsRequest,
    ) -> Result<GetSecuritySystemsResponse> {
        let response: GetSecuritySystemsResponse =
            self.post(paths::GET_SECURITY_SYSTEMS, request).await?;

        tracing::debug!(
            count = response.security_system_details.len(),
            "Fetched security systems"
        );

        Ok(response)
    }
}
