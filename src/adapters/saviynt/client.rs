//! HTTP client for the Saviynt REST API
//!
//! The client logs in once with the provider credentials and keeps the
//! returned bearer token for its whole lifetime. There is no refresh logic.

use super::models::{
    ApiStatus, ConnectionDetailsResponse, ConnectionRequest, ConnectionResponse,
    EndpointRequest, GetConnectionDetailsRequest, GetConnectionsRequest, GetConnectionsResponse,
    GetEndpointsRequest, GetEndpointsResponse, GetSecuritySystemsRequest,
    GetSecuritySystemsResponse, LoginRequest, LoginResponse, SecuritySystemRequest,
    StatusResponse,
};
use super::{paths, SaviyntApi};
use crate::config::{secret_string, ProviderConfig, SecretString};
use crate::domain::{ProviderError, Result, SaviyntError};
use crate::log_api_call;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Authenticated Saviynt client
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct SaviyntClient {
    /// Normalized tenant URL, without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Bearer token obtained at login
    token: SecretString,
}

impl std::fmt::Debug for SaviyntClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaviyntClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SaviyntClient {
    /// Log in and return a ready client
    ///
    /// # Arguments
    ///
    /// * `config` - Provider block with tenant URL and credentials
    ///
    /// # Errors
    ///
    /// * `Configuration` if the URL is invalid or the HTTP client cannot be built
    /// * `Authentication` if the credentials are rejected or no token is returned
    /// * `Api` if the tenant cannot be reached
    pub async fn login(config: &ProviderConfig) -> Result<Self> {
        let base_url = config.base_url().map_err(ProviderError::Configuration)?;

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification is disabled");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ProviderError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        tracing::info!(server_url = %base_url, username = %config.username, "Logging in to Saviynt");
        log_api_call!(paths::LOGIN);

        let response = client
            .post(format!("{base_url}{}", paths::LOGIN))
            .json(&LoginRequest {
                username: &config.username,
                password: config.password.expose_secret().as_ref(),
            })
            .send()
            .await
            .map_err(|e| ProviderError::Api(SaviyntError::from_transport(&e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::Authentication(format!(
                "Login rejected with status {status}"
            )));
        }
        if !status.is_success() {
            return Err(SaviyntError::from_status(status.as_u16(), body).into());
        }

        let login: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::Authentication(format!("Unreadable login response: {e}"))
        })?;
        if login.access_token.trim().is_empty() {
            return Err(ProviderError::Authentication(
                "Login response did not contain an access token".to_string(),
            ));
        }

        tracing::info!(
            token_type = login.token_type.as_deref().unwrap_or("Bearer"),
            expires_in = login.expires_in.as_deref().unwrap_or("unknown"),
            "Saviynt login succeeded"
        );

        Ok(Self {
            base_url,
            client,
            token: secret_string(login.access_token),
        })
    }

    /// POST a JSON body and decode a status-carrying JSON response
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + ApiStatus,
    {
        log_api_call!(path);

        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(self.token.expose_secret().as_ref())
            .json(body)
            .send()
            .await
            .map_err(|e| SaviyntError::from_transport(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SaviyntError::from_transport(&e))?;

        if !status.is_success() {
            tracing::debug!(path = path, status = status.as_u16(), "Saviynt API returned an error status");
            return Err(SaviyntError::from_status(status.as_u16(), text).into());
        }

        let decoded: R = serde_json::from_str(&text).map_err(|e| {
            SaviyntError::InvalidResponse(format!("Failed to decode response from {path}: {e}"))
        })?;

        Ok(decoded.check()?)
    }
}

#[async_trait]
impl SaviyntApi for SaviyntClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn create_or_update_connection(
        &self,
        request: &ConnectionRequest,
    ) -> Result<ConnectionResponse> {
        self.test_connection(request).await
    }

    async fn get_connections(
        &self,
        request: &GetConnectionsRequest,
    ) -> Result<GetConnectionsResponse> {
        self.list_connections(request).await
    }

    async fn get_connection_details(
        &self,
        request: &GetConnectionDetailsRequest,
    ) -> Result<ConnectionDetailsResponse> {
        self.connection_details(request).await
    }

    async fn create_endpoint(&self, request: &EndpointRequest) -> Result<StatusResponse> {
        self.post_endpoint(paths::CREATE_ENDPOINT, request).await
    }

    async fn update_endpoint(&self, request: &EndpointRequest) -> Result<StatusResponse> {
        self.post_endpoint(paths::UPDATE_ENDPOINT, request).await
    }

    async fn get_endpoints(&self, request: &GetEndpointsRequest) -> Result<GetEndpointsResponse> {
        self.list_endpoints(request).await
    }

    async fn create_security_system(
        &self,
        request: &SecuritySystemRequest,
    ) -> Result<StatusResponse> {
        self.post_security_system(paths::CREATE_SECURITY_SYSTEM, request)
            .await
    }

    async fn update_security_system(
        &self,
        request: &SecuritySystemRequest,
    ) -> Result<StatusResponse> {
        self.post_security_system(paths::UPDATE_SECURITY_SYSTEM, request)
            .await
    }

    async fn get_security_systems(
        &self,
        request: &GetSecuritySystemsRequest,
    ) -> Result<GetSecuritySystemsResponse> {
        self.list_security_systems(request).await
    }
}
