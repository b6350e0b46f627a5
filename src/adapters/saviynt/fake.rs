//! Recording fake of [`SaviyntApi`] for unit tests

use super::models::*;
use super::{paths, SaviyntApi};
use crate::domain::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Records every call (path + JSON body) and answers with canned responses
///
/// Paths without a canned response answer `{"errorCode":"0","msg":"Success"}`.
#[derive(Default)]
pub struct FakeSaviynt {
    calls: Mutex<Vec<(String, Value)>>,
    responses: Mutex<HashMap<String, Value>>,
}

impl FakeSaviynt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), body);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(p, _)| p == path)
            .map(|(_, body)| body)
            .collect()
    }

    fn answer<B: Serialize, R: DeserializeOwned + ApiStatus>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), serde_json::to_value(body).unwrap()));

        let response = self
            .responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| json!({"errorCode": "0", "msg": "Success"}));

        let decoded: R = serde_json::from_value(response).unwrap();
        Ok(decoded.check()?)
    }
}

#[async_trait]
impl SaviyntApi for FakeSaviynt {
    fn base_url(&self) -> &str {
        "https://fake.saviyntcloud.com"
    }

    async fn create_or_update_connection(
        &self,
        request: &ConnectionRequest,
    ) -> Result<ConnectionResponse> {
        self.answer(paths::TEST_CONNECTION, request)
    }

    async fn get_connections(
        &self,
        request: &GetConnectionsRequest,
    ) -> Result<GetConnectionsResponse> {
        self.answer(paths::GET_CONNECTIONS, request)
    }

    async fn get_connection_details(
        &self,
        request: &GetConnectionDetailsRequest,
    ) -> Result<ConnectionDetailsResponse> {
        self.answer(paths::GET_CONNECTION_DETAILS, request)
    }

    async fn create_endpoint(&self, request: &EndpointRequest) -> Result<StatusResponse> {
        self.answer(paths::CREATE_ENDPOINT, request)
    }

    async fn update_endpoint(&self, request: &EndpointRequest) -> Result<StatusResponse> {
        self.answer(paths::UPDATE_ENDPOINT, request)
    }

    async fn get_endpoints(&self, request: &GetEndpointsRequest) -> Result<GetEndpointsResponse> {
        self.answer(paths::GET_ENDPOINTS, request)
    }

    async fn create_security_system(
        &self,
        request: &SecuritySystemRequest,
    ) -> Result<StatusResponse> {
        self.answer(paths::CREATE_SECURITY_SYSTEM, request)
    }

    async fn update_security_system(
        &self,
        request: &SecuritySystemRequest,
    ) -> Result<StatusResponse> {
        self.answer(paths::UPDATE_SECURITY_SYSTEM, request)
    }

    async fn get_security_systems(
        &self,
        request: &GetSecuritySystemsRequest,
    ) -> Result<GetSecuritySystemsResponse> {
        self.answer(paths::GET_SECURITY_SYSTEMS, request)
    }
}
