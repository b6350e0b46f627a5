//! Shared helpers for the HTTP contract tests

#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use saviynt_provider::config::{secret_string, ProviderConfig};
use saviynt_provider::provider::{ConfiguredProvider, SaviyntProvider};
use serde_json::{json, Value};

pub const TOKEN: &str = "test-token";

pub fn provider_config(server: &ServerGuard) -> ProviderConfig {
    ProviderConfig {
        server_url: server.url(),
        username: "admin".to_string(),
        password: secret_string("secret".to_string()),
        timeout_seconds: 5,
        tls_verify: true,
    }
}

/// Mocks the login call and configures a provider against the server
pub async fn configured(server: &mut ServerGuard) -> ConfiguredProvider {
    server
        .mock("POST", "/ECM/api/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600}).to_string(),
        )
        .create_async()
        .await;

    SaviyntProvider::configure(&provider_config(server))
        .await
        .expect("login against mock server")
}

/// Mocks an authenticated v5 call answering `body`
pub async fn mock_api(server: &mut ServerGuard, path: &str, body: Value) -> Mock {
    server
        .mock("POST", path)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Drops the keys that are not expected to survive an import
pub fn comparable(state: &Value, ignore: &[&str]) -> Value {
    let mut value = state.clone();
    if let Some(map) = value.as_object_mut() {
        for key in ignore {
            map.remove(*key);
        }
    }
    value
}
