//! Endpoint resource against a mocked Saviynt tenant

mod common;

use common::{comparable, configured, mock_api};
use mockito::{Matcher, Server};
use serde_json::{json, Value};

const RESOURCE: &str = "saviynt_endpoint_resource";
const CREATE: &str = "/ECM/api/v5/createEndpoint";
const UPDATE: &str = "/ECM/api/v5/updateEndpoint";
const GET: &str = "/ECM/api/v5/getEndpoints";

fn plan() -> Value {
    json!({
        "endpoint_name": "hr_app",
        "display_name": "HR Application",
        "security_system": "hr_system",
        "description": "Payroll",
        "custom_property1": "cost-center",
        "account_custom_property_1_label": "Badge",
        "plugin_configs": "{\"enabled\":true}",
        "mapped_endpoints": [
            {"security_system": "crm_system", "endpoint": "crm_app", "operation": "ADD"}
        ]
    })
}

fn remote_record(description: &str) -> Value {
    json!({
        "endpointname": "hr_app",
        "displayName": "HR Application",
        "securitysystem": "hr_system",
        "description": description,
        "customproperty1": "cost-center",
        "accountCustomProperty1Label": "Badge",
        "pluginConfigs": "{\"enabled\":true}",
        "owner": "",
        "mappedEndpoints": [
            {"securitySystem": "crm_system", "endpoint": "crm_app", "requestable": "", "operation": "ADD"}
        ]
    })
}

#[tokio::test]
async fn test_create_sends_full_request() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    mock_api(&mut server, GET, json!({"errorCode": "1", "msg": "No endpoints found"})).await;
    let create = server
        .mock("POST", CREATE)
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(json!({
            "endpointname": "hr_app",
            "displayName": "HR Application",
            "securitysystem": "hr_system",
            "description": "Payroll",
            "customproperty1": "cost-center",
            "accountCustomProperty1Label": "Badge",
            "owner": "",
            "mappedEndpoints": [
                {"securitySystem": "crm_system", "endpoint": "crm_app", "requestable": "", "operation": "ADD"}
            ]
        })))
        .with_status(200)
        .with_body(json!({"errorCode": "0", "msg": "Endpoint created"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let state = provider
        .resource(RESOURCE)
        .unwrap()
        .create(&plan())
        .await
        .unwrap();

    create.assert_async().await;
    assert_eq!(state["id"], "hr_app");
    assert_eq!(state["msg"], "Endpoint created");
    assert_eq!(state["owner"], Value::Null);
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    mock_api(
        &mut server,
        GET,
        json!({"errorCode": "0", "Endpoints": [remote_record("Payroll")]}),
    )
    .await;
    let create = server.mock("POST", CREATE).expect(0).create_async().await;

    let err = provider
        .resource(RESOURCE)
        .unwrap()
        .create(&plan())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Endpoint name already exists"));
    create.assert_async().await;
}

#[tokio::test]
async fn test_rename_is_rejected_without_api_call() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;
    let update = server.mock("POST", UPDATE).expect(0).create_async().await;

    let resource = provider.resource(RESOURCE).unwrap();
    let mut prior = plan();
    prior["id"] = json!("hr_app");

    let mut renamed = plan();
    renamed["endpoint_name"] = json!("hr_app_v2");
    let err = resource.update(&renamed, &prior).await.unwrap_err();

    assert!(err.to_string().contains("Endpoint name cannot be updated"));
    update.assert_async().await;
}

#[tokio::test]
async fn test_update_then_read_reflects_change() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    let update = server
        .mock("POST", UPDATE)
        .match_body(Matcher::PartialJson(json!({"description": "Payroll and benefits"})))
        .with_status(200)
        .with_body(json!({"errorCode": "0", "msg": "Endpoint updated"}).to_string())
        .expect(1)
        .create_async()
        .await;
    mock_api(
        &mut server,
        GET,
        json!({"errorCode": "0", "Endpoints": [remote_record("Payroll and benefits")]}),
    )
    .await;

    let resource = provider.resource(RESOURCE).unwrap();
    let mut changed = plan();
    changed["description"] = json!("Payroll and benefits");
    let updated = resource.update(&changed, &plan()).await.unwrap();
    update.assert_async().await;

    let read = resource.read(&updated).await.unwrap();
    assert_eq!(read["description"], "Payroll and benefits");
    assert_eq!(read["mapped_endpoints"][0]["endpoint"], "crm_app");
}

#[tokio::test]
async fn test_import_matches_created_state() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    server
        .mock("POST", GET)
        .with_status(200)
        .with_body(json!({"errorCode": "1", "msg": "No endpoints found"}).to_string())
        .expect(1)
        .create_async()
        .await;
    mock_api(&mut server, CREATE, json!({"errorCode": "0", "msg": "Endpoint created"})).await;

    let resource = provider.resource(RESOURCE).unwrap();
    let created = resource.create(&plan()).await.unwrap();

    mock_api(
        &mut server,
        GET,
        json!({"errorCode": "0", "Endpoints": [remote_record("Payroll")]}),
    )
    .await;
    let imported = resource.import("hr_app").await.unwrap();

    let ignore = ["msg", "error_code"];
    assert_eq!(comparable(&created, &ignore), comparable(&imported, &ignore));
}

#[tokio::test]
async fn test_import_missing_endpoint() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;
    mock_api(&mut server, GET, json!({"errorCode": "0", "Endpoints": []})).await;

    let err = provider
        .resource(RESOURCE)
        .unwrap()
        .import("ghost")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("ghost"));
}
