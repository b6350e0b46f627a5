//! Connection resources against a mocked Saviynt tenant

mod common;

use common::{comparable, configured, mock_api};
use mockito::{Matcher, Server};
use saviynt_provider::resources::connectors::{ad, db, entraid, github, rest, salesforce, workday};
use saviynt_provider::resources::ConnectorSpec;
use serde_json::{json, Value};
use test_case::test_case;

const TEST_CONNECTION: &str = "/ECM/api/v5/testConnection";
const CONNECTION_DETAILS: &str = "/ECM/api/v5/getConnectionDetails";

/// Attributes that are never returned by `getConnectionDetails`
const NOT_IMPORTED: &[&str] = &[
    "msg",
    "error_code",
    "vault_connection",
    "vault_configuration",
    "save_in_vault",
];

/// Valid for both plain and JSON-typed fields
const SAMPLE: &str = r#"{"k":1}"#;

fn sample_field(spec: &ConnectorSpec) -> &'static str {
    spec.fields
        .iter()
        .find(|f| !f.sensitive)
        .map(|f| f.attribute)
        .expect("connector has a non-sensitive field")
}

fn sample_api_key(spec: &ConnectorSpec) -> &'static str {
    spec.field(sample_field(spec)).unwrap().api_key
}

fn sensitive_attributes(spec: &ConnectorSpec) -> Vec<&'static str> {
    spec.fields
        .iter()
        .filter(|f| f.sensitive)
        .map(|f| f.attribute)
        .collect()
}

fn plan(spec: &ConnectorSpec) -> Value {
    let mut plan = json!({
        "connection_name": "conn_under_test",
        "description": "managed by test",
    });
    plan[sample_field(spec)] = json!(SAMPLE);
    plan
}

fn details(spec: &ConnectorSpec, description: &str) -> Value {
    json!({
        "errorCode": "0",
        "msg": "Success",
        "connectionkey": 77,
        "connectionname": "conn_under_test",
        "connectiontype": spec.connection_type,
        "description": description,
        "connectionattributes": {
            sample_api_key(spec): SAMPLE,
            "UNRELATED_KEY": ""
        }
    })
}

#[test_case(&ad::SPEC ; "ad")]
#[test_case(&db::SPEC ; "db")]
#[test_case(&rest::SPEC ; "rest")]
#[test_case(&salesforce::SPEC ; "salesforce")]
#[test_case(&workday::SPEC ; "workday")]
#[test_case(&entraid::SPEC ; "entraid")]
#[test_case(&github::SPEC ; "github")]
#[tokio::test]
async fn test_create_then_import_match(spec: &'static ConnectorSpec) {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    let upsert = server
        .mock("POST", TEST_CONNECTION)
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(json!({
            "connectiontype": spec.connection_type,
            "connectionName": "conn_under_test",
            "description": "managed by test",
            "defaultsavroles": "",
            sample_api_key(spec): SAMPLE,
        })))
        .with_status(200)
        .with_body(
            json!({"errorCode": "0", "msg": "Connection Successful", "connectionKey": "77"})
                .to_string(),
        )
        .create_async()
        .await;
    mock_api(&mut server, CONNECTION_DETAILS, details(spec, "managed by test")).await;

    let resource = provider.resource(spec.resource_type).unwrap();
    let created = resource.create(&plan(spec)).await.unwrap();
    upsert.assert_async().await;
    assert_eq!(created["id"], "77");
    assert_eq!(created["connection_key"], 77);
    assert_eq!(created["connection_type"], spec.connection_type);

    let imported = resource.import("conn_under_test").await.unwrap();

    let mut ignore: Vec<&str> = NOT_IMPORTED.to_vec();
    ignore.extend(sensitive_attributes(spec));
    assert_eq!(comparable(&created, &ignore), comparable(&imported, &ignore));
}

#[tokio::test]
async fn test_rename_is_rejected_without_api_call() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    let upsert = server
        .mock("POST", TEST_CONNECTION)
        .with_status(200)
        .with_body(json!({"errorCode": "0", "connectionKey": 5}).to_string())
        .expect(1)
        .create_async()
        .await;

    let resource = provider.resource(ad::SPEC.resource_type).unwrap();
    let prior = resource.create(&plan(&ad::SPEC)).await.unwrap();

    let mut renamed = plan(&ad::SPEC);
    renamed["connection_name"] = json!("other_name");
    let err = resource.update(&renamed, &prior).await.unwrap_err();
    assert!(err.to_string().contains("Connection name cannot be updated"));

    let mut retyped = plan(&ad::SPEC);
    retyped["connection_type"] = json!("ADSI");
    let err = resource.update(&retyped, &prior).await.unwrap_err();
    assert!(err.to_string().contains("Connection type cannot by updated"));

    upsert.assert_async().await;
}

#[tokio::test]
async fn test_update_then_read_reflects_change() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    server
        .mock("POST", TEST_CONNECTION)
        .match_body(Matcher::PartialJson(json!({"description": "managed by test"})))
        .with_status(200)
        .with_body(json!({"errorCode": "0", "connectionKey": 77}).to_string())
        .create_async()
        .await;
    let update = server
        .mock("POST", TEST_CONNECTION)
        .match_body(Matcher::PartialJson(json!({"description": "changed"})))
        .with_status(200)
        .with_body(json!({"errorCode": "0", "msg": "Updated"}).to_string())
        .expect(1)
        .create_async()
        .await;
    mock_api(&mut server, CONNECTION_DETAILS, details(&ad::SPEC, "changed")).await;

    let resource = provider.resource(ad::SPEC.resource_type).unwrap();
    let prior = resource.create(&plan(&ad::SPEC)).await.unwrap();

    let mut changed = plan(&ad::SPEC);
    changed["description"] = json!("changed");
    let updated = resource.update(&changed, &prior).await.unwrap();
    update.assert_async().await;
    assert_eq!(updated["connection_key"], 77);
    assert_eq!(updated["msg"], "Updated");

    let read = resource.read(&updated).await.unwrap();
    assert_eq!(read["description"], "changed");
    assert_eq!(read[sample_field(&ad::SPEC)], SAMPLE);
}

#[tokio::test]
async fn test_invalid_json_attribute_fails_before_call() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    let upsert = server
        .mock("POST", TEST_CONNECTION)
        .expect(0)
        .create_async()
        .await;

    let mut plan = plan(&ad::SPEC);
    plan["create_account_json"] = json!("{not json");
    let err = provider
        .resource(ad::SPEC.resource_type)
        .unwrap()
        .create(&plan)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("create_account_json"));
    upsert.assert_async().await;
}

#[tokio::test]
async fn test_api_error_code_surfaces_message() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;

    mock_api(
        &mut server,
        TEST_CONNECTION,
        json!({"errorCode": 1, "msg": "Invalid connection type"}),
    )
    .await;

    let err = provider
        .resource(ad::SPEC.resource_type)
        .unwrap()
        .create(&plan(&ad::SPEC))
        .await
        .unwrap_err();
    assert!(!err.is_local());
    assert!(err.to_string().contains("Invalid connection type"));
}

#[tokio::test]
async fn test_import_rejects_other_connector_type() {
    let mut server = Server::new_async().await;
    let provider = configured(&mut server).await;
    mock_api(&mut server, CONNECTION_DETAILS, details(&ad::SPEC, "x")).await;

    let err = provider
        .resource(rest::SPEC.resource_type)
        .unwrap()
        .import("conn_under_test")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Connection type mismatch"));
}
