//! HTTP-level tests for the Webflow client against a mock server.

use common::ExternalItemId;
use domain::ProductFields;
use serde_json::json;
use webflow::{ExternalCatalog, WebflowClient, WebflowConfig, WebflowError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ITEMS_PATH: &str = "/collections/col-1/items";

fn widget() -> ProductFields {
    ProductFields::new("Widget", 9.99, "A widget", 5)
}

fn client_for(server: &MockServer) -> WebflowClient {
    let config = WebflowConfig::new("test-token", "col-1").with_base_url(server.uri());
    WebflowClient::new(config).unwrap()
}

#[tokio::test]
async fn create_sends_payload_with_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ITEMS_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept-version", "1.0.0"))
        .and(body_json(json!({
            "fields": {
                "name": "Widget",
                "price": 9.99,
                "description": "A widget",
                "stock": 5,
                "_archived": false,
                "_draft": false
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "ext-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let item = client_for(&server).create_item(&widget()).await.unwrap();
    assert_eq!(item.item_id(), Some(ExternalItemId::new("ext-1")));
}

#[tokio::test]
async fn create_passes_upstream_error_body_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "msg": "Validation Failure",
            "problems": ["Field 'slug': Field is required"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).create_item(&widget()).await.unwrap_err();
    match err {
        WebflowError::Api { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body["msg"], "Validation Failure");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).create_item(&widget()).await.unwrap_err();
    match err {
        WebflowError::Api { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, json!("Bad Gateway"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_is_attempted_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).create_item(&widget()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn update_puts_to_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{ITEMS_PATH}/ext-1")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "ext-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let item = client_for(&server)
        .update_item(&ExternalItemId::new("ext-1"), &widget())
        .await
        .unwrap();
    assert_eq!(item.item_id(), Some(ExternalItemId::new("ext-1")));
}

#[tokio::test]
async fn get_and_list_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{ITEMS_PATH}/ext-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "ext-1",
            "name": "Widget"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "_id": "ext-1" }, { "_id": "ext-2" }],
            "count": 2,
            "total": 2
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = client.get_item(&ExternalItemId::new("ext-1")).await.unwrap();
    assert_eq!(item.raw()["name"], "Widget");

    let list = client.list_items().await.unwrap();
    assert_eq!(list.total, Some(2));
    assert_eq!(
        list.item_ids(),
        vec![ExternalItemId::new("ext-1"), ExternalItemId::new("ext-2")]
    );
}

#[tokio::test]
async fn v2_api_version_changes_flag_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ITEMS_PATH))
        .and(header("accept-version", "2.0.0"))
        .and(body_json(json!({
            "fields": {
                "name": "Widget",
                "price": 9.99,
                "description": "A widget",
                "stock": 5,
                "isArchived": false,
                "isDraft": false
            }
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "id": "ext-9" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = WebflowConfig::new("test-token", "col-1")
        .with_base_url(server.uri())
        .with_api_version("2.0.0");
    let client = WebflowClient::new(config).unwrap();

    let item = client.create_item(&widget()).await.unwrap();
    assert_eq!(item.item_id(), Some(ExternalItemId::new("ext-9")));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let config = WebflowConfig::new("test-token", "col-1").with_base_url("http://127.0.0.1:1");
    let client = WebflowClient::new(config).unwrap();

    let err = client.list_items().await.unwrap_err();
    assert!(matches!(err, WebflowError::Transport(_)));
}
