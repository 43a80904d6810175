//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: typed accessor → reqwest transport → HTTP
//! server → decoded items

use serde_json::json;
use spark_api::{
    Client, ClientConfig, Error, MessagesApi, NewMessage, PeopleApi, QueryParams, RoomsApi,
    WebhooksApi,
};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, max_per_page: u32) -> Client {
    let config = ClientConfig::builder("test-token")
        .base_url(format!("{}/v1", server.uri()))
        .max_per_page(max_per_page)
        .build();
    Client::with_config(config).unwrap()
}

fn next_link(server: &MockServer, resource: &str, after: &str) -> String {
    format!("<{}/v1/{resource}?max=2&after={after}>; rel=\"next\"", server.uri())
}

// ============================================================================
// Request Path Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_auth_and_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/people/me"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json; charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "emails": ["me@example.com"],
            "displayName": "Me",
            "created": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let me = client(&mock_server, 50).get_myself().await.unwrap();
    assert_eq!(me.id, "p1");
    assert_eq!(me.emails, vec!["me@example.com"]);
    assert_eq!(me.display_name.as_deref(), Some("Me"));
    assert!(me.created.is_some());
}

#[tokio::test]
async fn test_query_params_merge_with_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/custom"))
        .and(query_param("a", "1"))
        .and(query_param("b", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, 50);
    let params = QueryParams::new().with("b", "2");
    let body = client
        .get(&format!("{}/v1/custom?a=1", mock_server.uri()), Some(&params))
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_json(json!({ "roomId": "r1", "text": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "roomId": "r1",
            "text": "hello"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let message = client(&mock_server, 50)
        .create_message(&NewMessage::to_room("r1", "hello"))
        .await
        .unwrap();
    assert_eq!(message.id, "m1");
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/rooms/r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server, 50).delete_room("r1").await.unwrap();
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rooms/r1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, 50).get_room("r1").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn test_created_status_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "r1" })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, 50)
        .create_room("new", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 201, .. }));
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_list_follows_link_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rooms"))
        .and(query_param_is_missing("after"))
        .and(query_param("max", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&mock_server, "rooms", "r2").as_str())
                .set_body_json(json!({
                    "items": [{ "id": "r1", "title": "one" }, { "id": "r2", "title": "two" }]
                })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/rooms"))
        .and(query_param("after", "r2"))
        .and(query_param("max", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "r3", "title": "three" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let listing = client(&mock_server, 2).list_rooms(0, None).await.unwrap();
    assert!(listing.is_complete());
    let ids: Vec<_> = listing.items().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2", "r3"]);
}

#[tokio::test]
async fn test_list_stops_at_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/webhooks"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&mock_server, "webhooks", "w").as_str())
                .set_body_json(json!({
                    "items": [{ "id": "w1", "name": "hook" }, { "id": "w2", "name": "hook" }]
                })),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let listing = client(&mock_server, 2).list_webhooks(4).await.unwrap();
    assert_eq!(listing.len(), 4);
}

#[tokio::test]
async fn test_list_keeps_pages_before_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/people"))
        .and(query_param_is_missing("after"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&mock_server, "people", "p2").as_str())
                .set_body_json(json!({
                    "items": [{ "id": "p1" }, { "id": "p2" }]
                })),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/people"))
        .and(query_param("after", "p2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let listing = client(&mock_server, 2)
        .list_people(0, None)
        .await
        .unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing.error().and_then(Error::status), Some(500));
    assert!(listing.into_result().is_err());
}

#[tokio::test]
async fn test_list_messages_sends_room_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/messages"))
        .and(query_param("roomId", "r1"))
        .and(query_param("max", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "m1", "roomId": "r1", "text": "hi" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let messages = client(&mock_server, 50)
        .list_messages(10, "r1", None)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text.as_deref(), Some("hi"));
}
