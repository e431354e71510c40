//! Mock CampusHub backend endpoints
//!
//! Thin wrappers around wiremock mounts so tests read as scenarios.
//! Mocks are evaluated in mount order; pair `up_to_n_times(1)` mounts
//! with a fallback mount to script a sequence of responses.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a login success response
pub async fn mock_login_success(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a login failure with the given backend message
pub async fn mock_login_failure(server: &MockServer, endpoint: &str, status: u16, message: &str) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": message })))
        .mount(server)
        .await;
}

/// Mount `/auth/me` returning the given user profile, optionally only
/// for the first `n` calls.
pub async fn mock_me(server: &MockServer, user: Value, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer test-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user })));
    match times {
        Some(n) => mock.up_to_n_times(n).mount(server).await,
        None => mock.mount(server).await,
    }
}

/// Mount `GET /events`
pub async fn mock_events(server: &MockServer, events: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(events)))
        .mount(server)
        .await;
}

/// Mount a bodyless mutation endpoint answering with an ack
pub async fn mock_ack(server: &MockServer, http_method: &str, endpoint: &str) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(server)
        .await;
}

/// Mount a failing endpoint with a backend message
pub async fn mock_failure(
    server: &MockServer,
    http_method: &str,
    endpoint: &str,
    status: u16,
    message: &str,
) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": message })))
        .mount(server)
        .await;
}

/// Mount `GET /groups`
pub async fn mock_groups(server: &MockServer, groups: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(groups)))
        .mount(server)
        .await;
}

/// Mount `GET /messages/:groupId`
pub async fn mock_history(server: &MockServer, group_id: &str, messages: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/messages/{group_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(messages)))
        .mount(server)
        .await;
}
