//! Registered-events store integration tests
//!
//! The testable contract: membership reflects the backend after every
//! mutation, mutations are idempotent with respect to final state, and
//! past events never surface.

mod helpers;

use serde_json::json;
use wiremock::MockServer;

use helpers::api_mock::{mock_ack, mock_events, mock_failure, mock_me};
use helpers::test_data::{event_json, past_date, upcoming_date, user_json};
use helpers::{authenticated_context, TestContext};

use CampusHub::state::RegisteredEventsStore;

fn store(ctx: &TestContext) -> RegisteredEventsStore {
    RegisteredEventsStore::new(ctx.api.clone(), ctx.alerts.clone())
}

#[tokio::test]
async fn test_fetch_events_excludes_past_calendar_days() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_events(
        &server,
        vec![
            event_json("e1", "event_123", &upcoming_date()),
            event_json("e2", "event_456", &past_date()),
        ],
    )
    .await;

    let store = store(&ctx);
    let events = store.fetch_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "e1");
}

#[tokio::test]
async fn test_register_makes_is_registered_true() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_events(&server, vec![event_json("e1", "event_123", &upcoming_date())]).await;
    mock_ack(&server, "POST", "/events/event_123/register").await;
    mock_me(&server, user_json(json!(["e1"]), json!([])), None).await;

    let store = store(&ctx);
    store.fetch_events().await.unwrap();
    assert!(!store.is_registered("event_123").await);

    let ok = store
        .register_event("event_123", &Default::default())
        .await;
    assert!(ok);
    // matched on either identifier field
    assert!(store.is_registered("event_123").await);
    assert!(store.is_registered("e1").await);
}

#[tokio::test]
async fn test_withdraw_makes_is_registered_false() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_events(&server, vec![event_json("e1", "event_123", &upcoming_date())]).await;
    // first profile fetch still carries the registration, later ones do not
    mock_me(&server, user_json(json!(["e1"]), json!([])), Some(1)).await;
    mock_me(&server, user_json(json!([]), json!([])), None).await;
    mock_ack(&server, "POST", "/events/event_123/withdraw").await;

    let store = store(&ctx);
    store.fetch_events().await.unwrap();
    store.fetch_registered_events().await.unwrap();
    assert!(store.is_registered("event_123").await);

    assert!(store.withdraw_event("event_123").await);
    assert!(!store.is_registered("event_123").await);
}

#[tokio::test]
async fn test_withdraw_when_not_registered_leaves_state_unchanged() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_events(&server, vec![event_json("e1", "event_123", &upcoming_date())]).await;
    mock_me(&server, user_json(json!([]), json!([])), None).await;
    mock_ack(&server, "POST", "/events/event_123/withdraw").await;

    let store = store(&ctx);
    store.fetch_events().await.unwrap();
    store.fetch_registered_events().await.unwrap();

    assert!(store.withdraw_event("event_123").await);
    assert!(store.registered_events().await.is_empty());
}

#[tokio::test]
async fn test_double_register_converges() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_events(&server, vec![event_json("e1", "event_123", &upcoming_date())]).await;
    mock_ack(&server, "POST", "/events/event_123/register").await;
    mock_me(&server, user_json(json!(["e1"]), json!([])), None).await;

    let store = store(&ctx);
    store.fetch_events().await.unwrap();
    store
        .register_event("event_123", &Default::default())
        .await;
    store
        .register_event("event_123", &Default::default())
        .await;

    // reconciliation, not the optimistic edit, owns the final state
    assert_eq!(store.registered_events().await.len(), 1);
    assert!(store.is_registered("event_123").await);
}

#[tokio::test]
async fn test_register_failure_alerts_and_returns_false() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_events(&server, vec![event_json("e1", "event_123", &upcoming_date())]).await;
    mock_failure(
        &server,
        "POST",
        "/events/event_123/register",
        400,
        "Event is full",
    )
    .await;

    let store = store(&ctx);
    store.fetch_events().await.unwrap();
    let mut alerts = ctx.alerts.subscribe();

    let ok = store
        .register_event("event_123", &Default::default())
        .await;
    assert!(!ok);
    let alert = alerts.recv().await.unwrap();
    assert_eq!(alert.title, "Registration Failed");
    assert_eq!(alert.message, "Event is full");
    assert!(!store.is_registered("event_123").await);
}

#[tokio::test]
async fn test_unresolvable_registrations_yield_empty_list() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_events(&server, vec![event_json("e1", "event_123", &upcoming_date())]).await;
    mock_me(
        &server,
        user_json(json!(["ghost-event", {"_id": "another-ghost"}]), json!([])),
        None,
    )
    .await;

    let store = store(&ctx);
    store.fetch_events().await.unwrap();
    let registered = store.fetch_registered_events().await.unwrap();
    assert!(registered.is_empty());
}

#[tokio::test]
async fn test_logged_out_registrations_are_empty() {
    let server = MockServer::start().await;
    let ctx = helpers::test_context(&server);

    let store = store(&ctx);
    let registered = store.fetch_registered_events().await.unwrap();
    assert!(registered.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}
