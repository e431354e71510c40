//! Group membership store integration tests

mod helpers;

use serde_json::json;
use wiremock::MockServer;

use helpers::api_mock::{mock_ack, mock_failure, mock_groups, mock_me};
use helpers::test_data::{group_json, user_json};
use helpers::{authenticated_context, TestContext};

use CampusHub::state::GroupsStore;

fn store(ctx: &TestContext) -> GroupsStore {
    GroupsStore::new(ctx.api.clone(), ctx.alerts.clone())
}

#[tokio::test]
async fn test_join_group_updates_membership() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_groups(&server, vec![group_json("g1", "COMP3278")]).await;
    mock_ack(&server, "POST", "/groups/COMP3278/join").await;
    mock_me(&server, user_json(json!([]), json!(["g1"])), None).await;

    let store = store(&ctx);
    store.fetch_groups().await.unwrap();
    assert!(!store.is_group_joined("COMP3278").await);

    assert!(store.join_group("COMP3278").await);
    assert!(store.is_group_joined("COMP3278").await);
    assert!(store.is_group_joined("g1").await);
}

#[tokio::test]
async fn test_leave_group_clears_membership() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_groups(&server, vec![group_json("g1", "COMP3278")]).await;
    mock_me(&server, user_json(json!([]), json!(["g1"])), Some(1)).await;
    mock_me(&server, user_json(json!([]), json!([])), None).await;
    mock_ack(&server, "POST", "/groups/COMP3278/leave").await;

    let store = store(&ctx);
    store.fetch_groups().await.unwrap();
    store.fetch_joined_groups().await.unwrap();
    assert!(store.is_group_joined("COMP3278").await);

    assert!(store.leave_group("COMP3278").await);
    assert!(!store.is_group_joined("COMP3278").await);
}

#[tokio::test]
async fn test_populated_membership_survives_cache_miss() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_groups(&server, vec![]).await;
    mock_me(
        &server,
        user_json(json!([]), json!([group_json("g9", "ELEC1000")])),
        None,
    )
    .await;

    let store = store(&ctx);
    store.fetch_groups().await.unwrap();
    let joined = store.fetch_joined_groups().await.unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].id, "g9");
}

#[tokio::test]
async fn test_join_failure_alerts_and_returns_false() {
    let server = MockServer::start().await;
    let ctx = authenticated_context(&server).await;
    mock_groups(&server, vec![group_json("g1", "COMP3278")]).await;
    mock_failure(
        &server,
        "POST",
        "/groups/COMP3278/join",
        400,
        "Already a member",
    )
    .await;

    let store = store(&ctx);
    store.fetch_groups().await.unwrap();
    let mut alerts = ctx.alerts.subscribe();

    assert!(!store.join_group("COMP3278").await);
    let alert = alerts.recv().await.unwrap();
    assert_eq!(alert.title, "Join Failed");
    assert_eq!(alert.message, "Already a member");
}
