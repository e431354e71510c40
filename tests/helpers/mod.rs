//! Shared test infrastructure
//!
//! A wiremock-backed mock of the CampusHub REST backend plus builders
//! for sample backend documents.

#![allow(dead_code)]

pub mod api_mock;
pub mod test_data;

use tempfile::TempDir;
use wiremock::MockServer;

use CampusHub::api::ApiClient;
use CampusHub::config::ApiConfig;
use CampusHub::models::UserType;
use CampusHub::state::{AlertSink, SessionHandle, SessionStorage};

/// Everything a test needs to talk to a mock backend
pub struct TestContext {
    pub api: ApiClient,
    pub handle: SessionHandle,
    pub alerts: AlertSink,
    _dir: TempDir,
}

/// Build a logged-out client pointed at the mock server
pub fn test_context(server: &MockServer) -> TestContext {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = SessionStorage::new(dir.path().join("session.json"));
    let handle = SessionHandle::new(storage);
    let api = ApiClient::new(
        &ApiConfig {
            base_url: server.uri(),
            timeout_seconds: 5,
        },
        handle.clone(),
    )
    .expect("api client");
    TestContext {
        api,
        handle,
        alerts: AlertSink::new(),
        _dir: dir,
    }
}

/// Build a client with an established user session
pub async fn authenticated_context(server: &MockServer) -> TestContext {
    let ctx = test_context(server);
    ctx.handle
        .set_authenticated("test-jwt".to_string(), None, None, UserType::User)
        .await
        .expect("set session");
    ctx
}
