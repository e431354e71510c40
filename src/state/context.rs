//! Application context
//!
//! The explicit, injectable state container: built once at app start,
//! it owns the shared session, the API client and every store. Each
//! piece of shared state has exactly one owning store; consumers read
//! via subscription and never mutate directly.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::state::alerts::AlertSink;
use crate::state::groups::GroupsStore;
use crate::state::recommendations::RecommendationsStore;
use crate::state::registrations::RegisteredEventsStore;
use crate::state::session::{SessionHandle, SessionStorage, SessionStore};
use crate::utils::errors::Result;

/// Application-wide context containing the stores and settings
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub api: ApiClient,
    pub alerts: AlertSink,
    pub session: Arc<SessionStore>,
    pub events: Arc<RegisteredEventsStore>,
    pub groups: Arc<GroupsStore>,
    pub recommendations: Arc<RecommendationsStore>,
}

impl AppContext {
    /// Build the context and restore the persisted session
    pub async fn init(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let storage = SessionStorage::new(&settings.storage.session_file);
        let handle = SessionHandle::new(storage);
        let api = ApiClient::new(&settings.api, handle.clone())?;
        let alerts = AlertSink::new();

        let session = Arc::new(SessionStore::new(api.clone(), handle, alerts.clone()));
        session.load().await?;

        Ok(Self {
            events: Arc::new(RegisteredEventsStore::new(api.clone(), alerts.clone())),
            groups: Arc::new(GroupsStore::new(api.clone(), alerts.clone())),
            recommendations: Arc::new(RecommendationsStore::new(api.clone(), alerts.clone())),
            settings,
            api,
            alerts,
            session,
        })
    }

    /// The shared session handle used by the API client and stores
    pub fn session_handle(&self) -> &SessionHandle {
        self.session.handle()
    }
}
