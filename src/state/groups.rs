//! Group membership store
//!
//! Same fetch-mutate-refetch contract as event registrations: join and
//! leave call the backend and then re-derive the joined list from a
//! fresh profile fetch.

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::{self, ApiClient};
use crate::models::{Group, GroupData, GroupRef};
use crate::state::alerts::AlertSink;
use crate::utils::errors::Result;

/// Resolve profile membership references against the cached group list.
/// Populated references stand on their own even when the cache misses;
/// bare id references that resolve to nothing are dropped.
pub fn derive_joined(refs: &[GroupRef], groups: &[Group]) -> Vec<Group> {
    refs.iter()
        .filter_map(|reference| match reference {
            GroupRef::Full(full) => Some(
                groups
                    .iter()
                    .find(|cached| reference.matches(cached))
                    .cloned()
                    .unwrap_or_else(|| full.clone()),
            ),
            GroupRef::Id(id) => groups.iter().find(|cached| cached.has_id(id)).cloned(),
        })
        .collect()
}

/// Store for the group catalogue and the user's memberships
#[derive(Debug)]
pub struct GroupsStore {
    api: ApiClient,
    alerts: AlertSink,
    groups: RwLock<Vec<Group>>,
    joined: RwLock<Vec<Group>>,
}

impl GroupsStore {
    pub fn new(api: ApiClient, alerts: AlertSink) -> Self {
        Self {
            api,
            alerts,
            groups: RwLock::new(Vec::new()),
            joined: RwLock::new(Vec::new()),
        }
    }

    pub async fn groups(&self) -> Vec<Group> {
        self.groups.read().await.clone()
    }

    pub async fn joined_groups(&self) -> Vec<Group> {
        self.joined.read().await.clone()
    }

    /// `GET /groups` into the local cache
    pub async fn fetch_groups(&self) -> Result<Vec<Group>> {
        match api::groups::list(&self.api).await {
            Ok(groups) => {
                debug!(count = groups.len(), "Fetched groups");
                *self.groups.write().await = groups.clone();
                Ok(groups)
            }
            Err(e) => {
                self.alerts.emit("Error", &e.user_message());
                Err(e)
            }
        }
    }

    /// Re-derive memberships from a fresh profile fetch
    pub async fn fetch_joined_groups(&self) -> Result<Vec<Group>> {
        if self.api.session().token().is_none() {
            self.joined.write().await.clear();
            return Ok(Vec::new());
        }
        match api::auth::me(&self.api).await {
            Ok(me) => {
                let refs = me.user.map(|user| user.joined_groups).unwrap_or_default();
                let derived = {
                    let groups = self.groups.read().await;
                    derive_joined(&refs, &groups)
                };
                *self.joined.write().await = derived.clone();
                Ok(derived)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch joined groups");
                self.joined.write().await.clear();
                Err(e)
            }
        }
    }

    /// Join a group, then reconcile
    pub async fn join_group(&self, group_id: &str) -> bool {
        match api::groups::join(&self.api, group_id).await {
            Ok(_) => {
                let _ = self.fetch_joined_groups().await;
                true
            }
            Err(e) => {
                self.alerts.emit("Join Failed", &e.user_message());
                false
            }
        }
    }

    /// Leave a group, then reconcile. Leaving a group the user never
    /// joined converges on the same final state.
    pub async fn leave_group(&self, group_id: &str) -> bool {
        match api::groups::leave(&self.api, group_id).await {
            Ok(_) => {
                let _ = self.fetch_joined_groups().await;
                true
            }
            Err(e) => {
                self.alerts.emit("Leave Failed", &e.user_message());
                false
            }
        }
    }

    /// Membership predicate over the cached joined list
    pub async fn is_group_joined(&self, group_id: &str) -> bool {
        self.joined
            .read()
            .await
            .iter()
            .any(|group| group.has_id(group_id))
    }

    /// Create a new group, then refresh the catalogue
    pub async fn create_group(&self, data: &GroupData) -> bool {
        match api::groups::create(&self.api, data).await {
            Ok(_) => {
                let _ = self.fetch_groups().await;
                true
            }
            Err(e) => {
                self.alerts.emit("Add Group Failed", &e.user_message());
                false
            }
        }
    }
}
