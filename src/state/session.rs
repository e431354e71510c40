//! Session state management
//!
//! Single source of truth for "am I logged in, and as whom". The session
//! is persisted to a local JSON file, restored at startup, and every
//! change is broadcast over a watch channel so the rest of the UI can
//! react. The API layer shares the same [`SessionHandle`], which is how a
//! 401 on any authenticated call converges on the exact same
//! clear-and-notify path as an explicit logout.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{self, ApiClient};
use crate::models::{
    AuthResponse, Organization, OrganizationSignupRequest, SignupRequest, UpdateProfileRequest,
    UserProfile, UserType,
};
use crate::state::alerts::AlertSink;
use crate::utils::errors::{CampusHubError, Result};
use crate::utils::logging::log_session_event;
use crate::utils::validation;

/// In-memory session state.
///
/// Invariant: profile data is only present while `token` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub organization: Option<Organization>,
    pub user_type: Option<UserType>,
    /// True until the persisted session has been restored at startup
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            organization: None,
            user_type: None,
            loading: true,
        }
    }
}

impl Session {
    /// Logged-out state with startup restore already settled
    pub fn logged_out() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// On-disk session record, mirroring the fields the web and mobile
/// clients persist: token, user, organizationData, isAuthenticated,
/// userType.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub token: String,
    pub user: Option<UserProfile>,
    pub organization_data: Option<Organization>,
    pub is_authenticated: bool,
    pub user_type: Option<UserType>,
}

/// File-backed persistence for the session record
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted session. A missing file is a clean logged-out
    /// state, not an error.
    pub async fn load(&self) -> Result<Option<PersistedSession>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let persisted = serde_json::from_slice(&bytes)?;
                Ok(Some(persisted))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save(&self, session: &PersistedSession) -> Result<()> {
        let serialized = serde_json::to_vec(session)?;
        tokio::fs::write(&self.path, serialized).await?;
        Ok(())
    }

    /// Remove the persisted session; already-absent files are fine
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Shared, observable session state.
///
/// Cheap to clone; the API client and the stores all hold the same
/// underlying state, and subscribers see every change through the watch
/// channel.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    tx: watch::Sender<Session>,
    storage: SessionStorage,
}

impl SessionHandle {
    pub fn new(storage: SessionStorage) -> Self {
        let (tx, _rx) = watch::channel(Session::default());
        Self {
            inner: Arc::new(SessionInner { tx, storage }),
        }
    }

    /// Current session state
    pub fn snapshot(&self) -> Session {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.tx.subscribe()
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.inner.tx.borrow().token.clone()
    }

    /// Restore the persisted session at startup. A corrupt session file
    /// is discarded rather than propagated.
    pub async fn restore(&self) -> Result<()> {
        match self.inner.storage.load().await {
            Ok(Some(persisted)) => {
                debug!(
                    user_type = persisted.user_type.map(|t| t.to_string()),
                    "Restored persisted session"
                );
                self.inner.tx.send_replace(Session {
                    token: Some(persisted.token),
                    user: persisted.user,
                    organization: persisted.organization_data,
                    user_type: persisted.user_type,
                    loading: false,
                });
                Ok(())
            }
            Ok(None) => {
                self.inner.tx.send_replace(Session::logged_out());
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load persisted session, starting logged out");
                let _ = self.inner.storage.clear().await;
                self.inner.tx.send_replace(Session::logged_out());
                Ok(())
            }
        }
    }

    /// Persist and publish a freshly authenticated session
    pub async fn set_authenticated(
        &self,
        token: String,
        user: Option<UserProfile>,
        organization: Option<Organization>,
        user_type: UserType,
    ) -> Result<()> {
        let persisted = PersistedSession {
            token: token.clone(),
            user: user.clone(),
            organization_data: organization.clone(),
            is_authenticated: true,
            user_type: Some(user_type),
        };
        self.inner.storage.save(&persisted).await?;
        self.inner.tx.send_replace(Session {
            token: Some(token),
            user,
            organization,
            user_type: Some(user_type),
            loading: false,
        });
        Ok(())
    }

    /// Merge new token and/or profile fields into the current session
    /// without a full re-login. Profile data is only held alongside a
    /// token, so merging into a logged-out session is rejected.
    pub async fn update(
        &self,
        token: Option<String>,
        user: Option<UserProfile>,
        organization: Option<Organization>,
    ) -> Result<()> {
        let mut session = self.snapshot();
        if let Some(token) = token {
            session.token = Some(token);
        }
        let Some(active_token) = session.token.clone() else {
            return Err(CampusHubError::Authentication(
                "Cannot update a logged-out session".to_string(),
            ));
        };
        if let Some(user) = user {
            session.user = Some(user);
        }
        if let Some(organization) = organization {
            session.organization = Some(organization);
        }
        let persisted = PersistedSession {
            token: active_token,
            user: session.user.clone(),
            organization_data: session.organization.clone(),
            is_authenticated: true,
            user_type: session.user_type,
        };
        self.inner.storage.save(&persisted).await?;
        self.inner.tx.send_replace(session);
        Ok(())
    }

    /// Clear the session everywhere: in memory first (subscribers must
    /// observe the logged-out state even if the file removal fails),
    /// then on disk.
    pub async fn clear(&self) -> Result<()> {
        self.inner.tx.send_replace(Session::logged_out());
        self.inner.storage.clear().await
    }
}

/// Partial session update for [`SessionStore::update_user`]
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub organization: Option<Organization>,
}

/// High-level session operations: login, signup, logout, profile update.
///
/// Failures publish a user-facing alert with the backend message and
/// leave the prior session state untouched.
#[derive(Debug, Clone)]
pub struct SessionStore {
    api: ApiClient,
    handle: SessionHandle,
    alerts: AlertSink,
}

impl SessionStore {
    pub fn new(api: ApiClient, handle: SessionHandle, alerts: AlertSink) -> Self {
        Self {
            api,
            handle,
            alerts,
        }
    }

    pub fn handle(&self) -> &SessionHandle {
        &self.handle
    }

    pub fn snapshot(&self) -> Session {
        self.handle.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.handle.subscribe()
    }

    /// Restore the persisted session at app start
    pub async fn load(&self) -> Result<()> {
        self.handle.restore().await?;
        log_session_event(
            "restore",
            self.snapshot().user_type.map(|t| t.to_string()).as_deref(),
            None,
        );
        Ok(())
    }

    /// Authenticate a student account
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        validation::validate_credentials(email, password)?;
        match api::auth::login(&self.api, email, password).await {
            Ok(response) => self.apply_auth(response, UserType::User, "login").await,
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.alerts.emit("Login Failed", &e.user_message());
                Err(e)
            }
        }
    }

    /// Authenticate an organization account
    pub async fn organization_login(&self, email: &str, password: &str) -> Result<()> {
        validation::validate_credentials(email, password)?;
        match api::auth::organization_login(&self.api, email, password).await {
            Ok(response) => {
                self.apply_auth(response, UserType::Organization, "login")
                    .await
            }
            Err(e) => {
                warn!(error = %e, "Organization login failed");
                self.alerts.emit("Login Failed", &e.user_message());
                Err(e)
            }
        }
    }

    /// Create a student account. Validation failures never reach the
    /// network; backend failures are alerted and returned so the calling
    /// screen can stay on the form.
    pub async fn signup(&self, request: &SignupRequest) -> Result<()> {
        validation::require_field("full name", &request.full_name)?;
        validation::require_field("username", &request.username)?;
        validation::validate_email(&request.email)?;
        validation::validate_password(&request.password, &request.password)?;
        match api::auth::signup(&self.api, request).await {
            Ok(response) => self.apply_auth(response, UserType::User, "signup").await,
            Err(e) => {
                warn!(error = %e, "Signup failed");
                self.alerts.emit("Signup Failed", &e.user_message());
                Err(e)
            }
        }
    }

    /// Create an organization account
    pub async fn organization_signup(&self, request: &OrganizationSignupRequest) -> Result<()> {
        validation::require_field("organization name", &request.name)?;
        validation::validate_email(&request.email)?;
        validation::validate_password(&request.password, &request.password)?;
        match api::auth::organization_signup(&self.api, request).await {
            Ok(response) => {
                self.apply_auth(response, UserType::Organization, "signup")
                    .await
            }
            Err(e) => {
                warn!(error = %e, "Organization signup failed");
                self.alerts.emit("Signup Failed", &e.user_message());
                Err(e)
            }
        }
    }

    /// Clear persisted and in-memory state, notify subscribers
    pub async fn logout(&self) -> Result<()> {
        self.handle.clear().await?;
        log_session_event("logout", None, None);
        self.alerts.emit("Logged out", "You have been logged out.");
        Ok(())
    }

    /// Merge new token and/or profile fields into the session without a
    /// full re-login (used after profile edits).
    pub async fn update_user(&self, update: SessionUpdate) -> Result<()> {
        self.handle
            .update(update.token, update.user, update.organization)
            .await
    }

    /// Push a profile edit to the backend, then merge the returned
    /// profile into the session.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<()> {
        let response = api::auth::update_profile(&self.api, request).await?;
        self.handle
            .update(None, response.user, response.organization)
            .await
    }

    async fn apply_auth(
        &self,
        response: AuthResponse,
        user_type: UserType,
        action: &str,
    ) -> Result<()> {
        self.handle
            .set_authenticated(
                response.token,
                response.user,
                response.organization,
                user_type,
            )
            .await?;
        info!(user_type = %user_type, action = action, "Session established");
        Ok(())
    }
}
