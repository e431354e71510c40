//! HTTP client for the CampusHub REST API
//!
//! All backend interaction funnels through [`ApiClient`]: bearer token
//! injection from the shared session, a blanket request timeout, and a
//! single response handler that turns any 401 on an authenticated call
//! into the global session-clear path. No request is ever retried.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::ErrorBody;
use crate::state::session::SessionHandle;
use crate::utils::errors::{CampusHubError, Result};
use crate::utils::logging::log_api_error;

/// Expiry-specific 401 message the backend sends for stale tokens
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token expired, please login again";

/// Shared HTTP client for the CampusHub backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig, session: SessionHandle) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("CampusHub-Client/0.1")
            .build()
            .map_err(CampusHubError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session state this client attaches tokens from and clears on
    /// authorization failure
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.http.get(self.url(path));
        self.execute(request, true, path).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(request, true, path).await
    }

    /// POST without a body (register/withdraw/join/leave style endpoints)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.http.post(self.url(path));
        self.execute(request, true, path).await
    }

    /// POST without attaching a token. Login and signup go through here
    /// so a failed re-login can never clear an existing session.
    pub async fn post_unauthenticated<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(request, false, path).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.put(self.url(path)).json(body);
        self.execute(request, true, path).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.http.delete(self.url(path));
        self.execute(request, true, path).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        authenticated: bool,
        path: &str,
    ) -> Result<T> {
        let request = if authenticated {
            match self.session.token() {
                Some(token) => request.bearer_auth(token),
                None => request,
            }
        } else {
            request
        };

        let response = request.send().await.map_err(|e| {
            log_api_error(path, &e.to_string(), None);
            CampusHubError::Http(e)
        })?;

        self.handle_response(response, authenticated, path).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        authenticated: bool,
        path: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            debug!(endpoint = path, status = status.as_u16(), "API response");
            return response.json::<T>().await.map_err(CampusHubError::Http);
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body
            .message
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        log_api_error(path, &message, Some(status.as_u16()));

        if status == StatusCode::UNAUTHORIZED && authenticated {
            // Single exit state for every authorization failure, no
            // matter which screen triggered it.
            if let Err(e) = self.session.clear().await {
                warn!(error = %e, "Failed to clear persisted session after 401");
            }
            if message == TOKEN_EXPIRED_MESSAGE {
                return Err(CampusHubError::TokenExpired);
            }
            return Err(CampusHubError::Authentication(message));
        }

        Err(CampusHubError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
