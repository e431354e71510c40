//! Configuration validation
//!
//! Checks performed once at startup, before any network call is made.

use url::Url;

use crate::config::settings::Settings;
use crate::utils::errors::{CampusHubError, Result};

/// Validate the loaded settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_http_url(&settings.api.base_url)?;
    validate_socket_url(&settings.socket.url)?;

    if settings.api.timeout_seconds == 0 {
        return Err(CampusHubError::Config(
            "api.timeout_seconds must be greater than zero".to_string(),
        ));
    }
    if settings.storage.session_file.trim().is_empty() {
        return Err(CampusHubError::Config(
            "storage.session_file must not be empty".to_string(),
        ));
    }
    if settings.logging.level.trim().is_empty() {
        return Err(CampusHubError::Config(
            "logging.level must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_http_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|e| CampusHubError::Config(format!("invalid api.base_url: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CampusHubError::Config(format!(
            "api.base_url must use http or https, got {other}"
        ))),
    }
}

fn validate_socket_url(raw: &str) -> Result<()> {
    let url =
        Url::parse(raw).map_err(|e| CampusHubError::Config(format!("invalid socket.url: {e}")))?;
    match url.scheme() {
        "ws" | "wss" => Ok(()),
        other => Err(CampusHubError::Config(format!(
            "socket.url must use ws or wss, got {other}"
        ))),
    }
}
