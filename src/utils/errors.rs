//! Error handling for the CampusHub client
//!
//! This module defines the main error types used throughout the SDK
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for CampusHub client operations
#[derive(Error, Debug)]
pub enum CampusHubError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Session expired, please login again")]
    TokenExpired,

    #[error("WebSocket error: {0}")]
    Socket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Channel closed")]
    ChannelClosed,
}

/// Result type alias for CampusHub operations
pub type Result<T> = std::result::Result<T, CampusHubError>;

impl CampusHubError {
    /// Check whether this error invalidated the current session
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            CampusHubError::Authentication(_) | CampusHubError::TokenExpired
        )
    }

    /// One-line message suitable for a user-facing alert
    pub fn user_message(&self) -> String {
        match self {
            CampusHubError::Api { message, .. } => message.clone(),
            CampusHubError::Authentication(message) => message.clone(),
            CampusHubError::TokenExpired => "Token expired, please login again".to_string(),
            CampusHubError::Http(e) if e.is_timeout() => "The request timed out.".to_string(),
            CampusHubError::Http(e) if e.is_connect() => {
                "Could not reach the server.".to_string()
            }
            CampusHubError::InvalidInput(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
