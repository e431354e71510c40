//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main client configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub socket: SocketConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL including the `/api` path prefix
    pub base_url: String,
    /// Blanket request timeout applied to every call
    pub timeout_seconds: u64,
}

/// WebSocket endpoint configuration for the chat channel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SocketConfig {
    pub url: String,
}

/// Persisted session storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the persisted session
    pub session_file: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CAMPUSHUB"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CampusHubError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5002/api".to_string(),
                timeout_seconds: 60,
            },
            socket: SocketConfig {
                url: "ws://localhost:5002/ws".to_string(),
            },
            storage: StorageConfig {
                session_file: "campushub-session.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = Settings::default();
        let serialized = toml_like_json(&settings);
        let deserialized: Settings = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.api.base_url, settings.api.base_url);
        assert_eq!(deserialized.socket.url, settings.socket.url);
    }

    fn toml_like_json(settings: &Settings) -> String {
        serde_json::to_string(settings).unwrap()
    }
}
