//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the CampusHub client.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard owns the background writer for the rolling log
/// file; hold it for the lifetime of the application or file output
/// stops flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "campushub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log session lifecycle events (login, logout, restore, expiry)
pub fn log_session_event(event: &str, user_type: Option<&str>, details: Option<&str>) {
    info!(
        event = event,
        user_type = user_type,
        details = details,
        "Session event"
    );
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, status: Option<u16>) {
    error!(
        endpoint = endpoint,
        error = error,
        status = status,
        "API error occurred"
    );
}

/// Log registration/membership mutations
pub fn log_registration_action(event_id: &str, action: &str, success: bool) {
    if success {
        info!(event_id = event_id, action = action, "Registration action");
    } else {
        warn!(
            event_id = event_id,
            action = action,
            "Registration action failed"
        );
    }
}

/// Log chat channel state changes
pub fn log_chat_event(group_id: &str, event: &str, details: Option<&str>) {
    debug!(
        group_id = group_id,
        event = event,
        details = details,
        "Chat channel event"
    );
}
