//! CampusHub client SDK
//!
//! A typed Rust client for the CampusHub student events platform.
//! This library provides the session, event registration, group membership
//! and realtime chat layers that sit between a UI and the CampusHub
//! REST/WebSocket backend.

#![allow(non_snake_case)]

pub mod api;
pub mod chat;
pub mod config;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusHubError, Result};

// Re-export main components for easy access
pub use api::ApiClient;
pub use chat::{ChatChannel, Conversation};
pub use state::{AlertSink, AppContext, SessionHandle, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
